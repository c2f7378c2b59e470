//! Loading work items from line-oriented text files
//!
//! Each line holds whitespace-separated signed decimal integers and becomes
//! one work item.

use crate::config::{BlankLinePolicy, ParsePolicy};
use crate::error::{HarnessContext, HarnessError, HarnessResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// One array-shaped input case
pub type WorkItem = Vec<i64>;

/// A work item, or `None` for a line that could not be parsed
pub type WorkSlot = Option<WorkItem>;

/// Options controlling how input lines are interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub blank_lines: BlankLinePolicy,
    pub parse_policy: ParsePolicy,
}

/// Load every work item from `path`.
///
/// The file handle is dropped before returning on every path, including
/// parse failures.
pub fn load_work_items(path: &Path, options: LoadOptions) -> HarnessResult<Vec<WorkSlot>> {
    let filename = path.display().to_string();

    if path.is_dir() {
        return Err(HarnessError::is_directory(&filename));
    }

    let file = File::open(path).with_file_context(&filename)?;
    let slots = parse_work_items(BufReader::new(file), options).with_file_context(&filename)?;
    debug!(file = %filename, items = slots.len(), "loaded work items");
    Ok(slots)
}

/// Parse work items from any buffered reader
pub fn parse_work_items<R: BufRead>(
    reader: R,
    options: LoadOptions,
) -> HarnessResult<Vec<WorkSlot>> {
    let mut slots = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if line.trim().is_empty() {
            match options.blank_lines {
                BlankLinePolicy::Skip => continue,
                BlankLinePolicy::Stop => {
                    debug!(line = line_number, "blank line ends input");
                    break;
                }
            }
        }

        match (parse_line(&line, line_number), options.parse_policy) {
            (Ok(item), _) => slots.push(Some(item)),
            (Err(err), ParsePolicy::Lenient) => {
                warn!(error = %err, "keeping malformed line as an empty work slot");
                slots.push(None);
            }
            (Err(err), ParsePolicy::Strict) => return Err(err),
        }
    }

    Ok(slots)
}

/// Parse a strict load: every slot is guaranteed present
pub fn parse_strict<R: BufRead>(reader: R) -> HarnessResult<Vec<WorkItem>> {
    let slots = parse_work_items(reader, LoadOptions::default())?;
    Ok(slots.into_iter().flatten().collect())
}

fn parse_line(line: &str, line_number: usize) -> HarnessResult<WorkItem> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| HarnessError::parse(line_number, token))
        })
        .collect()
}
