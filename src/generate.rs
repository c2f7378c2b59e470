//! Reproducible random input files for the harness

use crate::error::{HarnessError, HarnessResult};
use crate::input::WorkItem;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Shape of a generated input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSpec {
    pub lines: usize,
    pub width: usize,
    pub min: i64,
    pub max: i64,
    pub seed: u64,
}

impl Default for GenerateSpec {
    fn default() -> Self {
        Self {
            lines: 40,
            width: 20,
            min: -20,
            max: 20,
            seed: 0,
        }
    }
}

impl GenerateSpec {
    pub fn validate(&self) -> HarnessResult<()> {
        if self.min > self.max {
            return Err(HarnessError::invalid_arguments(&format!(
                "empty value range: {} > {}",
                self.min, self.max
            )));
        }
        if self.width == 0 {
            return Err(HarnessError::invalid_arguments("line width must be positive"));
        }
        Ok(())
    }
}

/// Draw `spec.lines` work items of `spec.width` values each
pub fn generate_work_items(spec: &GenerateSpec) -> HarnessResult<Vec<WorkItem>> {
    spec.validate()?;
    let mut rng = StdRng::seed_from_u64(spec.seed);

    Ok((0..spec.lines)
        .map(|_| {
            (0..spec.width)
                .map(|_| rng.gen_range(spec.min..=spec.max))
                .collect::<WorkItem>()
        })
        .collect())
}

/// Format work items in the input file layout, one per line
pub fn to_input_text(items: &[WorkItem]) -> String {
    items
        .iter()
        .map(|item| item.iter().join(" ") + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_strict;
    use std::io::Cursor;

    #[test]
    fn test_generated_shape_and_range() -> HarnessResult<()> {
        let spec = GenerateSpec::default();
        let items = generate_work_items(&spec)?;
        assert_eq!(items.len(), 40);
        assert!(items.iter().all(|item| item.len() == 20));
        assert!(items.iter().flatten().all(|v| (-20..=20).contains(v)));
        Ok(())
    }

    #[test]
    fn test_same_seed_same_output() -> HarnessResult<()> {
        let spec = GenerateSpec {
            seed: 99,
            ..Default::default()
        };
        assert_eq!(generate_work_items(&spec)?, generate_work_items(&spec)?);
        Ok(())
    }

    #[test]
    fn test_text_loads_back() -> HarnessResult<()> {
        let spec = GenerateSpec {
            lines: 5,
            width: 3,
            min: -1000,
            max: 1000,
            seed: 3,
        };
        let items = generate_work_items(&spec)?;
        let loaded = parse_strict(Cursor::new(to_input_text(&items)))?;
        assert_eq!(loaded, items);
        Ok(())
    }

    #[test]
    fn test_invalid_spec() {
        let spec = GenerateSpec {
            min: 5,
            max: 1,
            ..Default::default()
        };
        assert!(generate_work_items(&spec).is_err());
    }
}
