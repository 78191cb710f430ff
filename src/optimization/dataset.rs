use crate::shared::error::PromptOpsError;
use crate::shared::Result;
use serde::Serialize;

/// Fractions of a dataset used for training and validation; the rest is test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetSplit {
    pub train_fraction: f64,
    pub validation_fraction: f64,
}

impl Default for DatasetSplit {
    fn default() -> Self {
        Self {
            train_fraction: 0.25,
            validation_fraction: 0.25,
        }
    }
}

/// Number of examples in each partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetSizes {
    pub train: usize,
    pub validation: usize,
    pub test: usize,
}

impl DatasetSplit {
    pub fn validate(&self) -> Result<()> {
        let in_range = |f: f64| f.is_finite() && (0.0..=1.0).contains(&f);
        if !in_range(self.train_fraction) || !in_range(self.validation_fraction) {
            return Err(PromptOpsError::Validation {
                message: format!(
                    "dataset split fractions must be between 0 and 1 (train: {}, validation: {})",
                    self.train_fraction, self.validation_fraction
                ),
            }
            .into());
        }
        if self.train_fraction + self.validation_fraction > 1.0 {
            return Err(PromptOpsError::Validation {
                message: format!(
                    "train and validation fractions add up to more than 1 ({} + {})",
                    self.train_fraction, self.validation_fraction
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Partitions `total` examples, rounding train and validation down
    pub fn apply(&self, total: usize) -> DatasetSizes {
        let train = ((total as f64 * self.train_fraction).floor() as usize).min(total);
        let validation =
            ((total as f64 * self.validation_fraction).floor() as usize).min(total - train);

        DatasetSizes {
            train,
            validation,
            test: total - train - validation,
        }
    }
}

impl DatasetSizes {
    pub fn total(&self) -> usize {
        self.train + self.validation + self.test
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_quarters() {
        let sizes = DatasetSplit::default().apply(100);
        assert_eq!(
            sizes,
            DatasetSizes {
                train: 25,
                validation: 25,
                test: 50
            }
        );
    }

    #[test]
    fn test_split_rounds_down() {
        let sizes = DatasetSplit::default().apply(10);
        assert_eq!(sizes.train, 2);
        assert_eq!(sizes.validation, 2);
        assert_eq!(sizes.test, 6);
        assert_eq!(sizes.total(), 10);
    }

    #[test]
    fn test_split_empty_dataset() {
        assert_eq!(DatasetSplit::default().apply(0), DatasetSizes::default());
    }

    #[test]
    fn test_split_everything_to_train_and_validation() {
        let split = DatasetSplit {
            train_fraction: 0.5,
            validation_fraction: 0.5,
        };
        let sizes = split.apply(7);
        assert_eq!(sizes.total(), 7);
        assert_eq!(sizes.train, 3);
        assert_eq!(sizes.validation, 3);
        assert_eq!(sizes.test, 1);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let split = DatasetSplit {
            train_fraction: 1.5,
            validation_fraction: 0.1,
        };
        assert!(split.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversubscribed() {
        let split = DatasetSplit {
            train_fraction: 0.7,
            validation_fraction: 0.4,
        };
        let err = split.validate().unwrap_err();
        assert!(err.to_string().contains("more than 1"));
    }
}
