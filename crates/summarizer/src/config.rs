use crate::extractor::{validate_fraction, DEFAULT_TOP_FRACTION};
use crate::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Доля предложений, попадающих в результат, в диапазоне [0, 1]
    pub top_fraction: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            top_fraction: DEFAULT_TOP_FRACTION,
        }
    }
}

impl SummarizerConfig {
    pub fn validate(&self) -> Result<()> {
        validate_fraction(self.top_fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SummarizerError;

    #[test]
    fn test_default_fraction() {
        let config = SummarizerConfig::default();
        assert_eq!(config.top_fraction, 0.2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        for fraction in [-0.1, 1.5, f64::NAN] {
            let config = SummarizerConfig {
                top_fraction: fraction,
            };
            assert!(matches!(
                config.validate(),
                Err(SummarizerError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: SummarizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }
}
