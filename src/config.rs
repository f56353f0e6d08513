use anyhow::ensure;

/// Below this magnitude a coordinate is treated as zero when resolving the
/// polar angle.
pub const CLAMP_TO_ZERO: f32 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConverterConfig {
    pub clamp_to_zero: f32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            clamp_to_zero: CLAMP_TO_ZERO,
        }
    }
}

impl ConverterConfig {
    pub fn new(clamp_to_zero: f32) -> anyhow::Result<Self> {
        ensure!(
            clamp_to_zero.is_finite() && clamp_to_zero >= 0.0,
            "clamp_to_zero must be finite and non-negative, got {clamp_to_zero}"
        );
        Ok(Self { clamp_to_zero })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_clamp_constant() {
        assert_eq!(ConverterConfig::default().clamp_to_zero, CLAMP_TO_ZERO);
    }

    #[test]
    fn accepts_zero_and_small_values() {
        assert_eq!(ConverterConfig::new(0.0).unwrap().clamp_to_zero, 0.0);
        assert_eq!(ConverterConfig::new(1e-6).unwrap().clamp_to_zero, 1e-6);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert!(ConverterConfig::new(-0.1).is_err());
        assert!(ConverterConfig::new(f32::NAN).is_err());
        assert!(ConverterConfig::new(f32::INFINITY).is_err());
    }
}
