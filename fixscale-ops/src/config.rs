use crate::error::ScaleError;
use fixscale_math::{all_exact_match, any_exact_match, BigRational, FixedInt, SignalBuffer};
use serde::{Deserialize, Serialize};

/// Shared builder methods for operators holding a `config: OperatorConfig` field.
macro_rules! config_builders {
    () => {
        pub fn with_allowed_error(mut self, allowed_error: f64) -> Self {
            self.config.allowed_error = allowed_error;
            self
        }

        pub fn with_maximum_allowed_bit_shift(mut self, maximum_allowed_bit_shift: u32) -> Self {
            self.config.maximum_allowed_bit_shift = maximum_allowed_bit_shift;
            self
        }

        pub fn with_fast_path(mut self, fast_path: $crate::config::FastPathPolicy) -> Self {
            self.config.fast_path = fast_path;
            self
        }

        pub fn with_config(mut self, config: $crate::config::OperatorConfig) -> Self {
            self.config = config;
            self
        }

        pub fn config(&self) -> &$crate::config::OperatorConfig {
            &self.config
        }

        pub fn name(&self) -> &str {
            &self.config.name
        }
    };
}

pub const DEFAULT_ALLOWED_ERROR: f64 = 1024.0;
pub const DEFAULT_MAXIMUM_ALLOWED_BIT_SHIFT: u32 = 16;

/// Gate that lets an unscaled result through without searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FastPathPolicy {
    /// Accept when any single element is exact.
    ///
    /// A single matching element accepts the whole result, even if other
    /// elements wrapped around.
    #[default]
    AnyMatch,
    /// Accept only when every element is exact.
    AllMatch,
}

impl FastPathPolicy {
    pub fn accepts<T: FixedInt>(self, exact: &[BigRational], bounded: &SignalBuffer<T>) -> bool {
        match self {
            FastPathPolicy::AnyMatch => any_exact_match(exact, bounded),
            FastPathPolicy::AllMatch => all_exact_match(exact, bounded),
        }
    }
}

/// Per-operator settings. `name` is a diagnostic label only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperatorConfig {
    pub name: String,
    /// Maximum tolerated mean absolute deviation from the exact result
    pub allowed_error: f64,
    /// Largest shift the search may try (inclusive)
    pub maximum_allowed_bit_shift: u32,
    pub fast_path: FastPathPolicy,
}

impl Default for OperatorConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            allowed_error: DEFAULT_ALLOWED_ERROR,
            maximum_allowed_bit_shift: DEFAULT_MAXIMUM_ALLOWED_BIT_SHIFT,
            fast_path: FastPathPolicy::default(),
        }
    }
}

impl OperatorConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ScaleError> {
        if !self.allowed_error.is_finite() || self.allowed_error <= 0.0 {
            return Err(ScaleError::InvalidConfig(format!(
                "allowed_error must be a positive finite number, got {} at {}",
                self.allowed_error, self.name
            )));
        }
        Ok(())
    }

    /// `allowed_error` as an exact rational, for comparison against divergence.
    pub(crate) fn error_budget(&self) -> Result<BigRational, ScaleError> {
        self.validate()?;
        BigRational::from_float(self.allowed_error).ok_or_else(|| {
            ScaleError::InvalidConfig(format!(
                "allowed_error {} is not representable at {}",
                self.allowed_error, self.name
            ))
        })
    }
}
