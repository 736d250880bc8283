use crate::config::OperatorConfig;
use crate::engine::{evaluate, Scaled};
use crate::error::ScaleError;
use fixscale_math::{Expression, FixedInt, Op, SignalBuffer};

fn fold<'a, T: FixedInt>(
    config: &OperatorConfig,
    op: Op,
    signals: &[&'a SignalBuffer<T>],
) -> Result<Expression<'a, T>, ScaleError> {
    if signals.is_empty() {
        return Err(ScaleError::EmptySignalList {
            name: config.name.clone(),
        });
    }
    Ok(Expression::fold(op, signals)?)
}

/// Element-wise product of every signal.
/// Width and shape are taken from the first signal in the list.
#[derive(Debug, Clone)]
pub struct MulSignals {
    config: OperatorConfig,
}

impl MulSignals {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: OperatorConfig::new(name),
        }
    }

    pub fn from_config(config: OperatorConfig) -> Self {
        Self { config }
    }

    config_builders!();

    pub fn apply<T: FixedInt>(
        &self,
        signals: &[&SignalBuffer<T>],
    ) -> Result<SignalBuffer<T>, ScaleError> {
        self.apply_scaled(signals).map(Scaled::into_output)
    }

    pub fn apply_scaled<T: FixedInt>(
        &self,
        signals: &[&SignalBuffer<T>],
    ) -> Result<Scaled<T>, ScaleError> {
        evaluate(&self.config, &fold(&self.config, Op::Mul, signals)?)
    }
}

/// Element-wise sum of every signal.
/// Width and shape are taken from the first signal in the list.
#[derive(Debug, Clone)]
pub struct AddSignals {
    config: OperatorConfig,
}

impl AddSignals {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: OperatorConfig::new(name),
        }
    }

    pub fn from_config(config: OperatorConfig) -> Self {
        Self { config }
    }

    config_builders!();

    pub fn apply<T: FixedInt>(
        &self,
        signals: &[&SignalBuffer<T>],
    ) -> Result<SignalBuffer<T>, ScaleError> {
        self.apply_scaled(signals).map(Scaled::into_output)
    }

    pub fn apply_scaled<T: FixedInt>(
        &self,
        signals: &[&SignalBuffer<T>],
    ) -> Result<Scaled<T>, ScaleError> {
        evaluate(&self.config, &fold(&self.config, Op::Add, signals)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixscale_math::MathError;

    #[test]
    fn test_empty_list_is_rejected() {
        let err = MulSignals::new("sq").apply::<u32>(&[]).unwrap_err();
        assert_eq!(err, ScaleError::EmptySignalList { name: "sq".into() });
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let a = SignalBuffer::filled(&[3], 1u32);
        let b = SignalBuffer::filled(&[1, 3], 1u32);
        let err = AddSignals::new("sum").apply(&[&a, &b]).unwrap_err();
        assert_eq!(
            err,
            ScaleError::Math(MathError::ShapeMismatch(vec![3], vec![1, 3]))
        );
    }

    #[test]
    fn test_single_signal_passes_through() {
        let a = SignalBuffer::from_slice(&[u64::MAX, 0]);
        assert_eq!(MulSignals::new("one").apply(&[&a]).unwrap(), a);
        assert_eq!(AddSignals::new("one").apply(&[&a]).unwrap(), a);
    }

    #[test]
    fn test_add_signals_is_plain_sum() {
        let a = SignalBuffer::from_vec(&[2, 2], vec![1u16, 2, 3, 4]).unwrap();
        let b = SignalBuffer::from_vec(&[2, 2], vec![10u16, 20, 30, 40]).unwrap();
        let out = AddSignals::new("sum").apply_scaled(&[&a, &b]).unwrap();
        assert_eq!(out.shift, 0);
        assert_eq!(out.output.data(), &[11, 22, 33, 44]);
        assert_eq!(out.output.shape(), &[2, 2]);
    }
}
