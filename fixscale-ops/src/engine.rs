use crate::config::OperatorConfig;
use crate::error::ScaleError;
use fixscale_math::{mean_abs_divergence, BigRational, BitWidth, Expression, FixedInt, SignalBuffer};
use num_traits::ToPrimitive;
use tracing::{debug, info, trace};

/// Accepted result together with the shift that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scaled<T> {
    pub output: SignalBuffer<T>,
    /// Operands were divided by `2^shift` before combining; 0 when unscaled.
    pub shift: u32,
}

impl<T> Scaled<T> {
    pub fn into_output(self) -> SignalBuffer<T> {
        self.output
    }
}

fn to_f64(value: &BigRational) -> f64 {
    value.to_f64().unwrap_or(f64::INFINITY)
}

/// Evaluate `expr`, rescaling if the bounded result strays too far from the exact one.
pub(crate) fn evaluate<T: FixedInt>(
    config: &OperatorConfig,
    expr: &Expression<'_, T>,
) -> Result<Scaled<T>, ScaleError> {
    let budget = config.error_budget()?;
    let original = expr.width();

    let bounded = expr.bounded(0);
    let exact = expr.exact(0);

    let accepted = if bounded.is_empty() || config.fast_path.accepts(&exact, &bounded) {
        trace!(operator = %config.name, "accepted unscaled result");
        Scaled {
            output: bounded,
            shift: 0,
        }
    } else {
        let unscaled_error = mean_abs_divergence(&exact, &bounded)?;
        let scaled = search(config, expr, &budget, &unscaled_error)?;
        info!(
            operator = %config.name,
            shift = scaled.shift,
            "shift at {} for {}",
            config.name,
            scaled.shift
        );
        scaled
    };

    verify_width(&config.name, original, accepted.output.width())?;
    Ok(accepted)
}

/// Smallest shift in `1..=maximum_allowed_bit_shift` whose divergence is within budget.
fn search<T: FixedInt>(
    config: &OperatorConfig,
    expr: &Expression<'_, T>,
    budget: &BigRational,
    unscaled_error: &BigRational,
) -> Result<Scaled<T>, ScaleError> {
    if config.maximum_allowed_bit_shift == 0 {
        return Err(ScaleError::ScaleBudgetExceeded {
            name: config.name.clone(),
            shift: 0,
            error: to_f64(unscaled_error),
        });
    }

    let mut shift = 1;
    loop {
        let bounded = expr.bounded(shift);
        let error = mean_abs_divergence(&expr.exact(shift), &bounded)?;
        debug!(
            operator = %config.name,
            shift,
            error = to_f64(&error),
            "evaluated candidate shift"
        );

        if error <= *budget {
            return Ok(Scaled {
                output: bounded,
                shift,
            });
        }

        if shift >= config.maximum_allowed_bit_shift {
            return Err(ScaleError::ScaleBudgetExceeded {
                name: config.name.clone(),
                shift,
                error: to_f64(&error),
            });
        }
        shift += 1;
    }
}

/// The accepted result must keep the declared width of the primary operand.
pub fn verify_width(name: &str, original: BitWidth, result: BitWidth) -> Result<(), ScaleError> {
    if original != result {
        return Err(ScaleError::WidthViolation {
            name: name.to_string(),
            from: original,
            to: result,
        });
    }
    Ok(())
}
