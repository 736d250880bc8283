// Worked scenarios for a uint32 accumulator with shape (1,).
use fixscale_math::{FixedInt, SignalBuffer};
use fixscale_ops::{AddConstant, AddSignals, MulConstant, MulSignals, ScaleError};

const NEAR_CEILING: u32 = 0xFFFF_0000;

#[test]
fn test_constant_multiply_fits_unscaled() {
    let x = SignalBuffer::from_slice(&[65_536u32]);
    let out = MulConstant::new(16, "m").apply_scaled(&x).unwrap();

    assert_eq!(out.shift, 0);
    assert_eq!(out.output.data(), &[1_048_576]);
    assert_eq!(out.output.width(), u32::WIDTH);
}

#[test]
fn test_signal_add_overflow_then_constant_add() {
    let x = SignalBuffer::from_slice(&[65_536u32]);
    let m = MulConstant::new(16, "m").apply(&x).unwrap();

    let big = SignalBuffer::from_slice(&[0xC000_0000u32]);
    let sum = AddSignals::new("Addition").apply_scaled(&[&big, &big]).unwrap();
    assert_eq!(sum.shift, 1);
    assert_eq!(sum.output.data(), &[0xC000_0000]);

    let combined = AddSignals::new("Combine")
        .apply_scaled(&[&sum.output, &m])
        .unwrap();
    assert_eq!(combined.shift, 0);
    assert_eq!(combined.output.data(), &[0xC000_0000 + 1_048_576]);

    let a = AddConstant::new(1024, "a").apply_scaled(&combined.output).unwrap();
    assert_eq!(a.shift, 0);
    assert_eq!(a.output.data(), &[0xC000_0000 + 1_048_576 + 1024]);
}

#[test]
fn test_signal_multiply_near_ceiling_scales() {
    let v = SignalBuffer::from_slice(&[NEAR_CEILING]);
    let out = MulSignals::new("sq").apply_scaled(&[&v, &v]).unwrap();

    // Only a full 16-bit shift brings 0xFFFF_0000^2 back into 32 bits.
    assert_eq!(out.shift, 16);
    assert_eq!(out.output.data(), &[65_535 * 65_535]);
}

#[test]
fn test_signal_multiply_ceiling_too_low() {
    let v = SignalBuffer::from_slice(&[NEAR_CEILING]);
    let err = MulSignals::new("sq")
        .with_maximum_allowed_bit_shift(15)
        .apply(&[&v, &v])
        .unwrap_err();

    match err {
        ScaleError::ScaleBudgetExceeded { name, shift, error } => {
            assert_eq!(name, "sq");
            assert_eq!(shift, 15);
            assert!(error > 1024.0);
        }
        other => panic!("expected ScaleBudgetExceeded, got {:?}", other),
    }
}

#[test]
fn test_signal_multiply_zero_ceiling() {
    let v = SignalBuffer::from_slice(&[NEAR_CEILING]);
    let err = MulSignals::new("sq")
        .with_maximum_allowed_bit_shift(0)
        .apply(&[&v, &v])
        .unwrap_err();

    assert!(matches!(
        err,
        ScaleError::ScaleBudgetExceeded { ref name, shift: 0, .. } if name == "sq"
    ));
}

#[test]
fn test_zero_ceiling_overflowing_constant() {
    let x = SignalBuffer::from_slice(&[u32::MAX]);
    let err = MulConstant::new(16, "m")
        .with_maximum_allowed_bit_shift(0)
        .apply(&x)
        .unwrap_err();

    assert_eq!(
        err,
        ScaleError::ScaleBudgetExceeded {
            name: "m".into(),
            shift: 0,
            error: 64_424_509_440.0,
        }
    );
    assert!(err.to_string().contains("at m"));
}

#[test]
fn test_budget_below_truncation_floor() {
    let x = SignalBuffer::from_vec(&[2, 2], vec![u32::MAX, u32::MAX - 1, u32::MAX - 2, u32::MAX - 3])
        .unwrap();
    let loose = AddConstant::new(1024, "loose").apply_scaled(&x).unwrap();
    assert_eq!(loose.shift, 1);
    assert_eq!(loose.output.shape(), &[2, 2]);

    // One bit of truncation already costs a mean of 0.25 here and every
    // further bit costs more, so the search runs to the ceiling.
    let tight = AddConstant::new(1024, "tight")
        .with_allowed_error(0.2)
        .apply_scaled(&x);
    assert!(matches!(tight, Err(ScaleError::ScaleBudgetExceeded { shift: 16, .. })));
}

#[test]
fn test_invalid_budget_is_rejected() {
    let x = SignalBuffer::from_slice(&[1u8]);
    let err = AddConstant::new(1, "bad")
        .with_allowed_error(0.0)
        .apply(&x)
        .unwrap_err();
    assert!(matches!(err, ScaleError::InvalidConfig(_)));
}

#[test]
fn test_operator_shared_across_threads() {
    let square = MulSignals::new("sq");
    let inputs: Vec<SignalBuffer<u32>> = (17..24)
        .map(|e| SignalBuffer::from_slice(&[1u32 << e]))
        .collect();

    let shifts: Vec<u32> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|v| {
                let square = &square;
                scope.spawn(move || square.apply_scaled(&[v, v]).unwrap().shift)
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(shifts, (2..9).collect::<Vec<u32>>());
}
