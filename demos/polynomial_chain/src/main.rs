use anyhow::{Context, Result};
use clap::Parser;
use fixscale_math::SignalBuffer;
use fixscale_ops::{AddConstant, AddSignals, MulConstant, MulSignals, OperatorConfig};
use tracing_subscriber::EnvFilter;

/// Run (2*((x*m)^2 + (x*m)^3) + offset - offset) / divisor on a uint32 signal,
/// rescaling wherever the 32-bit accumulator would overflow.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Value every element of the input signal starts at
    #[arg(long, default_value_t = 1 << 16)]
    value: u32,

    /// Shape of the input signal, comma separated
    #[arg(long, value_delimiter = ',', default_value = "100,100,3")]
    shape: Vec<usize>,

    /// Constant for the first multiplication
    #[arg(long, default_value_t = 1 << 4)]
    multiplier: u32,

    /// Constant added (and later removed) before the final division
    #[arg(long, default_value_t = 1 << 10)]
    offset: u32,

    /// Truncating divisor applied at the end
    #[arg(long, default_value_t = 1024)]
    divisor: u32,

    /// Mean absolute error each operator tolerates
    #[arg(long, default_value_t = 1024.0)]
    allowed_error: f64,

    /// Largest right shift each operator may apply
    #[arg(long, default_value_t = 16)]
    max_shift: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = |name: &str| OperatorConfig {
        allowed_error: args.allowed_error,
        maximum_allowed_bit_shift: args.max_shift,
        ..OperatorConfig::new(name)
    };

    let x = SignalBuffer::filled(&args.shape, args.value);
    println!("Input: shape {:?}, width {}, value {}", x.shape(), x.width(), args.value);

    let first = MulConstant::from_config(args.multiplier, config("First Multiplication"))
        .apply(&x)
        .context("first multiplication")?;

    let square = MulSignals::from_config(config("square"))
        .apply(&[&first, &first])
        .context("square")?;
    let cubic = MulSignals::from_config(config("cubic"))
        .apply(&[&first, &first, &first])
        .context("cubic")?;

    let sum = AddSignals::from_config(config("Addition"))
        .apply(&[&square, &cubic])
        .context("addition")?;
    let shifted = AddConstant::from_config(args.offset, config(&format!("Adding {}", args.offset)))
        .apply(&sum)
        .context("constant addition")?;

    // Subtraction and integer division never need more bits.
    let reduced = shifted
        .wrapping_sub_scalar(args.offset)
        .div_scalar(args.divisor)
        .context("final division")?;
    println!("After reduction: width {}", reduced.width());

    let doubled = AddSignals::from_config(config("Addition"))
        .apply(&[&reduced, &reduced])
        .context("final addition")?;

    println!(
        "Output: shape {:?}, width {}, first element {}",
        doubled.shape(),
        doubled.width(),
        doubled.data().first().copied().unwrap_or_default()
    );

    Ok(())
}
