//! Approximation Binary
//!
//! Samples each non-linear function over the domain, builds a search tree
//! from the samples, and Monte Carlo tests the tree against the function.
//!
//! Options: --debug <LEVEL>, --function <root|log|cube>, --samples, --trials, --seed, --lo, --hi

use clap::Parser;
use pwl_harness::*;

#[derive(Parser, Debug)]
#[command(about = "Approximate univariate functions with sampled decision trees")]
struct Args {
    /// Level of logging detail; `debug` prints every trial.
    #[arg(short, long, default_value = "warn")]
    debug: log::LevelFilter,
    /// Functions to approximate.
    #[arg(short, long, value_delimiter = ',', default_values_t = Univariate::all().to_vec())]
    function: Vec<Univariate>,
    #[arg(long, default_value_t = pwl_core::NUM_SAMPLES)]
    samples: usize,
    #[arg(long, default_value_t = pwl_core::NUM_TRIALS)]
    trials: usize,
    #[arg(long, default_value_t = pwl_core::SEED)]
    seed: u64,
    #[arg(long, default_value_t = pwl_core::MIN_X, allow_negative_numbers = true)]
    lo: f64,
    #[arg(long, default_value_t = pwl_core::MAX_X, allow_negative_numbers = true)]
    hi: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    pwl_core::log(args.debug);
    let domain = Domain::new(args.lo, args.hi);
    for function in args.function {
        let harness = Harness::new(|x: f64| function.call(x), domain, args.samples)?
            .named(move |x| function.symbol(x));
        log::info!(
            "approximating {} with {} samples over [{}, {}]",
            function,
            args.samples,
            domain.lo,
            domain.hi
        );
        log::debug!("\n{}", harness.effect().tree());
        let metrics = harness.measure(args.trials, args.seed)?;
        println!("{:<8}{}", function, metrics);
    }
    Ok(())
}
