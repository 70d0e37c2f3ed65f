//! Core type aliases, traits, and constants for piecewise decision trees.
//!
//! This crate provides the foundational types and default experiment
//! parameters used throughout the workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Scalar feature values, sample coordinates, and approximation errors.
/// NaN marks a value that is undefined at its input.
pub type Real = f64;
/// Per-trial and aggregated squared error.
pub type Energy = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// UNIVARIATE APPROXIMATION DEFAULTS
// Sample a function on [MIN_X, MAX_X], build a search tree over the samples,
// then Monte Carlo test the tree against the function.
// ============================================================================
/// Evenly spaced samples taken from the true function (both bounds included).
pub const NUM_SAMPLES: usize = 101;
/// Lower bound of the sampled and tested domain.
pub const MIN_X: Real = -20.0;
/// Upper bound of the sampled and tested domain.
pub const MAX_X: Real = 20.0;
/// Monte Carlo trials drawn uniformly from the domain.
pub const NUM_TRIALS: usize = 1000;
/// Seed for the trial sampler so runs are reproducible.
pub const SEED: u64 = 0;

// ============================================================================
// NUMERIC HELPERS
// ============================================================================
/// Whether a value takes part in aggregate statistics.
/// NaN and the infinities (e.g. `ln(0)`) are excluded.
pub fn defined(x: Real) -> bool {
    x.is_finite()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
/// Location, target and thread columns are switched off.
#[cfg(feature = "runtime")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term]).expect("initialize logger");
}
