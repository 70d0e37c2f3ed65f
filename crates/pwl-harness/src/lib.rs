//! Monte Carlo fidelity measurement for sampled-function trees.
//!
//! - `domain` — Closed interval the function is sampled and tested over
//! - `univariate` — Built-in non-linear test functions
//! - `metrics` — Error accumulation and the RMSE triple
//! - `harness` — Sampling, tree construction, and trial loop

mod domain;
mod harness;
mod metrics;
mod univariate;

pub use domain::*;
pub use harness::*;
pub use metrics::*;
pub use univariate::*;
