use crate::*;
use pwl_core::Real;
use pwl_tree::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Compares a sampled-function tree against the function it was built from.
///
/// The tree reads its independent variable from `source`; each trial draws
/// a uniform `x` from the domain, evaluates both sides, and feeds the pair
/// into [`Errors`]. Runs with the same seed are identical.
pub struct Harness<F> {
    truth: F,
    effect: Effect,
    source: FeatureKey,
    domain: Domain,
    mean: Real,
    symbol: Box<dyn Fn(Real) -> String>,
}

impl<F> Harness<F>
where
    F: Fn(Real) -> Real,
{
    /// Samples `truth` at `samples` evenly spaced points over `domain`
    /// and builds the tree from them.
    pub fn new(truth: F, domain: Domain, samples: usize) -> Result<Self> {
        let source = FeatureKey::new("var");
        let samples = Samples::univariate(&truth, domain.lo, domain.hi, samples)?;
        let mean = samples.mean();
        let effect = SampleTreeBuilder::new(FeatureKey::new("result"), source.clone(), samples).build();
        Ok(Self::from_effect(truth, effect, source, domain, mean))
    }

    /// Measures an existing tree. `mean` is the mean of the defined
    /// sample values the tree was built from.
    pub fn from_effect(truth: F, effect: Effect, source: FeatureKey, domain: Domain, mean: Real) -> Self {
        Self {
            truth,
            effect,
            source,
            domain,
            mean,
            symbol: Box::new(|x: Real| format!("x = {:.3}", x)),
        }
    }

    /// How each trial's input is written in the debug log.
    pub fn named(mut self, symbol: impl Fn(Real) -> String + 'static) -> Self {
        self.symbol = Box::new(symbol);
        self
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }
    pub fn symbol(&self, x: Real) -> String {
        (self.symbol)(x)
    }

    /// Tree output at `x`; NaN where the bracketing samples are undefined.
    pub fn approximate(&self, x: Real) -> Result<Real> {
        let snapshot = Snapshot::new().with(self.source.clone(), x);
        self.effect
            .apply(&snapshot)?
            .number()
            .ok_or_else(|| TreeError::NotNumeric(self.effect.target().clone()))
    }

    pub fn measure(&self, trials: usize, seed: u64) -> Result<Metrics> {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let mut errors = Errors::default();
        for trial in 0..trials {
            let x = self.domain.draw(rng);
            let real = (self.truth)(x);
            let approx = self.approximate(x)?;
            log::debug!(
                "{:>4}: {:<15} | expected {:>10.3} | approximated {:>10.3}",
                trial,
                self.symbol(x),
                real,
                approx
            );
            errors.witness(real, approx, self.mean);
        }
        let metrics = errors.metrics();
        log::info!("{}", metrics);
        Ok(metrics)
    }
}
