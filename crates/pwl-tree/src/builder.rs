//! Search trees that approximate a sampled univariate function.

use crate::*;

/// Builds a balanced binary search tree over the intervals between
/// consecutive samples.
///
/// Each internal node splits its run of intervals at the median and tests
/// `source < x[m]`, where `m` is the first interval of the upper half.
/// Every leaf interpolates across exactly one interval, so any query lands
/// on the pair of samples that bracket it; queries outside the sampled
/// range land on an edge interval and clamp. Depth is logarithmic in the
/// number of samples.
///
/// Undefined sample values are not repaired; they are encoded as they are
/// and surface as undefined results for queries that touch them.
pub struct SampleTreeBuilder {
    target: FeatureKey,
    source: FeatureKey,
    samples: Samples,
    nodes: Vec<Node>,
}

impl SampleTreeBuilder {
    /// `target` is the feature the tree updates, `source` the feature
    /// holding the independent variable.
    pub fn new(target: FeatureKey, source: FeatureKey, samples: Samples) -> Self {
        Self {
            target,
            source,
            nodes: Vec::with_capacity(2 * samples.len()),
            samples,
        }
    }

    pub fn build(mut self) -> Effect {
        let intervals = self.samples.len() - 1;
        let root = self.grow(0, intervals);
        let tree = Tree::from_arena(self.nodes, root);
        log::debug!(
            "built {} <- {} over {} samples ({} nodes, depth {})",
            self.target,
            self.source,
            self.samples.len(),
            tree.len(),
            tree.depth(),
        );
        Effect::new(self.target, tree)
    }

    /// Subtree covering intervals `[lo, hi)`; interval `i` spans
    /// samples `i` and `i + 1`.
    fn grow(&mut self, lo: usize, hi: usize) -> NodeIndex {
        if hi - lo == 1 {
            let samples = self.samples.as_slice();
            let leaf = Leaf::Assign(Transform::Interpolate {
                source: self.source.clone(),
                lower: samples[lo],
                upper: samples[lo + 1],
            });
            self.push(Node::Leaf(leaf))
        } else {
            let mid = lo + (hi - lo) / 2;
            let yes = self.grow(lo, mid);
            let no = self.grow(mid, hi);
            let predicate = Predicate::below(self.source.clone(), self.samples.as_slice()[mid].x);
            self.push(Node::Branch { predicate, yes, no })
        }
    }

    fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
