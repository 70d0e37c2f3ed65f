use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

/// Immutable binary decision tree stored as an arena of [`Node`]s.
///
/// Hand-written rules are composed bottom-up from [`Tree::result`],
/// [`Tree::assign`], and [`Tree::branch`]; sampled functions come from
/// [`SampleTreeBuilder`]. Either way, children always precede their parent
/// in the arena, so the structure is acyclic and serializes as a flat list.
///
/// Evaluation borrows the tree and the snapshot immutably and has no side
/// effects, so one tree may be evaluated from many threads at once.
/// Deserialized arenas are checked for the same ordering before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Arena")]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeIndex,
}

/// Unchecked wire form of a [`Tree`].
#[derive(Deserialize)]
struct Arena {
    nodes: Vec<Node>,
    root: NodeIndex,
}

impl TryFrom<Arena> for Tree {
    type Error = TreeError;
    fn try_from(Arena { nodes, root }: Arena) -> Result<Self> {
        if root >= nodes.len() {
            return Err(TreeError::MalformedTree(format!(
                "root {} outside arena of {} nodes",
                root,
                nodes.len()
            )));
        }
        for (i, node) in nodes.iter().enumerate() {
            if let Node::Branch { yes, no, .. } = node {
                if *yes >= i || *no >= i {
                    return Err(TreeError::MalformedTree(format!(
                        "branch {} points forward to {} / {}",
                        i, yes, no
                    )));
                }
            }
        }
        Ok(Self { nodes, root })
    }
}

impl Tree {
    pub fn leaf(leaf: Leaf) -> Self {
        Self {
            nodes: vec![Node::Leaf(leaf)],
            root: 0,
        }
    }
    pub fn result(b: bool) -> Self {
        Self::leaf(Leaf::Result(b))
    }
    pub fn assign(transform: Transform) -> Self {
        Self::leaf(Leaf::Assign(transform))
    }
    /// `if predicate { yes } else { no }`
    pub fn branch(predicate: Predicate, yes: Tree, no: Tree) -> Self {
        let offset = yes.nodes.len();
        let mut nodes = yes.nodes;
        nodes.extend(no.nodes.into_iter().map(|node| node.shift(offset)));
        nodes.push(Node::Branch {
            predicate,
            yes: yes.root,
            no: no.root + offset,
        });
        Self {
            root: nodes.len() - 1,
            nodes,
        }
    }
    /// Guard that is true exactly when `predicate` holds.
    pub fn guard(predicate: Predicate) -> Self {
        Self::branch(predicate, Self::result(true), Self::result(false))
    }
    pub(crate) fn from_arena(nodes: Vec<Node>, root: NodeIndex) -> Self {
        Self { nodes, root }
    }

    /// Walks from the root to the leaf selected by `snapshot`.
    pub fn route(&self, snapshot: &Snapshot) -> Result<&Leaf> {
        let mut index = self.root;
        loop {
            match &self.nodes[index] {
                Node::Leaf(leaf) => return Ok(leaf),
                Node::Branch { predicate, yes, no } => {
                    index = if predicate.test(snapshot)? { *yes } else { *no };
                }
            }
        }
    }
    pub fn evaluate(&self, snapshot: &Snapshot) -> Result<Outcome> {
        match self.route(snapshot)? {
            Leaf::Result(b) => Ok(Outcome::Bool(*b)),
            Leaf::Assign(transform) => transform.apply(snapshot).map(Outcome::Value),
        }
    }
    /// Evaluates a guard tree; an assigning leaf is an error.
    pub fn legal(&self, snapshot: &Snapshot) -> Result<bool> {
        self.evaluate(snapshot)?.truth()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.depth_from(self.root)
    }
    fn depth_from(&self, index: NodeIndex) -> usize {
        match &self.nodes[index] {
            Node::Leaf(_) => 1,
            Node::Branch { yes, no, .. } => 1 + self.depth_from(*yes).max(self.depth_from(*no)),
        }
    }
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Leaf(leaf) => Some(leaf),
            Node::Branch { .. } => None,
        })
    }

    fn render(&self, f: &mut Formatter<'_>, index: NodeIndex, indent: usize) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        match &self.nodes[index] {
            Node::Leaf(Leaf::Result(b)) => writeln!(f, "{}{}", pad, b),
            Node::Leaf(Leaf::Assign(transform)) => writeln!(f, "{}{}", pad, transform),
            Node::Branch { predicate, yes, no } => {
                writeln!(f, "{}if {}", pad, predicate)?;
                self.render(f, *yes, indent + 1)?;
                writeln!(f, "{}else", pad)?;
                self.render(f, *no, indent + 1)
            }
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.render(f, self.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location() -> FeatureKey {
        FeatureKey::state("Player 1", "location")
    }

    #[test]
    fn legality_guard() {
        let guard = Tree::guard(Predicate::equals(location(), [1, 3]));
        assert_eq!(guard.legal(&Snapshot::new().with(location(), 0)), Ok(false));
        assert_eq!(guard.legal(&Snapshot::new().with(location(), 1)), Ok(true));
        assert_eq!(guard.legal(&Snapshot::new().with(location(), 3)), Ok(true));
    }

    #[test]
    fn nested_branches() {
        let x = FeatureKey::new("x");
        let tree = Tree::branch(
            Predicate::below(x.clone(), 0.0),
            Tree::assign(Transform::ConstantAssign(Value::from("negative"))),
            Tree::branch(
                Predicate::below(x.clone(), 10.0),
                Tree::assign(Transform::ConstantAssign(Value::from("small"))),
                Tree::assign(Transform::ConstantAssign(Value::from("large"))),
            ),
        );
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.leaves().count(), 3);
        let label = |v: f64| tree.evaluate(&Snapshot::new().with(x.clone(), v));
        assert_eq!(label(-1.0), Ok(Outcome::Value(Value::from("negative"))));
        assert_eq!(label(5.0), Ok(Outcome::Value(Value::from("small"))));
        assert_eq!(label(10.0), Ok(Outcome::Value(Value::from("large"))));
    }

    #[test]
    fn nested_on_both_sides() {
        let (a, b) = (FeatureKey::new("a"), FeatureKey::new("b"));
        let side = |key: &FeatureKey, yes: i32, no: i32| {
            Tree::branch(
                Predicate::equals(key.clone(), [1]),
                Tree::assign(Transform::ConstantAssign(Value::from(yes))),
                Tree::assign(Transform::ConstantAssign(Value::from(no))),
            )
        };
        let tree = Tree::branch(
            Predicate::equals(a.clone(), [1]),
            side(&b, 11, 10),
            side(&b, 1, 0),
        );
        assert_eq!(tree.depth(), 3);
        for (va, vb, expected) in [(1, 1, 11), (1, 0, 10), (0, 1, 1), (0, 0, 0)] {
            let snapshot = Snapshot::new().with(a.clone(), va).with(b.clone(), vb);
            assert_eq!(
                tree.evaluate(&snapshot).and_then(Outcome::value),
                Ok(Value::from(expected))
            );
        }
    }

    #[test]
    fn missing_feature() {
        let guard = Tree::guard(Predicate::equals(location(), [1]));
        assert_eq!(
            guard.legal(&Snapshot::new()),
            Err(TreeError::MissingFeature(location()))
        );
    }

    #[test]
    fn outcome_mismatch() {
        let tree = Tree::assign(Transform::ConstantAssign(Value::from(1)));
        assert_eq!(
            tree.legal(&Snapshot::new()),
            Err(TreeError::UnexpectedOutcome("boolean"))
        );
        assert_eq!(
            Tree::result(true)
                .evaluate(&Snapshot::new())
                .and_then(Outcome::value),
            Err(TreeError::UnexpectedOutcome("value"))
        );
    }

    #[test]
    fn deterministic() {
        use pwl_core::Arbitrary;
        let x = FeatureKey::new("x");
        let tree = Tree::branch(
            Predicate::below(x.clone(), 0.0),
            Tree::assign(Transform::ConstantAssign(Value::from(-1))),
            Tree::assign(Transform::CopyAssign(x.clone())),
        );
        for _ in 0..100 {
            let snapshot = Snapshot::new().with(x.clone(), Value::random());
            assert_eq!(tree.evaluate(&snapshot), tree.evaluate(&snapshot));
        }
    }

    #[test]
    fn display() {
        let tree = Tree::guard(Predicate::equals(location(), [1, 3]));
        assert_eq!(
            tree.to_string(),
            "if Player 1's location ∈ {1, 3}\n  true\nelse\n  false\n"
        );
    }

    #[test]
    fn serializes_flat() {
        let tree = Tree::branch(
            Predicate::same(location(), FeatureKey::state("Victim 1", "location")),
            Tree::assign(Transform::ConstantAssign(Value::from("saved"))),
            Tree::assign(Transform::CopyAssign(FeatureKey::state("Victim 1", "status"))),
        );
        let json = serde_json::to_string(&tree).unwrap();
        let back = serde_json::from_str::<Tree>(&json).unwrap();
        assert_eq!(tree, back);
    }

    #[test]
    fn rejects_root_outside_arena() {
        let json = r#"{"nodes":[{"Leaf":{"Result":true}}],"root":5}"#;
        let err = serde_json::from_str::<Tree>(json).unwrap_err();
        assert!(err.to_string().contains("root 5"), "{}", err);
        let json = r#"{"nodes":[],"root":0}"#;
        assert!(serde_json::from_str::<Tree>(json).is_err());
    }

    #[test]
    fn rejects_cyclic_branch() {
        let json = r#"{"nodes":[{"Branch":{"predicate":{"Threshold":["x",0.0]},"yes":0,"no":0}}],"root":0}"#;
        let err = serde_json::from_str::<Tree>(json).unwrap_err();
        assert!(err.to_string().contains("points forward"), "{}", err);
    }

    #[test]
    fn rejects_forward_child() {
        let json = r#"{"nodes":[
            {"Branch":{"predicate":{"Threshold":["x",0.0]},"yes":1,"no":2}},
            {"Leaf":{"Result":true}},
            {"Leaf":{"Result":false}}
        ],"root":0}"#;
        assert!(serde_json::from_str::<Tree>(json).is_err());
        let json = r#"{"nodes":[
            {"Leaf":{"Result":true}},
            {"Leaf":{"Result":false}},
            {"Branch":{"predicate":{"Threshold":["x",0.0]},"yes":0,"no":1}}
        ],"root":2}"#;
        let tree = serde_json::from_str::<Tree>(json).unwrap();
        assert_eq!(tree.legal(&Snapshot::new().with("x".into(), -1.0)), Ok(true));
        assert_eq!(tree.depth(), 2);
    }
}
