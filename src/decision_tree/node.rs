//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::collections::BTreeMap;

use crate::{Classifier, Error, Example, Result};


/// A node of a decision tree over categorical attributes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that tests one attribute and
    /// has one child per attribute value.
    Branch {
        /// The attribute this node tests.
        attribute: usize,
        /// The children keyed by the value of `attribute`.
        branches:  BTreeMap<String, Node>,
        /// The plurality label of the training examples
        /// that reached this node.
        plurality: String,
    },
    /// A node that predicts a label.
    Leaf {
        /// The predicted label.
        label: String,
    },
}

impl Node {
    /// Construct a branch node.
    pub fn branch<S>(
        attribute: usize,
        branches:  BTreeMap<String, Node>,
        plurality: S,
    ) -> Self
        where S: Into<String>
    {
        Self::Branch {
            attribute,
            branches,
            plurality: plurality.into(),
        }
    }

    /// Construct a leaf node.
    pub fn leaf<S>(label: S) -> Self
        where S: Into<String>
    {
        Self::Leaf { label: label.into() }
    }

    /// Returns `true` if this node is a leaf.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Returns the length of the longest root-to-leaf path.
    /// A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { branches, .. } => {
                branches.values()
                    .map(|child| child.depth() + 1)
                    .max()
                    .unwrap_or(1)
            },
            Self::Leaf { .. } => 0,
        }
    }

    /// Returns the number of leaves of this sub-tree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { branches, .. } => {
                branches.values()
                    .map(Node::n_leaves)
                    .sum()
            },
            Self::Leaf { .. } => 1,
        }
    }

    /// Predicts the label of `example`.
    /// If `example` takes a value at the tested attribute
    /// that has no branch, this method returns an error.
    pub(crate) fn predict_strict(&self, example: &Example) -> Result<&str> {
        let mut node = self;
        loop {
            match node {
                Self::Branch { attribute, branches, .. } => {
                    let value = example.feature(*attribute);
                    match value.and_then(|v| branches.get(v)) {
                        Some(child) => { node = child; },
                        None => {
                            return Err(Error::UnseenValue {
                                attribute: *attribute,
                                value: value.unwrap_or_default().to_string(),
                            });
                        },
                    }
                },
                Self::Leaf { label } => { return Ok(label.as_str()); },
            }
        }
    }

    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch { attribute, branches, .. } => {
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"x[{attribute}] ?\" ];\n",
                )];

                let mut next_id = id + 1;
                for (value, child) in branches {
                    let child_id = next_id;
                    let (mut child_info, return_id) = child.to_dot_info(child_id);
                    info.append(&mut child_info);

                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                    next_id = return_id;
                }

                (info, next_id)
            },
            Node::Leaf { label } => {
                let info = format!(
                    "\tnode_{id} [ label = \"{label}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            }
        }
    }
}

impl Classifier for Node {
    /// Walks from this node to a leaf.
    /// If `example` takes a value at the tested attribute
    /// that has no branch, the walk stops and
    /// the plurality label of that branch node is returned.
    fn predict(&self, example: &Example) -> &str {
        let mut node = self;
        loop {
            match node {
                Self::Branch { attribute, branches, plurality } => {
                    let child = example.feature(*attribute)
                        .and_then(|value| branches.get(value));
                    match child {
                        Some(child) => { node = child; },
                        None => { return plurality; },
                    }
                },
                Self::Leaf { label } => { return label; },
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Branch {
                attribute,
                branches,
                plurality,
            } => {
                f.debug_struct("Branch")
                    .field("attribute", &attribute)
                    .field("plurality", &plurality)
                    .field("branches", &branches)
                    .finish()
            },
            Self::Leaf {
                label,
            } => {
                f.debug_struct("Leaf")
                    .field("label", &label)
                    .finish()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // x[0] == "a" -> Yes, x[0] == "b" -> (x[1] == "x" -> Yes, "y" -> No)
    fn tree() -> Node {
        let inner = Node::branch(
            1,
            BTreeMap::from([
                ("x".to_string(), Node::leaf("Yes")),
                ("y".to_string(), Node::leaf("No")),
            ]),
            "No",
        );
        Node::branch(
            0,
            BTreeMap::from([
                ("a".to_string(), Node::leaf("Yes")),
                ("b".to_string(), inner),
            ]),
            "Yes",
        )
    }

    #[test]
    fn test_shape() {
        let root = tree();
        assert_eq!(root.depth(), 2);
        assert_eq!(root.n_leaves(), 3);
        assert!(!root.is_leaf());
        assert_eq!(Node::leaf("Yes").depth(), 0);
    }

    #[test]
    fn test_predict() {
        let root = tree();
        assert_eq!(root.predict(&Example::new(["a", "y"], "?")), "Yes");
        assert_eq!(root.predict(&Example::new(["b", "x"], "?")), "Yes");
        assert_eq!(root.predict(&Example::new(["b", "y"], "?")), "No");
    }

    #[test]
    fn test_unseen_value_falls_back_to_plurality() {
        let root = tree();
        assert_eq!(root.predict(&Example::new(["c", "y"], "?")), "Yes");
        assert_eq!(root.predict(&Example::new(["b", "z"], "?")), "No");
        assert_eq!(root.predict(&Example::new(["b"], "?")), "No");
    }

    #[test]
    fn test_unseen_value_strict() {
        let root = tree();
        let label = root.predict_strict(&Example::new(["b", "y"], "?"));
        assert_eq!(label.unwrap(), "No");

        let err = root.predict_strict(&Example::new(["b", "z"], "?"))
            .unwrap_err();
        match err {
            Error::UnseenValue { attribute, value } => {
                assert_eq!(attribute, 1);
                assert_eq!(value, "z");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dot_info() {
        let (info, next_id) = tree().to_dot_info(0);
        assert_eq!(next_id, 5);
        assert!(info.iter().any(|row| row.contains("x[0] ?")));
        assert!(info.iter().any(|row| row.contains("node_2 -- node_3")));
    }
}
