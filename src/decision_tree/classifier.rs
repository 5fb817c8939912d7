//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::prelude::*;

use crate::{Classifier, Example, Result};
use super::node::Node;
use super::domain::AttributeDomains;


/// Decision tree classifier.
/// This struct is a wrapper of the root [`Node`]
/// together with the attribute domains of the training sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    root:    Node,
    domains: AttributeDomains,
}


impl DecisionTreeClassifier {
    #[inline]
    pub(super) fn new(root: Node, domains: AttributeDomains) -> Self {
        Self { root, domains }
    }


    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Returns the attribute domains of the training sample.
    #[inline]
    pub fn domains(&self) -> &AttributeDomains {
        &self.domains
    }


    /// Returns the depth of the tree.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Returns the number of leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Predicts the label of `example`.
    /// Unlike [`Classifier::predict`], this method returns
    /// [`Error::UnseenValue`](crate::Error::UnseenValue)
    /// when `example` reaches a branch node
    /// that has no child for its value.
    #[inline]
    pub fn predict_strict(&self, example: &Example) -> Result<&str> {
        self.root.predict_strict(example)
    }


    /// Returns the nodes level by level, from the root.
    /// Each entry reads `key: x[i]` for a branch testing attribute `i`
    /// and `key: label` for a leaf,
    /// where `key` is the value on the incoming edge
    /// (`Root` for the root).
    pub fn levels(&self) -> Vec<Vec<String>> {
        let mut levels = Vec::new();
        let mut frontier = vec![("Root", &self.root)];

        while !frontier.is_empty() {
            let mut next = Vec::new();
            let level = frontier.into_iter()
                .map(|(key, node)| match node {
                    Node::Branch { attribute, branches, .. } => {
                        next.extend(
                            branches.iter()
                                .map(|(value, child)| (value.as_str(), child))
                        );
                        format!("{key}: x[{attribute}]")
                    },
                    Node::Leaf { label } => format!("{key}: {label}"),
                })
                .collect::<Vec<_>>();

            levels.push(level);
            frontier = next;
        }

        levels
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> std::io::Result<()>
        where P: AsRef<Path>
    {
        let mut f = File::create(path)?;
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;

        Ok(())
    }
}


impl Classifier for DecisionTreeClassifier {
    #[inline]
    fn predict(&self, example: &Example) -> &str {
        self.root.predict(example)
    }
}


impl fmt::Display for DecisionTreeClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.levels() {
            writeln!(f, "{}", level.join("  "))?;
        }
        Ok(())
    }
}
