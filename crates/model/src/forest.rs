//! Random forest evaluator over binary decision trees.
//!
//! Trees are stored as flat node arrays rooted at index 0. A split sends a
//! sample left when `x[feature] <= threshold`. Leaves carry per-class weights
//! (sample counts or fractions) which are normalised before averaging.

use serde::{Deserialize, Serialize};

use crate::classifier::ensure_finite;
use crate::{Classifier, FEATURE_COUNT, FeatureVector, ModelError, Result};

/// A node of a decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

/// A single fitted tree.
///
/// Structure is checked when the tree joins a [`RandomForest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Creates a tree from nodes rooted at index 0.
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    fn validate(&self, tree: usize) -> Result<()> {
        let invalid = |reason: String| ModelError::InvalidTree { tree, reason };

        if self.nodes.is_empty() {
            return Err(invalid("tree has no nodes".to_string()));
        }

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= FEATURE_COUNT {
                        return Err(invalid(format!("node {i} splits on feature {feature}")));
                    }
                    if !threshold.is_finite() {
                        return Err(invalid(format!("node {i} has a non-finite threshold")));
                    }
                    // Children must come later in the array, which rules out cycles.
                    for child in [*left, *right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(invalid(format!("node {i} points to node {child}")));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != 2 {
                        return Err(invalid(format!(
                            "leaf {i} has {} class weights, expected 2",
                            value.len()
                        )));
                    }
                    if value.iter().any(|v| !v.is_finite() || *v < 0.0) {
                        return Err(invalid(format!("leaf {i} has a negative or non-finite weight")));
                    }
                    if value.iter().sum::<f64>() <= 0.0 {
                        return Err(invalid(format!("leaf {i} has zero total weight")));
                    }
                }
            }
        }
        Ok(())
    }

    /// Class distribution of the leaf reached by `features`.
    fn leaf_proba(&self, features: &FeatureVector) -> [f64; 2] {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { value } => {
                    let total = value[0] + value[1];
                    return [value[0] / total, value[1] / total];
                }
            }
        }
    }
}

#[derive(Deserialize)]
struct ForestParams {
    trees: Vec<DecisionTree>,
}

/// Ensemble of decision trees whose leaf distributions are averaged.
///
/// Every tree is validated on construction, so evaluation never indexes
/// outside a node array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForestParams")]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Creates a forest from fitted trees, checking every tree's structure.
    pub fn new(trees: Vec<DecisionTree>) -> Result<Self> {
        Self::try_from(ForestParams { trees })
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}

impl TryFrom<ForestParams> for RandomForest {
    type Error = ModelError;

    fn try_from(params: ForestParams) -> Result<Self> {
        if params.trees.is_empty() {
            return Err(ModelError::InvalidParameter {
                field: "trees".to_string(),
                reason: "forest has no trees".to_string(),
            });
        }
        for (i, tree) in params.trees.iter().enumerate() {
            tree.validate(i)?;
        }
        Ok(Self {
            trees: params.trees,
        })
    }
}

impl Classifier for RandomForest {
    fn kind(&self) -> &'static str {
        "random_forest"
    }

    fn predict(&self, features: &FeatureVector) -> Result<u8> {
        let [p0, p1] = self.predict_proba(features)?;
        Ok(u8::from(p1 > p0))
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        ensure_finite(features)?;

        let sum = self.trees.iter().fold([0.0, 0.0], |acc, tree| {
            let [p0, p1] = tree.leaf_proba(features);
            [acc[0] + p0, acc[1] + p1]
        });
        let n = self.trees.len() as f64;
        Ok([sum[0] / n, sum[1] / n])
    }
}
