//! Deviation histories and re-rooted display of the game tree.
//!
//! The canonical tree is never reordered. A [`DeviationHistory`] names the
//! non-mainline choices needed to reach a node; walking the tree while
//! honoring it yields the "new main line", and [`display_order`] produces the
//! per-node edge permutation used to show the chosen edge first.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::error::TreeError;

use super::game_tree::GameTree;
use super::node::{Node, NodeId, MAINLINE_INDEX, ROOT_NODE_ID};

/// The forced non-mainline choices (`node -> edge index`) on the unique path
/// to some target node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviationHistory {
    choices: BTreeMap<NodeId, usize>,
}

impl DeviationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edge index to treat as the main line at `node_id`.
    pub fn choice_at(&self, node_id: NodeId) -> usize {
        self.choices
            .get(&node_id)
            .copied()
            .unwrap_or(MAINLINE_INDEX)
    }

    pub fn get(&self, node_id: NodeId) -> Option<usize> {
        self.choices.get(&node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.choices.iter().map(|(&node, &choice)| (node, choice))
    }
}

impl FromIterator<(NodeId, usize)> for DeviationHistory {
    fn from_iter<I: IntoIterator<Item = (NodeId, usize)>>(iter: I) -> Self {
        DeviationHistory {
            choices: iter
                .into_iter()
                .filter(|&(_, choice)| choice != MAINLINE_INDEX)
                .collect(),
        }
    }
}

impl fmt::Display for DeviationHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (node, choice)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}: {choice}")?;
        }
        f.write_str("}")
    }
}

/// Compute the deviation history of `target`.
///
/// Walks origin links back to the root, recording each predecessor at which
/// the edge taken was not the main line.
pub fn deviation_history(tree: &GameTree, target: NodeId) -> Result<DeviationHistory, TreeError> {
    let mut choices = BTreeMap::new();
    let mut node = tree.get(target)?;
    while let Some(origin) = node.origin() {
        if origin.choice_index != MAINLINE_INDEX {
            choices.insert(origin.node_id, origin.choice_index);
        }
        node = tree.get(origin.node_id)?;
    }
    debug!(target, deviations = choices.len(), "deviation history");
    Ok(DeviationHistory { choices })
}

/// A display permutation of one node's edges: the chosen edge first, the rest
/// in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOrder {
    order: Vec<usize>,
}

impl DisplayOrder {
    /// Canonical edge indices in display order.
    pub fn indices(&self) -> &[usize] {
        &self.order
    }

    /// The edge shown first.
    pub fn chosen(&self) -> Option<usize> {
        self.order.first().copied()
    }

    /// Canonical index of the edge shown at `display_position`.
    pub fn original_index(&self, display_position: usize) -> Option<usize> {
        self.order.get(display_position).copied()
    }

    /// Display position of the canonical edge `original_index`.
    pub fn display_position(&self, original_index: usize) -> Option<usize> {
        self.order.iter().position(|&i| i == original_index)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Canonical indices of everything but the chosen edge.
    pub fn alternatives(&self) -> &[usize] {
        self.order.get(1..).unwrap_or(&[])
    }
}

/// Order `node`'s edges for display with `chosen` promoted to the front.
pub fn display_order(node: &Node, chosen: usize) -> Result<DisplayOrder, TreeError> {
    let edge_count = node.number_of_edges();
    if chosen >= edge_count {
        return Err(TreeError::ChoiceOutOfRange {
            choice: chosen,
            edge_count,
        });
    }
    let order = std::iter::once(chosen)
        .chain((0..edge_count).filter(|&i| i != chosen))
        .collect();
    Ok(DisplayOrder { order })
}

/// One node on a path walked under a deviation history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep {
    pub node_id: NodeId,
    /// Canonical index of the edge followed; `None` at the terminal node.
    pub chosen: Option<usize>,
    /// Display order of this node's edges; empty at the terminal node.
    pub order: DisplayOrder,
}

impl PathStep {
    pub fn is_terminal(&self) -> bool {
        self.chosen.is_none()
    }
}

/// Walk from the root, following the history's choice at every node (index 0
/// where it has none), until a terminal node is reached.
pub fn mainline_path(
    tree: &GameTree,
    history: &DeviationHistory,
) -> Result<Vec<PathStep>, TreeError> {
    let mut steps = Vec::new();
    let mut node_id = ROOT_NODE_ID;
    loop {
        let node = tree.get(node_id)?;
        if node.is_terminal() {
            steps.push(PathStep {
                node_id,
                chosen: None,
                order: DisplayOrder { order: Vec::new() },
            });
            return Ok(steps);
        }

        let chosen = history.choice_at(node_id);
        let order = display_order(node, chosen)?;
        let next = node.edges()[chosen].destination;
        steps.push(PathStep {
            node_id,
            chosen: Some(chosen),
            order,
        });
        node_id = next;
    }
}

/// Terminal node reached by following `history` from the root.
pub fn replay(tree: &GameTree, history: &DeviationHistory) -> Result<NodeId, TreeError> {
    let path = mainline_path(tree, history)?;
    Ok(path.last().map(|step| step.node_id).unwrap_or(ROOT_NODE_ID))
}

/// Whether the path implied by `history` passes through `target`.
pub fn reaches(
    tree: &GameTree,
    history: &DeviationHistory,
    target: NodeId,
) -> Result<bool, TreeError> {
    Ok(mainline_path(tree, history)?
        .iter()
        .any(|step| step.node_id == target))
}
