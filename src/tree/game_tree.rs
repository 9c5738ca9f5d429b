use std::collections::BTreeSet;

use crate::error::TreeError;

use super::node::{Edge, Node, NodeId, Origin, ROOT_NODE_ID};

/// The canonical game tree.
///
/// Nodes are stored by id (ids are dense, so the id is the vector index). The
/// set of all ids and the set of nonterminal ids are maintained while the tree
/// is built; the terminal set is derived on request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    nodes: Vec<Node>,
    node_ids: BTreeSet<NodeId>,
    nonterminal_ids: BTreeSet<NodeId>,
}

impl GameTree {
    /// A tree holding only the initial position.
    pub(crate) fn with_root() -> Self {
        let mut node_ids = BTreeSet::new();
        node_ids.insert(ROOT_NODE_ID);
        GameTree {
            nodes: vec![Node::root()],
            node_ids,
            nonterminal_ids: BTreeSet::new(),
        }
    }

    /// Id the next created node will receive.
    pub(crate) fn next_id(&self) -> NodeId {
        self.nodes.len()
    }

    /// Appends `movetext` as a new edge at `from`, creates the destination
    /// node, and returns the destination's id.
    pub(crate) fn grow(
        &mut self,
        from: NodeId,
        movetext: &str,
        halfmove_number: u32,
    ) -> Result<NodeId, TreeError> {
        let destination = self.next_id();
        let parent = self
            .nodes
            .get_mut(from)
            .ok_or(TreeError::UnknownNode(from))?;
        let choice_index = parent.push_edge(Edge::new(movetext, destination));
        let depth = parent.depth + u32::from(choice_index != 0);
        self.nonterminal_ids.insert(from);

        let origin = Origin {
            node_id: from,
            choice_index,
        };
        self.nodes.push(Node::new(depth, halfmove_number, origin));
        self.node_ids.insert(destination);
        Ok(destination)
    }

    pub fn node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(node_id)
    }

    /// Like [`GameTree::node`], but a missing node is an error.
    pub fn get(&self, node_id: NodeId) -> Result<&Node, TreeError> {
        self.node(node_id).ok_or(TreeError::UnknownNode(node_id))
    }

    pub fn root(&self) -> &Node {
        &self.nodes[ROOT_NODE_ID]
    }

    pub fn contains(&self, node_id: NodeId) -> bool {
        node_id < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the initial position exists in every tree.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in id order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate()
    }

    pub fn node_ids(&self) -> &BTreeSet<NodeId> {
        &self.node_ids
    }

    pub fn nonterminal_ids(&self) -> &BTreeSet<NodeId> {
        &self.nonterminal_ids
    }

    pub fn terminal_ids(&self) -> BTreeSet<NodeId> {
        self.node_ids
            .difference(&self.nonterminal_ids)
            .copied()
            .collect()
    }
}
