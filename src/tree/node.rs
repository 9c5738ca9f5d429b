//! Game tree nodes and edges
//!
//! A node is a position; an edge is a move played from that position. Edge
//! index 0 at every node is the main line and never changes after the tree is
//! built.

use std::fmt;

/// Dense node identity; also the node's index in [`super::GameTree`].
pub type NodeId = usize;

/// Id of the initial position.
pub const ROOT_NODE_ID: NodeId = 0;

/// Edge index of the main line continuation at every node.
pub const MAINLINE_INDEX: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Side to move for a given ply; ply 1 is White's first move.
    pub fn from_halfmove(halfmove_number: u32) -> Self {
        if halfmove_number % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Full-move number of a ply: `(halfmove + 1) / 2`.
pub fn fullmove_number(halfmove_number: u32) -> u32 {
    (halfmove_number + 1) / 2
}

/// A move out of a node. The originating node is implicit (the owner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub movetext: String,
    pub destination: NodeId,
}

impl Edge {
    pub fn new(movetext: impl Into<String>, destination: NodeId) -> Self {
        Edge {
            movetext: movetext.into(),
            destination,
        }
    }
}

/// Where a node was reached from: the predecessor and the canonical index of
/// the edge taken there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub node_id: NodeId,
    pub choice_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) depth: u32,
    pub(crate) halfmove_number: u32,
    pub(crate) origin: Option<Origin>,
    pub(crate) edges: Vec<Edge>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Node {
            depth: 0,
            halfmove_number: 1,
            origin: None,
            edges: Vec::new(),
        }
    }

    pub(crate) fn new(depth: u32, halfmove_number: u32, origin: Origin) -> Self {
        Node {
            depth,
            halfmove_number,
            origin: Some(origin),
            edges: Vec::new(),
        }
    }

    /// Number of deviations from the main line on the path from the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Ply of the move that would be played from this node.
    pub fn halfmove_number(&self) -> u32 {
        self.halfmove_number
    }

    pub fn fullmove_number(&self) -> u32 {
        fullmove_number(self.halfmove_number)
    }

    /// Side to move at this node.
    pub fn color(&self) -> Color {
        Color::from_halfmove(self.halfmove_number)
    }

    /// `None` only for the root.
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    pub fn originating_node_id(&self) -> Option<NodeId> {
        self.origin.map(|o| o.node_id)
    }

    pub fn choice_index(&self) -> Option<usize> {
        self.origin.map(|o| o.choice_index)
    }

    pub fn is_root(&self) -> bool {
        self.origin.is_none()
    }

    /// Outgoing edges in discovery order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_terminal(&self) -> bool {
        self.edges.is_empty()
    }

    /// Appends an edge and returns its index.
    pub(crate) fn push_edge(&mut self, edge: Edge) -> usize {
        self.edges.push(edge);
        self.edges.len() - 1
    }
}
