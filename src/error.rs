//! Error types for reading PGN text, building the game tree and querying it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tree::NodeId;

/// Errors raised while turning a token stream into a [`crate::GameTree`].
///
/// Every variant is fatal: the builder never returns a partial tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `(` or `)` arrived before any move existed to branch from.
    #[error("“{token}” encountered at token {position} before any move")]
    VariationBeforeFirstMove { token: String, position: usize },

    /// A token that is neither a bracket nor usable movetext.
    #[error("token {position}, “{token}”, is not movetext")]
    InvalidToken { token: String, position: usize },

    /// A `)` with no open variation to close.
    #[error("unmatched “)” at token {position}")]
    UnmatchedCloseParen { position: usize },

    /// A `(` followed directly by another bracket instead of a move.
    #[error("variation opened at token {position} does not start with a move (found “{token}”)")]
    EmptyVariation { token: String, position: usize },

    /// Tokens ran out while variations were still open.
    #[error("movetext ended with {depth} unclosed variation(s)")]
    UnclosedVariation { depth: usize },

    /// The token stream contained no move at all.
    #[error("no moves found")]
    NoMoves,

    #[error(transparent)]
    Internal(#[from] TreeError),
}

/// Errors raised while acquiring and cleaning PGN text.
#[derive(Error, Debug)]
pub enum PgnError {
    #[error("could not find a PGN file at {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected excess right brace “}}” at index {index}")]
    UnexpectedRightBrace { index: usize },

    #[error("PGN ended with a still-unmatched left brace “{{” opened at index {index}")]
    UnmatchedLeftBrace { index: usize },

    #[error("no movetext found")]
    NoMovetext,
}

/// Internal-consistency errors from tree queries.
///
/// These indicate a caller defect (for example a node id kept from a different
/// tree), never a condition the user can fix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("node {0} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("choice {choice} is out of range for a node with {edge_count} edge(s)")]
    ChoiceOutOfRange { choice: usize, edge_count: usize },
}

/// Top-level error for the library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("PGN error: {0}")]
    Pgn(#[from] PgnError),

    #[error("PGN error: {0}")]
    Parse(#[from] ParseError),

    #[error("internal error: {0}")]
    Tree(#[from] TreeError),

    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;
