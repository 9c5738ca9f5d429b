//! PGN variation tree explorer library
//!
//! Reads the first game of a PGN file, builds a tree of every line in it
//! (main line and nested variations), and re-displays that tree with any
//! chosen variation promoted to the main line.
//!
//! ```
//! let tree = pgntree::build(["e4", "(", "d4", ")", "e5"]).unwrap();
//! let history = pgntree::deviation_history(&tree, 2).unwrap();
//! assert_eq!(history.get(0), Some(1));
//! ```

pub mod error;
pub mod pgn;
pub mod session;
pub mod tree;
pub mod view;

pub use error::{Error, ParseError, PgnError, Result, TreeError};
pub use pgn::{extract_movetext, tokenize, PgnSource, Token};
pub use session::{Explorer, ExplorerSettings};
pub use tree::{
    build, deviation_history, display_order, mainline_path, Color, DeviationHistory, DisplayOrder,
    Edge, GameTree, GameTreeReport, Node, NodeId, Origin,
};

/// Read `source`, clean its first game and tokenize the movetext.
pub fn load_tokens(source: &PgnSource) -> Result<Vec<Token>> {
    let raw = source.read()?;
    let movetext = extract_movetext(&raw)?;
    Ok(tokenize(&movetext))
}

/// Read `source` all the way to a built game tree.
pub fn load_tree(source: &PgnSource) -> Result<GameTree> {
    let tokens = load_tokens(source)?;
    Ok(build(&tokens)?)
}
