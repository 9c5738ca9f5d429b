//! Builds the game tree from a movetext token stream in a single pass.
//!
//! Only one line per nesting level is ever in progress (a level's variation
//! is closed before a sibling at that level opens), so the builder keeps one
//! [`LineState`] per level instead of a stack of whole lines.

use tracing::{debug, trace};

use crate::error::ParseError;
use crate::pgn::Token;

use super::game_tree::GameTree;
use super::node::{NodeId, ROOT_NODE_ID};

/// Per-nesting-level builder state.
#[derive(Debug, Clone, Copy)]
struct LineState {
    /// Halfmove number of the most recent move on this level's line.
    halfmove_number: u32,
    /// Node the next move on this level branches from.
    originating_node: NodeId,
    /// Destination of the last move on this level; every variation that
    /// closes back to this level resumes from here.
    latest_mainline_destination: NodeId,
}

/// What the previous token was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preceding {
    Start,
    Move,
    OpenParen,
    CloseParen,
}

/// Incremental form of [`build`], fed one token at a time.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: GameTree,
    levels: Vec<LineState>,
    level: usize,
    last_created: NodeId,
    preceding: Preceding,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            tree: GameTree::with_root(),
            levels: vec![LineState {
                halfmove_number: 1,
                originating_node: ROOT_NODE_ID,
                latest_mainline_destination: ROOT_NODE_ID,
            }],
            level: 0,
            last_created: ROOT_NODE_ID,
            preceding: Preceding::Start,
        }
    }

    fn has_moves(&self) -> bool {
        self.tree.len() > 1
    }

    /// Consumes one token; `position` is only used in error reports.
    pub fn feed(&mut self, position: usize, token: &str) -> Result<(), ParseError> {
        trace!(position, token, level = self.level, "token");
        match Token::classify(token) {
            Token::OpenParen => self.open_variation(position),
            Token::CloseParen => self.close_variation(position),
            Token::Move(movetext) => {
                if movetext.is_empty() || movetext.chars().any(char::is_whitespace) {
                    return Err(ParseError::InvalidToken {
                        token: movetext,
                        position,
                    });
                }
                self.play(&movetext)
            }
        }
    }

    fn open_variation(&mut self, position: usize) -> Result<(), ParseError> {
        if !self.has_moves() {
            return Err(ParseError::VariationBeforeFirstMove {
                token: "(".to_string(),
                position,
            });
        }
        if self.preceding == Preceding::OpenParen {
            return Err(ParseError::EmptyVariation {
                token: "(".to_string(),
                position,
            });
        }

        // The first move of a variation replaces the move just played on the
        // parent line: same ply, same originating node.
        let parent = self.levels[self.level];
        let line = LineState {
            // overwritten by the variation's first move
            latest_mainline_destination: parent.originating_node,
            ..parent
        };
        self.level += 1;
        if self.levels.len() > self.level {
            self.levels[self.level] = line;
        } else {
            self.levels.push(line);
        }
        self.preceding = Preceding::OpenParen;
        Ok(())
    }

    fn close_variation(&mut self, position: usize) -> Result<(), ParseError> {
        if !self.has_moves() {
            return Err(ParseError::VariationBeforeFirstMove {
                token: ")".to_string(),
                position,
            });
        }
        if self.preceding == Preceding::OpenParen {
            return Err(ParseError::EmptyVariation {
                token: ")".to_string(),
                position,
            });
        }
        if self.level == 0 {
            return Err(ParseError::UnmatchedCloseParen { position });
        }

        // A following "(" re-enters the same level as a sibling variation.
        self.level -= 1;
        self.preceding = Preceding::CloseParen;
        Ok(())
    }

    fn play(&mut self, movetext: &str) -> Result<(), ParseError> {
        let line = &mut self.levels[self.level];
        match self.preceding {
            Preceding::OpenParen => {}
            Preceding::CloseParen => {
                line.halfmove_number += 1;
                line.originating_node = line.latest_mainline_destination;
            }
            Preceding::Start | Preceding::Move => {
                line.halfmove_number += 1;
                line.originating_node = self.last_created;
            }
        }

        let destination = self
            .tree
            .grow(line.originating_node, movetext, line.halfmove_number)?;
        line.latest_mainline_destination = destination;

        self.last_created = destination;
        self.preceding = Preceding::Move;
        Ok(())
    }

    /// Ends the token stream and hands over the finished tree.
    pub fn finish(self) -> Result<GameTree, ParseError> {
        if self.level > 0 {
            return Err(ParseError::UnclosedVariation { depth: self.level });
        }
        if !self.has_moves() {
            return Err(ParseError::NoMoves);
        }
        Ok(self.tree)
    }
}

/// Build the canonical game tree from movetext tokens.
///
/// Accepts anything string-like, so both [`Token`]s from
/// [`crate::pgn::tokenize`] and plain `&str` slices work.
pub fn build<I, T>(tokens: I) -> Result<GameTree, ParseError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let mut builder = TreeBuilder::new();
    let mut count = 0;
    for (position, token) in tokens.into_iter().enumerate() {
        builder.feed(position, token.as_ref())?;
        count += 1;
    }
    let tree = builder.finish()?;
    debug!(
        tokens = count,
        nodes = tree.len(),
        lines = tree.terminal_ids().len(),
        "built game tree"
    );
    Ok(tree)
}
