pub mod comments;
pub mod source;
pub mod tokenizer;

pub use comments::{strip_comments, CommentStripper};
pub use source::{extract_movetext, PgnSource, SAMPLE_PGN};
pub use tokenizer::{tokenize, Token};
