use std::fmt;

/// A movetext token: a bracket or a single move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    OpenParen,
    CloseParen,
    Move(String),
}

impl Token {
    /// Classifies one whitespace-free piece without stripping anything.
    pub fn classify(piece: &str) -> Self {
        match piece {
            "(" => Token::OpenParen,
            ")" => Token::CloseParen,
            other => Token::Move(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Move(movetext) => movetext,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Token::Move(_))
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split cleaned movetext into tokens.
///
/// Move-number indications (`12.`, `12...`) and anything else before the
/// first letter of a piece are removed; pieces left empty (standalone move
/// numbers, result markers, NAGs) are dropped.
pub fn tokenize(movetext: &str) -> Vec<Token> {
    movetext
        .split_whitespace()
        .filter_map(|piece| match piece {
            "(" => Some(Token::OpenParen),
            ")" => Some(Token::CloseParen),
            _ => {
                let stripped = strip_move_number(piece);
                (!stripped.is_empty()).then(|| Token::Move(stripped.to_string()))
            }
        })
        .collect()
}

/// Drops the leading run of characters that are neither ASCII letters nor
/// parentheses.
fn strip_move_number(piece: &str) -> &str {
    piece.trim_start_matches(|c: char| !(c.is_ascii_alphabetic() || c == '(' || c == ')'))
}
