use crate::error::PgnError;

/// Removes PGN comments in a single left-to-right pass, one line at a time.
///
/// Brace comments may nest and span lines; inside one, `;` is plain text.
/// Outside braces, `;` drops the rest of its line, braces included. Indices
/// in errors are byte offsets into the full text fed so far, skipped lines
/// included.
#[derive(Debug, Default)]
pub struct CommentStripper {
    depth: usize,
    opened_at: usize,
    offset: usize,
    stripped: String,
}

impl CommentStripper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next line starts inside a brace comment.
    pub fn in_comment(&self) -> bool {
        self.depth > 0
    }

    /// Account for a line that is not part of the movetext.
    pub fn skip_line(&mut self, line: &str) {
        self.offset += line.len();
    }

    /// Strip one line, including its line terminator if any.
    pub fn feed_line(&mut self, line: &str) -> Result<(), PgnError> {
        let mut kept_from = if self.depth == 0 { Some(0) } else { None };

        for (i, c) in line.char_indices() {
            match (c, kept_from) {
                (';', Some(start)) => {
                    self.stripped.push_str(&line[start..i]);
                    kept_from = None;
                    break;
                }
                ('{', Some(start)) => {
                    self.stripped.push_str(&line[start..i]);
                    kept_from = None;
                    self.opened_at = self.offset + i;
                    self.depth = 1;
                }
                ('}', Some(_)) => {
                    return Err(PgnError::UnexpectedRightBrace {
                        index: self.offset + i,
                    });
                }
                ('{', None) => self.depth += 1,
                ('}', None) => {
                    self.depth -= 1;
                    if self.depth == 0 {
                        kept_from = Some(i + 1);
                    }
                }
                _ => {}
            }
        }

        if let Some(start) = kept_from {
            self.stripped.push_str(&line[start..]);
        } else if self.depth == 0 && line.ends_with('\n') {
            // a `;` comment swallowed the terminator
            self.stripped.push('\n');
        }
        self.offset += line.len();
        Ok(())
    }

    /// The text with comments removed.
    pub fn finish(self) -> Result<String, PgnError> {
        if self.depth > 0 {
            return Err(PgnError::UnmatchedLeftBrace {
                index: self.opened_at,
            });
        }
        Ok(self.stripped)
    }
}

/// Remove every brace and `;` comment from `text`.
pub fn strip_comments(text: &str) -> Result<String, PgnError> {
    let mut stripper = CommentStripper::new();
    for line in text.split_inclusive('\n') {
        stripper.feed_line(line)?;
    }
    stripper.finish()
}
