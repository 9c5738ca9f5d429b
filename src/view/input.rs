use std::fmt;

use crate::tree::{Color, NodeId};

use super::format::alpha_number;
use super::table::SelectionTable;

const STOP_COMMAND: &str = "stop";
const RESET_COMMAND: &str = "reset";
const REPORT_COMMAND: &str = "report";
const NODEREPORT_COMMAND: &str = "nodereport";

pub const PROMPT: &str = "\nEnter on one line, each separated by a space:\n\
(a) move number,\n\
(b) player color, ‘W’ or ‘B’, and\n\
(c) move choice (e.g., ‘a’, ‘b’, ‘c’, etc.),\n\
or 'reset', 'report', 'nodereport' or 'stop':";

/// A user request at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Stop,
    Reset,
    Report,
    NodeReport,
    Select(Selection),
}

/// A chosen alternative: the node it branches from and which of that node's
/// edges (canonical index) to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub node_id: NodeId,
    pub display_position: usize,
    pub original_index: usize,
}

/// Something wrong with a line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputProblem {
    Empty,
    WrongFieldCount(usize),
    NotNumeric(String),
    BadColor(String),
    NotSingleLetter(String),
    NotOnLine { fullmove: String, color: String },
    ChoiceUnavailable { choice: String, fullmove: String, color: String },
}

impl InputProblem {
    /// Whether this problem stands alone rather than being one of several
    /// field-level errors.
    fn is_structural(&self) -> bool {
        matches!(self, InputProblem::Empty | InputProblem::WrongFieldCount(_))
    }
}

impl fmt::Display for InputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputProblem::Empty => write!(f, "Empty response. Enter ‘stop’ if you want to stop."),
            InputProblem::WrongFieldCount(n) => {
                let noun = if *n == 1 { "field" } else { "fields" };
                write!(f, "I expected 3 fields. You entered {n} {noun}.")
            }
            InputProblem::NotNumeric(field) => {
                write!(f, "The first field, “{field}”, was not numeric, but should have been.")
            }
            InputProblem::BadColor(field) => {
                write!(f, "The second field, “{field}”, did not indicate a valid player color.")
            }
            InputProblem::NotSingleLetter(field) => {
                write!(f, "The third field, “{field}”, should have been a single letter.")
            }
            InputProblem::NotOnLine { fullmove, color } => write!(
                f,
                "The combination of fullmovenumber {fullmove} and player color {color} \
                 was not a valid combination here."
            ),
            InputProblem::ChoiceUnavailable {
                choice,
                fullmove,
                color,
            } => write!(
                f,
                "The move choice “{choice}” is not available for this combination of \
                 move # ({fullmove}) and color ({color})."
            ),
        }
    }
}

/// The lines to show the user for a rejected command.
pub fn describe_problems(problems: &[InputProblem]) -> Vec<String> {
    let mut lines = Vec::with_capacity(problems.len() + 2);
    if !problems.iter().any(InputProblem::is_structural) {
        lines.push(match problems.len() {
            1 => "There was one error in your input:".to_string(),
            n => format!("There were {n} errors in your input:"),
        });
    }
    lines.extend(problems.iter().map(ToString::to_string));
    lines.push("Please try again.".to_string());
    lines
}

fn parse_color(field: &str) -> Option<Color> {
    match field.to_lowercase().as_str() {
        "w" | "white" => Some(Color::White),
        "b" | "black" => Some(Color::Black),
        _ => None,
    }
}

fn parse_letter(field: &str) -> Option<usize> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => alpha_number(c),
        _ => None,
    }
}

/// Parse a line typed at the prompt against the rows currently displayed.
///
/// On failure every problem found is returned, not just the first.
pub fn parse_command(line: &str, table: &SelectionTable) -> Result<Command, Vec<InputProblem>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if let Some(first) = fields.first() {
        let first = first.to_lowercase();
        for (keyword, command) in [
            (STOP_COMMAND, Command::Stop),
            (RESET_COMMAND, Command::Reset),
            (REPORT_COMMAND, Command::Report),
            (NODEREPORT_COMMAND, Command::NodeReport),
        ] {
            if first.starts_with(keyword) {
                return Ok(command);
            }
        }
    }

    let &[fullmove_field, color_field, choice_field] = fields.as_slice() else {
        return Err(vec![match fields.len() {
            0 => InputProblem::Empty,
            n => InputProblem::WrongFieldCount(n),
        }]);
    };

    let mut problems = Vec::new();
    let numeric =
        !fullmove_field.is_empty() && fullmove_field.chars().all(|c| c.is_ascii_digit());
    if !numeric {
        problems.push(InputProblem::NotNumeric(fullmove_field.to_string()));
    }
    let color = parse_color(color_field);
    if color.is_none() {
        problems.push(InputProblem::BadColor(color_field.to_string()));
    }
    let choice = parse_letter(choice_field);
    if choice.is_none() {
        problems.push(InputProblem::NotSingleLetter(choice_field.to_string()));
    }

    let (true, Some(color)) = (numeric, color) else {
        return Err(problems);
    };
    // too many digits for any displayed move is simply not on the line
    let entry = fullmove_field
        .parse::<u32>()
        .ok()
        .and_then(|fullmove| table.get(fullmove, color));
    let Some(entry) = entry else {
        problems.push(InputProblem::NotOnLine {
            fullmove: fullmove_field.to_string(),
            color: color_field.to_string(),
        });
        return Err(problems);
    };
    let Some(choice) = choice else {
        return Err(problems);
    };

    match entry.order.original_index(choice) {
        Some(original_index) if choice <= entry.alternatives() => Ok(Command::Select(Selection {
            node_id: entry.node_id,
            display_position: choice,
            original_index,
        })),
        _ => {
            problems.push(InputProblem::ChoiceUnavailable {
                choice: choice_field.to_string(),
                fullmove: fullmove_field.to_string(),
                color: color_field.to_string(),
            });
            Err(problems)
        }
    }
}
