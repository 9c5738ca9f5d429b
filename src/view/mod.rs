pub mod format;
pub mod input;
pub mod table;

pub use format::Style;
pub use input::{describe_problems, parse_command, Command, InputProblem, Selection};
pub use table::{Selectable, SelectionTable, VariationsTable};
