use std::collections::BTreeMap;
use std::io::{self, Write};

use tracing::debug;

use crate::error::{Result, TreeError};
use crate::tree::{
    fullmove_number, mainline_path, Color, DeviationHistory, DisplayOrder, GameTree, NodeId,
    PathStep,
};

use super::format::{alpha_label, Style, BLACK_MOVE_PREFIX, MOVE_ELLIPSIS};

const WELCOME_MESSAGE: &str = "Welcome to pgntree!";
const HEADER_ORNAMENT: &str = " ♕";

/// A node on the displayed line that the user may branch from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectable {
    pub node_id: NodeId,
    pub order: DisplayOrder,
}

impl Selectable {
    /// Number of alternatives shown next to the chosen move.
    pub fn alternatives(&self) -> usize {
        self.order.len().saturating_sub(1)
    }
}

/// Lookup from `(full-move number, side to move)` on the displayed line to the
/// node there, used to validate and resolve user commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTable {
    entries: BTreeMap<(u32, Color), Selectable>,
}

impl SelectionTable {
    pub fn get(&self, fullmove: u32, color: Color) -> Option<&Selectable> {
        self.entries.get(&(fullmove, color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(u32, Color), &Selectable)> {
        self.entries.iter()
    }

    /// One example command per side, taken from the first row offering an
    /// alternative for that side.
    pub fn examples(&self) -> Vec<String> {
        [Color::White, Color::Black]
            .into_iter()
            .filter_map(|side| {
                self.entries
                    .iter()
                    .find(|((_, color), entry)| *color == side && entry.alternatives() > 0)
                    .map(|((fullmove, color), _)| {
                        format!("{} {} a", fullmove, color.to_char().to_ascii_lowercase())
                    })
            })
            .collect()
    }
}

/// A movetext cell: a real move with its canonical index, or a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Cell<'a> {
    movetext: &'a str,
    original_index: Option<usize>,
}

impl Cell<'_> {
    fn ellipsis() -> Self {
        Cell {
            movetext: MOVE_ELLIPSIS,
            original_index: None,
        }
    }
}

/// Outcome of rendering one node of the path.
#[derive(Debug, PartialEq, Eq)]
enum NodeRender<'a> {
    /// The line ends here.
    Terminal,
    /// White's only move waits to share a row with Black's reply.
    CarryOver(Cell<'a>),
    /// A full row was written.
    Rendered,
}

/// State of one table rendering.
struct RenderSession<'a> {
    first_row_pending: bool,
    carry: Option<Cell<'a>>,
    selections: SelectionTable,
}

/// Renders the line implied by a deviation history, one row per full move,
/// with every alternative shown next to the move it replaces.
pub struct VariationsTable<'a> {
    tree: &'a GameTree,
    style: Style,
}

impl<'a> VariationsTable<'a> {
    pub fn new(tree: &'a GameTree) -> Self {
        VariationsTable {
            tree,
            style: Style::default(),
        }
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.style.color = color;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Banner naming the PGN, the target node and how it is reached.
    pub fn write_header<W: Write>(
        &self,
        out: &mut W,
        source_label: &str,
        target: NodeId,
        history: &DeviationHistory,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "{}", HEADER_ORNAMENT.repeat(40))?;
        writeln!(out)?;
        writeln!(out, "{WELCOME_MESSAGE}")?;
        writeln!(out, "PGN analyzed: {source_label}")?;
        writeln!(out, "Target node: {target}")?;
        writeln!(
            out,
            "Deviation history required to achieve the specified target node: {history}"
        )
    }

    /// Write the table and return the lookup for the rows shown.
    pub fn write<W: Write>(
        &self,
        out: &mut W,
        history: &DeviationHistory,
    ) -> Result<SelectionTable> {
        let path = mainline_path(self.tree, history)?;
        let mut session = RenderSession {
            first_row_pending: true,
            carry: None,
            selections: SelectionTable::default(),
        };

        for step in &path {
            match self.render_node(out, &mut session, step)? {
                NodeRender::Terminal => {
                    if let Some(white) = session.carry.take() {
                        let halfmove = self.tree.get(step.node_id)?.halfmove_number() - 1;
                        self.write_row(out, &mut session, halfmove, white, None, &[])?;
                    }
                    break;
                }
                NodeRender::CarryOver(white) => session.carry = Some(white),
                NodeRender::Rendered => session.carry = None,
            }
        }

        debug!(
            steps = path.len(),
            selectable = session.selections.len(),
            "rendered variations table"
        );
        Ok(session.selections)
    }

    fn render_node<W: Write>(
        &self,
        out: &mut W,
        session: &mut RenderSession<'a>,
        step: &PathStep,
    ) -> Result<NodeRender<'a>> {
        let node = self.tree.get(step.node_id)?;
        let Some(chosen) = step.chosen else {
            return Ok(NodeRender::Terminal);
        };

        let halfmove = node.halfmove_number();
        let color = node.color();
        session.selections.entries.insert(
            (node.fullmove_number(), color),
            Selectable {
                node_id: step.node_id,
                order: step.order.clone(),
            },
        );

        let cell = |index: usize| -> Option<Cell<'a>> {
            node.edge(index).map(|edge| Cell {
                movetext: edge.movetext.as_str(),
                original_index: Some(index),
            })
        };
        let main = cell(chosen).ok_or(TreeError::ChoiceOutOfRange {
            choice: chosen,
            edge_count: node.number_of_edges(),
        })?;
        let alternatives: Vec<Cell<'a>> = step
            .order
            .alternatives()
            .iter()
            .filter_map(|&index| cell(index))
            .collect();

        match color {
            Color::White if alternatives.is_empty() => Ok(NodeRender::CarryOver(main)),
            Color::White => {
                let deferred = Some(Cell::ellipsis());
                self.write_row(out, session, halfmove, main, deferred, &alternatives)?;
                Ok(NodeRender::Rendered)
            }
            Color::Black => {
                let white = session.carry.take().unwrap_or_else(Cell::ellipsis);
                self.write_row(out, session, halfmove, white, Some(main), &alternatives)?;
                Ok(NodeRender::Rendered)
            }
        }
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        session: &mut RenderSession<'_>,
        halfmove: u32,
        white: Cell<'_>,
        black: Option<Cell<'_>>,
        alternatives: &[Cell<'_>],
    ) -> io::Result<()> {
        if session.first_row_pending {
            writeln!(out)?;
            writeln!(out, "{}", self.style.heading("        MAIN LINE          ALTERNATIVES"))?;
            writeln!(out, "{}", self.style.heading("     WHITE      BLACK"))?;
            session.first_row_pending = false;
        }

        let black_to_move = Color::from_halfmove(halfmove) == Color::Black;
        let mut row = format!("{:3}. ", fullmove_number(halfmove));
        row.push_str(&self.style.movetext(white.movetext, white.original_index));
        if let Some(black) = black {
            row.push_str(&self.style.movetext(black.movetext, black.original_index));
        }
        for (i, alternative) in alternatives.iter().enumerate() {
            let movetext = if black_to_move {
                format!("{BLACK_MOVE_PREFIX}{}", alternative.movetext)
            } else {
                alternative.movetext.to_string()
            };
            row.push_str(&self.style.label(&alpha_label(i + 1)));
            row.push_str(": ");
            row.push_str(&self.style.movetext(&movetext, alternative.original_index));
        }
        writeln!(out, "{}", row.trim_end())
    }
}
