//! The interactive exploration loop.
//!
//! Each round shows the line through the current target node, reads one
//! command and acts on it. Reader and writer are generic so the loop can be
//! scripted.

use std::io::{BufRead, Write};

use crossterm::{cursor, execute, terminal};
use tracing::{debug, info, warn};

use crate::error::{Result, TreeError};
use crate::tree::{deviation_history, GameTree, GameTreeReport, NodeId, NodeReport, ROOT_NODE_ID};
use crate::view::{
    describe_problems, input, parse_command, Command, SelectionTable, Style, VariationsTable,
};

/// Presentation settings for an exploration session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerSettings {
    pub color: bool,
    pub clear_screen: bool,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        ExplorerSettings {
            color: true,
            clear_screen: true,
        }
    }
}

impl ExplorerSettings {
    /// No color, no screen clearing; for scripted sessions and pipes.
    pub fn plain() -> Self {
        ExplorerSettings {
            color: false,
            clear_screen: false,
        }
    }

    fn style(&self) -> Style {
        Style { color: self.color }
    }
}

pub struct Explorer<R, W> {
    tree: GameTree,
    source_label: String,
    settings: ExplorerSettings,
    input: R,
    output: W,
    target: NodeId,
}

impl<R: BufRead, W: Write> Explorer<R, W> {
    pub fn new(
        tree: GameTree,
        source_label: impl Into<String>,
        settings: ExplorerSettings,
        input: R,
        output: W,
    ) -> Self {
        Explorer {
            tree,
            source_label: source_label.into(),
            settings,
            input,
            output,
            target: ROOT_NODE_ID,
        }
    }

    /// Node whose line is currently displayed.
    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `stop` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let selections = self.render()?;
            let Some(command) = self.read_command(&selections)? else {
                info!("input closed, leaving");
                return Ok(());
            };
            debug!(?command, target = self.target, "command");

            match command {
                Command::Stop => {
                    writeln!(self.output, "You have told me to stop 🛑. I obey.")?;
                    return Ok(());
                }
                Command::Reset => {
                    self.target = ROOT_NODE_ID;
                    writeln!(self.output, "Tree reset to original starting point.")?;
                }
                Command::Report => {
                    self.clear_screen()?;
                    let report = GameTreeReport::from_tree(&self.tree);
                    writeln!(self.output)?;
                    write!(self.output, "{report}")?;
                    self.pause()?;
                }
                Command::NodeReport => {
                    self.clear_screen()?;
                    writeln!(self.output)?;
                    write!(self.output, "{}", NodeReport::new(&self.tree))?;
                    self.pause()?;
                }
                Command::Select(selection) => {
                    let node = self.tree.get(selection.node_id)?;
                    let edge = node
                        .edge(selection.original_index)
                        .ok_or(TreeError::ChoiceOutOfRange {
                            choice: selection.original_index,
                            edge_count: node.number_of_edges(),
                        })?;
                    self.target = edge.destination;
                }
            }
        }
    }

    /// Show the header and the table for the current target.
    pub fn render(&mut self) -> Result<SelectionTable> {
        let history = deviation_history(&self.tree, self.target)?;
        self.clear_screen()?;

        let table = VariationsTable::new(&self.tree).with_style(self.settings.style());
        table.write_header(&mut self.output, &self.source_label, self.target, &history)?;
        table.write(&mut self.output, &history)
    }

    /// Prompt until a valid command arrives; `None` once input is exhausted.
    fn read_command(&mut self, selections: &SelectionTable) -> Result<Option<Command>> {
        loop {
            writeln!(self.output, "{}", input::PROMPT)?;
            let examples = selections.examples();
            if !examples.is_empty() {
                writeln!(self.output, "(For example: {})", examples.join(" or "))?;
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_command(&line, selections) {
                Ok(command) => return Ok(Some(command)),
                Err(problems) => {
                    warn!(input = line.trim(), problems = problems.len(), "rejected command");
                    let style = self.settings.style();
                    for message in describe_problems(&problems) {
                        writeln!(self.output, "{}", style.error(&message))?;
                    }
                }
            }
        }
    }

    fn pause(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Press Enter to continue.")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        if self.settings.clear_screen {
            execute!(self.output, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
        }
        Ok(())
    }
}
