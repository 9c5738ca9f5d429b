use std::collections::BTreeMap;
use std::fmt;

use super::game_tree::GameTree;

const KEY_WIDTH: usize = 4;
const FREQ_WIDTH: usize = 11;
const DESCRIPTION_WIDTH: usize = 27;
const VALUE_WIDTH: usize = 5;

/// Size and shape of a game tree, measured over its lines.
///
/// A line is a terminal node. Its length is the terminal node's halfmove
/// number minus one, since that ply is never played. Its depth is the
/// number of deviations from the main line needed to reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTreeReport {
    pub number_of_nodes: usize,
    pub number_of_lines: usize,
    pub max_halfmove_length_of_a_line: u32,
    pub max_depth_of_a_line: u32,
    pub halfmove_length_histogram: BTreeMap<u32, usize>,
    pub depth_histogram: BTreeMap<u32, usize>,
}

impl GameTreeReport {
    pub fn from_tree(tree: &GameTree) -> Self {
        let terminal_ids = tree.terminal_ids();
        let mut report = GameTreeReport {
            number_of_nodes: tree.len(),
            number_of_lines: terminal_ids.len(),
            max_halfmove_length_of_a_line: 0,
            max_depth_of_a_line: 0,
            halfmove_length_histogram: BTreeMap::new(),
            depth_histogram: BTreeMap::new(),
        };

        for node in terminal_ids.iter().filter_map(|&id| tree.node(id)) {
            let depth = node.depth();
            report.max_depth_of_a_line = report.max_depth_of_a_line.max(depth);
            *report.depth_histogram.entry(depth).or_insert(0) += 1;

            let length = node.halfmove_number().saturating_sub(1);
            report.max_halfmove_length_of_a_line = report.max_halfmove_length_of_a_line.max(length);
            *report.halfmove_length_histogram.entry(length).or_insert(0) += 1;
        }
        report
    }
}

impl fmt::Display for GameTreeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SUMMARY OF STATISTICS FOR THIS GAME TREE")?;
        writeln!(f)?;
        let rows: [(&str, u64); 4] = [
            ("Number of lines: ", self.number_of_lines as u64),
            ("Number of positions: ", self.number_of_nodes as u64),
            ("Longest line (halfmoves): ", u64::from(self.max_halfmove_length_of_a_line)),
            ("Greatest depth: ", u64::from(self.max_depth_of_a_line)),
        ];
        for (description, value) in rows {
            writeln!(f, "{description:>DESCRIPTION_WIDTH$} {value:VALUE_WIDTH$}")?;
        }

        writeln!(f)?;
        writeln!(f, "(“Depth” of a line is the number of deviations from mainline")?;
        writeln!(f, "continuations required to arrive at the line’s terminal position.)")?;
        writeln!(f)?;
        writeln!(f, "DEPTH HISTOGRAM")?;
        writeln!(f, "Depth     Frequency")?;
        for (depth, freq) in &self.depth_histogram {
            writeln!(f, "{depth:KEY_WIDTH$}  {freq:FREQ_WIDTH$}")?;
        }

        writeln!(f)?;
        writeln!(f, "(The length of a line is the number of halfmoves from and")?;
        writeln!(f, "including White’s first move to the last move of the line.)")?;
        writeln!(f)?;
        writeln!(f, "HALFMOVE-LENGTH HISTOGRAM")?;
        writeln!(f, "Length     Frequency")?;
        for (length, freq) in &self.halfmove_length_histogram {
            writeln!(f, "{length:KEY_WIDTH$}  {freq:FREQ_WIDTH$}")?;
        }
        Ok(())
    }
}

/// Node-by-node listing of a tree, for small trees and debugging.
pub struct NodeReport<'a> {
    tree: &'a GameTree,
}

impl<'a> NodeReport<'a> {
    pub fn new(tree: &'a GameTree) -> Self {
        NodeReport { tree }
    }
}

impl fmt::Display for NodeReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NODE REPORT")?;
        writeln!(f)?;
        writeln!(f, "The halfmove number (“½#”) of a node is that of a move made from it.")?;
        writeln!(f, "Each edge is shown as (movetext, destination node).")?;
        writeln!(f)?;
        writeln!(f, "Node #   ½#   Depth  #edges   Edges")?;
        for (node_id, node) in self.tree.iter() {
            write!(
                f,
                "{:5}{:5}{:7}{:7}      ",
                node_id,
                node.halfmove_number(),
                node.depth(),
                node.number_of_edges()
            )?;
            for edge in node.edges() {
                write!(f, "({:5}, {:3}) ", edge.movetext, edge.destination)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
