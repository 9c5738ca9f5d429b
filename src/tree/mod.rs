pub mod builder;
pub mod game_tree;
pub mod history;
pub mod node;
pub mod report;

pub use builder::{build, TreeBuilder};
pub use game_tree::GameTree;
pub use history::{
    deviation_history, display_order, mainline_path, reaches, replay, DeviationHistory,
    DisplayOrder, PathStep,
};
pub use node::{fullmove_number, Color, Edge, Node, NodeId, Origin, MAINLINE_INDEX, ROOT_NODE_ID};
pub use report::{GameTreeReport, NodeReport};
