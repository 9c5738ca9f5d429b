use pgntree::tree::{reaches, replay, GameTree, GameTreeReport};
use pgntree::{build, deviation_history, display_order, mainline_path, DeviationHistory, TreeError};

// Deviation history tests
// Re-rooting the display on a chosen node without touching the canonical tree

/// e4 e5 ( c5 Nf3 ( Nc3 ) d6 ) Nf3 Nc6
///
/// Node 1 offers e5 (node 2) or c5 (node 3); node 3 offers Nf3 (node 4) or
/// Nc3 (node 5). Terminals are 5, 6 and 8.
fn nested_tree() -> GameTree {
    build("e4 e5 ( c5 Nf3 ( Nc3 ) d6 ) Nf3 Nc6".split_whitespace()).expect("tree should build")
}

fn path_nodes(tree: &GameTree, history: &DeviationHistory) -> Vec<usize> {
    mainline_path(tree, history)
        .expect("path should be walkable")
        .iter()
        .map(|step| step.node_id)
        .collect()
}

/// Main line nodes need no deviations
#[test]
fn test_mainline_nodes_have_empty_history() {
    let tree = nested_tree();
    for node_id in [0, 1, 2, 7, 8] {
        let history = deviation_history(&tree, node_id).unwrap();
        assert!(history.is_empty(), "node {} should be on the main line", node_id);
    }
}

/// Every deviation on the way to a node is recorded
#[test]
fn test_history_records_each_deviation() {
    let tree = nested_tree();

    let history = deviation_history(&tree, 6).unwrap();
    assert_eq!(history.iter().collect::<Vec<_>>(), vec![(1, 1)]);

    let history = deviation_history(&tree, 5).unwrap();
    assert_eq!(history.iter().collect::<Vec<_>>(), vec![(1, 1), (3, 1)]);
    assert_eq!(history.to_string(), "{1: 1, 3: 1}");
    assert_eq!(history.choice_at(2), 0);
}

/// The history's length is the target node's depth
#[test]
fn test_history_length_matches_depth() {
    let tree = nested_tree();
    for (node_id, node) in tree.iter() {
        let history = deviation_history(&tree, node_id).unwrap();
        assert_eq!(history.len() as u32, node.depth(), "node {}", node_id);
    }
}

/// Display order puts the chosen edge first and keeps the rest in order
#[test]
fn test_display_order_promotes_choice() {
    let tree = build("e4 ( d4 ) ( c4 ) ( Nf3 ) e5".split_whitespace()).unwrap();
    let root = tree.root();

    let order = display_order(root, 2).unwrap();
    assert_eq!(order.indices(), &[2, 0, 1, 3]);
    assert_eq!(order.chosen(), Some(2));
    assert_eq!(order.alternatives(), &[0, 1, 3]);
    assert_eq!(order.original_index(1), Some(0));
    assert_eq!(order.display_position(3), Some(3));

    let unchanged = display_order(root, 0).unwrap();
    assert_eq!(unchanged.indices(), &[0, 1, 2, 3]);

    assert_eq!(
        display_order(root, 4).unwrap_err(),
        TreeError::ChoiceOutOfRange {
            choice: 4,
            edge_count: 4
        }
    );
}

/// Walking with a node's history passes through that node
#[test]
fn test_mainline_path_follows_history() {
    let tree = nested_tree();

    assert_eq!(path_nodes(&tree, &DeviationHistory::new()), vec![0, 1, 2, 7, 8]);

    let history = deviation_history(&tree, 3).unwrap();
    let path = mainline_path(&tree, &history).unwrap();
    assert_eq!(path.iter().map(|s| s.node_id).collect::<Vec<_>>(), vec![0, 1, 3, 4, 6]);
    assert_eq!(path[1].chosen, Some(1));
    assert_eq!(path[1].order.indices(), &[1, 0]);
    assert!(path[4].is_terminal());
    assert!(path[4].order.is_empty());
}

/// Every node is reached by replaying its own history
#[test]
fn test_every_node_reached_by_its_history() {
    let tree = nested_tree();
    for node_id in tree.node_ids().iter().copied() {
        let history = deviation_history(&tree, node_id).unwrap();
        assert!(reaches(&tree, &history, node_id).unwrap(), "node {}", node_id);
    }
    for terminal in tree.terminal_ids() {
        let history = deviation_history(&tree, terminal).unwrap();
        assert_eq!(replay(&tree, &history).unwrap(), terminal);
    }
}

/// Main line choices collected into a history are dropped
#[test]
fn test_history_from_iterator_skips_mainline() {
    let history: DeviationHistory = [(0, 0), (1, 1), (3, 0)].into_iter().collect();
    assert_eq!(history.len(), 1);
    assert_eq!(history.get(1), Some(1));
    assert_eq!(history.get(0), None);
}

/// Asking for a node that does not exist is an error, not a panic
#[test]
fn test_unknown_node() {
    let tree = nested_tree();
    assert_eq!(deviation_history(&tree, 99).unwrap_err(), TreeError::UnknownNode(99));

    let bogus: DeviationHistory = [(1, 5)].into_iter().collect();
    assert!(matches!(
        mainline_path(&tree, &bogus),
        Err(TreeError::ChoiceOutOfRange { choice: 5, .. })
    ));
}

/// Re-rooting never modifies the canonical tree
#[test]
fn test_rerooting_leaves_tree_unchanged() {
    let tree = nested_tree();
    let before = tree.clone();
    for node_id in tree.node_ids().iter().copied() {
        let history = deviation_history(&tree, node_id).unwrap();
        mainline_path(&tree, &history).unwrap();
    }
    assert_eq!(tree, before);
}

/// Statistics over the lines of the tree
#[test]
fn test_tree_report() {
    let tree = nested_tree();
    let report = GameTreeReport::from_tree(&tree);

    assert_eq!(report.number_of_nodes, 9);
    assert_eq!(report.number_of_lines, 3);
    assert_eq!(report.max_halfmove_length_of_a_line, 4);
    assert_eq!(report.max_depth_of_a_line, 2);
    assert_eq!(
        report.halfmove_length_histogram.into_iter().collect::<Vec<_>>(),
        vec![(3, 1), (4, 2)]
    );
    assert_eq!(
        report.depth_histogram.into_iter().collect::<Vec<_>>(),
        vec![(0, 1), (1, 1), (2, 1)]
    );
}

/// The sample's statistics
#[test]
fn test_sample_report() {
    let tree = pgntree::load_tree(&pgntree::PgnSource::Sample).unwrap();
    let report = GameTreeReport::from_tree(&tree);

    assert_eq!(report.number_of_nodes, 99);
    assert_eq!(report.number_of_lines, 19);
    assert_eq!(report.max_halfmove_length_of_a_line, 22);
    assert_eq!(report.max_depth_of_a_line, 3);
    assert_eq!(
        report.depth_histogram.into_iter().collect::<Vec<_>>(),
        vec![(0, 1), (1, 10), (2, 7), (3, 1)]
    );

    let text = GameTreeReport::from_tree(&tree).to_string();
    assert!(text.contains("SUMMARY OF STATISTICS FOR THIS GAME TREE"));
    assert!(text.contains("DEPTH HISTOGRAM"));
}
