use pgntree::tree::{Edge, GameTree, Origin, ROOT_NODE_ID};
use pgntree::{build, ParseError};

// Tree building tests
// Golden traces for the single-pass builder plus every fatal token sequence

fn tree_of(movetext: &str) -> GameTree {
    build(movetext.split_whitespace()).expect("movetext should build into a tree")
}

fn edges(tree: &GameTree, node_id: usize) -> Vec<Edge> {
    tree.get(node_id).expect("node should exist").edges().to_vec()
}

/// A main line with no variations is a chain
#[test]
fn test_main_line_only() {
    let tree = tree_of("e4 e5 Nf3");

    assert_eq!(tree.len(), 4);
    assert_eq!(edges(&tree, 0), vec![Edge::new("e4", 1)]);
    assert_eq!(edges(&tree, 1), vec![Edge::new("e5", 2)]);
    assert_eq!(edges(&tree, 2), vec![Edge::new("Nf3", 3)]);

    for (node_id, expected_halfmove) in [(0, 1), (1, 2), (2, 3), (3, 4)] {
        let node = tree.get(node_id).unwrap();
        assert_eq!(node.halfmove_number(), expected_halfmove, "node {} halfmove", node_id);
        assert_eq!(node.depth(), 0, "node {} depth", node_id);
    }
    assert_eq!(tree.terminal_ids().into_iter().collect::<Vec<_>>(), vec![3]);
    assert!(tree.root().is_root());
}

/// A single-move variation replaces White's first move
#[test]
fn test_first_move_variation() {
    let tree = build(["e4", "(", "d4", ")", "e5"]).unwrap();

    assert_eq!(tree.len(), 4);
    assert_eq!(edges(&tree, 0), vec![Edge::new("e4", 1), Edge::new("d4", 2)]);
    assert_eq!(edges(&tree, 1), vec![Edge::new("e5", 3)]);

    let d4 = tree.get(2).unwrap();
    assert_eq!(d4.depth(), 1);
    assert_eq!(d4.halfmove_number(), 2);
    assert_eq!(
        d4.origin(),
        Some(Origin {
            node_id: ROOT_NODE_ID,
            choice_index: 1
        })
    );

    let e5 = tree.get(3).unwrap();
    assert_eq!(e5.halfmove_number(), 3);
    assert_eq!(e5.depth(), 0);
    assert_eq!(e5.originating_node_id(), Some(1));

    assert_eq!(tree.terminal_ids().into_iter().collect::<Vec<_>>(), vec![2, 3]);
    assert_eq!(tree.nonterminal_ids().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
}

/// Nested variations resume at the right node after closing
#[test]
fn test_nested_variation_resumes_parent_line() {
    let tree = tree_of("e4 e5 ( c5 Nf3 ( Nc3 ) d6 ) Nf3 Nc6");

    assert_eq!(tree.len(), 9);
    assert_eq!(edges(&tree, 1), vec![Edge::new("e5", 2), Edge::new("c5", 3)]);
    assert_eq!(edges(&tree, 3), vec![Edge::new("Nf3", 4), Edge::new("Nc3", 5)]);
    assert_eq!(edges(&tree, 4), vec![Edge::new("d6", 6)]);
    assert_eq!(edges(&tree, 2), vec![Edge::new("Nf3", 7)]);
    assert_eq!(edges(&tree, 7), vec![Edge::new("Nc6", 8)]);

    let expected = [
        // (node, halfmove, depth)
        (3, 3, 1),
        (4, 4, 1),
        (5, 4, 2),
        (6, 5, 1),
        (7, 4, 0),
        (8, 5, 0),
    ];
    for (node_id, halfmove, depth) in expected {
        let node = tree.get(node_id).unwrap();
        assert_eq!(node.halfmove_number(), halfmove, "node {} halfmove", node_id);
        assert_eq!(node.depth(), depth, "node {} depth", node_id);
    }
    assert_eq!(tree.terminal_ids().into_iter().collect::<Vec<_>>(), vec![5, 6, 8]);
}

/// Sibling variations at one level all branch from the same node
#[test]
fn test_sibling_variations() {
    let tree = tree_of("e4 ( d4 ) ( c4 ) e5");

    assert_eq!(
        edges(&tree, 0),
        vec![Edge::new("e4", 1), Edge::new("d4", 2), Edge::new("c4", 3)]
    );
    assert_eq!(edges(&tree, 1), vec![Edge::new("e5", 4)]);
    assert_eq!(tree.get(3).unwrap().depth(), 1);
    assert_eq!(tree.get(3).unwrap().choice_index(), Some(2));
    assert_eq!(tree.get(4).unwrap().halfmove_number(), 3);
}

/// Depth counts deviations from the main line, not parenthesis nesting
#[test]
fn test_depth_counts_deviations_not_nesting() {
    // The inner variation is an alternative to d4, which is itself an
    // alternative at the root: nesting level 2, but only one deviation.
    let tree = tree_of("e4 ( d4 ( c4 ) Nf6 )");

    assert_eq!(
        edges(&tree, 0),
        vec![Edge::new("e4", 1), Edge::new("d4", 2), Edge::new("c4", 3)]
    );
    assert_eq!(tree.get(3).unwrap().depth(), 1);
    assert_eq!(edges(&tree, 2), vec![Edge::new("Nf6", 4)]);
    assert_eq!(tree.get(4).unwrap().halfmove_number(), 3);
    assert_eq!(tree.get(4).unwrap().depth(), 1);
}

/// Move numbers produced by the tokenizer work as builder input
#[test]
fn test_build_accepts_tokens() {
    let tokens = pgntree::tokenize("1. e4 ( 1. d4 ) 1... e5 *");
    let tree = build(&tokens).unwrap();
    assert_eq!(tree.len(), 4);
    assert_eq!(edges(&tree, 0)[1].movetext, "d4");
}

/// Transpositions are not merged: each occurrence is its own node
#[test]
fn test_transpositions_stay_distinct() {
    // 1. Nf3 d5 2. d4 and 1. d4 d5 2. Nf3 reach the same position
    let tree = tree_of("Nf3 ( d4 d5 Nf3 ) d5 d4");

    assert_eq!(tree.len(), 7);
    assert_eq!(tree.terminal_ids().into_iter().collect::<Vec<_>>(), vec![4, 6]);
    assert_eq!(tree.get(4).unwrap().halfmove_number(), tree.get(6).unwrap().halfmove_number());
}

/// Variation markers before the first move are fatal
#[test]
fn test_variation_before_first_move() {
    assert_eq!(
        build(["(", "e4"]).unwrap_err(),
        ParseError::VariationBeforeFirstMove {
            token: "(".to_string(),
            position: 0
        }
    );
    assert_eq!(
        build([")", "e4"]).unwrap_err(),
        ParseError::VariationBeforeFirstMove {
            token: ")".to_string(),
            position: 0
        }
    );
}

/// Unbalanced and empty variations are fatal
#[test]
fn test_malformed_variations() {
    assert_eq!(
        build(["e4", ")"]).unwrap_err(),
        ParseError::UnmatchedCloseParen { position: 1 }
    );
    assert_eq!(
        build(["e4", "(", ")"]).unwrap_err(),
        ParseError::EmptyVariation {
            token: ")".to_string(),
            position: 2
        }
    );
    assert_eq!(
        build(["e4", "(", "(", "d4", ")", ")"]).unwrap_err(),
        ParseError::EmptyVariation {
            token: "(".to_string(),
            position: 2
        }
    );
    assert_eq!(
        build(["e4", "(", "d4"]).unwrap_err(),
        ParseError::UnclosedVariation { depth: 1 }
    );
}

/// Empty input and unusable tokens are rejected
#[test]
fn test_rejects_empty_and_invalid_tokens() {
    let empty: [&str; 0] = [];
    assert_eq!(build(empty).unwrap_err(), ParseError::NoMoves);
    assert_eq!(
        build(["e4", ""]).unwrap_err(),
        ParseError::InvalidToken {
            token: String::new(),
            position: 1
        }
    );
    assert_eq!(
        build(["e4", "e 5"]).unwrap_err(),
        ParseError::InvalidToken {
            token: "e 5".to_string(),
            position: 1
        }
    );
}

/// The incremental builder matches the one-shot build
#[test]
fn test_incremental_builder() {
    let mut builder = pgntree::tree::TreeBuilder::new();
    for (position, token) in ["e4", "(", "d4", ")", "e5"].into_iter().enumerate() {
        builder.feed(position, token).unwrap();
    }
    let tree = builder.finish().unwrap();
    assert_eq!(tree, build(["e4", "(", "d4", ")", "e5"]).unwrap());
}
