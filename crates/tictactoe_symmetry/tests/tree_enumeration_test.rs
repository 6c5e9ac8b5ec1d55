//! Golden regression values for the full enumeration.

use tictactoe_symmetry::{GameTree, Mark, PlyStats, TreeConfig};

fn full_run() -> GameTree {
    let mut tree = GameTree::new(TreeConfig::default());
    tree.run().expect("enumeration succeeds");
    tree
}

#[test]
fn test_full_enumeration_totals() {
    let mut tree = GameTree::new(TreeConfig::default());
    let summary = tree.run().expect("enumeration succeeds");

    assert_eq!(tree.turns().len(), 9);
    assert_eq!(*summary.total_boards(), 765);
    assert_eq!(*summary.terminal_boards(), 138);
    assert_eq!(*summary.x_wins(), 91);
    assert_eq!(*summary.o_wins(), 44);
    assert_eq!(*summary.draws(), 3);
    assert_eq!(*summary.total_moves(), 2096);
}

#[test]
fn test_per_ply_counts() {
    let mut tree = GameTree::new(TreeConfig::default());
    let summary = tree.run().expect("enumeration succeeds");

    let active: Vec<usize> = summary.plies().iter().map(|p| p.active_boards).collect();
    assert_eq!(active, vec![1, 3, 12, 38, 108, 153, 183, 95, 34]);

    let moves: Vec<usize> = summary.plies().iter().map(|p| p.moves).collect();
    assert_eq!(moves, vec![3, 12, 66, 198, 492, 584, 526, 181, 34]);

    assert_eq!(
        summary.plies().last(),
        Some(&PlyStats::new(9, Mark::X, 34, 34, 0))
    );
}

#[test]
fn test_boards_by_mark_count() {
    let tree = full_run();
    let mut by_marks = [0usize; 10];
    for board in tree.registry().boards() {
        by_marks[board.grid().mark_count()] += 1;
    }
    assert_eq!(by_marks, [1, 3, 12, 38, 108, 174, 204, 153, 57, 15]);
}

#[test]
fn test_marks_alternate_between_turns() {
    let tree = full_run();
    for (i, turn) in tree.turns().iter().enumerate() {
        assert_eq!(turn.number(), i + 1);
        let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(turn.mark(), expected);
        for &id in turn.boards() {
            let board = tree.registry().board(id).expect("registered");
            assert_eq!(board.grid().mark_count(), i);
            assert!(!board.is_terminal());
        }
    }
    assert!(tree.turns().last().expect("at least one turn").is_last());
}

#[test]
fn test_runs_are_reproducible_and_isolated() {
    let first = full_run();
    let second = full_run();

    assert_eq!(first.registry().len(), second.registry().len());
    for (a, b) in first.registry().boards().iter().zip(second.registry().boards()) {
        assert_eq!(a.index(), b.index());
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.moves(), b.moves());
    }
}

#[test]
fn test_move_indices_are_sequential() {
    let tree = full_run();
    let mut indices: Vec<usize> = tree
        .registry()
        .boards()
        .iter()
        .flat_map(|board| board.moves().iter().map(|m| *m.index()))
        .collect();
    indices.sort_unstable();
    assert_eq!(indices, (1..=2096).collect::<Vec<_>>());
}

#[test]
fn test_o_first_mirrors_counts() {
    let config = TreeConfig::new(Mark::O, 9).expect("valid config");
    let mut tree = GameTree::new(config);
    let summary = tree.run().expect("enumeration succeeds");
    assert_eq!(*summary.total_boards(), 765);
    assert_eq!(*summary.o_wins(), 91);
    assert_eq!(*summary.x_wins(), 44);
    assert_eq!(summary.boards_by_mark().get(&Mark::O), Some(&(3 + 38 + 174 + 153 + 15)));
    assert_eq!(summary.boards_by_mark().get(&Mark::X), Some(&(12 + 108 + 204 + 57)));
}

#[test]
fn test_summary_serializes() {
    let mut tree = GameTree::new(TreeConfig::new(Mark::X, 1).expect("valid config"));
    let summary = tree.run().expect("enumeration succeeds");
    let json = serde_json::to_value(&summary).expect("serializable");
    assert_eq!(json["total_boards"], 4);
    assert_eq!(json["plies"][0]["moves"], 3);
    assert_eq!(json["boards_by_mark"]["X"], 3);
}
