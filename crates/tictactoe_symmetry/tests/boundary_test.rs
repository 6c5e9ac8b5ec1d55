//! Ingestion of grids and configuration from outside the crate.

use std::io::Write;
use tictactoe_symmetry::{
    BoardRegistry, Cell, ConfigError, Coordinates, Grid, GridError, Mark, TreeConfig,
};

#[test]
fn test_grid_deserializes_from_rows() {
    let json = r#"[["Empty", {"Marked": "X"}, "Empty"], ["Empty", "Empty", "Empty"], [{"Marked": "O"}, "Empty", "Empty"]]"#;
    let grid: Grid = serde_json::from_str(json).expect("well-formed grid");
    assert_eq!(grid, "_x_/___/o__".parse().expect("valid grid"));

    let back = serde_json::to_string(&grid).expect("serializable");
    let again: Grid = serde_json::from_str(&back).expect("round trip");
    assert_eq!(again, grid);
}

#[test]
fn test_malformed_grid_rejected() {
    let two_rows = r#"[["Empty", "Empty", "Empty"], ["Empty", "Empty", "Empty"]]"#;
    let err = serde_json::from_str::<Grid>(two_rows).expect_err("wrong shape");
    assert!(err.to_string().contains("Malformed grid"));

    let long_row = vec![vec![Cell::Empty; 4], vec![Cell::Empty; 3], vec![Cell::Empty; 3]];
    assert!(matches!(
        Grid::from_rows(&long_row),
        Err(GridError::MalformedInput(_))
    ));
}

#[test]
fn test_coordinates_out_of_bounds() {
    assert_eq!(
        Coordinates::new(1, 3),
        Err(GridError::OutOfBounds { row: 1, col: 3 })
    );
}

#[test]
fn test_placing_on_occupied_cell_fails() {
    let grid: Grid = "___/_x_/___".parse().expect("valid grid");
    let center = Coordinates::new(1, 1).expect("on grid");
    assert_eq!(
        grid.with_mark(center, Mark::O),
        Err(GridError::CellOccupied(center))
    );
}

#[test]
fn test_external_grid_joins_existing_class() {
    let mut registry = BoardRegistry::new();
    let root = registry.empty_board();
    registry.fill_possible_moves(root, Mark::X).expect("expands");

    let ingested: Grid = "___/___/x__".parse().expect("valid grid");
    let (id, transform) = registry.find(&ingested).expect("corner class registered");
    let board = registry.board(id).expect("registered");
    assert_eq!(transform.apply_to_grid(&ingested), *board.grid());
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "first_mark = \"O\"").expect("write");
    writeln!(file, "max_plies = 5").expect("write");

    let config = TreeConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.first_mark(), Mark::O);
    assert_eq!(*config.max_plies(), 5);
}

#[test]
fn test_config_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err: ConfigError =
        TreeConfig::from_file(dir.path().join("absent.toml")).expect_err("no such file");
    assert!(err.message.starts_with("Failed to read config file"));
}
