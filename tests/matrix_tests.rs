use pokedex_core::matrix::{compute_matrix, defending_combinations, render_csv, write_csv};
use pokedex_core::{compute_profile, DefendingTypes, ElementType};

#[test]
fn matrix_covers_all_combinations_once() {
    let combos = defending_combinations();
    assert_eq!(combos.len(), 18 + 18 * 17 / 2);
    for (i, a) in combos.iter().enumerate() {
        for b in &combos[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(combos[0], DefendingTypes::single(ElementType::Normal));
    assert_eq!(
        combos[18],
        DefendingTypes::dual(ElementType::Normal, ElementType::Fire)
    );
}

#[test]
fn parallel_rows_keep_combination_order() {
    let matrix = compute_matrix();
    let combos = defending_combinations();
    assert_eq!(matrix.len(), combos.len());
    for (row, combo) in matrix.iter().zip(&combos) {
        assert_eq!(row.defenders, *combo);
        assert_eq!(row.profile, compute_profile(*combo));
    }
}

#[test]
fn csv_has_header_and_one_line_per_row() {
    let matrix = compute_matrix();
    let csv = render_csv(&matrix);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), matrix.len() + 1);
    assert!(lines[0].starts_with("defenders,normal,fire,water"));
    assert!(lines[0].ends_with(",fairy"));
    assert_eq!(lines[1], "normal,1,1,1,1,1,1,2,1,1,1,1,1,1,0,1,1,1,1");

    let fire_flying = lines
        .iter()
        .find(|line| line.starts_with("fire/flying,"))
        .expect("fire/flying row");
    let cells: Vec<&str> = fire_flying.split(',').collect();
    assert_eq!(cells[1 + ElementType::Rock.index()], "4");
    assert_eq!(cells[1 + ElementType::Grass.index()], "0.25");
    assert_eq!(cells[1 + ElementType::Ground.index()], "0");
}

#[test]
fn write_csv_creates_file() {
    let path = std::env::temp_dir().join(format!("pokedex-matrix-{}.csv", std::process::id()));
    let matrix = compute_matrix();
    write_csv(&matrix, &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_csv(&matrix));
    std::fs::remove_file(&path).unwrap();
}
