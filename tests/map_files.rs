use adjacency_matrix_pathfinder::cost::summarize;
use adjacency_matrix_pathfinder::dijkstra::solve;
use adjacency_matrix_pathfinder::labels::render_path;
use adjacency_matrix_pathfinder::parser::{parse_map, parse_map_file};
use adjacency_matrix_pathfinder::Error;
use std::io::Write;

const SAMPLE_MAP: &str = "\
# Sample map
# source followed by (destination, weight) pairs
A B 40 C 15
B X 70
C B 20 D 90
D X 10
";

#[test]
fn sample_map_end_to_end() {
    let map = parse_map(SAMPLE_MAP).unwrap();
    assert_eq!(map.graph.num_vertices(), 5);

    let source = map.labels.index_of("A").unwrap();
    let result = solve(&map.graph, source).unwrap();
    let summary = summarize(&result, map.labels.terminal());

    // A -> C -> B -> X = 15 + 20 + 70 = 105, beating A -> B -> X = 110
    assert_eq!(summary.distance(), Some(105));
    assert_eq!(summary.cost(), 1);
    assert_eq!(render_path(&map.labels, summary.path().unwrap()), "A -> C -> B -> X");
    assert_eq!(
        summary.render(&map.labels),
        "A -> C -> B -> X\n\nThe total distance is 105 steps.\n1 potion will be needed."
    );
}

#[test]
fn unreachable_terminal_is_reported_not_raised() {
    let map = parse_map("A B 5\nB A 5\n").unwrap();
    let result = solve(&map.graph, 0).unwrap();
    let summary = summarize(&result, map.labels.terminal());
    assert_eq!(summary.cost(), 0);
    assert_eq!(
        summary.render(&map.labels),
        "There is no path from A to X\nNo potions required."
    );
}

#[test]
fn vertex_lines_without_edges_still_count() {
    let map = parse_map("A X 3\nB\nC\n").unwrap();
    assert_eq!(map.graph.num_vertices(), 4);
    assert_eq!(map.labels.index_of("X"), Some(3));
    assert_eq!(map.graph.weight(0, 3), Some(3));
}

#[test]
fn loads_map_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_MAP.as_bytes()).unwrap();

    let map = parse_map_file(file.path()).unwrap();
    assert_eq!(map.graph.num_edges(), 6);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_map_file(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn malformed_line_is_reported_with_its_number() {
    let err = parse_map("# header\nA B 4\nB X ten\n").unwrap_err();
    match err {
        Error::MalformedInput { line, reason } => {
            assert_eq!(line, 3);
            assert!(reason.contains("B X ten"), "{}", reason);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
