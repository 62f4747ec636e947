use crate::labels::VertexLabels;
use crate::{Error, Graph, Result, Weight};
use nom::{
    character::complete::{digit1, satisfy, space0, space1},
    combinator::{all_consuming, map_res, recognize},
    multi::many0,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};
use std::path::Path;
use tracing::{debug, info};

/// A loaded map: the graph plus the labels its vertices were named with
#[derive(Debug, Clone)]
pub struct MapDescription {
    pub graph: Graph,
    pub labels: VertexLabels,
}

/// One non-comment line before labels are resolved
#[derive(Debug, PartialEq)]
struct MapLine<'a> {
    number: usize,
    source: &'a str,
    edges: Vec<(&'a str, Weight)>,
}

/// Parse a single-letter vertex label
fn parse_label(input: &str) -> IResult<&str, &str> {
    recognize(satisfy(|c| c.is_ascii_uppercase()))(input)
}

/// Parse an unsigned edge weight
fn parse_weight(input: &str) -> IResult<&str, Weight> {
    map_res(digit1, |s: &str| s.parse::<Weight>())(input)
}

/// Parse a `destination weight` pair preceded by whitespace
fn parse_edge(input: &str) -> IResult<&str, (&str, Weight)> {
    preceded(space1, pair(parse_label, preceded(space1, parse_weight)))(input)
}

/// Parse a whole line: source label followed by any number of edges
fn parse_line(input: &str) -> IResult<&str, (&str, Vec<(&str, Weight)>)> {
    all_consuming(delimited(
        space0,
        tuple((parse_label, many0(parse_edge))),
        space0,
    ))(input)
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Tokenise every non-comment line, keeping 1-based line numbers for errors
fn parse_lines(input: &str) -> Result<Vec<MapLine<'_>>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(i, line)| {
            let number = i + 1;
            match parse_line(line) {
                Ok((_, (source, edges))) => Ok(MapLine {
                    number,
                    source,
                    edges,
                }),
                Err(e) => Err(Error::malformed(
                    number,
                    format!(
                        "expected `<label> [<label> <weight>]...`, got `{}` ({})",
                        line.trim(),
                        e
                    ),
                )),
            }
        })
        .collect()
}

/// Parse map text into a graph.
///
/// The graph has one vertex per non-comment line plus the terminal `X`.
pub fn parse_map(input: &str) -> Result<MapDescription> {
    let lines = parse_lines(input)?;
    if lines.is_empty() {
        return Err(Error::malformed(0, "map contains no vertex lines"));
    }

    let vertex_count = lines.len() + 1;
    let labels = VertexLabels::new(vertex_count).map_err(|_| {
        let excess = &lines[crate::labels::MAX_LABELLED_VERTICES - 1];
        Error::malformed(
            excess.number,
            format!(
                "too many vertex lines; at most {} are supported",
                crate::labels::MAX_LABELLED_VERTICES - 1
            ),
        )
    })?;
    let mut graph = Graph::new(vertex_count)?;

    for line in &lines {
        let source = resolve(&labels, line.source, line.number)?;
        for &(destination, weight) in &line.edges {
            let destination = resolve(&labels, destination, line.number)?;
            if weight == 0 {
                return Err(Error::malformed(
                    line.number,
                    "edge weights must be positive",
                ));
            }
            graph.add_edge(source, destination, weight)?;
        }
    }

    debug!(
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "parsed map"
    );
    Ok(MapDescription { graph, labels })
}

fn resolve(labels: &VertexLabels, label: &str, line: usize) -> Result<usize> {
    labels.index_of(label).ok_or_else(|| {
        Error::malformed(
            line,
            format!(
                "unknown vertex label `{}` for a map of {} vertices",
                label,
                labels.len()
            ),
        )
    })
}

/// Read and parse a map file
pub fn parse_map_file(path: &Path) -> Result<MapDescription> {
    let content = std::fs::read_to_string(path)?;
    info!(path = %path.display(), "loading map");
    parse_map(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_tokens() {
        let (_, (source, edges)) = parse_line("A B 10 X 25").unwrap();
        assert_eq!(source, "A");
        assert_eq!(edges, vec![("B", 10), ("X", 25)]);

        let (_, (source, edges)) = parse_line("\tC  ").unwrap();
        assert_eq!(source, "C");
        assert!(edges.is_empty());
    }

    #[test]
    fn test_parse_line_rejects_garbage() {
        assert!(parse_line("A B").is_err());
        assert!(parse_line("AB 5").is_err());
        assert!(parse_line("A B -5").is_err());
        assert!(parse_line("a B 5").is_err());
        assert!(parse_line("A B 5 C").is_err());
    }

    #[test]
    fn test_parse_map_with_comments() {
        let input = "# sample map\nA B 10 C 3\n\n# middle\nB X 95\nC B 2\n";
        let map = parse_map(input).unwrap();
        assert_eq!(map.graph.num_vertices(), 4);
        assert_eq!(map.labels.terminal(), 3);
        assert_eq!(map.graph.weight(0, 1), Some(10));
        assert_eq!(map.graph.weight(0, 2), Some(3));
        assert_eq!(map.graph.weight(1, 3), Some(95));
        assert_eq!(map.graph.weight(2, 1), Some(2));
        assert_eq!(map.graph.num_edges(), 4);
    }

    #[test]
    fn test_crlf_line_endings() {
        let map = parse_map("A X 4\r\n").unwrap();
        assert_eq!(map.graph.weight(0, 1), Some(4));
    }

    #[test]
    fn test_line_numbers_in_errors() {
        let err = parse_map("# header\nA B 1\nB X\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 3, .. }), "{:?}", err);
    }

    #[test]
    fn test_unknown_label() {
        // Two lines give three vertices: A, B and X. D does not exist.
        let err = parse_map("A D 1\nB X 1\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }), "{:?}", err);
    }

    #[test]
    fn test_zero_weight() {
        let err = parse_map("A X 0\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 1, .. }), "{:?}", err);
    }

    #[test]
    fn test_empty_map() {
        let err = parse_map("# only comments\n\n").unwrap_err();
        assert!(matches!(err, Error::MalformedInput { .. }));
    }

    #[test]
    fn test_too_many_lines() {
        let input: String = (0..24).map(|_| "A\n").collect();
        let err = parse_map(&input).unwrap_err();
        assert!(matches!(err, Error::MalformedInput { line: 24, .. }), "{:?}", err);
    }
}
