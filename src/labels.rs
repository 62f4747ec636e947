use crate::{Error, Result, VertexId};
use itertools::Itertools;
use std::collections::HashMap;

/// Label of the highest-indexed vertex, whatever the graph size
pub const TERMINAL_LABEL: &str = "X";

/// Labels handed out in order to every vertex except the terminal one.
/// Stops before `X` so the mapping stays injective.
const ALPHABET: [&str; 23] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W",
];

/// Largest graph that can be labelled: the whole alphabet plus the terminal
pub const MAX_LABELLED_VERTICES: usize = ALPHABET.len() + 1;

/// Path separator used by [`render_path`]
pub const PATH_SEPARATOR: &str = " -> ";

/// Injective mapping between vertex ids and single-letter labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLabels {
    labels: Vec<&'static str>,
    index: HashMap<&'static str, VertexId>,
}

impl VertexLabels {
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 || vertex_count > MAX_LABELLED_VERTICES {
            return Err(Error::InvalidArgument(format!(
                "cannot label {} vertices; between 1 and {} are supported",
                vertex_count, MAX_LABELLED_VERTICES
            )));
        }

        let labels: Vec<&'static str> = ALPHABET[..vertex_count - 1]
            .iter()
            .copied()
            .chain(std::iter::once(TERMINAL_LABEL))
            .collect();
        let index = labels.iter().enumerate().map(|(i, &l)| (l, i)).collect();

        Ok(VertexLabels { labels, index })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, id: VertexId) -> Option<&'static str> {
        self.labels.get(id).copied()
    }

    pub fn index_of(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    /// Id of the vertex labelled `X`
    pub fn terminal(&self) -> VertexId {
        self.labels.len() - 1
    }

    /// Label for `id`, or a `#id` placeholder when it has none
    pub fn label_or_index(&self, id: VertexId) -> String {
        match self.label(id) {
            Some(l) => l.to_string(),
            None => format!("#{}", id),
        }
    }
}

/// Render a path as labels joined by an arrow, e.g. `A -> B -> X`
pub fn render_path(labels: &VertexLabels, path: &[VertexId]) -> String {
    path.iter()
        .map(|&v| labels.label_or_index(v))
        .join(PATH_SEPARATOR)
}
