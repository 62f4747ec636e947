use crate::dijkstra::{reconstruct_path, ShortestPathResult};
use crate::labels::{render_path, VertexLabels};
use crate::VertexId;

/// Distance that can be covered without spending any resource
pub const FREE_DISTANCE: u64 = 100;

/// Distance covered by one resource unit beyond [`FREE_DISTANCE`]
pub const DISTANCE_PER_UNIT: u64 = 50;

/// Calculate resource cost for a path length: one unit per started 50 steps beyond 100
pub fn resource_cost(distance: u64) -> u64 {
    distance.saturating_sub(FREE_DISTANCE).div_ceil(DISTANCE_PER_UNIT)
}

/// Outcome of a solve, seen from one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Reachable {
        distance: u64,
        cost: u64,
        path: Vec<VertexId>,
    },
    Unreachable {
        source: VertexId,
        destination: VertexId,
    },
}

impl Summary {
    pub fn is_reachable(&self) -> bool {
        matches!(self, Summary::Reachable { .. })
    }

    pub fn distance(&self) -> Option<u64> {
        match self {
            Summary::Reachable { distance, .. } => Some(*distance),
            Summary::Unreachable { .. } => None,
        }
    }

    pub fn cost(&self) -> u64 {
        match self {
            Summary::Reachable { cost, .. } => *cost,
            Summary::Unreachable { .. } => 0,
        }
    }

    pub fn path(&self) -> Option<&[VertexId]> {
        match self {
            Summary::Reachable { path, .. } => Some(path),
            Summary::Unreachable { .. } => None,
        }
    }

    /// Human-readable report using `labels` for vertex names
    pub fn render(&self, labels: &VertexLabels) -> String {
        match self {
            Summary::Reachable {
                distance,
                cost,
                path,
            } => {
                let mut out = render_path(labels, path);
                out.push_str(&format!("\n\nThe total distance is {} steps.\n", distance));
                out.push_str(&cost_line(*cost));
                out
            }
            Summary::Unreachable {
                source,
                destination,
            } => format!(
                "There is no path from {} to {}\n{}",
                labels.label_or_index(*source),
                labels.label_or_index(*destination),
                cost_line(0)
            ),
        }
    }
}

fn cost_line(cost: u64) -> String {
    match cost {
        0 => "No potions required.".to_string(),
        1 => "1 potion will be needed.".to_string(),
        n => format!("{} potions will be needed.", n),
    }
}

/// Summarize the route from the solved source to `destination`
pub fn summarize(result: &ShortestPathResult, destination: VertexId) -> Summary {
    match (result.distance_to(destination).finite(), reconstruct_path(result, destination)) {
        (Some(distance), Some(path)) => Summary::Reachable {
            distance,
            cost: resource_cost(distance),
            path,
        },
        _ => Summary::Unreachable {
            source: result.source(),
            destination,
        },
    }
}
