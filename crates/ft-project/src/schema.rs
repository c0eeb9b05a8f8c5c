//! Network file schema definitions.

use std::collections::HashSet;

use ft_core::Real;
use serde::{Deserialize, Serialize};

/// Current network file version.
pub const SCHEMA_VERSION: u32 = 1;

/// Label given to node 0 when a network is built from bare indices.
pub const INDEXED_SOURCE_LABEL: &str = "s";
/// Label given to node N-1 when a network is built from bare indices.
pub const INDEXED_SINK_LABEL: &str = "t";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkDef {
    pub version: u32,
    pub name: String,
    pub source: String,
    pub sink: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub arcs: Vec<ArcDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArcDef {
    pub from: String,
    pub to: String,
    pub capacity: Real,
}

impl NetworkDef {
    pub fn new(name: impl Into<String>, source: impl Into<String>, sink: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            name: name.into(),
            source: source.into(),
            sink: sink.into(),
            nodes: Vec::new(),
            arcs: Vec::new(),
        }
    }

    pub fn with_arc(mut self, from: &str, to: &str, capacity: Real) -> Self {
        self.arcs.push(ArcDef {
            from: from.to_string(),
            to: to.to_string(),
            capacity,
        });
        self
    }

    /// Label a network given by bare indices: node 0 is `s`, node N-1 is `t`,
    /// every other node `i` is `v{i}`.
    pub fn from_indexed(
        name: impl Into<String>,
        node_count: usize,
        arcs: &[(usize, usize, Real)],
    ) -> Self {
        let label = |i: usize| indexed_label(i, node_count);
        Self {
            version: SCHEMA_VERSION,
            name: name.into(),
            source: INDEXED_SOURCE_LABEL.to_string(),
            sink: INDEXED_SINK_LABEL.to_string(),
            nodes: (0..node_count).map(label).collect(),
            arcs: arcs
                .iter()
                .map(|&(from, to, capacity)| ArcDef {
                    from: label(from),
                    to: label(to),
                    capacity,
                })
                .collect(),
        }
    }

    /// Node labels in enumeration order.
    ///
    /// The declared `nodes` list when present; otherwise labels in the order
    /// they first appear in `arcs`, followed by any terminal that no arc
    /// mentions.
    pub fn node_labels(&self) -> Vec<String> {
        if !self.nodes.is_empty() {
            return self.nodes.clone();
        }

        let mentioned = self
            .arcs
            .iter()
            .flat_map(|arc| [arc.from.as_str(), arc.to.as_str()])
            .chain([self.source.as_str(), self.sink.as_str()]);

        let mut seen = HashSet::new();
        let mut labels = Vec::new();
        for label in mentioned {
            if seen.insert(label) {
                labels.push(label.to_string());
            }
        }
        labels
    }

    /// `(from, to, capacity)` with borrowed labels, in file order.
    pub fn labeled_arcs(&self) -> impl Iterator<Item = (&str, &str, Real)> + '_ {
        self.arcs
            .iter()
            .map(|a| (a.from.as_str(), a.to.as_str(), a.capacity))
    }
}

fn indexed_label(index: usize, node_count: usize) -> String {
    if index == 0 {
        INDEXED_SOURCE_LABEL.to_string()
    } else if index + 1 == node_count {
        INDEXED_SINK_LABEL.to_string()
    } else {
        format!("v{}", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inferred_labels_keep_first_seen_order() {
        let net = NetworkDef::new("n", "s", "t")
            .with_arc("b", "t", 1.0)
            .with_arc("s", "a", 1.0)
            .with_arc("a", "b", 1.0);
        assert_eq!(net.node_labels(), vec!["b", "t", "s", "a"]);
    }

    #[test]
    fn isolated_terminals_are_still_listed() {
        let net = NetworkDef::new("n", "s", "t").with_arc("s", "a", 5.0);
        assert_eq!(net.node_labels(), vec!["s", "a", "t"]);
    }

    #[test]
    fn inferred_labels_scale_to_many_nodes() {
        let mut net = NetworkDef::new("chain", "n0", "n19999");
        for i in 0..19_999 {
            net = net.with_arc(&format!("n{}", i), &format!("n{}", i + 1), 1.0);
        }
        let labels = net.node_labels();
        assert_eq!(labels.len(), 20_000);
        assert_eq!(labels[0], "n0");
        assert_eq!(labels[19_999], "n19999");
    }

    #[test]
    fn declared_nodes_win() {
        let mut net = NetworkDef::new("n", "s", "t").with_arc("s", "t", 1.0);
        net.nodes = vec!["t".into(), "x".into(), "s".into()];
        assert_eq!(net.node_labels(), vec!["t", "x", "s"]);
    }

    #[test]
    fn indexed_labels() {
        let net = NetworkDef::from_indexed("inline", 4, &[(0, 1, 2.0), (2, 3, 1.0)]);
        assert_eq!(net.nodes, vec!["s", "v1", "v2", "t"]);
        assert_eq!(net.arcs[0].from, "s");
        assert_eq!(net.arcs[1].to, "t");
    }
}
