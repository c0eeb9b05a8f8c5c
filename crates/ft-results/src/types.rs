//! Result data types.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

pub type RunId = String;

/// Metadata written alongside every stored run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub network_name: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub max_flow: f64,
    pub step_count: usize,
    pub solver_version: String,
    pub record_steps: bool,
    /// Node labels in solver index order (source first, sink last).
    #[serde(default)]
    pub nodes: Vec<String>,
}

impl RunManifest {
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// One arc of a snapshot, identified by node labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledArc {
    pub from: String,
    pub to: String,
    pub capacity: f64,
    pub flow: f64,
}

impl LabeledArc {
    pub fn is_saturated(&self) -> bool {
        self.capacity > 0.0 && self.flow >= self.capacity
    }
}

/// A snapshot with node indices replaced by labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledSnapshot {
    pub node_count: usize,
    pub arcs: Vec<LabeledArc>,
}

impl LabeledSnapshot {
    /// Arcs running from `from` to `to`, in arc order.
    pub fn arcs_between<'a>(
        &'a self,
        from: &'a str,
        to: &'a str,
    ) -> impl Iterator<Item = &'a LabeledArc> + 'a {
        self.arcs
            .iter()
            .filter(move |a| a.from == from && a.to == to)
    }

    /// Net flow leaving `node`.
    pub fn net_outflow(&self, node: &str) -> f64 {
        self.arcs
            .iter()
            .map(|a| {
                let mut net = 0.0;
                if a.from == node {
                    net += a.flow;
                }
                if a.to == node {
                    net -= a.flow;
                }
                net
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(from: &str, to: &str, capacity: f64, flow: f64) -> LabeledArc {
        LabeledArc {
            from: from.into(),
            to: to.into(),
            capacity,
            flow,
        }
    }

    #[test]
    fn snapshot_helpers() {
        let snap = LabeledSnapshot {
            node_count: 3,
            arcs: vec![arc("s", "a", 4.0, 2.0), arc("a", "t", 2.0, 2.0), arc("s", "a", 1.0, 0.0)],
        };
        assert_eq!(snap.arcs_between("s", "a").count(), 2);
        assert_eq!(snap.net_outflow("s"), 2.0);
        assert_eq!(snap.net_outflow("a"), 0.0);
        assert!(snap.arcs[1].is_saturated());
        assert!(!snap.arcs[2].is_saturated());
    }

    #[test]
    fn manifest_timestamp_parses() {
        let manifest = RunManifest {
            run_id: "abc".into(),
            network_name: "n".into(),
            timestamp: "2026-01-02T03:04:05+00:00".into(),
            max_flow: 1.0,
            step_count: 1,
            solver_version: "0.1.0".into(),
            record_steps: true,
            nodes: vec![],
        };
        assert!(manifest.created_at().is_some());
    }
}
