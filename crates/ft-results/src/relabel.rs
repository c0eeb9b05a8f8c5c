//! Translate solver snapshots back to external labels.

use ft_graph::IndexMap;
use ft_solver::Snapshot;

use crate::types::{LabeledArc, LabeledSnapshot};
use crate::{ResultsError, ResultsResult};

pub fn relabel(snapshot: &Snapshot, labels: &IndexMap) -> ResultsResult<LabeledSnapshot> {
    let label = |index: usize| {
        labels
            .label_of(index)
            .map(str::to_string)
            .ok_or(ResultsError::UnknownIndex {
                index,
                node_count: labels.node_count(),
            })
    };

    let arcs = snapshot
        .arcs
        .iter()
        .map(|a| {
            Ok(LabeledArc {
                from: label(a.source)?,
                to: label(a.target)?,
                capacity: a.capacity,
                flow: a.flow,
            })
        })
        .collect::<ResultsResult<Vec<_>>>()?;

    Ok(LabeledSnapshot {
        node_count: snapshot.node_count,
        arcs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_solver::ArcRecord;

    #[test]
    fn relabels_endpoints() {
        let labels = IndexMap::assign(["x", "s", "t"], "s", "t").unwrap();
        let snap = Snapshot {
            node_count: 3,
            arcs: vec![ArcRecord {
                source: 0,
                target: 1,
                capacity: 3.0,
                flow: 1.0,
            }],
        };
        let labeled = relabel(&snap, &labels).unwrap();
        assert_eq!(labeled.arcs[0].from, "s");
        assert_eq!(labeled.arcs[0].to, "x");
        assert_eq!(labeled.arcs[0].flow, 1.0);
    }

    #[test]
    fn index_without_label_is_an_error() {
        let labels = IndexMap::assign(["s", "t"], "s", "t").unwrap();
        let snap = Snapshot {
            node_count: 3,
            arcs: vec![ArcRecord {
                source: 0,
                target: 2,
                capacity: 1.0,
                flow: 0.0,
            }],
        };
        assert!(matches!(
            relabel(&snap, &labels),
            Err(ResultsError::UnknownIndex { index: 2, .. })
        ));
    }
}
