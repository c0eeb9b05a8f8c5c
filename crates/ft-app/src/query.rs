//! Query helpers for extracting data from loaded runs.

use ft_project::schema::NetworkDef;
use ft_results::{LabeledArc, LabeledSnapshot};

use crate::error::{AppError, AppResult};

/// Flow from `from` to `to` at every step, summing parallel arcs.
pub fn arc_flow_series(steps: &[LabeledSnapshot], from: &str, to: &str) -> AppResult<Vec<f64>> {
    let Some(first) = steps.first() else {
        return Ok(Vec::new());
    };
    if first.arcs_between(from, to).next().is_none() {
        return Err(AppError::InvalidInput(format!(
            "No arc from '{}' to '{}'",
            from, to
        )));
    }

    Ok(steps
        .iter()
        .map(|step| step.arcs_between(from, to).map(|a| a.flow).sum())
        .collect())
}

/// The network as it stands before solving: every arc at zero flow.
pub fn initial_snapshot(network: &NetworkDef) -> LabeledSnapshot {
    LabeledSnapshot {
        node_count: network.node_labels().len(),
        arcs: network
            .arcs
            .iter()
            .map(|a| LabeledArc {
                from: a.from.clone(),
                to: a.to.clone(),
                capacity: a.capacity,
                flow: 0.0,
            })
            .collect(),
    }
}

/// Arcs whose flow has reached their capacity.
pub fn saturated_arcs(snapshot: &LabeledSnapshot) -> Vec<&LabeledArc> {
    snapshot.arcs.iter().filter(|a| a.is_saturated()).collect()
}
