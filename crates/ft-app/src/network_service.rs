//! Network loading, validation and introspection.

use std::path::Path;

use ft_core::Real;
use ft_graph::{IndexMap, Network};
use ft_project::schema::NetworkDef;
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Summary of a network for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkSummary {
    pub name: String,
    pub source: String,
    pub sink: String,
    pub node_count: usize,
    pub arc_count: usize,
    pub total_capacity: Real,
}

/// A network file translated to solver indices.
#[derive(Debug, Clone)]
pub struct IndexedNetwork {
    pub labels: IndexMap,
    pub arcs: Vec<(usize, usize, Real)>,
}

impl IndexedNetwork {
    pub fn node_count(&self) -> usize {
        self.labels.node_count()
    }
}

/// Load and validate a YAML or JSON network file.
pub fn load_network(path: &Path) -> AppResult<NetworkDef> {
    if !path.exists() {
        return Err(AppError::NetworkFileMissing {
            path: path.to_path_buf(),
        });
    }
    let network = ft_project::load_path(path)?;
    debug!(path = %path.display(), name = %network.name, arcs = network.arcs.len(), "loaded network");
    Ok(network)
}

/// Assign indices: source to 0, sink to N-1, other labels in enumeration order.
pub fn index_network(network: &NetworkDef) -> AppResult<IndexedNetwork> {
    let labels = IndexMap::assign(network.node_labels(), &network.source, &network.sink)?;
    let arcs = labels.translate_arcs(network.labeled_arcs())?;
    Ok(IndexedNetwork { labels, arcs })
}

/// Full check: file-level rules, index assignment and network construction.
pub fn validate(network: &NetworkDef) -> AppResult<()> {
    ft_project::validate_network(network)?;
    let indexed = index_network(network)?;
    Network::from_arcs(indexed.node_count(), &indexed.arcs)?;
    Ok(())
}

pub fn summarize(network: &NetworkDef) -> NetworkSummary {
    NetworkSummary {
        name: network.name.clone(),
        source: network.source.clone(),
        sink: network.sink.clone(),
        node_count: network.node_labels().len(),
        arc_count: network.arcs.len(),
        total_capacity: network.arcs.iter().map(|a| a.capacity).sum(),
    }
}
