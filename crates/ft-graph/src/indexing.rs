//! Stable label indexing for boundary adapters.
//!
//! Provides a bidirectional mapping between external node labels and the
//! contiguous solver indices `0..N`, with the source pinned to 0 and the sink
//! to N-1.

use std::collections::{HashMap, HashSet};

use ft_core::Real;

use crate::error::{GraphError, GraphResult};

/// Index map from external labels to contiguous node indices.
///
/// Interior labels keep the order in which the caller enumerated them, so the
/// same input always produces the same indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMap {
    /// Contiguous list of labels (index -> label).
    labels: Vec<String>,

    /// Reverse lookup: label -> index.
    by_label: HashMap<String, usize>,
}

impl IndexMap {
    /// Assign indices: source -> 0, sink -> N-1, the rest -> 1..N-2 in input order.
    pub fn assign<I, S>(node_labels: I, source: &str, sink: &str) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if source == sink {
            return Err(GraphError::SameTerminal {
                label: source.to_string(),
            });
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut interior = Vec::new();
        let mut has_source = false;
        let mut has_sink = false;

        for label in node_labels {
            let label: String = label.into();
            if !seen.insert(label.clone()) {
                return Err(GraphError::DuplicateLabel { label });
            }
            if label == source {
                has_source = true;
            } else if label == sink {
                has_sink = true;
            } else {
                interior.push(label);
            }
        }

        if !has_source {
            return Err(GraphError::UnknownTerminal {
                label: source.to_string(),
            });
        }
        if !has_sink {
            return Err(GraphError::UnknownTerminal {
                label: sink.to_string(),
            });
        }

        let mut labels = Vec::with_capacity(interior.len() + 2);
        labels.push(source.to_string());
        labels.extend(interior);
        labels.push(sink.to_string());

        let by_label = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.clone(), i))
            .collect();

        Ok(Self { labels, by_label })
    }

    /// Number of nodes in the index.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Get the contiguous index for a label.
    pub fn index_of(&self, label: &str) -> GraphResult<usize> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Get the label for a contiguous index.
    pub fn label_of(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn source_label(&self) -> &str {
        &self.labels[0]
    }

    pub fn sink_label(&self) -> &str {
        &self.labels[self.labels.len() - 1]
    }

    /// All labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Translate labeled arcs into index triples ready for network construction.
    pub fn translate_arcs<'a, I>(&self, arcs: I) -> GraphResult<Vec<(usize, usize, Real)>>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Real)>,
    {
        arcs.into_iter()
            .map(|(from, to, capacity)| Ok((self.index_of(from)?, self.index_of(to)?, capacity)))
            .collect()
    }
}
