//! Network file validation logic.

use crate::schema::{NetworkDef, SCHEMA_VERSION};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network(network: &NetworkDef) -> Result<(), ValidationError> {
    if network.version == 0 || network.version > SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: network.version,
        });
    }

    if network.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: network.name.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    for (field, label) in [("source", &network.source), ("sink", &network.sink)] {
        if label.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: String::new(),
                reason: "must not be empty".to_string(),
            });
        }
    }

    if network.source == network.sink {
        return Err(ValidationError::InvalidValue {
            field: "sink".to_string(),
            value: network.sink.clone(),
            reason: "source and sink must differ".to_string(),
        });
    }

    let mut declared = HashSet::new();
    for node in &network.nodes {
        if node.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "nodes".to_string(),
                value: String::new(),
                reason: "node labels must not be empty".to_string(),
            });
        }
        if !declared.insert(node.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.clone(),
                context: "nodes".to_string(),
            });
        }
    }

    if !network.nodes.is_empty() {
        for (context, label) in [("source", &network.source), ("sink", &network.sink)] {
            if !declared.contains(label.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: label.clone(),
                    context: context.to_string(),
                });
            }
        }
    }

    for (i, arc) in network.arcs.iter().enumerate() {
        for (end, label) in [("from", &arc.from), ("to", &arc.to)] {
            if label.is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("arcs[{}].{}", i, end),
                    value: String::new(),
                    reason: "node labels must not be empty".to_string(),
                });
            }
            if !network.nodes.is_empty() && !declared.contains(label.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: label.clone(),
                    context: format!("arcs[{}].{}", i, end),
                });
            }
        }

        if !arc.capacity.is_finite() || arc.capacity < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: format!("arcs[{}].capacity", i),
                value: arc.capacity.to_string(),
                reason: "capacity must be finite and non-negative".to_string(),
            });
        }
    }

    Ok(())
}
