//! Content-based hashing for run IDs.

use ft_project::schema::NetworkDef;
use sha2::{Digest, Sha256};

/// Length of a run ID: a hex-encoded SHA-256 digest.
pub const RUN_ID_LEN: usize = 64;

/// Whether `run_id` has the shape produced by [`compute_run_id`].
pub fn is_valid_run_id(run_id: &str) -> bool {
    run_id.len() == RUN_ID_LEN && run_id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

pub fn compute_run_id(network: &NetworkDef, record_steps: bool, solver_version: &str) -> String {
    let mut hasher = Sha256::new();

    let network_json = serde_json::to_string(network).unwrap_or_default();
    hasher.update(network_json.as_bytes());

    hasher.update([u8::from(record_steps)]);

    hasher.update(solver_version.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(capacity: f64) -> NetworkDef {
        NetworkDef::new("single", "s", "t").with_arc("s", "t", capacity)
    }

    #[test]
    fn hash_stability() {
        let hash1 = compute_run_id(&network(7.0), true, "v1");
        let hash2 = compute_run_id(&network(7.0), true, "v1");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
        assert!(is_valid_run_id(&hash1));
    }

    #[test]
    fn run_id_shape() {
        assert!(is_valid_run_id(&"0a".repeat(32)));
        assert!(!is_valid_run_id(&"0A".repeat(32)));
        assert!(!is_valid_run_id(&"0a".repeat(31)));
        assert!(!is_valid_run_id("../../etc"));
        assert!(!is_valid_run_id(""));
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let base = compute_run_id(&network(7.0), true, "v1");

        assert_ne!(base, compute_run_id(&network(8.0), true, "v1"));
        assert_ne!(base, compute_run_id(&network(7.0), false, "v1"));
        assert_ne!(base, compute_run_id(&network(7.0), true, "v2"));
    }
}
