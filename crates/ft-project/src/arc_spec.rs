//! Compact command-line arc syntax: `from,to,capacity` with 1-based nodes.

use std::fmt;
use std::str::FromStr;

use ft_core::Real;

use crate::ProjectError;

/// One arc given on the command line, stored with 0-based node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub from: usize,
    pub to: usize,
    pub capacity: Real,
}

impl ArcSpec {
    pub fn as_triple(&self) -> (usize, usize, Real) {
        (self.from, self.to, self.capacity)
    }
}

impl FromStr for ArcSpec {
    type Err = ProjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = |reason: &str| ProjectError::ArcSyntax {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split(',').map(str::trim);
        let (Some(from), Some(to), Some(capacity), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(syntax("expected from,to,capacity"));
        };

        let node = |text: &str| -> Result<usize, ProjectError> {
            let n: usize = text
                .parse()
                .map_err(|_| syntax("node must be a positive integer"))?;
            n.checked_sub(1).ok_or_else(|| syntax("nodes are numbered from 1"))
        };
        let from = node(from)?;
        let to = node(to)?;

        let capacity: Real = capacity
            .parse()
            .map_err(|_| syntax("capacity must be a number"))?;

        Ok(Self { from, to, capacity })
    }
}

impl fmt::Display for ArcSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.from + 1, self.to + 1, self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_based_triple() {
        let spec: ArcSpec = "1,3,2.5".parse().unwrap();
        assert_eq!(spec.as_triple(), (0, 2, 2.5));
        assert_eq!(spec.to_string(), "1,3,2.5");
    }

    #[test]
    fn tolerates_spaces() {
        let spec: ArcSpec = " 2, 4 ,10".parse().unwrap();
        assert_eq!(spec.as_triple(), (1, 3, 10.0));
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "1,2", "1,2,3,4", "0,2,1", "a,2,1", "1,2,x", "-1,2,1"] {
            assert!(
                matches!(bad.parse::<ArcSpec>(), Err(ProjectError::ArcSyntax { .. })),
                "accepted {bad:?}"
            );
        }
    }
}
