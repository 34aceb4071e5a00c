//! Dotted-decimal OID representation and ordering.
//!
//! An [`Oid`] holds the numeric components of a fully resolved object
//! identifier (no symbolic parts left). Its `Ord` implementation is the
//! ordering the emitted mapping table is sorted by, and it is deliberately
//! not a plain string or sequence comparison — see [`Oid::cmp`].

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::{Result, SchemaError};

/// A fully resolved OID as a sequence of numeric components.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Oid {
    components: Vec<u64>,
}

impl Oid {
    /// Parses an OID from dotted notation (e.g. `"1.3.6.1.2.1"`).
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::InvalidOid` if the string is empty or any
    /// component is not a decimal integer.
    pub fn from_dotted(s: &str) -> Result<Self> {
        let components: std::result::Result<Vec<u64>, _> =
            s.split('.').map(|part| part.parse()).collect();
        match components {
            Ok(components) if !components.is_empty() => Ok(Self { components }),
            _ => Err(SchemaError::invalid_oid(s)),
        }
    }

    /// Renders the OID back to dotted notation.
    pub fn to_dotted(&self) -> String {
        self.to_string()
    }

    /// The numeric components, first arc first.
    pub fn components(&self) -> &[u64] {
        &self.components
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.components.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for component in iter {
                write!(f, ".{}", component)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Oid {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dotted(s)
    }
}

impl Ord for Oid {
    /// Total order used for the emitted mapping table.
    ///
    /// Components are compared numerically from the first position; the first
    /// differing pair decides (so `1.2.3` < `1.2.10`). When one OID is a
    /// strict prefix of the other, the *shorter* OID sorts after the longer
    /// one. This inverted tie-break matches the order downstream consumers
    /// already depend on and must not be changed to the conventional rule.
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.components.iter().zip(other.components.iter()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        other.components.len().cmp(&self.components.len())
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(s: &str) -> Oid {
        Oid::from_dotted(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(oid("1.3.6.1.2.1").to_dotted(), "1.3.6.1.2.1");
        assert_eq!(oid("0").components(), &[0]);
        assert!(Oid::from_dotted("").is_err());
        assert!(Oid::from_dotted("1.x.3").is_err());
        assert!(Oid::from_dotted("1..3").is_err());
    }

    #[test]
    fn test_numeric_component_order() {
        // Numeric, not lexical: "2" < "10"
        assert!(oid("1.2.3") < oid("1.2.10"));
        assert!(oid("1.2.9") < oid("1.2.10"));
        assert!(oid("1.10") > oid("1.9"));
    }

    #[test]
    fn test_prefix_sorts_after_extension() {
        // A strict prefix is greater than its longer extension.
        assert!(oid("1.2") > oid("1.2.3"));
        assert!(oid("1.2.3") < oid("1.2"));
        assert_eq!(oid("1.2.3").cmp(&oid("1.2.3")), Ordering::Equal);
    }

    #[test]
    fn test_sorted_sequence() {
        let mut oids = vec![oid("1.2"), oid("1.2.10"), oid("1.2.3"), oid("0.9")];
        oids.sort();
        let dotted: Vec<String> = oids.iter().map(Oid::to_string).collect();
        assert_eq!(dotted, vec!["0.9", "1.2.3", "1.2.10", "1.2"]);
    }
}
