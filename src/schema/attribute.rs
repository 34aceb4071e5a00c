//! Attribute type definition parsing.
//!
//! Extracts the (OID, names) pair from one raw `olcAttributeTypes` value,
//! e.g. `{3}( 2.5.4.3 NAME ( 'cn' 'commonName' ) DESC '...' SUP name )`.
//! Parsing is purely pattern based: the OID token is whatever immediately
//! precedes the `NAME` keyword, the names are the quoted token or
//! parenthesized group immediately after it, and every later clause (DESC,
//! SYNTAX, EQUALITY, SUP, ...) is ignored. Anything that does not match this
//! shape aborts the run.

use lazy_static::lazy_static;
use regex::Regex;

use crate::schema::macros::OidMacroTable;
use crate::schema::oid::Oid;
use crate::{Result, SchemaError};

lazy_static! {
    // Opening paren, OID token, NAME, then a single quoted name or a
    // parenthesized group of quoted names. Trailing clauses are ignored.
    static ref ATTRIBUTE_DEF: Regex =
        Regex::new(r"^.*?\(\s*(\S+)\s*NAME\s*(?:'([\w-]+)'|\(\s*(.+?)\s*\))").unwrap();
}

/// One attribute type extracted from the schema: its resolved OID and the
/// declared names, first name first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeType {
    /// Fully resolved OID (no symbolic components left).
    pub oid: Oid,
    /// Declared names in declaration order; never empty.
    pub names: Vec<String>,
}

/// Parses one raw `olcAttributeTypes` value into an [`AttributeType`],
/// expanding a `macroName:` OID prefix through the macro table.
///
/// # Errors
///
/// Returns `SchemaError::DefinitionSyntax` if the value does not match the
/// expected `( OID NAME ... )` shape, `SchemaError::MacroNotFound` if the OID
/// references an undefined macro, and `SchemaError::InvalidOid` if the
/// resolved OID is not dotted-decimal.
///
/// # Examples
///
/// ```
/// use oidmap::schema::{OidMacroTable, parse_attribute_type};
///
/// # fn main() -> oidmap::Result<()> {
/// let macros = OidMacroTable::default();
/// let attr = parse_attribute_type("( 2.5.4.3 NAME 'cn' DESC 'common name' )", &macros)?;
/// assert_eq!(attr.oid.to_dotted(), "2.5.4.3");
/// assert_eq!(attr.names, vec!["cn"]);
/// # Ok(())
/// # }
/// ```
pub fn parse_attribute_type(entry: &str, macros: &OidMacroTable) -> Result<AttributeType> {
    let caps = ATTRIBUTE_DEF
        .captures(entry)
        .ok_or_else(|| SchemaError::definition_syntax(entry))?;

    let resolved = macros.resolve(&caps[1])?;
    let oid = Oid::from_dotted(&resolved)?;

    let names = if let Some(single) = caps.get(2) {
        vec![single.as_str().to_string()]
    } else {
        caps[3]
            .split_whitespace()
            .map(|name| name.trim_matches('\'').to_string())
            .collect()
    };

    Ok(AttributeType { oid, names })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ldif::parse_records;

    fn macros(ldif: &str) -> OidMacroTable {
        let records = parse_records(ldif).unwrap();
        OidMacroTable::from_records(&records).unwrap()
    }

    #[test]
    fn test_single_name() {
        let attr =
            parse_attribute_type("( 1.2.3.4 NAME 'cn' DESC 'x' )", &OidMacroTable::default())
                .unwrap();
        assert_eq!(attr.oid.to_dotted(), "1.2.3.4");
        assert_eq!(attr.names, vec!["cn"]);
    }

    #[test]
    fn test_multiple_names() {
        let attr = parse_attribute_type(
            "( 1.2.3.5 NAME ( 'uid' 'userid' ) )",
            &OidMacroTable::default(),
        )
        .unwrap();
        assert_eq!(attr.oid.to_dotted(), "1.2.3.5");
        assert_eq!(attr.names, vec!["uid", "userid"]);
    }

    #[test]
    fn test_ordering_tag_and_trailing_clauses() {
        let attr = parse_attribute_type(
            "{12}( 2.5.4.3 NAME 'cn' SUP name EQUALITY caseIgnoreMatch SYNTAX 1.3.6.1.4.1.1466.115.121.1.15 )",
            &OidMacroTable::default(),
        )
        .unwrap();
        assert_eq!(attr.oid.to_dotted(), "2.5.4.3");
        assert_eq!(attr.names, vec!["cn"]);
    }

    #[test]
    fn test_macro_relative_oid() {
        let macros = macros("dn: cn=test\nolcObjectIdentifier: myOrg 1.3.6.1.4.1.9999\n");
        let attr = parse_attribute_type("( myOrg:1.1 NAME 'x' )", &macros).unwrap();
        assert_eq!(attr.oid.to_dotted(), "1.3.6.1.4.1.9999.1.1");
    }

    #[test]
    fn test_undefined_macro_fails() {
        let err = parse_attribute_type("( nope:1 NAME 'x' )", &OidMacroTable::default())
            .unwrap_err();
        assert!(err.is_macro_not_found());
    }

    #[test]
    fn test_shape_mismatch_is_fatal() {
        let err =
            parse_attribute_type("objectClass definition", &OidMacroTable::default()).unwrap_err();
        assert!(err.to_string().contains("objectClass definition"));
    }

    #[test]
    fn test_hyphenated_name() {
        let attr = parse_attribute_type(
            "( 0.9.2342.19200300.100.1.25 NAME 'domain-component' )",
            &OidMacroTable::default(),
        )
        .unwrap();
        assert_eq!(attr.names, vec!["domain-component"]);
    }
}
