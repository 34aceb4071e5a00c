//! Map-literal output formatting.
//!
//! Renders the sorted attribute list as one map-entry line per OID, ready to
//! paste into the consumer's source:
//!
//! ```text
//! "2.5.4.3" => ["cn", "commonName"],
//! ```
//!
//! The quote, arrow and bracket tokens are a formatting convention of the
//! consuming source language, carried in an [`EmitStyle`]; the one line per
//! attribute, OID-sorted structure is what downstream tooling relies on.

use std::io::Write;

use crate::Result;
use crate::schema::attribute::AttributeType;

/// Literal-syntax tokens used when rendering map entries.
#[derive(Debug, Clone)]
pub struct EmitStyle {
    /// Quote character wrapped around OID and name literals.
    pub quote: char,
    /// Association token between key and value.
    pub arrow: &'static str,
    /// Tokens opening and closing the name list.
    pub brackets: (char, char),
    /// Trailing separator after each entry.
    pub terminator: char,
}

impl Default for EmitStyle {
    fn default() -> Self {
        Self {
            quote: '"',
            arrow: " => ",
            brackets: ('[', ']'),
            terminator: ',',
        }
    }
}

/// Formats a single attribute as a map-entry line (without newline).
pub fn format_entry(attr: &AttributeType, style: &EmitStyle) -> String {
    let names = attr
        .names
        .iter()
        .map(|name| format!("{q}{name}{q}", q = style.quote))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{q}{oid}{q}{arrow}{open}{names}{close}{term}",
        q = style.quote,
        oid = attr.oid,
        arrow = style.arrow,
        open = style.brackets.0,
        close = style.brackets.1,
        term = style.terminator,
    )
}

/// Writes one map-entry line per attribute, in the given (already sorted)
/// order.
pub fn write_map_entries<W: Write>(
    out: &mut W,
    attributes: &[AttributeType],
    style: &EmitStyle,
) -> Result<()> {
    for attr in attributes {
        writeln!(out, "{}", format_entry(attr, style))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::oid::Oid;

    fn attr(oid: &str, names: &[&str]) -> AttributeType {
        AttributeType {
            oid: Oid::from_dotted(oid).unwrap(),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }

    #[test]
    fn test_single_name_entry() {
        let line = format_entry(&attr("2.5.4.3", &["cn"]), &EmitStyle::default());
        assert_eq!(line, r#""2.5.4.3" => ["cn"],"#);
    }

    #[test]
    fn test_multi_name_entry() {
        let line = format_entry(&attr("0.9.2342.19200300.100.1.1", &["uid", "userid"]), &EmitStyle::default());
        assert_eq!(line, r#""0.9.2342.19200300.100.1.1" => ["uid", "userid"],"#);
    }

    #[test]
    fn test_write_map_entries() {
        let attrs = vec![attr("1.2.3", &["a"]), attr("1.2.10", &["b"])];
        let mut out = Vec::new();
        write_map_entries(&mut out, &attrs, &EmitStyle::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\"1.2.3\" => [\"a\"],\n\"1.2.10\" => [\"b\"],\n"
        );
    }
}
