//! LDIF record decoding for schema exports.
//!
//! This module decodes the textual LDIF stream produced by
//! `ldapsearch -b 'cn=schema,cn=config'` into a flat list of records, each a
//! distinguished name plus an attribute-to-values mapping. It handles:
//! - Comment lines (`#`) and the optional `version:` header
//! - Continuation-line folding (a line starting with a single space)
//! - Base64-encoded values (`attr:: <base64>`)
//! - Blank-line record separation
//!
//! Downstream schema processing only ever looks at the decoded value strings,
//! so all LDIF-level encoding concerns end here.
//!
//! # Examples
//!
//! ```
//! use oidmap::ldif::parse_records;
//!
//! # fn main() -> oidmap::Result<()> {
//! let records = parse_records("dn: cn=schema,cn=config\nobjectClass: olcSchemaConfig\n")?;
//! assert_eq!(records[0].dn, "cn=schema,cn=config");
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use indexmap::IndexMap;
use log::debug;

use crate::{Result, SchemaError};

/// One decoded LDIF record: a distinguished name plus its attribute values.
///
/// Attribute values keep their order of appearance within the record, and
/// attributes keep their order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Record {
    /// The record's distinguished name.
    pub dn: String,
    /// Attribute name to decoded value strings, in file order.
    pub attrs: IndexMap<String, Vec<String>>,
}

impl Record {
    /// Returns the values of an attribute, or `None` if the record has none.
    pub fn get(&self, attr: &str) -> Option<&[String]> {
        self.attrs.get(attr).map(|v| v.as_slice())
    }
}

/// Reads and decodes an LDIF file from disk.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let source = fs::read_to_string(path)?;
    parse_records(&source)
}

/// Decodes an LDIF stream into records.
///
/// # Errors
///
/// Returns `SchemaError::LdifFormat` if a record does not start with a `dn:`
/// line, a line has no colon separator, a base64 value fails to decode, or a
/// value uses the unsupported `:<` URL form.
pub fn parse_records(source: &str) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for logical in unfold(source) {
        let line = match logical {
            LogicalLine::Separator => {
                if let Some(record) = current.take() {
                    records.push(record);
                }
                continue;
            }
            LogicalLine::Line(line) => line,
        };

        let (name, value) = split_line(&line)?;
        if current.is_none() {
            if name == "version" {
                continue;
            }
            if name != "dn" {
                return Err(SchemaError::ldif_format(format!(
                    "Record doesn't start with dn: {}",
                    line
                )));
            }
            current = Some(Record { dn: value, ..Default::default() });
            continue;
        }
        // Unwrap is safe, current was just checked
        let record = current.as_mut().unwrap();
        record.attrs.entry(name).or_default().push(value);
    }
    if let Some(record) = current.take() {
        records.push(record);
    }

    debug!("Decoded {} LDIF records", records.len());
    Ok(records)
}

enum LogicalLine {
    Line(String),
    Separator,
}

/// Joins folded continuation lines and drops comments.
///
/// A line starting with a single space continues the previous logical line
/// (with the space removed); a continuation of a dropped comment line is
/// dropped with it. Blank lines become record separators.
fn unfold(source: &str) -> Vec<LogicalLine> {
    let mut logical: Vec<LogicalLine> = Vec::new();
    let mut in_comment = false;
    for raw in source.lines() {
        if let Some(rest) = raw.strip_prefix(' ') {
            if in_comment {
                continue;
            }
            if let Some(LogicalLine::Line(prev)) = logical.last_mut() {
                prev.push_str(rest);
            }
            continue;
        }
        in_comment = false;
        if raw.is_empty() {
            logical.push(LogicalLine::Separator);
        } else if raw.starts_with('#') {
            in_comment = true;
        } else {
            logical.push(LogicalLine::Line(raw.to_string()));
        }
    }
    logical
}

/// Splits one logical line into attribute name and decoded value.
fn split_line(line: &str) -> Result<(String, String)> {
    let (name, rest) = line.split_once(':').ok_or_else(|| {
        SchemaError::ldif_format(format!("Line has no attribute separator: {}", line))
    })?;

    if let Some(b64) = rest.strip_prefix(':') {
        let decoded = general_purpose::STANDARD
            .decode(b64.trim_start())
            .map_err(|e| SchemaError::ldif_format(format!("Bad base64 value in line {}: {}", line, e)))?;
        return Ok((name.to_string(), String::from_utf8(decoded)?));
    }
    if rest.starts_with('<') {
        return Err(SchemaError::ldif_format(format!(
            "URL-valued attributes are not supported: {}",
            line
        )));
    }
    let value = rest.strip_prefix(' ').unwrap_or(rest);
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_records() {
        let source = "\
version: 1
dn: cn=schema,cn=config
objectClass: olcSchemaConfig
cn: schema

dn: cn={0}core,cn=schema,cn=config
olcAttributeTypes: {0}( 1.2.3 NAME 'cn' )
olcAttributeTypes: {1}( 1.2.4 NAME 'sn' )
";
        let records = parse_records(source).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].dn, "cn=schema,cn=config");
        assert_eq!(records[0].get("cn"), Some(&["schema".to_string()][..]));
        assert_eq!(records[1].get("olcAttributeTypes").unwrap().len(), 2);
    }

    #[test]
    fn test_folded_lines() {
        let source = "dn: cn=sch
 ema,cn=config
olcAttributeTypes: ( 1.2.3 NAME
  'cn' )
";
        let records = parse_records(source).unwrap();
        assert_eq!(records[0].dn, "cn=schema,cn=config");
        assert_eq!(
            records[0].get("olcAttributeTypes"),
            Some(&["( 1.2.3 NAME 'cn' )".to_string()][..])
        );
    }

    #[test]
    fn test_base64_value() {
        // "cn=schema,cn=config" in base64
        let source = "dn:: Y249c2NoZW1hLGNuPWNvbmZpZw==\ncn: schema\n";
        let records = parse_records(source).unwrap();
        assert_eq!(records[0].dn, "cn=schema,cn=config");
    }

    #[test]
    fn test_comments_skipped() {
        let source = "# exported schema
# second comment line
dn: cn=schema,cn=config
cn: schema
";
        let records = parse_records(source).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("cn"), Some(&["schema".to_string()][..]));
    }

    #[test]
    fn test_record_must_start_with_dn() {
        let source = "cn: schema\n";
        assert!(parse_records(source).is_err());
    }

    #[test]
    fn test_url_value_rejected() {
        let source = "dn: cn=x\njpegPhoto:< file:///tmp/photo.jpg\n";
        assert!(parse_records(source).is_err());
    }
}
