//! Schema extraction pipeline.
//!
//! Ties the pieces together: decode the LDIF records, build the OID macro
//! table, parse every `olcAttributeTypes` value, drop the Private Enterprise
//! arc, dedup by OID and hand back the entries sorted by the [`Oid`] order.
//!
//! # Examples
//!
//! ```no_run
//! use oidmap::schema::SchemaExtractor;
//!
//! # fn main() -> oidmap::Result<()> {
//! let extractor = SchemaExtractor::from_path("schema.ldif")?;
//! for attr in extractor.attributes()? {
//!     println!("{} {:?}", attr.oid, attr.names);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use log::debug;

use crate::ldif::{self, Record};
use crate::schema::attribute::{AttributeType, parse_attribute_type};
use crate::schema::macros::OidMacroTable;
use crate::schema::oid::Oid;
use crate::Result;

/// LDIF attribute carrying attribute type definitions.
pub const ATTRIBUTE_TYPES_ATTR: &str = "olcAttributeTypes";

/// OIDs under the IANA Private Enterprise arc are organization-specific and
/// excluded from the generated table.
pub const PRIVATE_ENTERPRISE_ARC: &str = "1.3.6.1.4.1";

/// Extracts attribute OID/name pairs from a decoded schema export.
///
/// The macro table is built once, from the full record list, before any
/// attribute definition is parsed; attribute parsing only reads it.
pub struct SchemaExtractor {
    records: Vec<Record>,
    macros: OidMacroTable,
}

impl SchemaExtractor {
    /// Reads a schema LDIF file and builds the macro table.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_records(ldif::load_records(path)?)
    }

    /// Builds an extractor over already decoded records.
    pub fn from_records(records: Vec<Record>) -> Result<Self> {
        let macros = OidMacroTable::from_records(&records)?;
        Ok(Self { records, macros })
    }

    /// The macro table built during construction.
    pub fn macros(&self) -> &OidMacroTable {
        &self.macros
    }

    /// Collects every attribute type definition, excluding the Private
    /// Enterprise arc, deduplicating by OID (last definition wins) and
    /// sorting by the [`Oid`] order.
    ///
    /// # Errors
    ///
    /// Fails on the first definition that doesn't parse or references an
    /// undefined macro; no partial result is returned.
    pub fn attributes(&self) -> Result<Vec<AttributeType>> {
        let mut by_oid: IndexMap<Oid, Vec<String>> = IndexMap::new();
        let mut skipped = 0usize;
        for record in &self.records {
            let Some(definitions) = record.get(ATTRIBUTE_TYPES_ATTR) else {
                continue;
            };
            for definition in definitions {
                let attr = parse_attribute_type(definition, &self.macros)?;
                if attr.oid.to_dotted().starts_with(PRIVATE_ENTERPRISE_ARC) {
                    skipped += 1;
                    continue;
                }
                by_oid.insert(attr.oid, attr.names);
            }
        }
        debug!(
            "Extracted {} attribute types ({} under {} skipped)",
            by_oid.len(),
            skipped,
            PRIVATE_ENTERPRISE_ARC
        );

        let mut attributes: Vec<AttributeType> = by_oid
            .into_iter()
            .map(|(oid, names)| AttributeType { oid, names })
            .collect();
        attributes.sort_by(|a, b| a.oid.cmp(&b.oid));
        Ok(attributes)
    }
}
