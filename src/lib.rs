//! # oidmap - LDAP schema attribute OID mapping generator
//!
//! This crate converts an OpenLDAP `cn=config` schema export (LDIF format)
//! into a generated mapping-table source fragment: for every attribute type
//! defined in the schema it emits the fully resolved OID together with the
//! attribute's name(s), sorted ascending by OID, as literal map-entry lines
//! for inclusion in another program's source.
//!
//! Query the schema from the server:
//!
//! ```text
//! ldapsearch -H ldapi:/// -Y external -b 'cn=schema,cn=config' -LLL \
//!   'objectClass=*' > schema.ldif
//! oidmap schema.ldif > attr.txt
//! ```
//!
//! ## Pipeline
//!
//! - **LDIF decoding**: [`ldif`] turns the export into records (DN plus
//!   attribute values), handling folding and base64 values
//! - **Macro resolution**: [`schema::macros`] builds the symbolic-name to OID
//!   table from `olcObjectIdentifier` directives
//! - **Attribute parsing**: [`schema::attribute`] extracts (OID, names) from
//!   each `olcAttributeTypes` definition, expanding macro-relative OIDs
//! - **Filtering and ordering**: [`schema::extractor`] drops the
//!   `1.3.6.1.4.1` Private Enterprise arc, dedups by OID (last definition
//!   wins) and sorts with the custom [`schema::Oid`] order
//! - **Emission**: [`schema::emitter`] formats the sorted pairs as
//!   `"<oid>" => ["<name>", ...],` lines
//!
//! ## Quick Start
//!
//! ```no_run
//! use oidmap::schema::{EmitStyle, SchemaExtractor, write_map_entries};
//!
//! # fn main() -> oidmap::Result<()> {
//! let extractor = SchemaExtractor::from_path("schema.ldif")?;
//! let attributes = extractor.attributes()?;
//! write_map_entries(&mut std::io::stdout(), &attributes, &EmitStyle::default())?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return a [`Result<T>`] type, where errors are
//! represented by [`SchemaError`]. The crate uses the `snafu` library for
//! ergonomic error handling with context and backtraces. Every failure is
//! fatal by design: the generated table is meant to be exhaustive and
//! trustworthy, so a malformed definition or an unresolved macro reference
//! aborts the run instead of being skipped.

pub mod error;
pub mod ldif;
pub mod schema;

// Re-export commonly used types for convenience
pub use schema::{AttributeType, Oid, OidMacroTable, SchemaExtractor};

// Re-export error types for convenience
pub use error::{Result, SchemaError, snafu};
