//! Schema resolution pipeline.
//!
//! Turns decoded LDIF records into a sorted attribute OID mapping:
//! - [`macros`]: symbolic OID macro table from `olcObjectIdentifier`
//! - [`attribute`]: per-definition `olcAttributeTypes` parsing
//! - [`oid`]: OID value type with the output ordering
//! - [`extractor`]: collection, filtering, dedup and sorting
//! - [`emitter`]: map-literal line formatting

pub mod attribute;
pub mod emitter;
pub mod extractor;
pub mod macros;
pub mod oid;

pub use attribute::{AttributeType, parse_attribute_type};
pub use emitter::{EmitStyle, format_entry, write_map_entries};
pub use extractor::{PRIVATE_ENTERPRISE_ARC, SchemaExtractor};
pub use macros::OidMacroTable;
pub use oid::Oid;
