//! Symbolic OID macro table built from `olcObjectIdentifier` directives.
//!
//! OpenLDAP schema files may define short symbolic names for OID prefixes,
//! e.g. `olcObjectIdentifier: {0}myOrg 1.3.6.1.4.1.9999`, and later refer to
//! them as `myOrg:1.2`. The table is built once, in file order, before any
//! attribute parsing; a definition may reference a macro defined earlier in
//! the same pass, but forward references do not occur and are treated as
//! fatal lookup failures.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::ldif::Record;
use crate::{Result, SchemaError};

/// LDIF attribute carrying OID macro definitions.
pub const OBJECT_IDENTIFIER_ATTR: &str = "olcObjectIdentifier";

lazy_static! {
    // Optional {N} ordering tag, macro name, value
    static ref MACRO_DEF: Regex = Regex::new(r"^(?:\{\d+\})?(\w+) (.*)$").unwrap();
    // Symbolic reference prefix: everything before the first colon
    static ref MACRO_REF: Regex = Regex::new(r"^([^:]+):").unwrap();
}

/// Mapping from symbolic macro name to its fully resolved dotted OID.
///
/// Immutable once constructed; attribute parsing only reads it.
#[derive(Debug, Default)]
pub struct OidMacroTable {
    entries: IndexMap<String, String>,
}

impl OidMacroTable {
    /// Builds the table from every `olcObjectIdentifier` value in the records,
    /// in encountered order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DefinitionSyntax` for a malformed definition and
    /// `SchemaError::MacroNotFound` for a reference to a name not yet defined.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        let mut table = Self::default();
        for record in records {
            let Some(definitions) = record.get(OBJECT_IDENTIFIER_ATTR) else {
                continue;
            };
            for definition in definitions {
                table.insert_definition(definition)?;
            }
        }
        debug!("OID macro table holds {} entries", table.len());
        Ok(table)
    }

    fn insert_definition(&mut self, definition: &str) -> Result<()> {
        let caps = MACRO_DEF
            .captures(definition)
            .ok_or_else(|| SchemaError::definition_syntax(definition))?;
        let value = self.resolve(&caps[2])?;
        self.entries.insert(caps[1].to_string(), value);
        Ok(())
    }

    /// Expands a `macroName:suffix` reference into a dotted OID, substituting
    /// the macro's table entry for the name. A value without a reference is
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::MacroNotFound` if the referenced name is absent
    /// from the table.
    pub fn resolve(&self, oid: &str) -> Result<String> {
        let Some(caps) = MACRO_REF.captures(oid) else {
            return Ok(oid.to_string());
        };
        let name = &caps[1];
        let base = self
            .entries
            .get(name)
            .ok_or_else(|| SchemaError::macro_not_found(name))?;
        let suffix = &oid[caps.get(0).map(|m| m.end()).unwrap_or(0)..];
        Ok(format!("{}.{}", base, suffix))
    }

    /// Looks up the resolved OID for a macro name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Number of defined macros.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether no macros were defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
