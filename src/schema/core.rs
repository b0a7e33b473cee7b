use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Schema of one editable field of a table definition.
///
/// Fields carry arbitrary attributes in the host system; everything beyond
/// the declared input type is kept opaque in `attributes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name within the table
    pub name: String,
    /// Declared input-widget type, absent for purely virtual fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Remaining field attributes, not interpreted here
    #[serde(flatten)]
    pub attributes: HashMap<String, Value>,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: None,
            attributes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_input_type(name: &str, input_type: &str) -> Self {
        Self {
            name: name.to_string(),
            input_type: Some(input_type.to_string()),
            attributes: HashMap::new(),
        }
    }
}

/// Read-only lookup of a table's field schemas, in their defined order.
///
/// `None` means the table is unknown or has no field list; the listener
/// treats both the same as an empty list.
pub trait SchemaProvider: Send + Sync {
    fn fields_of(&self, table: &str) -> Option<Vec<FieldDescriptor>>;
}

/// Process-wide table-schema registry.
///
/// Owned and mutated by the wider system while forms are being set up; the
/// listener only reads through the [`SchemaProvider`] impl. Backed by a
/// concurrent map so setup and lookup need no external locking.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    tables: DashMap<String, Vec<FieldDescriptor>>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field list of a table. The whole list is swapped at once;
    /// readers never observe a partially updated table.
    pub fn set_fields(&self, table: &str, fields: Vec<FieldDescriptor>) {
        debug!(table = %table, field_count = fields.len(), "Table schema registered");
        self.tables.insert(table.to_string(), fields);
    }

    /// Remove a table's schema entirely.
    pub fn remove(&self, table: &str) {
        self.tables.remove(table);
    }

    /// Drop all registered tables.
    pub fn clear(&self) {
        self.tables.clear();
    }
}

impl SchemaProvider for SchemaRegistry {
    fn fields_of(&self, table: &str) -> Option<Vec<FieldDescriptor>> {
        self.tables.get(table).map(|entry| entry.value().clone())
    }
}
