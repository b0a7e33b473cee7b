//! # Schema Module
//!
//! Field-schema lookup for table definitions.
//!
//! ## Overview
//!
//! The host CMS describes every editable table as an ordered list of field
//! definitions; the only attribute this crate consults is the declared
//! input-widget type. The listener decides whether to inject widget assets
//! by scanning a table's fields for the `fineUploader` input type.
//!
//! The original system hangs this description off a process-global mutable
//! registry. Here the listener depends on the read-only [`SchemaProvider`]
//! trait instead, and [`SchemaRegistry`] is the process-wide implementation
//! the wider system mutates.
//!
//! ## Usage
//!
//! ```rust
//! use uploadgate::schema::{FieldDescriptor, SchemaProvider, SchemaRegistry};
//!
//! let registry = SchemaRegistry::new();
//! registry.set_fields(
//!     "tl_content",
//!     vec![FieldDescriptor::with_input_type("gallery", "fineUploader")],
//! );
//! assert_eq!(registry.fields_of("tl_content").map(|f| f.len()), Some(1));
//! ```

mod core;

pub use core::{FieldDescriptor, SchemaProvider, SchemaRegistry};
