//! # uploadgate
//!
//! **uploadgate** is the backend event-listener layer for a file-upload
//! widget embedded in a CMS administrative backend. It decides, per
//! data-entry form, whether the widget's browser assets must be injected
//! into the page, and routes the widget's AJAX actions to a request handler,
//! converting failures into a uniform HTTP error response.
//!
//! ## Overview
//!
//! The crate is deliberately thin: the hard parts of an upload pipeline
//! (chunk reassembly, resumable transfers, storage, file validation) live
//! behind the [`handler::UploadRequestHandler`] seam. What lives here is the
//! dispatch discipline in front of them:
//!
//! - **Scope/asset gate** - inject widget assets only for backend-scope
//!   requests on tables that declare a `fineUploader` field
//! - **Action dispatch** - route `fineuploader_upload` and
//!   `fineuploader_reload` to the handler, forwarding the current request
//!   and editing context untouched
//! - **Failure boundary** - log any handler failure once at ERROR and
//!   substitute a fixed `400 Bad Request` response
//! - **Flow interrupt** - surface a produced response as
//!   [`response::Outcome::Interrupt`] so the host framework aborts normal
//!   processing and sends it verbatim
//!
//! ## Architecture
//!
//! - **[`listener`]** - the public entry point: gate, dispatcher, boundary
//! - **[`handler`]** - request-handler trait the upload engine implements
//! - **[`schema`]** - table field-schema provider and process-wide registry
//! - **[`assets`]** - widget asset groups and inclusion tracking
//! - **[`request`]** - request-scoped context owned by the host framework
//! - **[`response`]** - response and outcome types
//! - **[`runtime_config`]** - environment-based runtime configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use uploadgate::assets::AssetCatalog;
//! use uploadgate::listener::BackendListener;
//! use uploadgate::request::{RequestContext, RequestScope, RequestStack};
//! use uploadgate::runtime_config::RuntimeConfig;
//! use uploadgate::schema::{FieldDescriptor, SchemaRegistry};
//! # use uploadgate::handler::UploadRequestHandler;
//! # use uploadgate::request::{DataContainer, RequestContext as Rc2};
//! # use uploadgate::response::ActionResponse;
//! # struct NoopHandler;
//! # impl UploadRequestHandler for NoopHandler {
//! #     fn handle_upload(&self, _: &Rc2, _: &DataContainer) -> anyhow::Result<Option<ActionResponse>> { Ok(None) }
//! #     fn handle_reload(&self, _: &Rc2, _: &DataContainer) -> anyhow::Result<Option<ActionResponse>> { Ok(None) }
//! # }
//!
//! let requests = Arc::new(RequestStack::new());
//! let schema = Arc::new(SchemaRegistry::new());
//! let catalog = Arc::new(AssetCatalog::new(&RuntimeConfig::from_env()));
//!
//! schema.set_fields(
//!     "tl_content",
//!     vec![FieldDescriptor::with_input_type("gallery", "fineUploader")],
//! );
//! requests.push(RequestContext::new(RequestScope::Backend));
//!
//! let listener = BackendListener::new(
//!     catalog.clone(),
//!     Arc::new(NoopHandler),
//!     schema,
//!     requests,
//! );
//! listener.on_load_data_container("tl_content");
//! assert!(!catalog.included().is_empty());
//! ```
//!
//! ## Runtime Considerations
//!
//! Execution is synchronous and request-scoped: the host framework
//! serializes request handling and owns the [`request::RequestStack`]. The
//! only process-wide state is the externally mutated
//! [`schema::SchemaRegistry`], which the listener reads but never writes.

pub mod assets;
pub mod handler;
pub mod ids;
pub mod listener;
pub mod request;
pub mod response;
pub mod runtime_config;
pub mod schema;

pub use listener::{BackendListener, DispatchError, ACTION_RELOAD, ACTION_UPLOAD};
pub use response::{ActionResponse, Outcome};
