//! # Listener Module
//!
//! The backend event listener: the public entry point of this crate.
//!
//! ## Overview
//!
//! The host CMS invokes two callbacks on [`BackendListener`]:
//!
//! - `on_load_data_container` while an edit form is being constructed. The
//!   listener checks the current request's scope and the table's field
//!   schemas, and injects the widget assets when a `fineUploader` field is
//!   present.
//! - `on_execute_post_actions` when the backend receives an AJAX action.
//!   The listener routes the two recognized action identifiers to the
//!   injected [`UploadRequestHandler`](crate::handler::UploadRequestHandler)
//!   and reports an [`Outcome`](crate::response::Outcome).
//!
//! ## Error Handling
//!
//! Handler failures are uniform: whatever the cause, the failure is logged
//! once at ERROR (message = the error's message, `operation` = the action
//! identifier under dispatch) and replaced with a fixed `400 Bad Request`
//! response. Nothing is retried and nothing escapes the boundary; the only
//! deliberate propagation is `Outcome::Interrupt`, which is not an error but
//! the designed short-circuit mechanism.
//!
//! ## Request Flow
//!
//! 1. Host invokes a callback
//! 2. Scope/asset gate or action dispatch runs
//! 3. Dispatch failures are converted to a 400 response
//! 4. A produced response is surfaced as `Outcome::Interrupt`

mod core;

pub use core::{
    BackendListener, DispatchError, ACTION_RELOAD, ACTION_UPLOAD, INPUT_TYPE_FINE_UPLOADER,
};
