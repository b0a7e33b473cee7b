//! Request-handler seam between the listener and the upload engine.
//!
//! The actual upload logic (chunk reassembly, storage, file validation)
//! lives behind this trait. The listener only routes to it and converts its
//! failures; it never interprets what the handler does.

use crate::request::{DataContainer, RequestContext};
use crate::response::ActionResponse;

/// Backend request handler for the two widget AJAX actions.
///
/// Both operations receive the current request and the editing context
/// untouched, and return either a response to send verbatim or `None` when
/// the action produced no output of its own. Failures propagate as
/// `anyhow::Error` and are converted to a 400 response by the listener's
/// failure boundary, regardless of cause.
pub trait UploadRequestHandler: Send + Sync {
    /// Handle a chunked upload request for the widget in the given editing
    /// context.
    fn handle_upload(
        &self,
        request: &RequestContext,
        dc: &DataContainer,
    ) -> anyhow::Result<Option<ActionResponse>>;

    /// Re-render the widget after its value changed (e.g. after sorting or
    /// deleting uploaded files).
    fn handle_reload(
        &self,
        request: &RequestContext,
        dc: &DataContainer,
    ) -> anyhow::Result<Option<ActionResponse>>;
}
