use crate::assets::AssetsManager;
use crate::handler::UploadRequestHandler;
use crate::request::{DataContainer, RequestScope, RequestStack};
use crate::response::{ActionResponse, Outcome};
use crate::schema::SchemaProvider;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error};

/// AJAX action identifier for chunked widget uploads.
pub const ACTION_UPLOAD: &str = "fineuploader_upload";
/// AJAX action identifier for re-rendering the widget.
pub const ACTION_RELOAD: &str = "fineuploader_reload";
/// Declared input type that marks a field as an upload-widget field.
pub const INPUT_TYPE_FINE_UPLOADER: &str = "fineUploader";

/// Failure of an action dispatch.
///
/// One uniform kind covers everything the handler can fail with; the
/// boundary makes no distinction between validation, I/O, or programming
/// errors. `NoRequest` is the only dispatch-side failure: a recognized
/// action arrived outside any request, so the handler contract cannot be
/// satisfied.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A recognized action was dispatched with no current request.
    #[error("no current request for action dispatch")]
    NoRequest,
    /// The delegated handler failed, for whatever reason.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

/// Backend event listener for the upload widget.
///
/// Pure dispatch plumbing: decides whether widget assets are needed for a
/// form, routes the two widget AJAX actions to the request handler, and
/// converts handler failures into a fixed `400 Bad Request` response. All
/// collaborators are injected; the listener holds no state of its own.
pub struct BackendListener {
    assets: Arc<dyn AssetsManager>,
    handler: Arc<dyn UploadRequestHandler>,
    schema: Arc<dyn SchemaProvider>,
    requests: Arc<RequestStack>,
}

impl BackendListener {
    #[must_use]
    pub fn new(
        assets: Arc<dyn AssetsManager>,
        handler: Arc<dyn UploadRequestHandler>,
        schema: Arc<dyn SchemaProvider>,
        requests: Arc<RequestStack>,
    ) -> Self {
        Self {
            assets,
            handler,
            schema,
            requests,
        }
    }

    /// Load the widget assets if the table needs them. Invoked while the
    /// edit form is being constructed, so fields shown in subpalettes are
    /// covered as well.
    ///
    /// No-op unless there is a current request in backend scope and the
    /// table declares at least one `fineUploader` field. Asset inclusion is
    /// set-like at the manager, so repeated invocations are harmless.
    pub fn on_load_data_container(&self, table: &str) {
        let Some(request) = self.requests.current() else {
            return;
        };
        if request.scope != RequestScope::Backend {
            return;
        }
        let Some(fields) = self.schema.fields_of(table) else {
            return;
        };

        for field in &fields {
            if field.input_type.as_deref() == Some(INPUT_TYPE_FINE_UPLOADER) {
                debug!(
                    request_id = %request.id,
                    table = %table,
                    field = %field.name,
                    "Upload-widget field found, including assets"
                );
                let mut assets = self.assets.basic_assets();
                assets.extend(self.assets.backend_assets());
                self.assets.include_assets(&assets);
                break;
            }
        }
    }

    /// Dispatch a backend AJAX action.
    ///
    /// Recognized actions are forwarded to the request handler; any failure
    /// along the way is logged and replaced by a `400 Bad Request` response.
    /// A produced response, from either path, is surfaced as
    /// [`Outcome::Interrupt`] so the host aborts normal processing and sends
    /// it verbatim. Unrecognized actions yield [`Outcome::Continue`].
    pub fn on_execute_post_actions(&self, action: &str, dc: &DataContainer) -> Outcome {
        let response = match self.dispatch_action(action, dc) {
            Ok(response) => response,
            Err(err) => {
                let request_id = self.requests.current().map(|r| r.id.to_string());
                error!(
                    operation = %action,
                    request_id = request_id.as_deref().unwrap_or("-"),
                    table = %dc.table,
                    "{err}"
                );
                Some(ActionResponse::bad_request())
            }
        };

        Outcome::from(response)
    }

    /// Route the action to the handler. Adds no logic beyond routing and
    /// argument forwarding; failures propagate to the caller's boundary.
    fn dispatch_action(
        &self,
        action: &str,
        dc: &DataContainer,
    ) -> Result<Option<ActionResponse>, DispatchError> {
        match action {
            ACTION_UPLOAD => {
                let request = self.requests.current().ok_or(DispatchError::NoRequest)?;
                Ok(self.handler.handle_upload(&request, dc)?)
            }
            ACTION_RELOAD => {
                let request = self.requests.current().ok_or(DispatchError::NoRequest)?;
                Ok(self.handler.handle_reload(&request, dc)?)
            }
            _ => Ok(None),
        }
    }
}
