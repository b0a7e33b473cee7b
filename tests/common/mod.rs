//! Mock collaborators and a wiring harness shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use uploadgate::assets::{AssetRef, AssetsManager};
use uploadgate::handler::UploadRequestHandler;
use uploadgate::listener::BackendListener;
use uploadgate::request::{DataContainer, RequestContext, RequestStack};
use uploadgate::response::ActionResponse;
use uploadgate::schema::SchemaRegistry;

pub type HandlerResult = anyhow::Result<Option<ActionResponse>>;

/// Assets manager that records every `include_assets` call verbatim.
#[derive(Default)]
pub struct RecordingAssets {
    includes: Mutex<Vec<Vec<AssetRef>>>,
}

impl RecordingAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `include_assets` invocation, in order, with its exact argument.
    pub fn include_calls(&self) -> Vec<Vec<AssetRef>> {
        self.includes.lock().unwrap().clone()
    }

    pub fn expected_union(&self) -> Vec<AssetRef> {
        let mut union = self.basic_assets();
        union.extend(self.backend_assets());
        union
    }
}

impl AssetsManager for RecordingAssets {
    fn basic_assets(&self) -> Vec<AssetRef> {
        vec![
            AssetRef::js("bundles/uploadgate/js/fineuploader.min.js"),
            AssetRef::css("bundles/uploadgate/css/fineuploader.min.css"),
        ]
    }

    fn backend_assets(&self) -> Vec<AssetRef> {
        vec![AssetRef::js("bundles/uploadgate/js/backend.min.js")]
    }

    fn include_assets(&self, assets: &[AssetRef]) {
        self.includes.lock().unwrap().push(assets.to_vec());
    }
}

/// One recorded call into the scripted handler.
#[derive(Debug, Clone)]
pub struct HandlerCall {
    pub operation: &'static str,
    pub request_id: String,
    pub dc: DataContainer,
}

/// Handler whose results are scripted per test; records every call and the
/// arguments it was forwarded.
pub struct ScriptedHandler {
    upload: Box<dyn Fn() -> HandlerResult + Send + Sync>,
    reload: Box<dyn Fn() -> HandlerResult + Send + Sync>,
    calls: Mutex<Vec<HandlerCall>>,
}

impl ScriptedHandler {
    /// Both operations return the given response.
    pub fn responding(resp: ActionResponse) -> Self {
        let upload = resp.clone();
        let reload = resp;
        Self {
            upload: Box::new(move || Ok(Some(upload.clone()))),
            reload: Box::new(move || Ok(Some(reload.clone()))),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Both operations succeed without producing a response.
    pub fn silent() -> Self {
        Self {
            upload: Box::new(|| Ok(None)),
            reload: Box::new(|| Ok(None)),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Both operations fail with the error the factory produces.
    pub fn failing(make_err: fn() -> anyhow::Error) -> Self {
        Self {
            upload: Box::new(move || Err(make_err())),
            reload: Box::new(move || Err(make_err())),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<HandlerCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, request: &RequestContext, dc: &DataContainer) {
        self.calls.lock().unwrap().push(HandlerCall {
            operation,
            request_id: request.id.to_string(),
            dc: dc.clone(),
        });
    }
}

impl UploadRequestHandler for ScriptedHandler {
    fn handle_upload(&self, request: &RequestContext, dc: &DataContainer) -> HandlerResult {
        self.record("upload", request, dc);
        (self.upload)()
    }

    fn handle_reload(&self, request: &RequestContext, dc: &DataContainer) -> HandlerResult {
        self.record("reload", request, dc);
        (self.reload)()
    }
}

/// Fully wired listener plus handles on all mock collaborators.
pub struct Harness {
    pub listener: BackendListener,
    pub assets: Arc<RecordingAssets>,
    pub handler: Arc<ScriptedHandler>,
    pub schema: Arc<SchemaRegistry>,
    pub requests: Arc<RequestStack>,
}

pub fn harness(handler: ScriptedHandler) -> Harness {
    let assets = Arc::new(RecordingAssets::new());
    let handler = Arc::new(handler);
    let schema = Arc::new(SchemaRegistry::new());
    let requests = Arc::new(RequestStack::new());
    let listener = BackendListener::new(
        assets.clone(),
        handler.clone(),
        schema.clone(),
        requests.clone(),
    );
    Harness {
        listener,
        assets,
        handler,
        schema,
        requests,
    }
}
