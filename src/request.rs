//! Request-scoped context owned by the host framework.
//!
//! The listener never parses HTTP itself. The surrounding framework pushes a
//! [`RequestContext`] onto the [`RequestStack`] before invoking listener
//! callbacks and pops it afterwards; the listener only ever reads the current
//! entry. This mirrors the request-scoped storage the host CMS provides.

use crate::ids::RequestId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Execution scope of an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestScope {
    /// Administrative editing scope. Only requests in this scope trigger
    /// widget asset injection.
    Backend,
    /// Public-facing scope.
    Frontend,
}

/// One in-flight request as seen by the listener. Read-only here; lifetime is
/// a single request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for log entries emitted on behalf of this request
    pub id: RequestId,
    /// Execution scope the framework resolved for this request
    pub scope: RequestScope,
    /// Raw `action` parameter of the request, if any
    pub action: Option<String>,
    /// Remaining request attributes (form fields, framework flags)
    pub attributes: HashMap<String, Value>,
}

impl RequestContext {
    #[must_use]
    pub fn new(scope: RequestScope) -> Self {
        Self {
            id: RequestId::new(),
            scope,
            action: None,
            attributes: HashMap::new(),
        }
    }

    /// Set the `action` request parameter.
    #[must_use]
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    /// Set an arbitrary request attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    /// Get a request attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

/// Request-scoped storage: a stack of in-flight requests with the current
/// one on top.
///
/// Request handling is serialized by the host framework (one request in
/// flight per invocation); the mutex only guards setup done by the framework
/// adapter and by tests.
#[derive(Debug, Default)]
pub struct RequestStack {
    stack: Mutex<Vec<RequestContext>>,
}

impl RequestStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a request. Called by the framework adapter before dispatching
    /// listener callbacks.
    pub fn push(&self, ctx: RequestContext) {
        if let Ok(mut stack) = self.stack.lock() {
            stack.push(ctx);
        }
    }

    /// Leave the current request.
    pub fn pop(&self) -> Option<RequestContext> {
        self.stack.lock().ok().and_then(|mut stack| stack.pop())
    }

    /// The request currently being handled, if any.
    #[must_use]
    pub fn current(&self) -> Option<RequestContext> {
        self.stack
            .lock()
            .ok()
            .and_then(|stack| stack.last().cloned())
    }
}

/// Opaque handle for "which record/table is being edited". Forwarded to the
/// request handler unmodified; the listener never inspects it beyond logging
/// the table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataContainer {
    /// Table whose edit form is active
    pub table: String,
    /// Record id, absent when a new record is being created
    pub record_id: Option<i64>,
}

impl DataContainer {
    #[must_use]
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            record_id: None,
        }
    }

    #[must_use]
    pub fn with_record(mut self, id: i64) -> Self {
        self.record_id = Some(id);
        self
    }
}
