//! Request-scoped context propagation
//!
//! A `RequestContext` carries the correlation identifier (and any other
//! contextual string values) across a logical unit of work, such as one
//! inbound request. Contexts are immutable: deriving a child adds a binding
//! that shadows the parent's, and resolution walks the chain to the nearest
//! binding. Cloning is cheap; the chain is shared via `Arc`.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Sentinel returned when no correlation ID was ever injected.
pub const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Well-known key under which the correlation ID is stored.
pub const REQUEST_ID_KEY: &str = "requestId";

#[derive(Clone, Default)]
pub struct RequestContext {
    head: Option<Arc<Binding>>,
}

struct Binding {
    key: Cow<'static, str>,
    value: String,
    parent: Option<Arc<Binding>>,
}

impl RequestContext {
    /// Create an empty context with no associations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a child context carrying `key` → `value`. The receiver is not
    /// modified; an existing binding for the same key is shadowed, not
    /// overwritten.
    #[must_use]
    pub fn with_value(&self, key: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            head: Some(Arc::new(Binding {
                key: key.into(),
                value: value.into(),
                parent: self.head.clone(),
            })),
        }
    }

    /// Derive a child context carrying the correlation ID.
    ///
    /// Called once at the boundary of a logical unit of work, e.g. when an
    /// inbound request is accepted.
    #[must_use]
    pub fn with_request_id(&self, request_id: impl Into<String>) -> Self {
        self.with_value(REQUEST_ID_KEY, request_id)
    }

    /// Look up the nearest enclosing binding for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let mut current = self.head.as_deref();
        while let Some(binding) = current {
            if binding.key == key {
                return Some(&binding.value);
            }
            current = binding.parent.as_deref();
        }
        None
    }

    /// Resolve the correlation ID, or [`UNKNOWN_REQUEST_ID`] if none was
    /// injected anywhere on this chain.
    pub fn request_id(&self) -> &str {
        self.get(REQUEST_ID_KEY).unwrap_or(UNKNOWN_REQUEST_ID)
    }

    /// True if no value was ever bound on this chain.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestContext")
            .field("request_id", &self.request_id())
            .finish_non_exhaustive()
    }
}
