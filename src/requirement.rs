// src/requirement.rs

//! Declared client transport requirements.
//!
//! One [`ClientRequirement`] exists per generated client the application
//! actually uses. It records which transport families the client needs and
//! the configured kind for each. Requirements are built once when the
//! build-time configuration is resolved and consumed exactly once by
//! [`select`](crate::select); they are never mutated.

use crate::{AsyncClientKind, SyncClientKind};

/// One declared client usage and its transport demands.
///
/// `None` for a family means the client does not use that family at all.
/// `Some(kind)` means the family is required; the kind may simply be the
/// family default when the configuration named none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRequirement {
    client: String,
    sync_http: Option<SyncClientKind>,
    async_http: Option<AsyncClientKind>,
}

impl ClientRequirement {
    /// Create a requirement for a client that (so far) needs no transport.
    pub fn new(client: impl Into<String>) -> Self {
        // ---
        Self {
            client: client.into(),
            sync_http: None,
            async_http: None,
        }
    }

    /// Require a synchronous transport of the given kind.
    pub fn with_sync(mut self, kind: SyncClientKind) -> Self {
        self.sync_http = Some(kind);
        self
    }

    /// Require a synchronous transport of the default kind.
    pub fn with_default_sync(self) -> Self {
        self.with_sync(SyncClientKind::default())
    }

    /// Require an asynchronous transport of the given kind.
    pub fn with_async(mut self, kind: AsyncClientKind) -> Self {
        self.async_http = Some(kind);
        self
    }

    /// Require an asynchronous transport of the default kind.
    pub fn with_default_async(self) -> Self {
        self.with_async(AsyncClientKind::default())
    }

    /// Client name, used in diagnostics.
    pub fn client(&self) -> &str {
        &self.client
    }

    /// Whether this client needs a synchronous transport.
    pub fn requires_sync(&self) -> bool {
        self.sync_http.is_some()
    }

    /// Whether this client needs an asynchronous transport.
    pub fn requires_async(&self) -> bool {
        self.async_http.is_some()
    }

    /// The synchronous kind this client resolved to, if any.
    pub fn sync_kind(&self) -> Option<SyncClientKind> {
        self.sync_http
    }

    /// The asynchronous kind this client resolved to, if any.
    pub fn async_kind(&self) -> Option<AsyncClientKind> {
        self.async_http
    }
}
