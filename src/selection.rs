// src/selection.rs

//! Transport selection.
//!
//! The one real decision in the build pass: given every declared client
//! requirement and the record of which optional transport libraries the
//! build carries, pick the single implementation to register per family,
//! or fail naming the dependency the operator must add.
//!
//! The underlying service-provider mechanism resolves exactly one active
//! implementation per family, so the algorithm is written to produce at
//! most one synchronous and at most one asynchronous kind by construction;
//! there is no merge step that could ever yield two.
//!
//! ## Policy
//!
//! Within a family, the first explicit kind in a fixed priority order wins
//! across the whole requirement set (synchronous: Apache, then CRT; the
//! default path is URL-connection). The scan order is the priority order,
//! not the order requirements were declared in, so the outcome never
//! depends on how the set was assembled.
//!
//! When no client needs a family at all, selection falls back to whatever
//! the build carries, in the same priority order, and selects nothing if
//! the build carries nothing. That branch cannot fail: an absent optional
//! library is only an error once somebody needs it.

use crate::macros::{log_debug, log_error};
use crate::{
    AsyncClientKind, ClasspathAvailability, ClientRequirement, Error, Result, SyncClientKind,
};

/// The selector's output: the implementation to register per family.
///
/// At most one kind per family, by construction of [`select`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportSelection {
    /// Chosen synchronous implementation, if any.
    pub sync_http: Option<SyncClientKind>,

    /// Chosen asynchronous implementation, if any.
    pub async_http: Option<AsyncClientKind>,
}

/// Decide which transport implementations the build must register.
///
/// Pure function over its inputs: identical inputs always yield identical
/// outputs, and no state survives the call.
///
/// # Errors
///
/// [`Error::MissingDependency`] when some requirement needs a family and
/// the implementation that requirement resolves to is absent from the
/// build.
pub fn select(
    requirements: &[ClientRequirement],
    classpath: &ClasspathAvailability,
) -> Result<TransportSelection> {
    // ---
    let selection = TransportSelection {
        sync_http: select_sync(requirements, classpath)?,
        async_http: select_async(requirements, classpath)?,
    };

    log_debug!(
        "transport selection: sync={:?} async={:?}",
        selection.sync_http,
        selection.async_http
    );

    Ok(selection)
}

fn select_sync(
    requirements: &[ClientRequirement],
    classpath: &ClasspathAvailability,
) -> Result<Option<SyncClientKind>> {
    // ---
    let sync_needed = requirements.iter().any(ClientRequirement::requires_sync);

    if !sync_needed {
        // No client needs a sync transport; register what the build
        // carries anyway so runtime lookups still resolve.
        return Ok(if classpath.apache_sync {
            Some(SyncClientKind::Apache)
        } else if classpath.url_connection_sync {
            Some(SyncClientKind::UrlConnection)
        } else {
            None
        });
    }

    if any_sync_kind(requirements, SyncClientKind::Apache) {
        return require(classpath.apache_sync, SyncClientKind::Apache.artifact())
            .map(|()| Some(SyncClientKind::Apache));
    }

    if any_sync_kind(requirements, SyncClientKind::AwsCrt) {
        return require(classpath.aws_crt, SyncClientKind::AwsCrt.artifact())
            .map(|()| Some(SyncClientKind::AwsCrt));
    }

    // Default path: a sync transport is needed but no requirement named
    // Apache or CRT.
    require(
        classpath.url_connection_sync,
        SyncClientKind::UrlConnection.artifact(),
    )
    .map(|()| Some(SyncClientKind::UrlConnection))
}

fn select_async(
    requirements: &[ClientRequirement],
    classpath: &ClasspathAvailability,
) -> Result<Option<AsyncClientKind>> {
    // ---
    let async_needed = requirements.iter().any(ClientRequirement::requires_async);

    if !async_needed {
        return Ok(if classpath.netty_async {
            Some(AsyncClientKind::Netty)
        } else if classpath.aws_crt {
            Some(AsyncClientKind::AwsCrt)
        } else {
            None
        });
    }

    if requirements
        .iter()
        .any(|r| r.async_kind() == Some(AsyncClientKind::Netty))
    {
        return require(classpath.netty_async, AsyncClientKind::Netty.artifact())
            .map(|()| Some(AsyncClientKind::Netty));
    }

    // Default path: every async requirement resolved to CRT.
    require(classpath.aws_crt, AsyncClientKind::AwsCrt.artifact())
        .map(|()| Some(AsyncClientKind::AwsCrt))
}

fn any_sync_kind(requirements: &[ClientRequirement], kind: SyncClientKind) -> bool {
    requirements.iter().any(|r| r.sync_kind() == Some(kind))
}

fn require(present: bool, artifact: &'static str) -> Result<()> {
    // ---
    if present {
        Ok(())
    } else {
        log_error!(
            "required transport library '{}' is not on the build classpath",
            artifact
        );
        Err(Error::MissingDependency { artifact })
    }
}
