// src/kind.rs

//! HTTP transport implementation kinds.
//!
//! A generated cloud-service client performs its network calls through one
//! of a small set of optional HTTP transport libraries. The kinds below
//! name those implementations for each family (synchronous/asynchronous);
//! which one actually gets wired is decided by [`select`](crate::select).
//!
//! Kinds parse from the kebab-case tokens used in build-time configuration
//! values (`<client>.sync-client.type = "apache"`), and each kind knows the
//! conventional artifact name of the library that provides it, used both in
//! availability probes and in missing-dependency errors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Synchronous HTTP transport implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncClientKind {
    /// Apache HttpClient based transport.
    Apache,

    /// AWS Common Runtime transport.
    AwsCrt,

    /// JDK URL-connection transport. The default when a client needs a
    /// synchronous transport but its configuration names no kind.
    #[default]
    UrlConnection,
}

impl SyncClientKind {
    /// Conventional artifact name of the library providing this kind.
    pub fn artifact(&self) -> &'static str {
        // ---
        match self {
            SyncClientKind::Apache => "apache-client",
            SyncClientKind::AwsCrt => "aws-crt-client",
            SyncClientKind::UrlConnection => "url-connection-client",
        }
    }

    /// Parse a configuration token (`apache`, `aws-crt`, `url-connection`).
    pub fn parse(token: &str) -> Option<Self> {
        // ---
        match token {
            "apache" => Some(SyncClientKind::Apache),
            "aws-crt" => Some(SyncClientKind::AwsCrt),
            "url-connection" => Some(SyncClientKind::UrlConnection),
            _ => None,
        }
    }
}

impl fmt::Display for SyncClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            SyncClientKind::Apache => "apache",
            SyncClientKind::AwsCrt => "aws-crt",
            SyncClientKind::UrlConnection => "url-connection",
        };
        f.write_str(token)
    }
}

/// Asynchronous HTTP transport implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AsyncClientKind {
    /// Netty NIO transport.
    Netty,

    /// AWS Common Runtime transport. The default when a client needs an
    /// asynchronous transport but its configuration names no kind.
    #[default]
    AwsCrt,
}

impl AsyncClientKind {
    /// Conventional artifact name of the library providing this kind.
    pub fn artifact(&self) -> &'static str {
        // ---
        match self {
            AsyncClientKind::Netty => "netty-nio-client",
            AsyncClientKind::AwsCrt => "aws-crt-client",
        }
    }

    /// Parse a configuration token (`netty`, `aws-crt`).
    pub fn parse(token: &str) -> Option<Self> {
        // ---
        match token {
            "netty" => Some(AsyncClientKind::Netty),
            "aws-crt" => Some(AsyncClientKind::AwsCrt),
            _ => None,
        }
    }
}

impl fmt::Display for AsyncClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            AsyncClientKind::Netty => "netty",
            AsyncClientKind::AwsCrt => "aws-crt",
        };
        f.write_str(token)
    }
}
