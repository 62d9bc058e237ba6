// src/config.rs

//! Build-time client configuration.
//!
//! The host exposes per-client configuration through a hierarchical
//! key/value system; the slice of it that matters at build time is small
//! and fixed:
//!
//! ```text
//! <client>.sync-client.type    = apache | aws-crt | url-connection
//! <client>.async-client.type   = netty | aws-crt
//! <client>.interceptors        = comma-separated class names
//! <client>.telemetry.enabled   = true | false
//! ```
//!
//! [`BuildTimeConfig::from_properties`] parses exactly those keys and
//! rejects everything else; a typo in a build-time key should fail the
//! build, not silently fall back to a default. The records also derive
//! `Deserialize` (kebab-case) so a host with structured configuration can
//! hand them over directly.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{AsyncClientKind, ClientRequirement, Error, Result, SyncClientKind};

/// Build-time configuration of a client's synchronous transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct SyncHttpClientBuildTimeConfig {
    /// Desired implementation kind.
    #[serde(rename = "type", default)]
    pub kind: SyncClientKind,
}

/// Build-time configuration of a client's asynchronous transport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct AsyncHttpClientBuildTimeConfig {
    /// Desired implementation kind.
    #[serde(rename = "type", default)]
    pub kind: AsyncClientKind,
}

/// Build-time telemetry opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct TelemetryBuildTimeConfig {
    /// Whether the client's calls should be traced.
    #[serde(default)]
    pub enabled: bool,
}

/// Everything one client can configure at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ClientBuildTimeConfig {
    /// Synchronous transport settings.
    #[serde(default)]
    pub sync_client: SyncHttpClientBuildTimeConfig,

    /// Asynchronous transport settings.
    #[serde(default)]
    pub async_client: AsyncHttpClientBuildTimeConfig,

    /// Execution interceptor class names to install on this client.
    #[serde(default)]
    pub interceptors: Vec<String>,

    /// Telemetry opt-in.
    #[serde(default)]
    pub telemetry: TelemetryBuildTimeConfig,
}

/// Per-client build-time configuration, keyed by client name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct BuildTimeConfig {
    clients: BTreeMap<String, ClientBuildTimeConfig>,
}

impl BuildTimeConfig {
    /// Empty configuration: every client on defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse dotted `key = value` properties into per-client records.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownConfigKey`] for a key outside the build-time model,
    /// [`Error::InvalidConfigValue`] for a value that does not parse.
    pub fn from_properties<I, K, V>(properties: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        // ---
        let mut config = Self::new();

        for (key, value) in properties {
            config.apply_property(key.as_ref(), value.as_ref())?;
        }

        Ok(config)
    }

    /// The configuration record for one client, if any key named it.
    pub fn client(&self, name: &str) -> Option<&ClientBuildTimeConfig> {
        self.clients.get(name)
    }

    /// Iterate all configured clients.
    pub fn clients(&self) -> impl Iterator<Item = (&str, &ClientBuildTimeConfig)> {
        self.clients.iter().map(|(name, cfg)| (name.as_str(), cfg))
    }

    /// Resolve a client's declared usage into a [`ClientRequirement`].
    ///
    /// `uses_sync` / `uses_async` come from usage discovery (which client
    /// flavors the application actually injects); the kinds come from this
    /// configuration, falling back to the family defaults for clients with
    /// no record.
    pub fn requirement_for(&self, name: &str, uses_sync: bool, uses_async: bool) -> ClientRequirement {
        // ---
        let sync_kind = self
            .client(name)
            .map(|cfg| cfg.sync_client.kind)
            .unwrap_or_default();
        let async_kind = self
            .client(name)
            .map(|cfg| cfg.async_client.kind)
            .unwrap_or_default();

        let mut requirement = ClientRequirement::new(name);
        if uses_sync {
            requirement = requirement.with_sync(sync_kind);
        }
        if uses_async {
            requirement = requirement.with_async(async_kind);
        }
        requirement
    }

    fn apply_property(&mut self, key: &str, value: &str) -> Result<()> {
        // ---
        let unknown_key = || Error::UnknownConfigKey { key: key.into() };

        let (client, rest) = key.split_once('.').ok_or_else(unknown_key)?;
        if client.is_empty() {
            return Err(unknown_key());
        }

        let entry = self.clients.entry(client.to_string()).or_default();

        match rest {
            "sync-client.type" => {
                entry.sync_client.kind =
                    SyncClientKind::parse(value).ok_or_else(|| Error::InvalidConfigValue {
                        key: key.into(),
                        value: value.into(),
                        reason: "expected one of: apache, aws-crt, url-connection".into(),
                    })?;
            }
            "async-client.type" => {
                entry.async_client.kind =
                    AsyncClientKind::parse(value).ok_or_else(|| Error::InvalidConfigValue {
                        key: key.into(),
                        value: value.into(),
                        reason: "expected one of: netty, aws-crt".into(),
                    })?;
            }
            "interceptors" => {
                entry.interceptors = value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            "telemetry.enabled" => {
                entry.telemetry.enabled =
                    value
                        .parse::<bool>()
                        .map_err(|_| Error::InvalidConfigValue {
                            key: key.into(),
                            value: value.into(),
                            reason: "expected true or false".into(),
                        })?;
            }
            _ => return Err(unknown_key()),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_from_properties_parses_all_keys() {
        // ---
        let config = BuildTimeConfig::from_properties([
            ("s3.sync-client.type", "apache"),
            ("s3.interceptors", " com.example.A , com.example.B "),
            ("dynamodb.async-client.type", "netty"),
            ("dynamodb.telemetry.enabled", "true"),
        ])
        .unwrap();

        let s3 = config.client("s3").unwrap();
        assert_eq!(s3.sync_client.kind, SyncClientKind::Apache);
        assert_eq!(s3.interceptors, vec!["com.example.A", "com.example.B"]);
        assert!(!s3.telemetry.enabled);

        let dynamodb = config.client("dynamodb").unwrap();
        assert_eq!(dynamodb.async_client.kind, AsyncClientKind::Netty);
        assert!(dynamodb.telemetry.enabled);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        // ---
        let err = BuildTimeConfig::from_properties([("s3.sync-client.flavor", "apache")])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownConfigKey { key } if key == "s3.sync-client.flavor"));

        let err = BuildTimeConfig::from_properties([("orphan", "value")]).unwrap_err();
        assert!(matches!(err, Error::UnknownConfigKey { .. }));
    }

    #[test]
    fn test_invalid_kind_token_is_rejected() {
        // ---
        let err =
            BuildTimeConfig::from_properties([("s3.sync-client.type", "netty")]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { value, .. } if value == "netty"
        ));
    }

    #[test]
    fn test_requirement_for_uses_configured_kinds() {
        // ---
        let config = BuildTimeConfig::from_properties([
            ("s3.sync-client.type", "aws-crt"),
            ("s3.async-client.type", "netty"),
        ])
        .unwrap();

        let requirement = config.requirement_for("s3", true, true);
        assert_eq!(requirement.sync_kind(), Some(SyncClientKind::AwsCrt));
        assert_eq!(requirement.async_kind(), Some(AsyncClientKind::Netty));

        // Families the application never uses stay unrequired, whatever
        // the configuration says.
        let requirement = config.requirement_for("s3", false, true);
        assert!(!requirement.requires_sync());
        assert!(requirement.requires_async());
    }

    #[test]
    fn test_requirement_for_unconfigured_client_defaults() {
        // ---
        let config = BuildTimeConfig::new();
        let requirement = config.requirement_for("sqs", true, true);
        assert_eq!(requirement.sync_kind(), Some(SyncClientKind::UrlConnection));
        assert_eq!(requirement.async_kind(), Some(AsyncClientKind::AwsCrt));
    }

    #[test]
    fn test_structured_deserialization() {
        // ---
        let config: BuildTimeConfig = serde_json::from_str(
            r#"{
                "s3": {
                    "sync-client": { "type": "apache" },
                    "telemetry": { "enabled": true }
                }
            }"#,
        )
        .unwrap();

        let s3 = config.client("s3").unwrap();
        assert_eq!(s3.sync_client.kind, SyncClientKind::Apache);
        assert!(s3.telemetry.enabled);
        assert_eq!(s3.async_client.kind, AsyncClientKind::AwsCrt);
    }
}
