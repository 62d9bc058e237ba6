// src/registry.rs

//! Registration model.
//!
//! The build pass never touches the host build directly; it computes the
//! registrations the host must apply and hands them back as values. This
//! keeps every decision unit-testable and leaves the single side-effecting
//! step, actually applying the registrations, to the caller.
//!
//! [`Registrations`] is an ordered collector: steps `produce` into it the
//! way they would into a host build's producer, and the caller drains it
//! once the pass succeeds.

use crate::macros::log_debug;
use crate::{providers, AsyncClientKind, SyncClientKind, TransportSelection};

/// A single registration the build must apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    /// Bind `provider` as the implementation resolved for `service`.
    ServiceProvider {
        /// Service interface being resolved.
        service: &'static str,
        /// Provider implementation to bind.
        provider: &'static str,
    },

    /// Keep a class reflectively reachable after static compilation.
    ReflectiveClass {
        /// Fully qualified class name.
        class: String,
        /// Whether method-level reflection is needed too.
        methods: bool,
    },

    /// Pre-declare a dynamic proxy over this interface combination.
    ProxyDefinition {
        /// Interfaces the proxy implements, in order.
        interfaces: &'static [&'static str],
    },

    /// Embed a classpath resource into the compiled image.
    NativeResource {
        /// Resource path.
        path: String,
    },

    /// Defer a class's static initializer to run time.
    RuntimeInitializedClass {
        /// Fully qualified class name.
        class: &'static str,
    },

    /// Treat archives containing this package prefix as application code.
    ArchiveMarker {
        /// Package path prefix.
        path: &'static str,
    },

    /// Register an extra bean with the runtime container.
    AdditionalBean {
        /// Fully qualified class name.
        class: &'static str,
    },
}

/// Ordered collector of registrations produced by the build pass.
#[derive(Debug, Default)]
pub struct Registrations {
    items: Vec<Registration>,
}

impl Registrations {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one registration.
    pub fn produce(&mut self, item: Registration) {
        self.items.push(item);
    }

    /// All registrations, in production order.
    pub fn items(&self) -> &[Registration] {
        &self.items
    }

    /// Number of registrations produced.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was produced.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The service-provider bindings, as `(service, provider)` pairs.
    pub fn service_providers(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        // ---
        self.items.iter().filter_map(|item| match item {
            Registration::ServiceProvider { service, provider } => Some((*service, *provider)),
            _ => None,
        })
    }

    /// The classes registered for reflection.
    pub fn reflective_classes(&self) -> impl Iterator<Item = &str> + '_ {
        // ---
        self.items.iter().filter_map(|item| match item {
            Registration::ReflectiveClass { class, .. } => Some(class.as_str()),
            _ => None,
        })
    }

    /// The resource paths embedded into the image.
    pub fn native_resources(&self) -> impl Iterator<Item = &str> + '_ {
        // ---
        self.items.iter().filter_map(|item| match item {
            Registration::NativeResource { path } => Some(path.as_str()),
            _ => None,
        })
    }
}

impl IntoIterator for Registrations {
    type Item = Registration;
    type IntoIter = std::vec::IntoIter<Registration>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// Emit the provider registrations for a resolved [`TransportSelection`].
///
/// One binding per chosen family; the Apache transport additionally needs
/// its connection-pool proxy pre-declared for ahead-of-time compilation.
pub fn apply_selection(selection: &TransportSelection, out: &mut Registrations) {
    // ---
    if let Some(kind) = selection.sync_http {
        let provider = match kind {
            SyncClientKind::Apache => {
                out.produce(Registration::ProxyDefinition {
                    interfaces: providers::APACHE_PROXY_INTERFACES,
                });
                providers::APACHE_HTTP_SERVICE
            }
            SyncClientKind::AwsCrt => providers::AWS_CRT_HTTP_SERVICE,
            SyncClientKind::UrlConnection => providers::URL_CONNECTION_HTTP_SERVICE,
        };
        log_debug!("registering sync transport provider: {}", provider);
        out.produce(Registration::ServiceProvider {
            service: providers::SYNC_HTTP_SERVICE,
            provider,
        });
    }

    if let Some(kind) = selection.async_http {
        let provider = match kind {
            AsyncClientKind::Netty => providers::NETTY_HTTP_SERVICE,
            AsyncClientKind::AwsCrt => providers::AWS_CRT_HTTP_SERVICE,
        };
        log_debug!("registering async transport provider: {}", provider);
        out.produce(Registration::ServiceProvider {
            service: providers::ASYNC_HTTP_SERVICE,
            provider,
        });
    }
}
