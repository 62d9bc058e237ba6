// src/interceptors.rs

//! Execution interceptor wiring.
//!
//! The SDK discovers request/response interceptors two ways: resource
//! files listing globally registered interceptors, and per-client lists
//! from build-time configuration. Both paths cross a reflection boundary,
//! so everything found here must also be surfaced to the ahead-of-time
//! compiler.
//!
//! Discovery of the implementations themselves (scanning the application's
//! class index) belongs to the host; this module consumes the resulting
//! index, validates configuration against it, and emits the registrations.

use crate::macros::log_debug;
use crate::registry::{Registration, Registrations};
use crate::{providers, BuildTimeConfig, Error, Result};

/// Validate configured interceptors and emit interceptor registrations.
///
/// Produces, in order:
///
/// 1. a [`Registration::NativeResource`] for the global interceptors path
///    and each extension-contributed `extra_paths` entry,
/// 2. a [`Registration::ReflectiveClass`] for every discovered
///    implementation in `known_impls`.
///
/// Between the two, every per-client `interceptors` list in `config` is
/// checked against `known_impls`; entries are trimmed before comparison so
/// stray whitespace in configuration does not fail a valid class name.
///
/// # Errors
///
/// [`Error::UnknownInterceptor`] naming the client and its configured list
/// when an entry matches no discovered implementation.
pub fn register_interceptors(
    config: &BuildTimeConfig,
    known_impls: &[String],
    extra_paths: &[String],
    out: &mut Registrations,
) -> Result<()> {
    // ---
    out.produce(Registration::NativeResource {
        path: providers::GLOBAL_INTERCEPTORS_PATH.to_string(),
    });
    for path in extra_paths {
        out.produce(Registration::NativeResource { path: path.clone() });
    }

    for (client, client_config) in config.clients() {
        for name in &client_config.interceptors {
            let name = name.trim();
            if !known_impls.iter().any(|known| known == name) {
                return Err(Error::UnknownInterceptor {
                    client: client.to_string(),
                    interceptors: client_config.interceptors.join(", "),
                });
            }
        }
    }

    log_debug!(
        "registering {} interceptor implementations for reflection",
        known_impls.len()
    );
    for class in known_impls {
        out.produce(Registration::ReflectiveClass {
            class: class.clone(),
            methods: false,
        });
    }

    Ok(())
}
