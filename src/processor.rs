// src/processor.rs

//! The build pass.
//!
//! Runs every wiring step in a fixed order over one immutable input and
//! returns the full set of registrations, or the first configuration
//! error. Executes once, synchronously, during build processing; nothing
//! here blocks, retries, or keeps state between calls.

use crate::interceptors::register_interceptors;
use crate::macros::log_info;
use crate::registry::{apply_selection, Registration, Registrations};
use crate::selection::select;
use crate::telemetry::{register_telemetry, Capabilities};
use crate::{providers, BuildTimeConfig, ClasspathAvailability, ClientRequirement, Result};

/// Everything the build pass consumes.
///
/// Assembled once from the host's configuration and discovery output,
/// then handed to [`process`] by value-of-reference; the pass never
/// mutates it.
#[derive(Debug, Clone, Default)]
pub struct BuildInput {
    /// Declared client requirements, one per used client.
    pub requirements: Vec<ClientRequirement>,

    /// Per-client build-time configuration.
    pub config: BuildTimeConfig,

    /// Which optional transport libraries the build carries.
    pub classpath: ClasspathAvailability,

    /// Which optional capabilities the host build advertises.
    pub capabilities: Capabilities,

    /// Discovered execution interceptor implementations.
    pub interceptor_impls: Vec<String>,

    /// Extension-contributed interceptor resource paths, beyond the
    /// global default.
    pub interceptor_paths: Vec<String>,
}

impl BuildInput {
    /// Input with the given requirements and everything else empty.
    pub fn new(requirements: Vec<ClientRequirement>) -> Self {
        // ---
        Self {
            requirements,
            ..Self::default()
        }
    }

    /// Set the per-client configuration.
    pub fn with_config(mut self, config: BuildTimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the classpath availability record.
    pub fn with_classpath(mut self, classpath: ClasspathAvailability) -> Self {
        self.classpath = classpath;
        self
    }

    /// Set the host capability record.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Set the discovered interceptor implementations.
    pub fn with_interceptor_impls(mut self, impls: Vec<String>) -> Self {
        self.interceptor_impls = impls;
        self
    }

    /// Add an extension-contributed interceptor resource path.
    pub fn with_interceptor_path(mut self, path: impl Into<String>) -> Self {
        self.interceptor_paths.push(path.into());
        self
    }
}

/// Run the build pass.
///
/// Step order matches the shape of the original deployment processing:
/// archive markers, runtime-initialized classes, XML factory reflection,
/// interceptor wiring, telemetry gating, then transport selection and its
/// provider registrations.
///
/// # Errors
///
/// The first configuration error from any step, unchanged. On error
/// nothing is returned: a build either fully resolves its wiring or fails
/// closed.
pub fn process(input: &BuildInput) -> Result<Registrations> {
    // ---
    let mut out = Registrations::new();

    for &path in providers::ARCHIVE_MARKERS {
        out.produce(Registration::ArchiveMarker { path });
    }

    for &class in providers::RUNTIME_INITIALIZED_CLASSES {
        out.produce(Registration::RuntimeInitializedClass { class });
    }

    // The SDK reaches these through reflection, methods included.
    for &class in providers::XML_FACTORIES {
        out.produce(Registration::ReflectiveClass {
            class: class.to_string(),
            methods: true,
        });
    }

    register_interceptors(
        &input.config,
        &input.interceptor_impls,
        &input.interceptor_paths,
        &mut out,
    )?;

    register_telemetry(&input.config, &input.capabilities, &mut out)?;

    let selection = select(&input.requirements, &input.classpath)?;
    apply_selection(&selection, &mut out);

    log_info!(
        "client wiring resolved: {} registrations for {} clients",
        out.len(),
        input.requirements.len()
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::Error;

    #[test]
    fn test_fixed_registrations_always_present() {
        // ---
        let out = process(&BuildInput::default()).unwrap();

        for &path in providers::ARCHIVE_MARKERS {
            assert!(out
                .items()
                .contains(&Registration::ArchiveMarker { path }));
        }
        for &class in providers::RUNTIME_INITIALIZED_CLASSES {
            assert!(out
                .items()
                .contains(&Registration::RuntimeInitializedClass { class }));
        }
        let reflective: Vec<_> = out.reflective_classes().collect();
        for &class in providers::XML_FACTORIES {
            assert!(reflective.contains(&class));
        }
    }

    #[test]
    fn test_selection_failure_aborts_the_pass() {
        // ---
        let input = BuildInput::new(vec![
            ClientRequirement::new("s3").with_default_sync()
        ]);
        let err = process(&input).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDependency {
                artifact: "url-connection-client"
            }
        ));
    }

    #[test]
    fn test_no_clients_on_bare_build_registers_no_providers() {
        // ---
        let out = process(&BuildInput::default()).unwrap();
        assert_eq!(out.service_providers().count(), 0);
    }
}
