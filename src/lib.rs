//! Build-time transport wiring for generated cloud SDK clients.
//!
//! Applications that use generated cloud-service clients pick their HTTP
//! transport implementations at build time: each client may name a desired
//! synchronous and/or asynchronous implementation, the build carries some
//! subset of the optional transport libraries, and exactly one
//! implementation per family may end up registered with the SDK's
//! service-provider lookup. This crate resolves that, together with the
//! surrounding wiring a statically compiled image needs (reflection,
//! proxy, and resource hints, interceptor validation, telemetry gating),
//! as one deterministic pass over immutable inputs.
//!
//! ```
//! use sdk_wiring::{
//!     process, BuildInput, BuildTimeConfig, Capabilities, ClasspathAvailability,
//! };
//!
//! # fn main() -> sdk_wiring::Result<()> {
//! let config = BuildTimeConfig::from_properties([
//!     ("s3.sync-client.type", "apache"),
//!     ("sqs.async-client.type", "netty"),
//! ])?;
//!
//! let input = BuildInput::new(vec![
//!     config.requirement_for("s3", true, false),
//!     config.requirement_for("sqs", false, true),
//! ])
//! .with_config(config)
//! .with_classpath(ClasspathAvailability::none().with_apache().with_netty())
//! .with_capabilities(Capabilities::none());
//!
//! let registrations = process(&input)?;
//! assert!(registrations.service_providers().count() == 2);
//! # Ok(())
//! # }
//! ```

// Import all sub modules once...
mod classpath;
mod config;
mod interceptors;
mod kind;
mod processor;
mod registry;
mod requirement;
mod selection;
mod telemetry;

pub mod providers;

mod error;
mod macros;

// Re-export main types
pub use classpath::ClasspathAvailability;
pub use config::{
    AsyncHttpClientBuildTimeConfig, BuildTimeConfig, ClientBuildTimeConfig,
    SyncHttpClientBuildTimeConfig, TelemetryBuildTimeConfig,
};
pub use error::{Error, Result};
pub use kind::{AsyncClientKind, SyncClientKind};
pub use requirement::ClientRequirement;

pub use selection::{select, TransportSelection};

pub use interceptors::register_interceptors;
pub use registry::{apply_selection, Registration, Registrations};
pub use telemetry::{register_telemetry, Capabilities};

pub use processor::{process, BuildInput};
