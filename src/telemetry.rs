// src/telemetry.rs

//! Telemetry opt-in gating.
//!
//! Tracing a client's calls needs an OpenTelemetry tracer in the host
//! build. The opt-in is per client; the capability is build-wide. A build
//! where any client opts in without the capability present fails, naming
//! every opted-in client so the operator sees the full blast radius at
//! once.

use crate::macros::log_debug;
use crate::registry::{Registration, Registrations};
use crate::{providers, BuildTimeConfig, Error, Result};

/// Capabilities the host build advertises.
///
/// Injectable for the same reason [`ClasspathAvailability`] is: tests
/// simulate builds with and without the capability without assembling one.
///
/// [`ClasspathAvailability`]: crate::ClasspathAvailability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// An OpenTelemetry tracer is wired into the build.
    pub opentelemetry_tracer: bool,
}

impl Capabilities {
    /// No optional capability present.
    pub fn none() -> Self {
        Self::default()
    }

    /// Mark the OpenTelemetry tracer capability as present.
    pub fn with_opentelemetry_tracer(mut self) -> Self {
        self.opentelemetry_tracer = true;
        self
    }
}

/// Gate telemetry opt-ins against build capabilities.
///
/// No client opted in: does nothing. Otherwise requires the OpenTelemetry
/// tracer capability and produces the telemetry producer bean.
///
/// # Errors
///
/// [`Error::TelemetryUnavailable`] listing every opted-in client when the
/// capability is absent.
pub fn register_telemetry(
    config: &BuildTimeConfig,
    capabilities: &Capabilities,
    out: &mut Registrations,
) -> Result<()> {
    // ---
    let opted_in: Vec<&str> = config
        .clients()
        .filter(|(_, cfg)| cfg.telemetry.enabled)
        .map(|(name, _)| name)
        .collect();

    if opted_in.is_empty() {
        return Ok(());
    }

    if !capabilities.opentelemetry_tracer {
        return Err(Error::TelemetryUnavailable {
            clients: opted_in.join(", "),
        });
    }

    log_debug!("telemetry enabled for: {}", opted_in.join(", "));
    out.produce(Registration::AdditionalBean {
        class: providers::TELEMETRY_PRODUCER,
    });

    Ok(())
}
