use thiserror::Error;

/// Errors raised while resolving build-time client wiring.
///
/// Every variant is a configuration error: fatal to the build, never
/// retried, and worded so the operator knows what to fix.
#[derive(Error, Debug)]
pub enum Error {
    /// A required transport implementation library is absent from the build.
    ///
    /// `artifact` is the conventional artifact name of the missing optional
    /// dependency (e.g. `apache-client`).
    #[error("missing 'software.amazon.awssdk:{artifact}' dependency on the build classpath")]
    MissingDependency {
        /// Conventional artifact name to add to the build.
        artifact: &'static str,
    },

    /// A configured interceptor does not name a discovered implementation.
    #[error("{client}.interceptors ({interceptors}) must list only known implementations of software.amazon.awssdk.core.interceptor.ExecutionInterceptor")]
    UnknownInterceptor {
        /// Client whose interceptor list failed validation.
        client: String,
        /// The configured interceptor list, verbatim.
        interceptors: String,
    },

    /// Telemetry was enabled for one or more clients but the build carries
    /// no OpenTelemetry tracer capability.
    #[error("telemetry enabled for {clients} but no OpenTelemetry tracer capability is present in the build")]
    TelemetryUnavailable {
        /// Comma-separated names of the clients that opted in.
        clients: String,
    },

    /// A configuration key does not belong to the build-time model.
    #[error("unknown build-time configuration key: {key}")]
    UnknownConfigKey {
        /// The offending dotted key, verbatim.
        key: String,
    },

    /// A configuration value could not be parsed.
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidConfigValue {
        /// The dotted key the value was supplied under.
        key: String,
        /// The offending value, verbatim.
        value: String,
        /// What a valid value would have looked like.
        reason: String,
    },
}

/// Result type alias for build-time wiring operations.
pub type Result<T> = std::result::Result<T, Error>;
