// src/providers.rs

//! Conventional names the emitted registrations point at.
//!
//! The wrapped SDK resolves transports through a service-provider lookup:
//! one service interface per family, one provider implementation per
//! optional library. These are the published names of those pieces, plus
//! the handful of fixed resources the SDK needs surfaced to an
//! ahead-of-time compiler.

/// Service interface resolved for "a synchronous HTTP client".
pub const SYNC_HTTP_SERVICE: &str = "software.amazon.awssdk.http.SdkHttpService";

/// Service interface resolved for "an asynchronous HTTP client".
pub const ASYNC_HTTP_SERVICE: &str = "software.amazon.awssdk.http.async.SdkAsyncHttpService";

/// Provider registered by `apache-client`.
pub const APACHE_HTTP_SERVICE: &str = "software.amazon.awssdk.http.apache.ApacheSdkHttpService";

/// Provider registered by `url-connection-client`.
pub const URL_CONNECTION_HTTP_SERVICE: &str =
    "software.amazon.awssdk.http.urlconnection.UrlConnectionSdkHttpService";

/// Provider registered by `netty-nio-client`.
pub const NETTY_HTTP_SERVICE: &str = "software.amazon.awssdk.http.nio.netty.NettySdkAsyncHttpService";

/// Provider registered by `aws-crt-client`, for both families.
pub const AWS_CRT_HTTP_SERVICE: &str = "software.amazon.awssdk.http.crt.AwsCrtSdkHttpService";

/// Interfaces the Apache transport proxies at runtime; an ahead-of-time
/// compiled image must be told about the proxy combination up front.
pub const APACHE_PROXY_INTERFACES: &[&str] = &[
    "org.apache.http.conn.HttpClientConnectionManager",
    "org.apache.http.pool.ConnPoolControl",
    "software.amazon.awssdk.http.apache.internal.conn.Wrapped",
];

/// Resource path holding the SDK's globally registered execution
/// interceptors.
pub const GLOBAL_INTERCEPTORS_PATH: &str =
    "software/amazon/awssdk/global/handlers/execution.interceptors";

/// Package prefixes marking archives that contain SDK classes.
pub const ARCHIVE_MARKERS: &[&str] = &["software/amazon/awssdk", "com/amazonaws/xray"];

/// Classes seeded from `java.util.Random`; they must initialize at run
/// time, not image build time.
pub const RUNTIME_INITIALIZED_CLASSES: &[&str] = &[
    "software.amazon.awssdk.core.retry.backoff.FullJitterBackoffStrategy",
    "software.amazon.awssdk.utils.cache.CachedSupplier",
];

/// XML stream factories the SDK reaches through reflection.
pub const XML_FACTORIES: &[&str] = &[
    "com.sun.xml.internal.stream.XMLInputFactoryImpl",
    "com.sun.xml.internal.stream.XMLOutputFactoryImpl",
];

/// Producer bean wired when at least one client opts into telemetry.
pub const TELEMETRY_PRODUCER: &str = "software.amazon.awssdk.telemetry.SdkTelemetryProducer";
