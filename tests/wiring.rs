use sdk_wiring::{
    //
    process,
    providers,
    BuildInput,
    BuildTimeConfig,
    Capabilities,
    ClasspathAvailability,
    Error,
    Registration,
    Registrations,
    Result,
};

/// Build the input a typical application resolves to: configuration from
/// dotted properties, requirements derived from which client flavors the
/// application injects.
fn typical_input() -> Result<BuildInput> {
    // ---
    let config = BuildTimeConfig::from_properties([
        ("s3.sync-client.type", "apache"),
        ("s3.interceptors", "com.example.AuditInterceptor"),
        ("dynamodb.async-client.type", "aws-crt"),
    ])?;

    let requirements = vec![
        config.requirement_for("s3", true, false),
        config.requirement_for("dynamodb", false, true),
    ];

    Ok(BuildInput::new(requirements)
        .with_config(config)
        .with_classpath(ClasspathAvailability::none().with_apache().with_aws_crt())
        .with_interceptor_impls(vec!["com.example.AuditInterceptor".to_string()]))
}

fn service_bindings(out: &Registrations) -> Vec<(&'static str, &'static str)> {
    out.service_providers().collect()
}

#[test]
fn test_full_pass_wires_both_families() -> Result<()> {
    // ---
    let out = process(&typical_input()?)?;

    assert_eq!(
        service_bindings(&out),
        vec![
            (providers::SYNC_HTTP_SERVICE, providers::APACHE_HTTP_SERVICE),
            (
                providers::ASYNC_HTTP_SERVICE,
                providers::AWS_CRT_HTTP_SERVICE
            ),
        ]
    );

    // Apache needs its connection-pool proxy pre-declared.
    assert!(out.items().contains(&Registration::ProxyDefinition {
        interfaces: providers::APACHE_PROXY_INTERFACES,
    }));

    // Ambient registrations ride along on every pass.
    let resources: Vec<_> = out.native_resources().collect();
    assert!(resources.contains(&providers::GLOBAL_INTERCEPTORS_PATH));
    assert!(out.items().contains(&Registration::ArchiveMarker {
        path: "software/amazon/awssdk",
    }));

    Ok(())
}

#[test]
fn test_explicit_apache_outranks_explicit_crt() -> Result<()> {
    // ---
    let config = BuildTimeConfig::from_properties([
        ("sqs.sync-client.type", "aws-crt"),
        ("s3.sync-client.type", "apache"),
    ])?;
    let requirements = vec![
        config.requirement_for("sqs", true, false),
        config.requirement_for("s3", true, false),
    ];
    let input = BuildInput::new(requirements)
        .with_config(config)
        .with_classpath(ClasspathAvailability::none().with_apache().with_aws_crt());

    let out = process(&input)?;
    assert_eq!(
        service_bindings(&out),
        vec![(providers::SYNC_HTTP_SERVICE, providers::APACHE_HTTP_SERVICE)]
    );

    Ok(())
}

#[test]
fn test_missing_transport_library_fails_the_build() -> Result<()> {
    // ---
    let config = BuildTimeConfig::from_properties([("sns.async-client.type", "netty")])?;
    let input = BuildInput::new(vec![config.requirement_for("sns", false, true)])
        .with_config(config)
        .with_classpath(ClasspathAvailability::none().with_aws_crt());

    let err = process(&input).unwrap_err();
    match err {
        Error::MissingDependency { artifact } => assert_eq!(artifact, "netty-nio-client"),
        other => panic!("expected MissingDependency, got {other:?}"),
    }

    // The message tells the operator which dependency to add.
    let message = Error::MissingDependency {
        artifact: "netty-nio-client",
    }
    .to_string();
    assert!(message.contains("software.amazon.awssdk:netty-nio-client"));

    Ok(())
}

#[test]
fn test_bare_build_registers_whatever_the_classpath_offers() {
    // ---
    let input = BuildInput::default().with_classpath(
        ClasspathAvailability::none()
            .with_url_connection()
            .with_netty(),
    );

    let out = process(&input).unwrap();
    assert_eq!(
        service_bindings(&out),
        vec![
            (
                providers::SYNC_HTTP_SERVICE,
                providers::URL_CONNECTION_HTTP_SERVICE
            ),
            (providers::ASYNC_HTTP_SERVICE, providers::NETTY_HTTP_SERVICE),
        ]
    );
}

#[test]
fn test_unknown_interceptor_fails_the_build() -> Result<()> {
    // ---
    let config = BuildTimeConfig::from_properties([("s3.interceptors", "com.example.Typo")])?;
    let input = BuildInput::new(vec![config.requirement_for("s3", true, false)])
        .with_config(config)
        .with_classpath(ClasspathAvailability::none().with_url_connection())
        .with_interceptor_impls(vec!["com.example.AuditInterceptor".to_string()]);

    let err = process(&input).unwrap_err();
    assert!(matches!(err, Error::UnknownInterceptor { client, .. } if client == "s3"));

    Ok(())
}

#[test]
fn test_telemetry_gate() -> Result<()> {
    // ---
    let config = BuildTimeConfig::from_properties([("s3.telemetry.enabled", "true")])?;
    let base = BuildInput::new(vec![config.requirement_for("s3", true, false)])
        .with_config(config)
        .with_classpath(ClasspathAvailability::none().with_url_connection());

    // Without the capability the pass fails closed...
    let err = process(&base).unwrap_err();
    assert!(matches!(err, Error::TelemetryUnavailable { clients } if clients == "s3"));

    // ...with it, the producer bean is registered.
    let input = base.with_capabilities(Capabilities::none().with_opentelemetry_tracer());
    let out = process(&input)?;
    assert!(out.items().contains(&Registration::AdditionalBean {
        class: providers::TELEMETRY_PRODUCER,
    }));

    Ok(())
}

#[test]
fn test_identical_inputs_yield_identical_registrations() -> Result<()> {
    // ---
    let first = process(&typical_input()?)?;
    let second = process(&typical_input()?)?;
    assert_eq!(first.items(), second.items());
    Ok(())
}
