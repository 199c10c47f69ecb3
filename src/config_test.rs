use std::env;
use std::time::Duration;

use clap::Parser;
use serial_test::serial;

use crate::config::*;

const ALL_VARS: [&str; 7] = [
    HOST_URL_VAR,
    API_KEY_VAR,
    WORKSPACE_SLUG_VAR,
    "PLANE_API_TIMEOUT",
    "MCP_HOST",
    "MCP_PORT",
    "MCP_TRANSPORT",
];

fn clear_env() {
    for var in ALL_VARS {
        unsafe {
            env::remove_var(var);
        }
    }
}

fn parse(argv: &[&str]) -> Result<Config, ConfigError> {
    let args = Args::try_parse_from(std::iter::once("plane-mcp").chain(argv.iter().copied()))
        .expect("arguments should parse");
    Config::try_from(args)
}

#[test]
#[serial]
fn test_missing_variables_are_all_listed() {
    clear_env();

    let err = parse(&[]).unwrap_err();
    match &err {
        ConfigError::Missing { variables } => {
            assert_eq!(variables, &vec![API_KEY_VAR, WORKSPACE_SLUG_VAR]);
        }
        other => panic!("expected Missing, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Missing required environment variables: PLANE_API_KEY, PLANE_WORKSPACE_SLUG"
    );
}

#[test]
#[serial]
fn test_empty_value_counts_as_missing() {
    clear_env();
    unsafe {
        env::set_var(API_KEY_VAR, "   ");
        env::set_var(WORKSPACE_SLUG_VAR, "acme");
    }

    let err = parse(&[]).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Missing { ref variables } if variables == &vec![API_KEY_VAR]
    ));

    clear_env();
}

#[test]
#[serial]
fn test_config_from_environment_with_defaults() {
    clear_env();
    unsafe {
        env::set_var(API_KEY_VAR, "plane_api_abc");
        env::set_var(WORKSPACE_SLUG_VAR, "acme");
    }

    let config = parse(&[]).unwrap();
    assert_eq!(config.plane.host_url, DEFAULT_HOST_URL);
    assert_eq!(config.plane.api_key, "plane_api_abc");
    assert_eq!(config.plane.workspace_slug, "acme");
    assert_eq!(config.plane.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.server.transport, Transport::Stdio);
    assert_eq!(config.server.bind_addr().to_string(), "0.0.0.0:8000");

    clear_env();
}

#[test]
#[serial]
fn test_flags_build_config() {
    clear_env();

    let config = parse(&[
        "--host-url",
        "https://plane.internal.example",
        "--api-key",
        "k",
        "--workspace-slug",
        "eng",
        "--timeout",
        "5",
        "--host",
        "127.0.0.1",
        "-p",
        "9100",
        "--transport",
        "http",
    ])
    .unwrap();

    assert_eq!(config.plane.host_url, "https://plane.internal.example");
    assert_eq!(config.plane.timeout, Duration::from_secs(5));
    assert_eq!(config.server.transport, Transport::StreamableHttp);
    assert_eq!(config.server.bind_addr().to_string(), "127.0.0.1:9100");
}

#[test]
#[serial]
fn test_transport_from_environment() {
    clear_env();
    unsafe {
        env::set_var("MCP_TRANSPORT", "streamable-http");
    }

    let config = parse(&["--api-key", "k", "--workspace-slug", "eng"]).unwrap();
    assert_eq!(config.server.transport, Transport::StreamableHttp);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_host_url_rejected() {
    clear_env();

    let err = parse(&[
        "--host-url",
        "not a url",
        "--api-key",
        "k",
        "--workspace-slug",
        "eng",
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidHostUrl { .. }));

    let err = parse(&[
        "--host-url",
        "ftp://plane.example",
        "--api-key",
        "k",
        "--workspace-slug",
        "eng",
    ])
    .unwrap_err();
    assert!(err.to_string().contains("unsupported scheme 'ftp'"));
}

#[test]
#[serial]
fn test_host_url_with_query_or_fragment_rejected() {
    clear_env();

    for host in [
        "https://plane.example.com/?tenant=a",
        "https://plane.example.com/#top",
    ] {
        let err = parse(&["--host-url", host, "--api-key", "k", "--workspace-slug", "eng"])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHostUrl { .. }), "{host}");
        assert!(err.to_string().contains("query strings and fragments"));
    }

    let config = parse(&[
        "--host-url",
        "https://plane.example.com/selfhosted",
        "--api-key",
        "k",
        "--workspace-slug",
        "eng",
    ])
    .unwrap();
    assert_eq!(config.plane.host_url, "https://plane.example.com/selfhosted");
}

#[test]
#[serial]
fn test_zero_timeout_rejected() {
    clear_env();

    let err = parse(&["--api-key", "k", "--workspace-slug", "eng", "--timeout", "0"]).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroTimeout));
}

#[test]
#[serial]
fn test_unknown_transport_rejected_by_parser() {
    clear_env();

    let result = Args::try_parse_from(["plane-mcp", "--transport", "sse"]);
    assert!(result.is_err());
}
