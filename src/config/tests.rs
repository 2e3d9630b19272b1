use super::*;
use serial_test::serial;
use std::env;
use std::net::IpAddr;

fn with_env_vars<F, R>(vars: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, value) in vars {
        unsafe { env::set_var(key, value) };
    }

    let result = f();

    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    for (key, _) in vars {
        unsafe { env::remove_var(key) };
    }

    result
}

fn clear_namecheck_env() {
    // SAFETY: Test code only, we accept the thread-safety risk in tests.
    unsafe {
        env::remove_var("NAMECHECK_PORT");
        env::remove_var("NAMECHECK_BIND_ADDR");
        env::remove_var("NAMECHECK_MODEL");
        env::remove_var("NAMECHECK_API_BASE");
        env::remove_var("OPENAI_API_KEY");
    }
}

#[test]
#[serial]
fn test_from_env_with_defaults() {
    clear_namecheck_env();

    with_env_vars(&[("OPENAI_API_KEY", "sk-test")], || {
        let config = Config::from_env().expect("should parse with defaults");

        assert_eq!(config.port, 8080);
        assert_eq!(
            config.bind_addr,
            IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_base.is_none());
        assert_eq!(config.api_key, "sk-test");
    });
}

#[test]
#[serial]
fn test_from_env_requires_api_key() {
    clear_namecheck_env();

    let result = Config::from_env();
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::MissingEnvVar { .. }));
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}

#[test]
#[serial]
fn test_from_env_blank_api_key_is_missing() {
    clear_namecheck_env();

    with_env_vars(&[("OPENAI_API_KEY", "   ")], || {
        let result = Config::from_env();
        assert!(matches!(result, Err(ConfigError::MissingEnvVar { .. })));
    });
}

#[test]
#[serial]
fn test_from_env_custom_port() {
    clear_namecheck_env();

    with_env_vars(
        &[("OPENAI_API_KEY", "sk-test"), ("NAMECHECK_PORT", "3000")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.port, 3000);
        },
    );
}

#[test]
#[serial]
fn test_from_env_custom_bind_addr() {
    clear_namecheck_env();

    with_env_vars(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("NAMECHECK_BIND_ADDR", "0.0.0.0"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(
                config.bind_addr,
                IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0))
            );
        },
    );
}

#[test]
#[serial]
fn test_from_env_ipv6_bind_addr() {
    clear_namecheck_env();

    with_env_vars(
        &[("OPENAI_API_KEY", "sk-test"), ("NAMECHECK_BIND_ADDR", "::1")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(
                config.bind_addr,
                IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
            );
        },
    );
}

#[test]
#[serial]
fn test_from_env_custom_model_and_base() {
    clear_namecheck_env();

    with_env_vars(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("NAMECHECK_MODEL", "gpt-5"),
            ("NAMECHECK_API_BASE", "http://localhost:11434/v1"),
        ],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.model, "gpt-5");
            assert_eq!(
                config.api_base.as_deref(),
                Some("http://localhost:11434/v1")
            );
        },
    );
}

#[test]
#[serial]
fn test_from_env_blank_model_uses_default() {
    clear_namecheck_env();

    with_env_vars(
        &[("OPENAI_API_KEY", "sk-test"), ("NAMECHECK_MODEL", "  ")],
        || {
            let config = Config::from_env().expect("should parse");
            assert_eq!(config.model, DEFAULT_MODEL);
        },
    );
}

#[test]
#[serial]
fn test_invalid_port_zero() {
    clear_namecheck_env();

    with_env_vars(
        &[("OPENAI_API_KEY", "sk-test"), ("NAMECHECK_PORT", "0")],
        || {
            let result = Config::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPort { .. }));
            assert!(err.to_string().contains("invalid port"));
        },
    );
}

#[test]
#[serial]
fn test_invalid_port_not_number() {
    clear_namecheck_env();

    with_env_vars(
        &[("OPENAI_API_KEY", "sk-test"), ("NAMECHECK_PORT", "not_a_port")],
        || {
            let result = Config::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(err, ConfigError::PortParseError { .. }));
            assert!(err.to_string().contains("failed to parse port"));
        },
    );
}

#[test]
#[serial]
fn test_invalid_bind_addr() {
    clear_namecheck_env();

    with_env_vars(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("NAMECHECK_BIND_ADDR", "not.an.ip.address"),
        ],
        || {
            let result = Config::from_env();
            assert!(result.is_err());

            let err = result.unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBindAddr { .. }));
            assert!(err.to_string().contains("failed to parse bind address"));
        },
    );
}

#[test]
fn test_socket_addr() {
    let config = Config {
        port: 8080,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        model: DEFAULT_MODEL.to_string(),
        api_base: None,
        api_key: "sk-test".to_string(),
    };
    assert_eq!(config.socket_addr(), "127.0.0.1:8080");

    let config = Config {
        port: 3000,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(0, 0, 0, 0)),
        ..config
    };
    assert_eq!(config.socket_addr(), "0.0.0.0:3000");
}

#[test]
fn test_validate_rejects_blank_model() {
    let config = Config {
        port: 8080,
        bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
        model: "   ".to_string(),
        api_base: None,
        api_key: "sk-test".to_string(),
    };

    let result = config.validate();
    assert!(matches!(result, Err(ConfigError::InvalidModel { .. })));
}

#[test]
fn test_error_messages_are_descriptive() {
    let err = ConfigError::InvalidPort {
        value: "0".to_string(),
    };
    assert!(err.to_string().contains("invalid port"));
    assert!(err.to_string().contains("0"));
    assert!(err.to_string().contains("1 and 65535"));

    let err = ConfigError::MissingEnvVar {
        name: "OPENAI_API_KEY",
    };
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}
