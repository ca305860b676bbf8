use admin_routes::{AppConfig, config::Env};
use serial_test::serial;
use std::{env, panic};

const CONFIG_VARS: &[&str] = &[
    "APP_ENV",
    "BIND_ADDR",
    "ROUTE_PROVIDER_URL",
    "VIEWS_ROOT",
    "MAX_ROUTE_DEPTH",
    "PROVIDER_TIMEOUT_SECS",
];

// --- Setup/Teardown Utilities ---

/// Runs `test` with a clean configuration environment and restores the original
/// values afterwards, even if the test panics.
fn run_with_env<T, R>(test: T) -> R
where
    T: FnOnce() -> R + panic::UnwindSafe,
{
    let originals: Vec<(&str, Option<String>)> = CONFIG_VARS
        .iter()
        .map(|&var| (var, env::var(var).ok()))
        .collect();

    unsafe {
        for var in CONFIG_VARS {
            env::remove_var(var);
        }
    }

    let result = panic::catch_unwind(test);

    for (key, original_value) in originals {
        unsafe {
            match original_value {
                Some(val) => env::set_var(key, val),
                None => env::remove_var(key),
            }
        }
    }

    match result {
        Ok(value) => value,
        Err(e) => panic::resume_unwind(e),
    }
}

// --- Tests ---

#[test]
#[serial]
fn test_app_config_production_fail_fast() {
    let result = run_with_env(|| {
        panic::catch_unwind(|| {
            unsafe {
                env::set_var("APP_ENV", "production");
            }
            // ROUTE_PROVIDER_URL is missing
            AppConfig::load()
        })
    });

    assert!(
        result.is_err(),
        "Production config loading should panic without a provider URL"
    );
}

#[test]
#[serial]
fn test_app_config_production_with_provider() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "production");
            env::set_var("ROUTE_PROVIDER_URL", "https://api.example.com/routes");
        }
        AppConfig::load()
    });

    assert_eq!(config.env, Env::Production);
    assert_eq!(config.route_provider_url, "https://api.example.com/routes");
}

#[test]
#[serial]
fn test_app_config_local_env_defaults() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("APP_ENV", "local");
        }
        AppConfig::load()
    });

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.bind_addr, "0.0.0.0:3000");
    // The wildcard bind address is rewritten to loopback for the self-served provider.
    assert_eq!(config.route_provider_url, "http://127.0.0.1:3000/routes");
    assert_eq!(config.views_root, "@/views");
    assert_eq!(config.max_route_depth, 16);
    assert_eq!(config.provider_timeout_secs, 10);
}

#[test]
#[serial]
fn test_app_config_local_follows_bind_addr() {
    let config = run_with_env(|| {
        unsafe {
            env::set_var("BIND_ADDR", "127.0.0.1:8080");
            env::set_var("MAX_ROUTE_DEPTH", "4");
        }
        AppConfig::load()
    });

    assert_eq!(config.route_provider_url, "http://127.0.0.1:8080/routes");
    assert_eq!(config.max_route_depth, 4);
}

#[test]
#[serial]
fn test_app_config_rejects_non_numeric_depth() {
    let result = run_with_env(|| {
        panic::catch_unwind(|| {
            unsafe {
                env::set_var("MAX_ROUTE_DEPTH", "deep");
            }
            AppConfig::load()
        })
    });

    assert!(result.is_err());
}

#[test]
fn test_app_config_default_is_local() {
    let config = AppConfig::default();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.max_route_depth, 16);
}
