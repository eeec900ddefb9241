//! Tests for the costlens configuration system.

use std::sync::Mutex;

use costlens_core::config::{ConfigOverrides, CostlensConfig};
use costlens_core::errors::ConfigError;
use costlens_core::types::ClientType;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all COSTLENS_ env vars and point HOME at an empty directory so the
/// developer's own user config never leaks into a test.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "COSTLENS_SIMULATION_ITERATIONS",
        "COSTLENS_SIMULATION_SEED",
        "COSTLENS_SIMULATION_REWORK_PROBABILITY",
        "COSTLENS_SIMULATION_DELAY_COST_PER_WEEK",
        "COSTLENS_PRICING_PROFIT_PERCENT",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
}

#[test]
fn empty_toml_yields_compiled_defaults() {
    let config = CostlensConfig::from_toml("").unwrap();
    assert_eq!(config.simulation.effective_iterations(), 5000);
    assert_eq!(config.simulation.effective_seed(), 42);
    assert_eq!(config.simulation.effective_rework_probability(), 0.15);
    assert_eq!(config.simulation.effective_delay_cost_per_week(), 5000.0);
    assert_eq!(config.pricing.effective_profit_percent(), 20.0);
    assert_eq!(config.pricing.effective_client_type(), ClientType::Startup);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = CostlensConfig::from_toml(
        r#"
[simulation]
iterations = 1000

[pricing]
default_client_type = "Enterprise"
"#,
    )
    .unwrap();
    assert_eq!(config.simulation.iterations, Some(1000));
    assert_eq!(config.simulation.effective_seed(), 42);
    assert_eq!(config.pricing.effective_client_type(), ClientType::Enterprise);
}

#[test]
fn toml_roundtrip() {
    let mut config = CostlensConfig::default();
    config.simulation.seed = Some(7);
    config.pricing.default_profit_percent = Some(25.0);
    let text = config.to_toml().unwrap();
    let back = CostlensConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}

#[test]
fn four_layer_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".costlens");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        r#"
[simulation]
seed = 1
iterations = 200
rework_probability = 0.3
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("costlens.toml"),
        r#"
[simulation]
seed = 2
iterations = 300
"#,
    )
    .unwrap();

    std::env::set_var("COSTLENS_SIMULATION_ITERATIONS", "400");

    let overrides = ConfigOverrides {
        simulation_seed: Some(99),
        ..Default::default()
    };
    let config = CostlensConfig::load(project.path(), Some(&overrides)).unwrap();

    // Overrides beat env, project and user.
    assert_eq!(config.simulation.seed, Some(99));
    // Env beats project.
    assert_eq!(config.simulation.iterations, Some(400));
    // Only the user file sets this one.
    assert_eq!(config.simulation.rework_probability, Some(0.3));

    isolate_env(home.path());
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    let config = CostlensConfig::load(project.path(), None).unwrap();
    assert_eq!(config, CostlensConfig::default());
    assert_eq!(config.simulation.effective_iterations(), 5000);
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    std::env::set_var("COSTLENS_SIMULATION_SEED", "not-a-number");
    std::env::set_var("COSTLENS_PRICING_PROFIT_PERCENT", "35.5");
    let project = tempdir();
    let config = CostlensConfig::load(project.path(), None).unwrap();
    assert_eq!(config.simulation.seed, None);
    assert_eq!(config.pricing.default_profit_percent, Some(35.5));

    isolate_env(home.path());
}

#[test]
fn invalid_toml_syntax_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(project.path().join("costlens.toml"), "not valid toml {{{{").unwrap();
    match CostlensConfig::load(project.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn out_of_range_values_fail_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let project = tempdir();
    std::fs::write(
        project.path().join("costlens.toml"),
        r#"
[simulation]
iterations = 60000
"#,
    )
    .unwrap();
    match CostlensConfig::load(project.path(), None) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "simulation.iterations");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }

    std::fs::write(
        project.path().join("costlens.toml"),
        r#"
[simulation]
rework_probability = 1.5
"#,
    )
    .unwrap();
    match CostlensConfig::load(project.path(), None) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "simulation.rework_probability");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn unknown_keys_are_accepted() {
    let config = CostlensConfig::from_toml(
        r#"
[simulation]
seed = 5
future_key = "hello"

[future_section]
value = 1
"#,
    )
    .unwrap();
    assert_eq!(config.simulation.seed, Some(5));
}

#[test]
fn merge_only_overrides_set_values() {
    let mut base = CostlensConfig::from_toml("[simulation]\nseed = 3\niterations = 800\n").unwrap();
    let other = CostlensConfig::from_toml("[simulation]\niterations = 900\n").unwrap();
    CostlensConfig::merge(&mut base, &other);
    assert_eq!(base.simulation.seed, Some(3));
    assert_eq!(base.simulation.iterations, Some(900));
}
