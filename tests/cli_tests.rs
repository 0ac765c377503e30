use clap::Parser;
use locale_sync::cli::config::{AppConfig, Cli, Commands, load_config};

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_scan_minimal() {
    let cli = Cli::parse_from(["locale-sync", "scan", "--file", "doc.json"]);
    match cli.command {
        Commands::Scan {
            file,
            namespace,
            output,
        } => {
            assert_eq!(file, "doc.json");
            assert_eq!(namespace, None);
            assert_eq!(output, None);
        }
        _ => panic!("Expected Scan command"),
    }
    assert_eq!(cli.verbose, 0);
}

#[test]
fn cli_parse_scan_all_args() {
    let cli = Cli::parse_from([
        "locale-sync",
        "scan",
        "--file",
        "doc.json",
        "--namespace",
        "common",
        "--output",
        "items.json",
        "-vv",
        "--state",
        "state.json",
    ]);
    match cli.command {
        Commands::Scan {
            file,
            namespace,
            output,
        } => {
            assert_eq!(file, "doc.json");
            assert_eq!(namespace.as_deref(), Some("common"));
            assert_eq!(output.as_deref(), Some("items.json"));
        }
        _ => panic!("Expected Scan command"),
    }
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.state.as_deref(), Some("state.json"));
}

#[test]
fn cli_parse_translate_with_pull() {
    let cli = Cli::parse_from([
        "locale-sync",
        "translate",
        "--file",
        "doc.json",
        "--pull",
        "--language",
        "fr",
    ]);
    match cli.command {
        Commands::Translate {
            file,
            map,
            pull,
            namespace,
            language,
        } => {
            assert_eq!(file, "doc.json");
            assert_eq!(map, None);
            assert!(pull);
            assert_eq!(namespace, None);
            assert_eq!(language.as_deref(), Some("fr"));
        }
        _ => panic!("Expected Translate command"),
    }
}

#[test]
fn cli_parse_select_requires_explicit_bool() {
    let cli = Cli::parse_from([
        "locale-sync",
        "select",
        "--id",
        "12:4",
        "--selected",
        "false",
    ]);
    match cli.command {
        Commands::Select { id, selected } => {
            assert_eq!(id, "12:4");
            assert!(!selected);
        }
        _ => panic!("Expected Select command"),
    }
}

#[test]
fn cli_parse_migrate() {
    let cli = Cli::parse_from([
        "locale-sync",
        "migrate",
        "--file",
        "doc.json",
        "--namespace",
        "common",
    ]);
    match cli.command {
        Commands::Migrate { file, namespace } => {
            assert_eq!(file, "doc.json");
            assert_eq!(namespace, "common");
        }
        _ => panic!("Expected Migrate command"),
    }
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn missing_config_file_yields_defaults() {
    let config = load_config(Some("does-not-exist.yaml"));
    assert_eq!(config.state_file, "locale-sync-state.json");
    assert_eq!(config.store.endpoint, None);
    assert_eq!(config.defaults.namespace, None);
    assert_eq!(config.trace.path, None);
}

#[test]
fn config_defaults_match_manual_default() {
    let config = AppConfig::default();
    assert_eq!(config.state_file, "locale-sync-state.json");
}

#[test]
fn partial_yaml_fills_remaining_defaults() {
    let config: AppConfig = serde_yaml::from_str(
        r#"
defaults:
  namespace: common
"#,
    )
    .expect("partial config parses");

    assert_eq!(config.defaults.namespace.as_deref(), Some("common"));
    assert_eq!(config.defaults.language, None);
    assert_eq!(
        config.state_file, "locale-sync-state.json",
        "Unset fields fall back to serde defaults"
    );
}
