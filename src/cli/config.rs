use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "locale-sync",
    version,
    about = "Localization key assignment and translation sync for document snapshots"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path of the state file backing settings and selection state
    #[arg(long, global = true)]
    pub state: Option<String>,

    /// Path to config file (default: locale-sync.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan the working set and propose localization keys
    Scan {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,

        /// Namespace for generated keys (default: configured namespace)
        #[arg(long)]
        namespace: Option<String>,

        /// Write the scan result here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Scan and persist the proposed keys onto the document
    Apply {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,

        /// Namespace for generated keys (default: configured namespace)
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Apply a translation map to the document text
    Translate {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,

        /// Translation map JSON file (nested maps are flattened)
        #[arg(long)]
        map: Option<String>,

        /// Fetch the map from the configured store instead of a file
        #[arg(long)]
        pull: bool,

        /// Target namespace for key resolution
        #[arg(long)]
        namespace: Option<String>,

        /// Language to fetch when pulling (default: configured base language)
        #[arg(long)]
        language: Option<String>,
    },

    /// Fetch a translation map from the store and write it to a file
    Pull {
        /// Output path for the flattened map JSON
        #[arg(short, long)]
        output: String,

        /// Namespace to fetch (default: configured namespace)
        #[arg(long)]
        namespace: Option<String>,

        /// Language to fetch (default: configured base language)
        #[arg(long)]
        language: Option<String>,
    },

    /// Restore original element names
    Restore {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,

        /// Comma-separated element ids (default: every assigned element)
        #[arg(long)]
        ids: Option<String>,
    },

    /// List the namespaces in use in the document
    Namespaces {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,
    },

    /// Include or exclude an element from future scans
    Select {
        /// Element id to toggle
        #[arg(long)]
        id: String,

        /// true to include, false to exclude
        #[arg(long, action = clap::ArgAction::Set)]
        selected: bool,
    },

    /// Qualify bare stored keys with a namespace (one-time migration)
    Migrate {
        /// Document snapshot JSON file
        #[arg(long)]
        file: String,

        /// Namespace to prefix bare keys with
        #[arg(long)]
        namespace: String,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `locale-sync.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub trace: TraceConfig,

    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            defaults: DefaultsConfig::default(),
            trace: TraceConfig::default(),
            state_file: default_state_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Base URL of the translation store API
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub namespace: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    /// JSONL operation trace path; tracing is off when unset
    pub path: Option<String>,
}

// Serde default helpers
fn default_state_file() -> String {
    "locale-sync-state.json".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("locale-sync.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
