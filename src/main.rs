use clap::Parser;
use locale_sync::cli::commands::{
    cmd_apply, cmd_migrate, cmd_namespaces, cmd_pull, cmd_restore, cmd_scan, cmd_select,
    cmd_translate,
};
use locale_sync::cli::config::{Cli, Commands, load_config};
use locale_sync::trace::logger::OpLogger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    // Resolve shared settings: CLI > config > defaults
    let state_path = cli.state.clone().unwrap_or_else(|| config.state_file.clone());
    let logger = match config.trace.path.as_deref() {
        Some(path) => OpLogger::new(path),
        None => OpLogger::disabled(),
    };
    let default_namespace = config.defaults.namespace.as_deref();
    let default_language = config.defaults.language.as_deref();
    let endpoint = config.store.endpoint.as_deref();

    match cli.command {
        Commands::Scan {
            file,
            namespace,
            output,
        } => {
            cmd_scan(
                &file,
                namespace.as_deref().or(default_namespace),
                output.as_deref(),
                &state_path,
                cli.verbose,
                &logger,
            )?;
        }
        Commands::Apply { file, namespace } => {
            cmd_apply(
                &file,
                namespace.as_deref().or(default_namespace),
                &state_path,
                cli.verbose,
                &logger,
            )?;
        }
        Commands::Translate {
            file,
            map,
            pull,
            namespace,
            language,
        } => {
            cmd_translate(
                &file,
                map.as_deref(),
                pull,
                namespace.as_deref().or(default_namespace),
                language.as_deref().or(default_language),
                endpoint,
                &state_path,
                cli.verbose,
                &logger,
            )?;
        }
        Commands::Pull {
            output,
            namespace,
            language,
        } => {
            cmd_pull(
                &output,
                namespace.as_deref().or(default_namespace),
                language.as_deref().or(default_language),
                endpoint,
                &state_path,
                cli.verbose,
                &logger,
            )?;
        }
        Commands::Restore { file, ids } => {
            cmd_restore(&file, ids.as_deref(), &state_path, &logger)?;
        }
        Commands::Namespaces { file } => {
            cmd_namespaces(&file)?;
        }
        Commands::Select { id, selected } => {
            cmd_select(&id, selected, &state_path, &logger)?;
        }
        Commands::Migrate { file, namespace } => {
            cmd_migrate(&file, &namespace, &logger)?;
        }
    }

    Ok(())
}
