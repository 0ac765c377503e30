use crate::document::json_document::JsonDocument;
use crate::document::provider::DocumentProvider;
use crate::error::SyncError;
use crate::ops::handlers;
use crate::persist::kv::FileStore;
use crate::persist::settings::StoreSettings;
use crate::remote::client::StoreClient;
use crate::sync::flatten::{TranslationMap, flatten_translations};
use crate::trace::logger::OpLogger;
use crate::trace::op_event::OpEvent;

// ============================================================================
// scan subcommand
// ============================================================================

pub fn cmd_scan(
    file: &str,
    namespace: Option<&str>,
    output: Option<&str>,
    state_path: &str,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = JsonDocument::load(file)?;
    let mut state = FileStore::open(state_path);
    let namespace = resolve_namespace(namespace, &state);

    if verbose > 0 {
        eprintln!("Scanning {} (namespace: '{}')...", file, namespace);
    }

    let response = handlers::scan(&doc, &mut state, &namespace)?;

    let mut event = OpEvent::now("scan")
        .with_namespace(&namespace)
        .with_items(response.items.len());
    if let Some(warning) = &response.warning {
        event = event.with_warning(warning);
    }
    logger.log(&event);

    if let Some(warning) = &response.warning {
        eprintln!("{}", warning);
    }

    let json = serde_json::to_string_pretty(&response)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("Wrote {} items to {}", response.items.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}

// ============================================================================
// apply subcommand
// ============================================================================

pub fn cmd_apply(
    file: &str,
    namespace: Option<&str>,
    state_path: &str,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = JsonDocument::load(file)?;
    let mut state = FileStore::open(state_path);
    let namespace = resolve_namespace(namespace, &state);

    let response = handlers::scan(&doc, &mut state, &namespace)?;
    if let Some(warning) = &response.warning {
        eprintln!("{}", warning);
        return Ok(());
    }

    // Only included elements receive keys.
    let items: Vec<_> = response.items.into_iter().filter(|i| i.selected).collect();
    let namespaces = handlers::apply_keys(&mut doc, &items)?;
    doc.save(file)?;

    logger.log(
        &OpEvent::now("apply-keys")
            .with_namespace(&namespace)
            .with_items(items.len()),
    );

    println!("Applied {} keys", items.len());
    if verbose > 0 && !namespaces.is_empty() {
        eprintln!("Namespaces in use: {}", namespaces.join(", "));
    }

    Ok(())
}

// ============================================================================
// translate / pull subcommands
// ============================================================================

pub fn cmd_translate(
    file: &str,
    map_path: Option<&str>,
    pull: bool,
    namespace: Option<&str>,
    language: Option<&str>,
    endpoint: Option<&str>,
    state_path: &str,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = JsonDocument::load(file)?;
    let state = FileStore::open(state_path);
    let namespace = resolve_namespace(namespace, &state);

    let map: TranslationMap = if pull {
        let settings = StoreSettings::load(&state)?;
        let language = language.unwrap_or(&settings.base_language);
        let endpoint = endpoint.ok_or(SyncError::MissingSetting("store.endpoint".to_string()))?;
        let client = StoreClient::from_settings(endpoint, &settings)?;
        if verbose > 0 {
            eprintln!("Fetching '{}' translations from {}...", language, endpoint);
        }
        client.fetch_translations(&namespace, language)?
    } else {
        let path = map_path.ok_or("either --map or --pull is required")?;
        load_translation_map(path)?
    };

    let applied = handlers::apply_language(&mut doc, &map, &namespace)?;
    doc.save(file)?;

    logger.log(
        &OpEvent::now("apply-language")
            .with_namespace(&namespace)
            .with_applied(applied),
    );

    println!("Applied {} translations", applied);
    Ok(())
}

pub fn cmd_pull(
    output: &str,
    namespace: Option<&str>,
    language: Option<&str>,
    endpoint: Option<&str>,
    state_path: &str,
    verbose: u8,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = FileStore::open(state_path);
    let namespace = resolve_namespace(namespace, &state);
    let settings = StoreSettings::load(&state)?;
    let language = language.unwrap_or(&settings.base_language);

    let endpoint = endpoint.ok_or(SyncError::MissingSetting("store.endpoint".to_string()))?;
    let client = StoreClient::from_settings(endpoint, &settings)?;

    if verbose > 0 {
        eprintln!("Fetching '{}' translations from {}...", language, endpoint);
    }
    let map = client.fetch_translations(&namespace, language)?;

    let json = serde_json::to_string_pretty(&map)?;
    std::fs::write(output, json)?;

    logger.log(
        &OpEvent::now("pull")
            .with_namespace(&namespace)
            .with_items(map.len()),
    );

    println!("Pulled {} entries to {}", map.len(), output);
    Ok(())
}

/// Load a translation map from a JSON file, flattening nested objects.
pub fn load_translation_map(path: &str) -> Result<TranslationMap, SyncError> {
    let content = std::fs::read_to_string(path).map_err(|e| SyncError::Io {
        path: path.to_string(),
        source: e,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| SyncError::JsonParse {
            context: format!("translation map '{}'", path),
            source: e,
        })?;
    Ok(flatten_translations(&value))
}

// ============================================================================
// restore / namespaces / select / migrate subcommands
// ============================================================================

pub fn cmd_restore(
    file: &str,
    ids: Option<&str>,
    state_path: &str,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = JsonDocument::load(file)?;
    let mut state = FileStore::open(state_path);

    let ids: Vec<String> = match ids {
        Some(list) => list
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect(),
        None => doc
            .all_text_elements()
            .into_iter()
            .filter(|id| doc.stored_key(id).is_some_and(|k| !k.is_empty()))
            .collect(),
    };

    let response = handlers::restore_names(&mut doc, &mut state, &ids, "")?;
    doc.save(file)?;

    logger.log(&OpEvent::now("restore-names").with_items(ids.len()));

    println!(
        "Restored original names ({} assigned elements remain)",
        response.items.len()
    );
    Ok(())
}

pub fn cmd_namespaces(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let doc = JsonDocument::load(file)?;
    let namespaces = handlers::get_namespaces(&doc);

    if namespaces.is_empty() {
        println!("No namespaces in use");
    } else {
        for ns in namespaces {
            println!("{}", ns);
        }
    }
    Ok(())
}

pub fn cmd_select(
    id: &str,
    selected: bool,
    state_path: &str,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = FileStore::open(state_path);
    handlers::set_selected(&mut state, id, selected)?;

    logger.log(&OpEvent::now(if selected { "select" } else { "exclude" }).with_items(1));

    println!("{} {}", if selected { "Included" } else { "Excluded" }, id);
    Ok(())
}

pub fn cmd_migrate(
    file: &str,
    namespace: &str,
    logger: &OpLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = JsonDocument::load(file)?;
    let migrated = handlers::migrate_bare_keys(&mut doc, namespace)?;
    doc.save(file)?;

    logger.log(
        &OpEvent::now("migrate")
            .with_namespace(namespace)
            .with_applied(migrated),
    );

    println!(
        "Qualified {} bare keys with namespace '{}'",
        migrated, namespace
    );
    Ok(())
}

/// Resolve the effective namespace: explicit flag first, then the persisted
/// default namespace setting.
fn resolve_namespace(flag: Option<&str>, state: &FileStore) -> String {
    if let Some(ns) = flag {
        return ns.to_string();
    }
    StoreSettings::load(state)
        .map(|s| s.default_namespace)
        .unwrap_or_default()
}
