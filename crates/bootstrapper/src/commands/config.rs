//! Config command

use anyhow::{Context, Result};
use bootstrapper_core::{BootstrapConfig, ConfigStore};
use camino::Utf8Path;

use crate::cli::ConfigCommands;
use crate::output;

pub fn run(cmd: ConfigCommands, config_path: &Utf8Path) -> Result<()> {
    let store = ConfigStore::new(config_path);
    match cmd {
        ConfigCommands::Show => show(&store),
        ConfigCommands::Path => {
            println!("{}", store.path());
            Ok(())
        }
    }
}

fn show(store: &ConfigStore) -> Result<()> {
    if !store.exists() {
        output::info(&format!(
            "No config file at {}. Run `bootstrapper new` to create one.",
            store.path()
        ));
        return Ok(());
    }

    let config = store
        .load()
        .with_context(|| format!("Failed to read {}", store.path()))?;

    output::header("Configuration");
    for (key, value) in summary(&config) {
        output::kv(key, &value);
    }
    Ok(())
}

/// Effective settings, defaults applied
fn summary(config: &BootstrapConfig) -> Vec<(&'static str, String)> {
    let packages = if config.standard_packages.is_empty() {
        "(none)".to_string()
    } else {
        config.standard_packages.join(", ")
    };
    let overridden = |list: &Option<Vec<String>>| match list {
        Some(items) => format!("{} (custom)", items.len()),
        None => "built-in".to_string(),
    };

    vec![
        ("Project folder", config.project_dir().to_string()),
        ("Python version", config.python_version().to_string()),
        ("Standard packages", packages),
        ("Folders", overridden(&config.project_folders)),
        ("Files", overridden(&config.project_files)),
        ("Gitignore entries", overridden(&config.gitignore_entries)),
        ("Gitignore scope", format!("{:?}", config.gitignore_scope)),
        ("Assets scope", format!("{:?}", config.assets_scope)),
        ("Minimum uv", config.min_uv_version().to_string()),
    ]
}
