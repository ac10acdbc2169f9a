//! Typed extraction from trees loaded out of mixed-format files.

mod common;

use anyhow::{Result, ensure};
use config_tree::{ConfigError, ConfigFactory, ConfigurationBuilder, Node};
use rstest::rstest;
use serde::Deserialize;
use tempfile::TempDir;

use common::scalar_at;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Database {
    url: String,
    pool: u32,
    replicas: Vec<String>,
    read_only: bool,
}

fn load(dir: &TempDir) -> Result<Node> {
    let base = dir.path().join("base.json");
    let local = dir.path().join("local.toml");
    std::fs::write(
        &base,
        r#"{"Database": {"url": "pg://base", "pool": 4, "replicas": ["r1", "r2"]}}"#,
    )?;
    std::fs::write(&local, "[database]\nread_only = true\n")?;
    let utf8 = |path: std::path::PathBuf| {
        camino::Utf8PathBuf::from_path_buf(path)
            .map_err(|p| anyhow::anyhow!("non UTF-8 path: {}", p.display()))
    };
    ConfigurationBuilder::new()
        .file(utf8(base)?)
        .file(utf8(local)?)
        .build()
        .map_err(|e| anyhow::anyhow!(e.to_string()))
}

#[rstest]
fn case_variants_stay_distinct_and_the_first_key_binds() -> Result<()> {
    let dir = TempDir::new()?;
    let root = load(&dir)?;
    ensure!(
        scalar_at(&root, "Database.pool")?.as_deref() == Some("4"),
        "JSON numbers are stored as text"
    );
    let factory = ConfigFactory::new(root);
    let db: Database = factory
        .config("database")
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    ensure!(db.url == "pg://base", "{db:?}");
    ensure!(db.pool == 4, "{db:?}");
    ensure!(db.replicas == ["r1", "r2"], "{db:?}");
    // `database` sorts after `Database`, so its entries are not selected.
    ensure!(!db.read_only, "{db:?}");
    ensure!(
        scalar_at(factory.root(), "database.read_only")?.as_deref() == Some("true"),
        "lower-case section should still be present"
    );
    Ok(())
}

#[rstest]
fn unknown_sections_bind_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let factory = ConfigFactory::new(load(&dir)?);
    let cache: Database = factory
        .config("cache")
        .map_err(|e| anyhow::anyhow!(e.to_string()))?;
    ensure!(cache == Database::default());
    Ok(())
}

#[rstest]
fn unbindable_values_report_the_path() -> Result<()> {
    let dir = TempDir::new()?;
    let factory = ConfigFactory::new(load(&dir)?);
    let outcome = factory.config::<u32>("DATABASE.URL");
    let path = outcome.err().and_then(|err| match &*err {
        ConfigError::Mapping { path, .. } => Some(path.clone()),
        _ => None,
    });
    ensure!(path.as_deref() == Some("DATABASE.URL"), "{path:?}");
    Ok(())
}
