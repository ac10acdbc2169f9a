//! Unit tests for flat property overrides.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::PropertyOverrides;
use crate::ConfigError;

#[rstest]
#[case("a=1", "a", "1")]
#[case(" a.b = x", "a.b", " x")]
#[case("list[0]=", "list[0]", "")]
#[case("url=http://h/?q=1", "url", "http://h/?q=1")]
fn parses_assignments(#[case] text: &str, #[case] path: &str, #[case] value: &str) -> Result<()> {
    let props = PropertyOverrides::from_assignments([text]).map_err(|e| anyhow!(e.to_string()))?;
    ensure!(props.get(path) == Some(value), "{text}: {props:?}");
    ensure!(props.len() == 1);
    Ok(())
}

#[rstest]
#[case("novalue")]
#[case("=value")]
#[case("  =value")]
fn rejects_invalid_assignments(#[case] text: &str) -> Result<()> {
    match PropertyOverrides::from_assignments([text]) {
        Err(err) if matches!(&*err, ConfigError::InvalidProperty { .. }) => Ok(()),
        other => Err(anyhow!("{text}: expected InvalidProperty, got {other:?}")),
    }
}

#[test]
fn later_assignments_replace_earlier_ones() -> Result<()> {
    let props = PropertyOverrides::from_assignments(["a=1", "a=2"])
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(props.get("a") == Some("2"));
    Ok(())
}

#[test]
fn collects_prefixed_environment() -> Result<()> {
    figment::Jail::try_with(|jail| {
        jail.clear_env();
        jail.set_env("APP_SERVER__PORT", "5050");
        jail.set_env("APP_NAME", "demo");
        jail.set_env("OTHER_VALUE", "ignored");
        let props = PropertyOverrides::from_env("APP_");
        if props.get("server.port") != Some("5050") {
            return Err(figment::Error::from(format!("missing nested key: {props:?}")));
        }
        if props.get("name") != Some("demo") || props.len() != 2 {
            return Err(figment::Error::from(format!("unexpected entries: {props:?}")));
        }
        Ok(())
    })?;
    Ok(())
}

#[test]
fn override_map_wraps_values() {
    let map = PropertyOverrides::new().with("a", "1").into_override_map();
    assert_eq!(map.get("a"), Some(&Some("1".to_owned())));
}

#[test]
fn extend_from_replaces_existing_paths() {
    let mut base: PropertyOverrides = [("a", "1"), ("b", "2")].into_iter().collect();
    base.extend_from(PropertyOverrides::new().with("b", "3"));
    let entries: Vec<(&String, &String)> = base.iter().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(base.get("b"), Some("3"));
}
