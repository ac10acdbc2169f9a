//! Unit tests for overrides and the override composer.

use std::collections::BTreeMap;

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::json;

use super::{Override, OverrideChain, OverrideComposer};
use crate::{
    CliOptions, ConfigError, ConfigResult, Format, FormatParser, Node, OptionDecorator,
    OptionMetadata, PropertyOverrides, SourceLocation,
};

/// Command line given as `(name, value)` pairs in detection order.
struct FakeCli(Vec<(&'static str, Option<&'static str>)>);

impl CliOptions for FakeCli {
    fn detected_options(&self) -> Vec<String> {
        self.0.iter().map(|(name, _)| (*name).to_owned()).collect()
    }

    fn option_value(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .and_then(|(_, value)| value.map(str::to_owned))
    }
}

fn to_anyhow<T>(result: ConfigResult<T>) -> Result<T> {
    result.map_err(|err| anyhow!(err.to_string()))
}

fn json_resource(name: &str, value: &serde_json::Value) -> SourceLocation {
    SourceLocation::memory(name, Format::Json, value.to_string())
}

#[fixture]
fn base() -> Node {
    Node::from(json!({"server": {"port": 9090, "host": "h"}}))
}

#[rstest]
fn identity_returns_the_tree(base: Node) -> Result<()> {
    let out = to_anyhow(Override::Identity.apply(base.clone(), &FormatParser))?;
    ensure!(out == base);
    Ok(())
}

#[rstest]
fn properties_write_and_remove(base: Node) -> Result<()> {
    let values = BTreeMap::from([
        ("server.port".to_owned(), Some("5050".to_owned())),
        ("server.host".to_owned(), None),
        ("log.level".to_owned(), Some("debug".to_owned())),
    ]);
    let out = to_anyhow(Override::Properties(values).apply(base, &FormatParser))?;
    let expected = Node::from(json!({"server": {"port": "5050"}, "log": {"level": "debug"}}));
    ensure!(out == expected, "{out:?}");
    Ok(())
}

#[rstest]
fn resources_merge_over_the_tree(base: Node) -> Result<()> {
    let resource = json_resource("decorator", &json!({"server": {"port": 7070, "tls": true}}));
    let out = to_anyhow(Override::Resource(resource).apply(base, &FormatParser))?;
    let expected = Node::from(json!({"server": {"port": 7070, "host": "h", "tls": true}}));
    ensure!(out == expected, "{out:?}");
    Ok(())
}

#[rstest]
fn empty_resources_change_nothing(base: Node) -> Result<()> {
    let resource = SourceLocation::memory("blank", Format::Json, "");
    let out = to_anyhow(Override::Resource(resource).apply(base.clone(), &FormatParser))?;
    ensure!(out == base);
    Ok(())
}

#[rstest]
fn chain_stops_at_first_failure(base: Node) -> Result<()> {
    let chain: OverrideChain = [
        Override::property("", Some("x".to_owned())),
        Override::property("server.port", Some("1".to_owned())),
    ]
    .into_iter()
    .collect();
    match chain.apply(base, &FormatParser) {
        Err(err) if matches!(&*err, ConfigError::NoParent { .. }) => Ok(()),
        other => Err(anyhow!("expected NoParent, got {other:?}")),
    }
}

fn composer() -> OverrideComposer {
    OverrideComposer::new()
        .option(OptionMetadata::new("prod"))
        .option(OptionMetadata::new("port").with_config_path("server.port"))
        .decorator(OptionDecorator::new(
            "prod",
            json_resource("prod", &json!({"server": {"port": 7070}})),
        ))
}

#[rstest]
#[case::sources_only(vec![], PropertyOverrides::new(), "9090")]
#[case::decorator(vec![("prod", None)], PropertyOverrides::new(), "7070")]
#[case::cli_over_decorator(vec![("port", Some("6060")), ("prod", None)], PropertyOverrides::new(), "6060")]
#[case::properties_win(
    vec![("prod", None), ("port", Some("6060"))],
    PropertyOverrides::new().with("server.port", "5050"),
    "5050"
)]
fn composed_chain_respects_precedence(
    base: Node,
    #[case] options: Vec<(&'static str, Option<&'static str>)>,
    #[case] properties: PropertyOverrides,
    #[case] expected: &str,
) -> Result<()> {
    let chain = composer().properties(properties).compose(&FakeCli(options));
    let out = to_anyhow(chain.apply(base, &FormatParser))?;
    let port = to_anyhow(crate::lookup(&out, "server.port", crate::KeyPolicy::Exact))?;
    ensure!(port == Some(&Node::scalar(expected)), "{out:?}");
    Ok(())
}

#[test]
fn chain_layout_follows_layers() {
    let chain = composer()
        .properties(PropertyOverrides::new().with("a", "b"))
        .compose(&FakeCli(vec![("port", Some("6060")), ("prod", None)]));
    let kinds: Vec<&str> = chain.as_slice().iter().map(Override::label).collect();
    assert_eq!(kinds, vec!["identity", "resource", "properties", "properties"]);
}

#[test]
fn options_without_metadata_are_ignored() {
    let chain = composer().compose(&FakeCli(vec![("unknown", Some("1"))]));
    assert_eq!(chain, OverrideChain::new());
}

#[rstest]
#[case::default_used(Some("80"), Some(Node::scalar("80")))]
#[case::entry_removed(None, None)]
fn valueless_option_falls_back_to_default(
    base: Node,
    #[case] default: Option<&str>,
    #[case] expected: Option<Node>,
) -> Result<()> {
    let mut meta = OptionMetadata::new("port").with_config_path("server.port");
    if let Some(value) = default {
        meta = meta.with_default_value(value);
    }
    let chain = OverrideComposer::new()
        .option(meta)
        .compose(&FakeCli(vec![("port", None)]));
    let out = to_anyhow(chain.apply(base, &FormatParser))?;
    let port = to_anyhow(crate::lookup(&out, "server.port", crate::KeyPolicy::Exact))?;
    ensure!(port == expected.as_ref(), "{out:?}");
    Ok(())
}
