//! Unit tests for typed extraction.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::json;

use super::{ConfigFactory, TreeMapper};
use crate::{ConfigError, ConfigResult, Node};

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Server {
    port: u16,
    tls: bool,
    hosts: Vec<String>,
}

#[fixture]
fn factory() -> ConfigFactory {
    ConfigFactory::new(Node::from(json!({
        "Server": {"port": "8080", "tls": "true", "hosts": ["a", "b"]},
        "name": "demo"
    })))
}

#[rstest]
#[case("server")]
#[case("SERVER")]
#[case("Server")]
fn binds_scalars_lossily_under_any_case(factory: ConfigFactory, #[case] path: &str) -> Result<()> {
    let server: Server = factory.config(path).map_err(|e| anyhow!(e.to_string()))?;
    let expected = Server {
        port: 8080,
        tls: true,
        hosts: vec!["a".to_owned(), "b".to_owned()],
    };
    ensure!(server == expected, "{server:?}");
    Ok(())
}

#[rstest]
fn missing_path_binds_an_empty_mapping(factory: ConfigFactory) -> Result<()> {
    let server: Server = factory
        .config("client.server")
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(server == Server::default());
    Ok(())
}

#[rstest]
fn scalar_leaf_binds_directly(factory: ConfigFactory) -> Result<()> {
    let port: u16 = factory
        .config("server.PORT")
        .map_err(|e| anyhow!(e.to_string()))?;
    ensure!(port == 8080);
    Ok(())
}

#[rstest]
fn mismatched_shape_is_a_mapping_error(factory: ConfigFactory) -> Result<()> {
    match factory.config::<Server>("name") {
        Err(err) => match &*err {
            ConfigError::Mapping { path, .. } => {
                ensure!(path == "name", "unexpected path {path}");
                Ok(())
            }
            other => Err(anyhow!("expected Mapping, got {other:?}")),
        },
        Ok(value) => Err(anyhow!("expected failure, got {value:?}")),
    }
}

#[rstest]
fn index_fragments_are_unsupported(factory: ConfigFactory) {
    let err = factory.node("server.hosts[0]").err();
    assert!(matches!(
        err.as_deref(),
        Some(ConfigError::Unsupported { .. })
    ));
}

#[rstest]
fn node_returns_the_selected_subtree(factory: ConfigFactory) -> Result<()> {
    let node = factory.node("NAME").map_err(|e| anyhow!(e.to_string()))?;
    ensure!(node == Some(&Node::scalar("demo")));
    ensure!(factory.node("").map_err(|e| anyhow!(e.to_string()))? == Some(factory.root()));
    Ok(())
}

/// Mapper that reports the scalar text of whatever it is given.
struct KindMapper;

impl TreeMapper for KindMapper {
    fn map<T: serde::de::DeserializeOwned>(&self, node: &Node, _path: &str) -> ConfigResult<T> {
        let text = json!(node.kind().to_string());
        serde_json::from_value(text).map_err(|e| ConfigError::unsupported("", e.to_string()))
    }
}

#[test]
fn custom_mapper_receives_the_fallback() -> Result<()> {
    let factory = ConfigFactory::with_mapper(Node::default(), KindMapper);
    let kind: String = factory.config("absent").map_err(|e| anyhow!(e.to_string()))?;
    ensure!(kind == "mapping");
    Ok(())
}

#[test]
fn factory_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConfigFactory>();
}
