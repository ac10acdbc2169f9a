//! Shared helpers for integration tests.

use config_tree::{ConfigResult, KeyPolicy, Node};

/// Convert a crate result for use inside `figment::Jail` closures.
pub fn jailed<T>(result: ConfigResult<T>) -> figment::error::Result<T> {
    result.map_err(|err| figment::Error::from(err.to_string()))
}

/// Scalar text at `path`, if the tree holds one there.
pub fn scalar_at(root: &Node, path: &str) -> figment::error::Result<Option<String>> {
    let node = jailed(config_tree::lookup(root, path, KeyPolicy::Exact))?;
    Ok(node.and_then(|found| found.as_scalar().ok()).map(str::to_owned))
}

/// Fail the jail with `message` unless `condition` holds.
pub fn check(condition: bool, message: &str) -> figment::error::Result<()> {
    if condition {
        Ok(())
    } else {
        Err(figment::Error::from(message.to_owned()))
    }
}
