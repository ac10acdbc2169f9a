//! Path expression grammar.
//!
//! `a.b[2].c` parses into the root segment followed by one segment per
//! fragment. After `]` the only legal continuation is `.` or the end of the
//! expression.

use crate::{ConfigError, ConfigResult};

use super::KeyPolicy;

const APPEND_MARKER: &str = ".length";

/// How a segment is reached from its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fragment {
    /// Mapping key.
    Property(String),
    /// Sequence position.
    Index(IndexStep),
}

/// Position addressed by an index fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexStep {
    /// Explicit `[N]`.
    At(usize),
    /// `[.length]`: one past the last element.
    PastEnd,
}

impl IndexStep {
    /// Concrete position for a sequence of length `len`.
    #[must_use]
    pub const fn position(self, len: usize) -> usize {
        match self {
            Self::At(index) => index,
            Self::PastEnd => len,
        }
    }
}

/// One position in a parsed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    fragment: Option<Fragment>,
    parent: Option<usize>,
    path: String,
    remaining: String,
}

impl Segment {
    pub(super) fn root(path: &str) -> Self {
        Self {
            fragment: None,
            parent: None,
            path: String::new(),
            remaining: path.to_owned(),
        }
    }

    /// Fragment leading here from the parent; `None` for the root.
    #[must_use]
    pub const fn fragment(&self) -> Option<&Fragment> {
        self.fragment.as_ref()
    }

    /// Chain index of the parent segment; `None` for the root.
    #[must_use]
    pub const fn parent(&self) -> Option<usize> {
        self.parent
    }

    /// Path text consumed up to and including this segment.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Unparsed suffix following this segment.
    #[must_use]
    pub fn remaining(&self) -> &str {
        &self.remaining
    }

    /// Returns `true` when nothing follows this segment.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Returns `true` for the root segment.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.fragment.is_none()
    }
}

/// Split `path` into the segments following the root. Segment `i` has
/// parent `i` in the full chain, where the root is index `0`.
pub(super) fn parse(path: &str, policy: KeyPolicy) -> ConfigResult<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut rest = path;
    while !rest.is_empty() {
        let (fragment, text_len, next) = if let Some(after_bracket) = rest.strip_prefix('[') {
            if policy == KeyPolicy::CaseInsensitive {
                return Err(ConfigError::unsupported(
                    path,
                    "index segments are not available for case-insensitive lookup",
                ));
            }
            parse_index(path, after_bracket)?
        } else {
            parse_property(path, rest)?
        };
        let consumed = path.len() - rest.len() + text_len;
        segments.push(Segment {
            fragment: Some(fragment),
            parent: Some(segments.len()),
            path: path.get(..consumed).unwrap_or(path).to_owned(),
            remaining: next.to_owned(),
        });
        rest = next;
    }
    Ok(segments)
}

/// Skip the `.` separating two fragments; a property name must follow it.
fn after_separator<'p>(path: &str, tail: &'p str) -> ConfigResult<&'p str> {
    match tail.strip_prefix('.') {
        Some(next) if next.is_empty() || next.starts_with('[') => {
            Err(ConfigError::malformed_path(path, "empty property name"))
        }
        Some(next) => Ok(next),
        None => Ok(tail),
    }
}

fn parse_property<'p>(path: &str, rest: &'p str) -> ConfigResult<(Fragment, usize, &'p str)> {
    let end = rest.find(['.', '[']).unwrap_or(rest.len());
    let (name, tail) = rest.split_at(end);
    if name.is_empty() {
        return Err(ConfigError::malformed_path(path, "empty property name"));
    }
    let fragment = Fragment::Property(name.to_owned());
    Ok((fragment, end, after_separator(path, tail)?))
}

fn parse_index<'p>(
    path: &str,
    after_bracket: &'p str,
) -> ConfigResult<(Fragment, usize, &'p str)> {
    let close = after_bracket
        .find(']')
        .ok_or_else(|| ConfigError::malformed_path(path, "unterminated index"))?;
    let (body, closing) = after_bracket.split_at(close);
    let tail = closing.strip_prefix(']').unwrap_or(closing);
    if !tail.is_empty() && !tail.starts_with('.') {
        return Err(ConfigError::malformed_path(
            path,
            "expected '.' or end of path after ']'",
        ));
    }
    let step = index_step(path, body)?;
    Ok((Fragment::Index(step), close + 2, after_separator(path, tail)?))
}

fn index_step(path: &str, body: &str) -> ConfigResult<IndexStep> {
    if body == APPEND_MARKER {
        return Ok(IndexStep::PastEnd);
    }
    let value: i64 = body.parse().map_err(|_| {
        ConfigError::malformed_path(path, format!("index '{body}' is not an integer"))
    })?;
    usize::try_from(value)
        .map(IndexStep::At)
        .map_err(|_| ConfigError::out_of_bounds(path, value, None))
}
