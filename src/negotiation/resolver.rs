//! Priority-ordered language resolution.
//!
//! # Responsibilities
//! - Try the cookie value against the groups
//! - Then try each header token in header order
//! - Otherwise fall back to the first group
//!
//! # Design Decisions
//! - Total: every call returns an alias from the config
//! - Stateless per call; the only cursor lives in the scanner
//! - An absent input is skipped; an empty one is tried and fails to match

use std::fmt;

use crate::negotiation::group::GroupConfig;
use crate::negotiation::scanner::HeaderScanner;

/// Which request signal produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Cookie,
    Header,
    Default,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Cookie => "cookie",
            Source::Header => "header",
            Source::Default => "default",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved canonical alias together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub alias: &'a str,
    pub source: Source,
}

impl GroupConfig {
    /// Resolve a canonical alias from raw cookie and header bytes.
    pub fn select(&self, cookie: Option<&[u8]>, header: Option<&[u8]>) -> Selection<'_> {
        if let Some(group) = cookie.and_then(|value| self.find_group(value)) {
            return Selection {
                alias: group.canonical(),
                source: Source::Cookie,
            };
        }

        if let Some(group) = header
            .into_iter()
            .flat_map(HeaderScanner::new)
            .find_map(|token| self.find_group(token))
        {
            return Selection {
                alias: group.canonical(),
                source: Source::Header,
            };
        }

        Selection {
            alias: self.default_group().canonical(),
            source: Source::Default,
        }
    }

    /// Resolve a canonical alias from cookie and header strings.
    pub fn resolve(&self, cookie: Option<&str>, header: Option<&str>) -> &str {
        self.select(cookie.map(str::as_bytes), header.map(str::as_bytes))
            .alias
    }
}
