//! Alias groups and their construction from `alias1:alias2:...` specs.

use thiserror::Error;

/// Delimiter between aliases inside one group specification.
pub const ALIAS_DELIMITER: char = ':';

/// Errors raised while building a [`GroupConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// A specification contained nothing but delimiters.
    #[error("empty alias group at position {index}: {spec:?}")]
    EmptyGroup { index: usize, spec: String },

    /// No specification was supplied, so there is no default.
    #[error("at least one alias group is required")]
    NoGroups,
}

/// An ordered, non-empty set of equivalent aliases.
///
/// The first alias is the canonical one and is what callers get back
/// whenever this group is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasGroup {
    aliases: Vec<String>,
}

impl AliasGroup {
    /// Split a specification into a group.
    ///
    /// Consecutive delimiters collapse, so `"en::en-US:"` yields two
    /// aliases. Returns `None` when no alias survives the split.
    pub fn parse(spec: &str) -> Option<Self> {
        let aliases: Vec<String> = spec
            .split(ALIAS_DELIMITER)
            .filter(|alias| !alias.is_empty())
            .map(str::to_owned)
            .collect();

        if aliases.is_empty() {
            None
        } else {
            Some(Self { aliases })
        }
    }

    /// The alias returned when this group matches, verbatim as configured.
    pub fn canonical(&self) -> &str {
        &self.aliases[0]
    }

    /// All aliases in configured order, canonical first.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }
}

/// Ordered alias groups for one language selection.
///
/// Group 0 is the default. Aliases are expected to be unique across
/// groups; when they are not, the earlier group wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    groups: Vec<AliasGroup>,
}

impl GroupConfig {
    /// Build a config from group specifications, preserving their order.
    ///
    /// Fails on the first specification that yields no alias; nothing is
    /// returned in that case.
    pub fn build<I, S>(specs: I) -> Result<Self, GroupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let groups = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| {
                let spec = spec.as_ref();
                AliasGroup::parse(spec).ok_or_else(|| GroupError::EmptyGroup {
                    index,
                    spec: spec.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if groups.is_empty() {
            return Err(GroupError::NoGroups);
        }

        Ok(Self { groups })
    }

    /// Groups in configured order.
    pub fn groups(&self) -> &[AliasGroup] {
        &self.groups
    }

    /// The fallback group.
    pub fn default_group(&self) -> &AliasGroup {
        &self.groups[0]
    }
}
