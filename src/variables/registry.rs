//! Compilation of `[[select_lang]]` entries into a lookup table.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::config::SelectLangConfig;
use crate::negotiation::{GroupConfig, GroupError, Selection};

/// Prefix expected on variable names.
pub const VARIABLE_PREFIX: char = '$';

/// Errors raised while compiling variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariableError {
    #[error("variable name is empty")]
    EmptyName,

    #[error("variable already defined: \"{0}\"")]
    AlreadyDefined(String),

    #[error("variable \"{variable}\": {source}")]
    Groups {
        variable: String,
        #[source]
        source: GroupError,
    },
}

/// One compiled language variable.
#[derive(Debug, Clone)]
pub struct LanguageVariable {
    name: String,
    groups: GroupConfig,
}

impl LanguageVariable {
    /// Variable name without the `$` prefix.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn groups(&self) -> &GroupConfig {
        &self.groups
    }
}

/// All configured language variables in definition order.
#[derive(Debug, Clone, Default)]
pub struct LanguageVariables {
    entries: Vec<LanguageVariable>,
}

impl LanguageVariables {
    /// Compile configuration entries.
    ///
    /// Every entry is checked so that all problems are reported at once.
    pub fn from_config(entries: &[SelectLangConfig]) -> Result<Self, Vec<VariableError>> {
        let mut compiled: Vec<LanguageVariable> = Vec::with_capacity(entries.len());
        let mut errors = Vec::new();

        for entry in entries {
            let name = normalize_name(&entry.variable);
            if name.is_empty() {
                errors.push(VariableError::EmptyName);
                continue;
            }

            if compiled.iter().any(|v| v.name.eq_ignore_ascii_case(name)) {
                errors.push(VariableError::AlreadyDefined(name.to_string()));
                continue;
            }

            match GroupConfig::build(&entry.groups) {
                Ok(groups) => compiled.push(LanguageVariable {
                    name: name.to_string(),
                    groups,
                }),
                Err(source) => errors.push(VariableError::Groups {
                    variable: name.to_string(),
                    source,
                }),
            }
        }

        if errors.is_empty() {
            Ok(Self { entries: compiled })
        } else {
            Err(errors)
        }
    }

    /// Look up a variable by name, with or without the `$` prefix.
    pub fn get(&self, name: &str) -> Option<&LanguageVariable> {
        let name = normalize_name(name);
        self.entries
            .iter()
            .find(|v| v.name.eq_ignore_ascii_case(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageVariable> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve every variable for one request.
    pub fn select_all(
        &self,
        cookie: Option<&[u8]>,
        header: Option<&[u8]>,
    ) -> Vec<(&str, Selection<'_>)> {
        self.entries
            .iter()
            .map(|v| (v.name(), v.groups.select(cookie, header)))
            .collect()
    }
}

/// Strip the `$` prefix if present.
pub fn normalize_name(raw: &str) -> &str {
    raw.strip_prefix(VARIABLE_PREFIX).unwrap_or(raw)
}

/// Canonical aliases chosen for the current request, keyed by variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedLanguages(BTreeMap<String, String>);

impl SelectedLanguages {
    pub fn get(&self, name: &str) -> Option<&str> {
        let name = normalize_name(name);
        self.0
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}

impl<'a> FromIterator<(&'a str, Selection<'a>)> for SelectedLanguages {
    fn from_iter<T: IntoIterator<Item = (&'a str, Selection<'a>)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, selection)| (name.to_string(), selection.alias.to_string()))
                .collect(),
        )
    }
}
