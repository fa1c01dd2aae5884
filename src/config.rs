//! Generation settings.
//!
//! Settings are read from JSON and validated up front: a bad alignment mode
//! or naming rule fails loading instead of surfacing mid-format.

use crate::align::AlignMode;
use crate::infer::NamingRule;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Validated settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spaces between ` *` and the line text
    pub indentation_spaces: usize,
    pub align_tags: AlignMode,
    /// Fixed lines inserted after the description
    pub extra_tags: Vec<String>,
    /// Naming conventions consulted in order
    pub notation_map: Vec<NamingRule>,
    /// Emit a description field after the return type
    pub return_description: bool,
    pub return_tag: String,
    /// Blank line between tag groups
    pub spacer_between_sections: bool,
    /// Align the return line on its own instead of with the parameters
    pub per_section_indent: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indentation_spaces: 1,
            align_tags: AlignMode::Deep,
            extra_tags: Vec::new(),
            notation_map: Vec::new(),
            return_description: true,
            return_tag: "@return".to_string(),
            spacer_between_sections: false,
            per_section_indent: false,
        }
    }
}

/// Settings file as written by the user.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    indentation_spaces: Option<i64>,
    align_tags: Option<Value>,
    extra_tags: Vec<String>,
    notation_map: Vec<RawNamingRule>,
    return_description: Option<bool>,
    return_tag: Option<String>,
    spacer_between_sections: bool,
    per_section_indent: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawNamingRule {
    prefix: Option<String>,
    regex: Option<String>,
    #[serde(rename = "type")]
    type_name: String,
}

impl Config {
    /// Parse and validate settings from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(text).context("invalid settings JSON")?;
        Self::from_raw(raw)
    }

    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid settings in {}", path.display()))
    }

    /// Indentation placed after the ` *` prefix.
    pub fn indent(&self) -> String {
        " ".repeat(self.indentation_spaces)
    }

    fn from_raw(raw: RawConfig) -> Result<Self> {
        let defaults = Config::default();

        let align_tags = match raw.align_tags {
            None | Some(Value::Null) => defaults.align_tags,
            Some(Value::Bool(true)) => AlignMode::Shallow,
            Some(Value::Bool(false)) => AlignMode::None,
            Some(Value::String(mode)) => mode.parse()?,
            Some(other) => bail!("align_tags must be a string or boolean, got {}", other),
        };

        let notation_map = raw
            .notation_map
            .iter()
            .enumerate()
            .map(|(i, rule)| naming_rule(rule).with_context(|| format!("notation_map[{}]", i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            indentation_spaces: raw
                .indentation_spaces
                .map_or(defaults.indentation_spaces, |n| n.max(0) as usize),
            align_tags,
            extra_tags: raw.extra_tags,
            notation_map,
            return_description: raw.return_description.unwrap_or(defaults.return_description),
            return_tag: raw.return_tag.unwrap_or(defaults.return_tag),
            spacer_between_sections: raw.spacer_between_sections,
            per_section_indent: raw.per_section_indent,
        })
    }
}

fn naming_rule(rule: &RawNamingRule) -> Result<NamingRule> {
    if rule.type_name.trim().is_empty() {
        bail!("naming rule type must not be empty");
    }
    match (&rule.prefix, &rule.regex) {
        (Some(prefix), None) => NamingRule::prefix(prefix, &rule.type_name),
        (None, Some(pattern)) => NamingRule::pattern(pattern, &rule.type_name),
        (Some(_), Some(_)) => bail!("naming rule sets both prefix and regex"),
        (None, None) => bail!("naming rule needs a prefix or a regex"),
    }
}
