//! Type inference helpers.
//!
//! Everything here is a naming- or literal-shape heuristic, not type checking.
//! "No match" is always `None` (or [`ReturnHint::Unknown`]), never an error.

use crate::grammar::GrammarSettings;
use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_PREDICATE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:is|has)[A-Z_]").unwrap());

static RE_CALLBACK_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:cb|callback|done|next|fn)$").unwrap());

static RE_CONSTRUCTOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z]").unwrap());

static RE_MUTATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:set|add)(?:$|[A-Z_])").unwrap());

static RE_PREDICATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:is|has)(?:$|[A-Z_])").unwrap());

static RE_REGEXP_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:RegExp\b|/[^/])").unwrap());

static RE_SCRIPT_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new ([a-zA-Z_$][a-zA-Z_$0-9]*)").unwrap());

static RE_PHP_NEW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"new ([a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*)").unwrap());

// -- Return types -------------------------------------------------------------

/// Best guess at what a function returns, from its name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnHint {
    /// Constructor or mutator: no return tag at all
    NoReturn,
    /// Returns something; emit a generic type placeholder
    Unknown,
    /// Returns this type
    Known(String),
}

impl ReturnHint {
    pub fn type_name(&self) -> Option<&str> {
        match self {
            ReturnHint::Known(name) => Some(name),
            _ => None,
        }
    }
}

/// Naming-convention return hint shared by every grammar.
///
/// One leading `$` or `_` is ignored. Capitalized names are constructors and
/// `set*`/`add*` are mutators (no return); `is*`/`has*` return a boolean.
/// Anything else is [`ReturnHint::Unknown`].
pub fn return_hint_from_name(name: &str, settings: &GrammarSettings) -> ReturnHint {
    let name = name.strip_prefix(['$', '_']).unwrap_or(name);

    if RE_CONSTRUCTOR.is_match(name) || RE_MUTATOR.is_match(name) {
        return ReturnHint::NoReturn;
    }
    if RE_PREDICATE.is_match(name) {
        return ReturnHint::Known(settings.bool_type.to_string());
    }
    ReturnHint::Unknown
}

// -- Names --------------------------------------------------------------------

/// How a [`NamingRule`] recognizes a name.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Literal prefix followed by an uppercase letter or underscore
    Prefix(Regex),
    /// Unanchored pattern
    Pattern(Regex),
}

/// User-supplied naming convention mapping names to a type, e.g. `str` → `String`.
#[derive(Debug, Clone)]
pub struct NamingRule {
    matcher: NameMatcher,
    type_name: String,
}

impl NamingRule {
    pub fn prefix(prefix: &str, type_name: &str) -> Result<Self> {
        let re = Regex::new(&format!("^{}[A-Z_]", regex::escape(prefix)))
            .with_context(|| format!("invalid naming prefix: {}", prefix))?;
        Ok(Self {
            matcher: NameMatcher::Prefix(re),
            type_name: type_name.to_string(),
        })
    }

    pub fn pattern(pattern: &str, type_name: &str) -> Result<Self> {
        let re = Regex::new(pattern)
            .with_context(|| format!("invalid naming pattern: {}", pattern))?;
        Ok(Self {
            matcher: NameMatcher::Pattern(re),
            type_name: type_name.to_string(),
        })
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            NameMatcher::Prefix(re) | NameMatcher::Pattern(re) => re.is_match(name),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

/// Guess a type from an identifier.
///
/// The first matching rule wins; its type `bool`/`function` resolves to the
/// grammar's own spelling. Without a rule, `is*`/`has*` names are booleans and
/// the usual callback names are functions.
pub fn infer_from_name(
    name: &str,
    rules: &[NamingRule],
    settings: &GrammarSettings,
) -> Option<String> {
    if let Some(rule) = rules.iter().find(|rule| rule.matches(name)) {
        return Some(settings.resolve_type(rule.type_name()).to_string());
    }
    if RE_PREDICATE_NAME.is_match(name) {
        return Some(settings.bool_type.to_string());
    }
    if RE_CALLBACK_NAME.is_match(name) {
        return Some(settings.function_type.to_string());
    }
    None
}

// -- Literal values -----------------------------------------------------------

/// True when the text reads as a floating-point number.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Value types for JavaScript-family grammars.
pub fn script_value_type(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if is_numeric(value) {
        return Some("Number".into());
    }
    match value.chars().next() {
        Some('"' | '\'') => return Some("String".into()),
        Some('[') => return Some("Array".into()),
        Some('{') => return Some("Object".into()),
        _ => {}
    }
    if value == "true" || value == "false" {
        return Some("Boolean".into());
    }
    if RE_REGEXP_LITERAL.is_match(value) {
        return Some("RegExp".into());
    }
    if value.starts_with("new ") {
        return RE_SCRIPT_NEW.captures(value).map(|caps| caps[1].to_string());
    }
    None
}

/// Value types for PHP.
pub fn php_value_type(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if is_numeric(value) {
        let name = if value.contains('.') { "float" } else { "integer" };
        return Some(name.into());
    }
    if value.starts_with(['"', '\'']) {
        return Some("string".into());
    }
    if value.starts_with("array") {
        return Some("array".into());
    }
    if matches!(
        value.to_lowercase().as_str(),
        "true" | "false" | "filenotfound"
    ) {
        return Some("boolean".into());
    }
    if value.starts_with("new ") {
        return RE_PHP_NEW.captures(value).map(|caps| caps[1].to_string());
    }
    None
}
