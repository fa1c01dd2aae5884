//! Grammar variants: one declaration parser per source language family.
//!
//! Each variant implements [`Grammar`]: it recognizes a single declaration line,
//! splits its argument list and guesses types for literal values. The shared
//! control flow (function first, then variable) lives in the trait's provided
//! methods so a variant only states what differs.

pub mod actionscript;
pub mod coffee;
pub mod javascript;
pub mod php;

use crate::infer::{self, ReturnHint};
use crate::model::{Argument, Declaration, FunctionDecl, VariableDecl};
use anyhow::{anyhow, Result};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

static RE_INLINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*.*?\*/").unwrap());

static RE_ARG_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());

static RE_COMMENT_CONTINUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\*").unwrap());

/// Names accepted by [`create_grammar`].
pub const GRAMMAR_NAMES: &[&str] = &["javascript", "php", "coffee", "actionscript"];

/// Immutable per-language settings.
#[derive(Debug)]
pub struct GrammarSettings {
    pub name: &'static str,
    /// Pattern for variable names (may include member access)
    pub var_identifier: &'static str,
    /// Pattern for function names
    pub fn_identifier: &'static str,
    /// Wrap type annotations in `{}`
    pub curly_types: bool,
    /// Emit type annotations on `@param`/`@return`
    pub type_info: bool,
    /// Tag documenting a variable's type, without the `@`
    pub type_tag: &'static str,
    pub comment_closer: &'static str,
    pub bool_type: &'static str,
    pub function_type: &'static str,
}

impl GrammarSettings {
    /// Apply the grammar's brace convention to a type annotation.
    pub fn wrap_type(&self, text: &str) -> String {
        if self.curly_types {
            format!("{{{}}}", text)
        } else {
            text.to_string()
        }
    }

    /// Map the generic names `bool`/`function` to this grammar's spelling.
    pub fn resolve_type<'a>(&'a self, name: &'a str) -> &'a str {
        match name {
            "bool" => self.bool_type,
            "function" => self.function_type,
            other => other,
        }
    }
}

/// Declaration parser for one grammar variant.
pub trait Grammar {
    fn settings(&self) -> &GrammarSettings;

    /// Recognize a function head, returning its name, raw arguments and flags.
    fn parse_function(&self, line: &str) -> Option<FunctionDecl>;

    /// Recognize a variable declaration or assignment.
    fn parse_variable(&self, line: &str) -> Option<VariableDecl>;

    /// Name and type of a single, already trimmed argument. `None` skips it.
    fn split_argument(&self, arg: &str) -> Option<Argument>;

    /// Type of a literal value, when its shape gives it away.
    fn infer_from_value(&self, _value: &str) -> Option<String> {
        None
    }

    /// Heuristic return type from the function name. See [`ReturnHint`].
    fn return_hint(&self, name: &str) -> ReturnHint {
        infer::return_hint_from_name(name, self.settings())
    }

    /// Function first, then variable. `None` is a normal outcome.
    fn parse(&self, line: &str) -> Option<Declaration> {
        if let Some(func) = self.parse_function(line) {
            debug!(grammar = self.settings().name, name = %func.name, "function declaration");
            return Some(Declaration::Function(func));
        }
        let var = self.parse_variable(line)?;
        debug!(grammar = self.settings().name, name = %var.name, "variable declaration");
        Some(Declaration::Variable(var))
    }

    /// Split a raw argument list on commas after removing inline block comments.
    ///
    /// Commas nested in default values are not balanced; the supported
    /// grammars rarely need it on a declaration head.
    fn split_arguments(&self, raw: &str) -> Vec<Argument> {
        let stripped = RE_INLINE_COMMENT.replace_all(raw, "");
        RE_ARG_SEPARATOR
            .split(&stripped)
            .map(str::trim)
            .filter(|arg| !arg.is_empty())
            .filter_map(|arg| {
                let parsed = self.split_argument(arg);
                trace!(arg, ?parsed, "argument");
                parsed
            })
            .collect()
    }

    /// True when `line` continues an open comment block.
    fn is_existing_comment(&self, line: &str) -> bool {
        RE_COMMENT_CONTINUATION.is_match(line)
    }
}

/// Create the grammar for the given name.
pub fn create_grammar(name: &str) -> Result<Box<dyn Grammar>> {
    match name {
        "javascript" | "js" => Ok(Box::new(javascript::JavaScript)),
        "php" => Ok(Box::new(php::Php)),
        "coffee" | "coffeescript" => Ok(Box::new(coffee::Coffee)),
        "actionscript" | "as" => Ok(Box::new(actionscript::ActionScript)),
        _ => Err(anyhow!(
            "unknown grammar: {}. Use {}",
            name,
            GRAMMAR_NAMES.join(", ")
        )),
    }
}
