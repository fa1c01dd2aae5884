//! ActionScript declarations.
//!
//! Type annotations are not documented (`name:Type` is reduced to `name`) and
//! variables are not recognized. `function set name(v)` marks a setter.

use super::{Grammar, GrammarSettings};
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
const TYPED_NAME: &str = r"[a-zA-Z_][a-zA-Z0-9_]*(?::[a-zA-Z_][a-zA-Z0-9_]*)?";

pub static SETTINGS: GrammarSettings = GrammarSettings {
    name: "actionscript",
    var_identifier: TYPED_NAME,
    fn_identifier: NAME,
    curly_types: false,
    type_info: false,
    type_tag: "",
    comment_closer: " */",
    bool_type: "bool",
    function_type: "function",
};

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?P<assigned>{var})\s*[:=]\s*)?function(?:\s+(?P<accessor>[gs]et))?(?:\s+(?P<declared>{func}))?\s*\((?P<args>.*)\)",
        var = SETTINGS.var_identifier,
        func = SETTINGS.fn_identifier
    ))
    .unwrap()
});

static RE_PLAIN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^(?P<name>{NAME})")).unwrap());

static RE_ARG_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?P<name>{NAME})(?::(?:{NAME}|\*))?(?:\s*=.*)?")).unwrap()
});

pub struct ActionScript;

impl Grammar for ActionScript {
    fn settings(&self) -> &GrammarSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<FunctionDecl> {
        let caps = RE_FUNCTION.captures(line)?;
        let name = match caps.name("assigned") {
            Some(assigned) => RE_PLAIN_NAME
                .captures(assigned.as_str())
                .map_or("", |c| c.name("name").map_or("", |m| m.as_str())),
            None => caps.name("declared").map_or("", |m| m.as_str()),
        };
        Some(FunctionDecl {
            name: name.to_string(),
            args: caps.name("args").map(|m| m.as_str().to_string()),
            options: FunctionOptions {
                as_setter: caps.name("accessor").is_some_and(|m| m.as_str() == "set"),
            },
        })
    }

    fn parse_variable(&self, _line: &str) -> Option<VariableDecl> {
        None
    }

    fn split_argument(&self, arg: &str) -> Option<Argument> {
        let name = RE_ARG_NAME
            .captures(arg)
            .map_or(arg, |caps| caps.name("name").map_or(arg, |m| m.as_str()));
        Some(Argument::untyped(name))
    }
}
