//! PHP declarations.
//!
//! Arguments may carry a leading type hint (`Array $x`) or a default
//! (`$y = 1`). Magic methods get their well-known return types.

use super::{Grammar, GrammarSettings};
use crate::infer::{self, ReturnHint};
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

const NAME: &str = r"[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*";
const VARIABLE: &str =
    r"[$][a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*(?:->[a-zA-Z_\x7f-\xff][a-zA-Z0-9_\x7f-\xff]*)*";

pub static SETTINGS: GrammarSettings = GrammarSettings {
    name: "php",
    var_identifier: VARIABLE,
    fn_identifier: NAME,
    curly_types: false,
    type_info: true,
    type_tag: "var",
    comment_closer: " */",
    bool_type: "boolean",
    function_type: "function",
};

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"function\s+&?\s*(?P<name>{func})\s*\((?P<args>.*)\)",
        func = SETTINGS.fn_identifier
    ))
    .unwrap()
});

static RE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<name>{var})\s*=>?\s*(?P<value>.*?)(?:[;,]|$)",
        var = SETTINGS.var_identifier
    ))
    .unwrap()
});

static RE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?:var|public|private|protected|static)\s+(?P<name>{var})",
        var = SETTINGS.var_identifier
    ))
    .unwrap()
});

static RE_DEFAULTED_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"{VARIABLE}\s*=\s*(?P<value>.*)")).unwrap());

static RE_TYPE_HINT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hint>[^\s$&]\S*)\s").unwrap());

static RE_ARG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?P<name>{VARIABLE})(?:\s*=.*)?$")).unwrap());

pub struct Php;

impl Grammar for Php {
    fn settings(&self) -> &GrammarSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<FunctionDecl> {
        let caps = RE_FUNCTION.captures(line)?;
        Some(FunctionDecl {
            name: caps["name"].to_string(),
            args: Some(caps["args"].to_string()),
            options: FunctionOptions::default(),
        })
    }

    fn parse_variable(&self, line: &str) -> Option<VariableDecl> {
        if let Some(caps) = RE_ASSIGNMENT.captures(line) {
            return Some(VariableDecl {
                name: caps["name"].to_string(),
                value: Some(caps["value"].trim().to_string()),
            });
        }
        let caps = RE_DECLARATION.captures(line)?;
        Some(VariableDecl {
            name: caps["name"].to_string(),
            value: None,
        })
    }

    fn split_argument(&self, arg: &str) -> Option<Argument> {
        let name = RE_ARG_NAME.captures(arg)?["name"].to_string();
        let hint = RE_TYPE_HINT.captures(arg).map(|caps| caps["hint"].to_string());
        let type_name = RE_DEFAULTED_ARG
            .captures(arg)
            .and_then(|caps| infer::php_value_type(&caps["value"]))
            .or(hint);
        Some(Argument { type_name, name })
    }

    fn infer_from_value(&self, value: &str) -> Option<String> {
        infer::php_value_type(value)
    }

    fn return_hint(&self, name: &str) -> ReturnHint {
        match name {
            "__construct" | "__destruct" | "__set" | "__unset" | "__wakeup" => {
                ReturnHint::NoReturn
            }
            "__sleep" => ReturnHint::Known("array".into()),
            "__toString" => ReturnHint::Known("string".into()),
            "__isset" => ReturnHint::Known(SETTINGS.bool_type.to_string()),
            _ => infer::return_hint_from_name(name, &SETTINGS),
        }
    }
}
