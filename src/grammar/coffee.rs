//! CoffeeScript declarations: `name = (args) ->`, `name: (args) =>`.
//!
//! Variables and literal inference follow JavaScript.

use super::javascript::{self, IDENTIFIER};
use super::{Grammar, GrammarSettings};
use crate::infer;
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

pub static SETTINGS: GrammarSettings = GrammarSettings {
    name: "coffee",
    var_identifier: IDENTIFIER,
    fn_identifier: IDENTIFIER,
    curly_types: true,
    type_info: true,
    type_tag: "type",
    comment_closer: "###",
    bool_type: "Boolean",
    function_type: "Function",
};

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?P<name>{id})\s*[:=]\s*)?(?:\((?P<args>[^()]*?)\))?\s*[=-]>",
        id = SETTINGS.fn_identifier
    ))
    .unwrap()
});

pub struct Coffee;

impl Grammar for Coffee {
    fn settings(&self) -> &GrammarSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<FunctionDecl> {
        let caps = RE_FUNCTION.captures(line)?;
        Some(FunctionDecl {
            name: caps.name("name").map_or("", |m| m.as_str()).to_string(),
            args: caps.name("args").map(|m| m.as_str().to_string()),
            options: FunctionOptions::default(),
        })
    }

    fn parse_variable(&self, line: &str) -> Option<VariableDecl> {
        javascript::parse_script_variable(line)
    }

    fn split_argument(&self, arg: &str) -> Option<Argument> {
        Some(javascript::split_script_argument(arg))
    }

    fn infer_from_value(&self, value: &str) -> Option<String> {
        infer::script_value_type(value)
    }
}
