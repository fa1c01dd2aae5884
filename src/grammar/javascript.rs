//! JavaScript declarations.
//!
//! Functions: `name = function(args)`, `name: function(args)`,
//! `function name(args)` and accessor shorthand `set name(v) {`.
//! Both `set name(v) {` and a function named `setName` are setters.
//! Variables: `name = value`, `obj.prop: value`.

use super::{Grammar, GrammarSettings};
use crate::infer;
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

pub(crate) const IDENTIFIER: &str = r"[a-zA-Z_$][a-zA-Z_$0-9]*";

pub static SETTINGS: GrammarSettings = GrammarSettings {
    name: "javascript",
    var_identifier: IDENTIFIER,
    fn_identifier: IDENTIFIER,
    curly_types: true,
    type_info: true,
    type_tag: "type",
    comment_closer: " */",
    bool_type: "Boolean",
    function_type: "Function",
};

static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?:(?P<assigned>{var})\s*[:=]\s*)?function(?:\s+(?P<declared>{func}))?\s*\((?P<args>.*)\)",
        var = SETTINGS.var_identifier,
        func = SETTINGS.fn_identifier
    ))
    .unwrap()
});

static RE_ACCESSOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?:static\s+)?(?P<kind>get|set)\s+(?P<name>{id})\s*\((?P<args>.*)\)\s*\{{",
        id = SETTINGS.fn_identifier
    ))
    .unwrap()
});

static RE_SETTER_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^set[A-Z_]").unwrap());

static RE_VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<name>{id}(?:\.{id})*)\s*[=:]\s*(?P<value>.*?)(?:[;,]|$)",
        id = SETTINGS.var_identifier
    ))
    .unwrap()
});

static RE_DEFAULTED_ARG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^(?P<name>{id})\s*=\s*(?P<value>.*)$",
        id = IDENTIFIER
    ))
    .unwrap()
});

pub struct JavaScript;

impl Grammar for JavaScript {
    fn settings(&self) -> &GrammarSettings {
        &SETTINGS
    }

    fn parse_function(&self, line: &str) -> Option<FunctionDecl> {
        if let Some(caps) = RE_FUNCTION.captures(line) {
            // "name1 = function name2(foo)" prefers name1
            let name = caps
                .name("assigned")
                .or_else(|| caps.name("declared"))
                .map_or("", |m| m.as_str());
            return Some(FunctionDecl {
                name: name.to_string(),
                args: caps.name("args").map(|m| m.as_str().to_string()),
                options: FunctionOptions {
                    as_setter: RE_SETTER_NAME.is_match(name),
                },
            });
        }

        let caps = RE_ACCESSOR.captures(line)?;
        Some(FunctionDecl {
            name: caps["name"].to_string(),
            args: Some(caps["args"].to_string()),
            options: FunctionOptions {
                as_setter: &caps["kind"] == "set",
            },
        })
    }

    fn parse_variable(&self, line: &str) -> Option<VariableDecl> {
        parse_script_variable(line)
    }

    fn split_argument(&self, arg: &str) -> Option<Argument> {
        Some(split_script_argument(arg))
    }

    fn infer_from_value(&self, value: &str) -> Option<String> {
        infer::script_value_type(value)
    }
}

/// `name = value` / `name: value`, shared with CoffeeScript.
pub(crate) fn parse_script_variable(line: &str) -> Option<VariableDecl> {
    let caps = RE_VARIABLE.captures(line)?;
    Some(VariableDecl {
        name: caps["name"].to_string(),
        value: Some(caps["value"].trim().to_string()),
    })
}

/// A bare name, or `name = default` typed from the default.
pub(crate) fn split_script_argument(arg: &str) -> Argument {
    match RE_DEFAULTED_ARG.captures(arg) {
        Some(caps) => Argument {
            type_name: infer::script_value_type(&caps["value"]),
            name: caps["name"].to_string(),
        },
        None => Argument::untyped(arg),
    }
}
