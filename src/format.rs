//! Block formatter: turns a parsed declaration into comment body lines.
//!
//! Lines carry no ` * ` decoration yet. Every placeholder is emitted as
//! `${1:...}`; indices are fixed later by [`crate::placeholder::renumber_lines`].

use crate::config::Config;
use crate::grammar::Grammar;
use crate::infer::{self, ReturnHint};
use crate::model::*;
use crate::placeholder::{escape, field, CURSOR, DESCRIPTION, UNKNOWN_TYPE};
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*@([a-zA-Z]+)").unwrap());

/// Tag emitted for setters instead of parameter and return documentation.
pub const SETTER_TAG: &str = "@private";

pub struct Formatter<'a> {
    grammar: &'a dyn Grammar,
    config: &'a Config,
    inline: bool,
}

impl<'a> Formatter<'a> {
    pub fn new(grammar: &'a dyn Grammar, config: &'a Config, inline: bool) -> Self {
        Self {
            grammar,
            config,
            inline,
        }
    }

    /// Format a declaration. `None` yields the bare cursor line.
    pub fn format(&self, declaration: Option<&Declaration>) -> Vec<String> {
        match declaration {
            Some(Declaration::Function(func)) => self.format_function(func),
            Some(Declaration::Variable(var)) => self.format_variable(var),
            None => vec![CURSOR.to_string()],
        }
    }

    fn format_variable(&self, var: &VariableDecl) -> Vec<String> {
        let settings = self.grammar.settings();
        let value_type = var
            .value
            .as_deref()
            .filter(|value| !value.is_empty())
            .and_then(|value| self.grammar.infer_from_value(value))
            .or_else(|| self.infer_from_name(&var.name))
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());

        let type_line = format!(
            "@{} {}",
            settings.type_tag,
            settings.wrap_type(&field(&escape(&value_type)))
        );

        if self.inline {
            vec![format!("{} {}", type_line, field(DESCRIPTION))]
        } else {
            vec![
                field(&format!("[{} description]", escape(&var.name))),
                type_line,
            ]
        }
    }

    fn format_function(&self, func: &FunctionDecl) -> Vec<String> {
        if func.options.as_setter {
            return vec![SETTER_TAG.to_string()];
        }

        let mut out = vec![field(&format!("[{} description]", escape(&func.name)))];
        if self.inline {
            return out;
        }

        out.extend(self.config.extra_tags.iter().cloned());

        let args = func
            .args
            .as_deref()
            .map(|raw| self.grammar.split_arguments(raw))
            .unwrap_or_default();
        for arg in &args {
            out.push(self.param_line(arg));
        }

        let hint = self.grammar.return_hint(&func.name);
        if hint != ReturnHint::NoReturn {
            out.push(self.return_line(&hint, !args.is_empty()));
        }

        out
    }

    fn param_line(&self, arg: &Argument) -> String {
        let settings = self.grammar.settings();
        let type_info = if settings.type_info {
            let type_name = arg
                .type_name
                .clone()
                .or_else(|| self.infer_from_name(&arg.name))
                .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
            format!("{} ", settings.wrap_type(&field(&escape(&type_name))))
        } else {
            String::new()
        };
        format!("@param {}{} {}", type_info, escape(&arg.name), field(DESCRIPTION))
    }

    fn return_line(&self, hint: &ReturnHint, has_args: bool) -> String {
        let settings = self.grammar.settings();
        let type_info = if settings.type_info {
            let type_name = hint.type_name().unwrap_or(UNKNOWN_TYPE);
            format!(" {}", settings.wrap_type(&field(type_name)))
        } else {
            String::new()
        };
        let tag = &self.config.return_tag;

        if !self.config.return_description {
            return format!("{}{}", tag, type_info);
        }
        // The extra space becomes an empty column for the aligner, lining the
        // description up with the @param descriptions.
        let gap = if has_args && !self.config.per_section_indent {
            " "
        } else {
            ""
        };
        format!("{}{} {}{}", tag, type_info, gap, field(DESCRIPTION))
    }

    fn infer_from_name(&self, name: &str) -> Option<String> {
        infer::infer_from_name(name, &self.config.notation_map, self.grammar.settings())
    }
}

/// Insert a blank line before each line whose `@tag` differs from the
/// previous tag line's.
pub fn insert_spacers(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() * 2);
    let mut last_tag: Option<String> = None;
    for line in lines {
        if let Some(caps) = RE_TAG.captures(&line) {
            let tag = &caps[1];
            if last_tag.as_deref() != Some(tag) {
                last_tag = Some(tag.to_string());
                out.push(String::new());
            }
        }
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{actionscript::ActionScript, javascript::JavaScript, php::Php};
    use crate::infer::NamingRule;

    fn format_with(grammar: &dyn Grammar, config: &Config, line: &str) -> Vec<String> {
        let declaration = grammar.parse(line);
        Formatter::new(grammar, config, false).format(declaration.as_ref())
    }

    fn format(grammar: &dyn Grammar, line: &str) -> Vec<String> {
        format_with(grammar, &Config::default(), line)
    }

    #[test]
    fn no_declaration_is_cursor_only() {
        assert_eq!(format(&JavaScript, "}"), vec!["$0"]);
    }

    #[test]
    fn mutator_function_has_no_return() {
        assert_eq!(
            format(&JavaScript, "function add(a, b) {"),
            vec![
                "${1:[add description]}",
                "@param {${1:[type]}} a ${1:[description]}",
                "@param {${1:[type]}} b ${1:[description]}",
            ]
        );
    }

    #[test]
    fn unknown_return_gets_generic_type() {
        let out = format(&JavaScript, "function compute(x) {");
        assert_eq!(out.last().unwrap(), "@return {${1:[type]}}  ${1:[description]}");
    }

    #[test]
    fn constructor_has_no_return() {
        let out = format(&JavaScript, "function Widget(el) {");
        assert!(out.iter().all(|l| !l.starts_with("@return")));
    }

    #[test]
    fn predicate_returns_boolean() {
        let out = format(&JavaScript, "function isValid(x) {");
        assert_eq!(out.last().unwrap(), "@return {${1:Boolean}}  ${1:[description]}");
    }

    #[test]
    fn return_without_arguments_has_single_gap() {
        let out = format(&JavaScript, "function compute() {");
        assert_eq!(
            out,
            vec!["${1:[compute description]}", "@return {${1:[type]}} ${1:[description]}"]
        );
    }

    #[test]
    fn setter_is_visibility_only() {
        assert_eq!(format(&JavaScript, "set name(v) {"), vec!["@private"]);
        assert_eq!(format(&ActionScript, "function set name(v:String) {"), vec!["@private"]);
    }

    #[test]
    fn variable_with_literal() {
        assert_eq!(
            format(&JavaScript, "var count = 42;"),
            vec!["${1:[count description]}", "@type {${1:Number}}"]
        );
    }

    #[test]
    fn variable_falls_back_to_name_then_generic() {
        assert_eq!(format(&JavaScript, "isOpen = compute();")[1], "@type {${1:Boolean}}");
        assert_eq!(format(&JavaScript, "total = compute();")[1], "@type {${1:[type]}}");
    }

    #[test]
    fn php_variable_escapes_dollar() {
        assert_eq!(
            format(&Php, "$name = 'x';"),
            vec!["${1:[\\$name description]}", "@var ${1:string}"]
        );
    }

    #[test]
    fn php_constructor() {
        assert_eq!(
            format(&Php, "function __construct($x) {"),
            vec![
                "${1:[__construct description]}",
                "@param ${1:[type]} \\$x ${1:[description]}",
            ]
        );
    }

    #[test]
    fn actionscript_has_no_type_info() {
        assert_eq!(
            format(&ActionScript, "function load(url:String) {"),
            vec![
                "${1:[load description]}",
                "@param url ${1:[description]}",
                "@return  ${1:[description]}",
            ]
        );
    }

    #[test]
    fn declared_type_wins_over_name() {
        let out = format(&Php, "function run(Closure $callback) {");
        assert_eq!(out[1], "@param ${1:Closure} \\$callback ${1:[description]}");
    }

    #[test]
    fn name_inference_for_parameters() {
        let out = format(&JavaScript, "function each(items, callback) {");
        assert_eq!(out[2], "@param {${1:Function}} callback ${1:[description]}");
    }

    #[test]
    fn notation_map_rules() {
        let config = Config {
            notation_map: vec![NamingRule::prefix("str", "String").unwrap()],
            ..Config::default()
        };
        let out = format_with(&JavaScript, &config, "function greet(strName) {");
        assert_eq!(out[1], "@param {${1:String}} strName ${1:[description]}");
    }

    #[test]
    fn extra_tags_follow_description() {
        let config = Config {
            extra_tags: vec!["@since 1.0".into(), "@author me".into()],
            ..Config::default()
        };
        let out = format_with(&JavaScript, &config, "function add(a) {");
        assert_eq!(out[1], "@since 1.0");
        assert_eq!(out[2], "@author me");
        assert!(out[3].starts_with("@param"));
    }

    #[test]
    fn return_tag_and_description_settings() {
        let config = Config {
            return_tag: "@returns".into(),
            return_description: false,
            ..Config::default()
        };
        let out = format_with(&JavaScript, &config, "function compute(a) {");
        assert_eq!(out.last().unwrap(), "@returns {${1:[type]}}");
    }

    #[test]
    fn per_section_indent_drops_gap() {
        let config = Config {
            per_section_indent: true,
            ..Config::default()
        };
        let out = format_with(&JavaScript, &config, "function compute(a) {");
        assert_eq!(out.last().unwrap(), "@return {${1:[type]}} ${1:[description]}");
    }

    #[test]
    fn inline_variable() {
        let grammar = JavaScript;
        let config = Config::default();
        let declaration = grammar.parse("var ok = true;");
        let out = Formatter::new(&grammar, &config, true).format(declaration.as_ref());
        assert_eq!(out, vec!["@type {${1:Boolean}} ${1:[description]}"]);
    }

    #[test]
    fn inline_function_is_description_only() {
        let grammar = JavaScript;
        let config = Config::default();
        let declaration = grammar.parse("function compute(a, b) {");
        let out = Formatter::new(&grammar, &config, true).format(declaration.as_ref());
        assert_eq!(out, vec!["${1:[compute description]}"]);
    }

    #[test]
    fn spacers_between_tag_groups() {
        let lines = vec![
            "${1:[f description]}".to_string(),
            "@param a".to_string(),
            "@param b".to_string(),
            "@return x".to_string(),
        ];
        assert_eq!(
            insert_spacers(lines),
            vec!["${1:[f description]}", "", "@param a", "@param b", "", "@return x"]
        );
    }

    #[test]
    fn spacers_leave_untagged_lines() {
        assert_eq!(insert_spacers(vec!["$0".to_string()]), vec!["$0"]);
    }
}
