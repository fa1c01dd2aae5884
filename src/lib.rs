//! docblock: documentation-comment skeletons from a single declaration line.
//!
//! Given the line below a freshly opened `/**`, [`generate`] recognizes the
//! declaration, infers what it can about types, and returns snippet text whose
//! `${N:default}` fields are numbered 1..N top to bottom.
//!
//! Pipeline:
//!
//! 1. **Parse**: the chosen [`grammar::Grammar`] recognizes a function or variable
//! 2. **Format**: [`format::Formatter`] emits description, tag and type lines
//! 3. **Align**: [`align::align`] pads tag lines into columns (block mode only)
//! 4. **Renumber**: [`placeholder::renumber_lines`] makes field indices contiguous
//! 5. **Render**: a [`render::Renderer`] adds the ` * ` prefix and closer
//!
//! The engine performs no I/O and keeps no state between calls.

pub mod align;
pub mod config;
pub mod format;
pub mod grammar;
pub mod infer;
pub mod model;
pub mod placeholder;
pub mod render;

use crate::config::Config;
use crate::format::Formatter;
use crate::grammar::Grammar;
use tracing::{debug, info, trace};

/// Input for one generation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Request<'a> {
    /// Declaration line to document
    pub line: Option<&'a str>,
    /// Line after the insertion point, checked for an open comment block.
    /// Defaults to `line`.
    pub next_line: Option<&'a str>,
    /// Produce a one-line fragment instead of a block
    pub inline: bool,
}

impl<'a> Request<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line: Some(line),
            ..Self::default()
        }
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }
}

/// Generate the snippet for `request`.
pub fn generate(grammar: &dyn Grammar, config: &Config, request: &Request) -> String {
    let settings = grammar.settings();

    let following = request.next_line.or(request.line);
    if following.is_some_and(|line| grammar.is_existing_comment(line)) {
        debug!("continuing an open comment block");
        return render::block::continuation(&config.indent());
    }

    let declaration = request.line.and_then(|line| grammar.parse(line));
    if declaration.is_none() {
        if let Some(line) = request.line.filter(|line| !line.trim().is_empty()) {
            info!(grammar = settings.name, line, "no declaration recognized");
        }
    }

    let mut lines = Formatter::new(grammar, config, request.inline).format(declaration.as_ref());

    if !request.inline && declaration.is_some() {
        let exclude_last = config.per_section_indent
            && lines
                .last()
                .is_some_and(|line| line.starts_with(config.return_tag.as_str()));
        align::align(&mut lines, config.align_tags, exclude_last);
    }

    placeholder::renumber_lines(&mut lines);

    if !request.inline && config.spacer_between_sections {
        lines = format::insert_spacers(lines);
    }
    trace!(?lines, "comment body");

    render::create_renderer(request.inline, config.indent(), settings.comment_closer)
        .render(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::AlignMode;
    use crate::grammar::{actionscript::ActionScript, coffee::Coffee, javascript::JavaScript, php::Php};
    use crate::placeholder::markers;

    fn run(grammar: &dyn Grammar, line: &str) -> String {
        generate(grammar, &Config::default(), &Request::new(line))
    }

    fn indices(text: &str) -> Vec<usize> {
        markers(text).into_iter().map(|(i, _)| i).collect()
    }

    #[test]
    fn function_with_arguments() {
        assert_eq!(
            run(&JavaScript, "function add(a, b) {"),
            "\n * ${1:[add description]}\
             \n * @param {${2:[type]}} a ${3:[description]}\
             \n * @param {${4:[type]}} b ${5:[description]}\
             \n */"
        );
    }

    #[test]
    fn unknown_return_is_aligned_with_parameters() {
        assert_eq!(
            run(&JavaScript, "function compute(a, b) {"),
            "\n * ${1:[compute description]}\
             \n * @param  {${2:[type]}} a ${3:[description]}\
             \n * @param  {${4:[type]}} b ${5:[description]}\
             \n * @return {${6:[type]}}   ${7:[description]}\
             \n */"
        );
    }

    #[test]
    fn constructor_name_has_no_return() {
        assert!(!run(&JavaScript, "function Add(a, b) {").contains("@return"));
    }

    #[test]
    fn setter_accessor() {
        assert_eq!(run(&JavaScript, "function setName(n) {"), "\n * @private\n */");
        assert_eq!(run(&JavaScript, "set name(n) {"), "\n * @private\n */");
        assert_eq!(
            run(&ActionScript, "public function set label(v:String):void {"),
            "\n * @private\n */"
        );
    }

    #[test]
    fn variable_with_inferred_type() {
        assert_eq!(
            run(&JavaScript, "var count = 42;"),
            "\n * ${1:[count description]}\n * @type {${2:Number}}\n */"
        );
    }

    #[test]
    fn php_constructor() {
        assert_eq!(
            run(&Php, "function __construct($x) {"),
            "\n * ${1:[__construct description]}\n * @param ${2:[type]} \\$x ${3:[description]}\n */"
        );
    }

    #[test]
    fn boolean_predicate() {
        assert_eq!(
            run(&JavaScript, "function isValid(x) {"),
            "\n * ${1:[isValid description]}\
             \n * @param  {${2:[type]}}  x ${3:[description]}\
             \n * @return {${4:Boolean}}   ${5:[description]}\
             \n */"
        );
    }

    #[test]
    fn coffee_uses_its_closer() {
        assert_eq!(
            run(&Coffee, "square = (x) ->"),
            "\n * ${1:[square description]}\
             \n * @param  {${2:[type]}} x ${3:[description]}\
             \n * @return {${4:[type]}}   ${5:[description]}\
             \n###"
        );
    }

    #[test]
    fn unrecognized_line() {
        for grammar in [&JavaScript as &dyn Grammar, &Php, &Coffee, &ActionScript] {
            assert_eq!(run(grammar, "}"), "\n * $0\n */".replace(" */", grammar.settings().comment_closer));
        }
    }

    #[test]
    fn no_line_at_all() {
        let out = generate(&JavaScript, &Config::default(), &Request::default());
        assert_eq!(out, "\n * $0\n */");
    }

    #[test]
    fn existing_comment_continues_block() {
        let request = Request {
            line: Some("function add(a) {"),
            next_line: Some("   * @param a"),
            inline: false,
        };
        assert_eq!(generate(&JavaScript, &Config::default(), &request), "\n * ");

        let config = Config {
            indentation_spaces: 3,
            ..Config::default()
        };
        assert_eq!(generate(&JavaScript, &config, &Request::new(" * text")), "\n *   ");
    }

    #[test]
    fn inline_variable() {
        assert_eq!(
            generate(&JavaScript, &Config::default(), &Request::new("var ok = true;").inline()),
            " @type {${1:Boolean}} ${2:[description]} */"
        );
    }

    #[test]
    fn inline_function_and_no_match() {
        let config = Config::default();
        assert_eq!(
            generate(&JavaScript, &config, &Request::new("function go(a) {").inline()),
            " ${1:[go description]} */"
        );
        assert_eq!(generate(&JavaScript, &config, &Request::new("}").inline()), " $0 */");
    }

    #[test]
    fn spacers_between_sections() {
        let config = Config {
            spacer_between_sections: true,
            ..Config::default()
        };
        assert_eq!(
            generate(&JavaScript, &config, &Request::new("function compute(a) {")),
            "\n * ${1:[compute description]}\
             \n *\
             \n * @param  {${2:[type]}} a ${3:[description]}\
             \n *\
             \n * @return {${4:[type]}}   ${5:[description]}\
             \n */"
        );
    }

    #[test]
    fn per_section_indent_aligns_return_separately() {
        let config = Config {
            per_section_indent: true,
            ..Config::default()
        };
        assert_eq!(
            generate(&JavaScript, &config, &Request::new("function compute(a) {")),
            "\n * ${1:[compute description]}\
             \n * @param {${2:[type]}} a ${3:[description]}\
             \n * @return {${4:[type]}} ${5:[description]}\
             \n */"
        );
    }

    #[test]
    fn no_alignment() {
        let config = Config {
            align_tags: AlignMode::None,
            ..Config::default()
        };
        let out = generate(&JavaScript, &config, &Request::new("function compute(a) {"));
        assert!(out.contains("\n * @param {${2:[type]}} a ${3:[description]}\n"));
        assert!(out.contains("\n * @return {${4:[type]}}  ${5:[description]}\n"));
    }

    #[test]
    fn extra_tags_are_renumbered_too() {
        let config = Config {
            extra_tags: vec!["@since ${1:version}".into()],
            ..Config::default()
        };
        let out = generate(&JavaScript, &config, &Request::new("function add(a) {"));
        assert!(out.contains("\n * @since ${2:version}\n"), "{out}");
        assert_eq!(indices(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn empty_rule_type_is_still_renumbered() {
        let config = Config {
            notation_map: vec![crate::infer::NamingRule::prefix("str", "").unwrap()],
            ..Config::default()
        };
        let out = generate(&JavaScript, &config, &Request::new("function greet(strName, b) {"));
        assert_eq!(indices(&out), (1..=9).collect::<Vec<_>>(), "{out}");
        assert!(out.contains("{${2:}}"), "{out}");
    }

    #[test]
    fn placeholders_are_contiguous() {
        let lines = [
            "function isValid(value, callback, isStrict) {",
            "var compute = function(a, b = 2, c = 'x') {",
            "this.name = 'x';",
        ];
        for line in lines {
            let out = run(&JavaScript, line);
            let found = indices(&out);
            assert_eq!(found, (1..=found.len()).collect::<Vec<_>>(), "{out}");
        }
    }
}
