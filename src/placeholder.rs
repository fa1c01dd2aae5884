//! Snippet placeholder markers: `${N:default}` fields the editor tabs through.
//!
//! Formatting emits every marker with index 1. Once the block is assembled,
//! [`renumber`] rewrites the indices into one contiguous sequence in document
//! order so the host can step through the fields top to bottom.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\$\{)\d+(:[^}]*\})").unwrap());

static RE_MARKER_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{\d+:([^}]*)\}").unwrap());

/// Final cursor position. Never renumbered.
pub const CURSOR: &str = "$0";

/// Default text for a type the inference helpers could not determine.
pub const UNKNOWN_TYPE: &str = "[type]";

/// Default text for a free-form description field.
pub const DESCRIPTION: &str = "[description]";

/// Build a marker with the provisional index 1.
pub fn field(default: &str) -> String {
    format!("${{1:{}}}", default)
}

/// Escape `$` so the snippet engine inserts it literally.
pub fn escape(text: &str) -> String {
    text.replace('$', "\\$")
}

/// `text` as it reads once inserted, with every marker showing its default.
pub fn expand(text: &str) -> String {
    RE_MARKER_DEFAULT.replace_all(text, "$1").replace("\\$", "$")
}

/// Display width of `text` once inserted.
///
/// `"${1:foo}"` → 3, `"\$x"` → 2
pub fn display_width(text: &str) -> usize {
    expand(text).chars().count()
}

/// Every `(index, default)` pair in `text`, in order of appearance.
pub fn markers(text: &str) -> Vec<(usize, String)> {
    RE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?.as_str();
            let (index, default) = whole[2..whole.len() - 1].split_once(':')?;
            Some((index.parse().ok()?, default.to_string()))
        })
        .collect()
}

/// Hands out tab-stop indices 1, 2, 3, … to a single renumbering pass.
#[derive(Debug)]
pub struct TabStops {
    next: usize,
}

impl TabStops {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_index(&mut self) -> usize {
        let index = self.next;
        self.next += 1;
        index
    }
}

impl Default for TabStops {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite the marker indices in `text`, drawing from `stops`.
pub fn renumber_with(stops: &mut TabStops, text: &str) -> String {
    RE_MARKER
        .replace_all(text, |caps: &Captures| {
            format!("{}{}{}", &caps[1], stops.next_index(), &caps[2])
        })
        .into_owned()
}

/// Rewrite every marker in `text` so the indices run 1..=N in document order.
pub fn renumber(text: &str) -> String {
    renumber_with(&mut TabStops::new(), text)
}

/// Renumber a block line by line with one shared sequence.
pub fn renumber_lines(lines: &mut [String]) {
    let mut stops = TabStops::new();
    for line in lines.iter_mut() {
        *line = renumber_with(&mut stops, line);
    }
}
