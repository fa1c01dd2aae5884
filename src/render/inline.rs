//! Single-line fragment, appended after `/**` on the same source line.

use crate::placeholder::CURSOR;
use crate::render::Renderer;

pub struct InlineRenderer;

impl Renderer for InlineRenderer {
    fn render(&self, lines: &[String]) -> String {
        let body = lines.first().map_or(CURSOR, String::as_str);
        format!(" {} */", body)
    }
}
