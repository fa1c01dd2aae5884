//! Multi-line comment body, inserted after an opening `/**`.

use crate::render::Renderer;

const PREFIX: &str = " *";

pub struct BlockRenderer {
    /// Spaces after ` *` on non-blank lines
    pub indent: String,
    /// Closing token of the grammar, e.g. ` */`
    pub closer: &'static str,
}

impl Renderer for BlockRenderer {
    fn render(&self, lines: &[String]) -> String {
        let mut output = String::new();
        for line in lines {
            output.push('\n');
            output.push_str(PREFIX);
            if !line.is_empty() {
                output.push_str(&self.indent);
                output.push_str(line);
            }
        }
        output.push('\n');
        output.push_str(self.closer);
        output
    }
}

/// Text inserted when the cursor is already inside an open block.
pub fn continuation(indent: &str) -> String {
    format!("\n{}{}", PREFIX, indent)
}
