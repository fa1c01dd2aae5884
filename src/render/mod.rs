//! Renderer module: trait-based snippet assembly.

pub mod block;
pub mod inline;

/// Turns finished comment lines into the text handed to the editor.
pub trait Renderer {
    fn render(&self, lines: &[String]) -> String;
}

/// Create the renderer for block or inline output.
pub fn create_renderer(inline: bool, indent: String, closer: &'static str) -> Box<dyn Renderer> {
    if inline {
        Box::new(inline::InlineRenderer)
    } else {
        Box::new(block::BlockRenderer { indent, closer })
    }
}
