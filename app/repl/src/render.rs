//! FILENAME: app/repl/src/render.rs
// PURPOSE: Formats tokens, postfix sequences and trees for the terminal.

use crate::config::OutputFormat;
use crate::error::ReplError;
use infix_parser::{Node, Token};

/// Renders a token sequence. Text form mirrors a list literal:
/// `[NUM(2), OP(+), NUM(3)]`.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ReplError> {
    match format {
        OutputFormat::Text => {
            let items: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            Ok(format!("[{}]", items.join(", ")))
        }
        OutputFormat::Json => Ok(serde_json::to_string(tokens)?),
    }
}

/// Renders a tree, or `empty` (`null` in JSON) when there is none.
pub fn render_tree(node: Option<&Node>, format: OutputFormat) -> Result<String, ReplError> {
    match (format, node) {
        (OutputFormat::Text, Some(node)) => Ok(node.to_string()),
        (OutputFormat::Text, None) => Ok("empty".to_string()),
        (OutputFormat::Json, node) => Ok(serde_json::to_string(&node)?),
    }
}
