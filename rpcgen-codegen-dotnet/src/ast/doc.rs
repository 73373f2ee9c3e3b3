//! XML documentation comments.

use rpcgen_codegen::builder::CodeFragment;

/// Escape the characters XML doc comments reserve.
pub fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A `/// <summary>` block, one doc line per line of `text`.
pub fn summary(text: &str) -> Vec<CodeFragment> {
    let mut fragments = vec![CodeFragment::line("/// <summary>")];
    for line in text.lines() {
        fragments.push(CodeFragment::line(
            format!("/// {}", xml_escape(line)).trim_end(),
        ));
    }
    fragments.push(CodeFragment::line("/// </summary>"));
    fragments
}
