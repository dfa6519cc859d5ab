//! Figure and table citation annotation.
//!
//! Scans text for figure/table citation labels and inserts a placeholder
//! block after each match, flagging where a visual asset has to be placed
//! by hand once the prompt output is pasted back into Obsidian.

use regex::Regex;
use std::sync::LazyLock;

/// Matches a citation label: a keyword stem followed by optional whitespace,
/// an integer and an optional decimal sub-index (e.g. "Figure 2.1",
/// "tab. 3", "Tabelul 12"). Longer stems come first so "Figure" is not
/// consumed as "Fig".
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:figure|fig\.|fig|tabelul|table|schema)\s*\d+(?:\.\d+)?").unwrap()
});

/// Insert a placeholder block after every figure/table citation in `text`.
///
/// Matching is case-insensitive and global. The transform is strictly
/// additive: every character of the input is preserved in order, and a text
/// with no citations is returned unchanged. Each block repeats the matched
/// label verbatim, so running the annotator over its own output will match
/// those repeated labels again; callers are expected to annotate a given
/// document once.
pub fn annotate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in CITATION_PATTERN.find_iter(text) {
        out.push_str(&text[last..m.end()]);
        out.push_str(&placeholder_block(m.as_str()));
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Newline-padded marker reserving space for a visual asset.
fn placeholder_block(label: &str) -> String {
    format!("\n\n**[VISUAL PLACEHOLDER: {label} - reserve space for this asset here]**\n\n")
}
