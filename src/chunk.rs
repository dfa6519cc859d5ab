//! Paragraph-bounded text chunking.
//!
//! Splits long text into chunks under a size ceiling without ever breaking
//! inside a paragraph. A paragraph is a line as delimited by `\n`; interior
//! empty lines are zero-length paragraphs and are preserved.

/// Split `text` into chunks of whole paragraphs, each under `limit`
/// characters.
///
/// Paragraphs are accumulated in order, each re-joined with a trailing
/// `\n`. A paragraph that would bring the running chunk to the limit or
/// beyond starts a new chunk instead. A single paragraph longer than the
/// limit is emitted alone as an oversized chunk; it is never split.
///
/// Concatenating the returned chunks reproduces the input exactly, except
/// that a final `\n` is appended when the input did not end with one. An
/// empty input yields no chunks.
pub fn chunk(text: &str, limit: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    // A trailing line break terminates the last paragraph rather than
    // opening an empty one after it.
    let body = text.strip_suffix('\n').unwrap_or(text);

    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for paragraph in body.split('\n') {
        let paragraph_len = paragraph.chars().count();
        if !buffer.is_empty() && buffer_len + paragraph_len >= limit {
            chunks.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
        buffer.push_str(paragraph);
        buffer.push('\n');
        buffer_len += paragraph_len + 1;
    }
    if !buffer.is_empty() {
        chunks.push(buffer);
    }
    chunks
}
