//! Terminal rendering of reply markup
//!
//! Backend replies carry light HTML (`<br>`, `<b>`). Terminals get line
//! breaks for `<br>` and `</p>`, other tags are dropped and the common
//! entities are decoded. A `<` that does not open a tag name is plain text.

/// Convert reply markup to plain terminal text.
pub fn to_terminal(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let end = after.find('>').filter(|&end| is_tag(&after[1..end]));
        match end {
            Some(end) => {
                let tag = after[1..end].trim().to_ascii_lowercase();
                if is_line_break(&tag) {
                    out.push('\n');
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push('<');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);

    decode_entities(&out)
}

/// Text between `<` and `>` names a tag: `b`, `/p`, `br /`, `span class="x"`.
fn is_tag(inner: &str) -> bool {
    let name = inner.strip_prefix('/').unwrap_or(inner);
    name.starts_with(|c: char| c.is_ascii_alphabetic()) && !inner.contains('<')
}

fn is_line_break(tag: &str) -> bool {
    let name = tag
        .trim_end_matches('/')
        .split_whitespace()
        .next()
        .unwrap_or("");
    matches!(name, "br" | "/p")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
