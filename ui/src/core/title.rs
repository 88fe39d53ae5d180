//! Document title derived from the rendered first-level heading.

/// Used when the heading exists but renders no text.
pub const FALLBACK_TITLE: &str = "Portfolio";

/// Title to apply for a given heading text. `None` (no heading rendered)
/// leaves the current title untouched.
pub fn resolve_title(heading: Option<&str>) -> Option<String> {
    let text = heading?.trim();
    if text.is_empty() {
        Some(FALLBACK_TITLE.to_string())
    } else {
        Some(text.to_string())
    }
}

/// Text content of the first `<h1>` in `markup`, with nested tags stripped
/// and the entities produced by the renderer decoded.
pub fn first_heading_text(markup: &str) -> Option<String> {
    let open = find_open_tag(markup, "h1")?;
    let body_start = open + markup[open..].find('>')? + 1;
    let body_len = markup[body_start..].find("</h1>")?;
    let body = &markup[body_start..body_start + body_len];

    let mut text = String::with_capacity(body.len());
    let mut in_tag = false;
    for ch in body.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }

    Some(decode_entities(&text))
}

/// Byte offset of `<name` followed by `>` or whitespace, so `<h1` never
/// matches `<h10`.
fn find_open_tag(markup: &str, name: &str) -> Option<usize> {
    let needle = format!("<{name}");
    let mut from = 0;
    while let Some(pos) = markup[from..].find(&needle) {
        let start = from + pos;
        let after = markup[start + needle.len()..].chars().next();
        if matches!(after, Some(c) if c == '>' || c.is_whitespace() || c == '/') {
            return Some(start);
        }
        from = start + needle.len();
    }
    None
}

fn decode_entities(text: &str) -> String {
    const ENTITIES: [(&str, &str); 7] = [
        ("&lt;", "<"),
        ("&gt;", ">"),
        ("&quot;", "\""),
        ("&#x27;", "'"),
        ("&#39;", "'"),
        ("&nbsp;", "\u{a0}"),
        // last, so `&amp;lt;` decodes to `&lt;` rather than `<`
        ("&amp;", "&"),
    ];
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}
