/// Build a regex source that matches `text` modulo whitespace drift
///
/// The text is trimmed and escaped. Each inner run of whitespace becomes
/// `\s*` when it sits at a tag boundary (after `>` or before `<`) and
/// `\s+` otherwise, so `<a>  <b>` also matches `<a><b>` while
/// `className="x y"` still needs a separator between `x` and `y`.
pub fn whitespace_tolerant(text: &str) -> String {
    let trimmed = text.trim();
    let mut source = String::with_capacity(trimmed.len() * 2);
    let mut prev: Option<char> = None;
    let mut pending_whitespace = false;
    let mut buf = [0u8; 4];

    for c in trimmed.chars() {
        if c.is_whitespace() {
            pending_whitespace = true;
            continue;
        }

        if pending_whitespace {
            let at_tag_boundary = prev == Some('>') || c == '<';
            source.push_str(if at_tag_boundary { r"\s*" } else { r"\s+" });
            pending_whitespace = false;
        }

        source.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        prev = Some(c);
    }

    source
}
