//! Minimal HTML-to-text conversion for WordPress `rendered` fields.
//!
//! WordPress serves titles, excerpts, and bodies as HTML fragments. The core
//! searches plain text, so tags are dropped and the handful of entities
//! WordPress actually emits are decoded. This is not a sanitizer: the input
//! is the blog's own markup, not untrusted user content.

/// Strip tags and decode basic entities, returning trimmed plain text.
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    decode_entities(&text).trim().to_string()
}

/// Decode the entities WordPress commonly leaves in rendered text.
fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let Some(semi) = rest.find(';') else {
            result.push_str(rest);
            return result;
        };
        // Entities are short; a long gap means a bare ampersand.
        if semi > 8 {
            result.push('&');
            rest = &rest[1..];
            continue;
        }

        let entity = &rest[..=semi];
        match entity {
            "&amp;" => result.push('&'),
            "&lt;" => result.push('<'),
            "&gt;" => result.push('>'),
            "&quot;" => result.push('"'),
            "&#039;" | "&#39;" | "&apos;" => result.push('\''),
            "&nbsp;" => result.push(' '),
            "&#8217;" => result.push('\u{2019}'),
            "&#8230;" | "&hellip;" => result.push('\u{2026}'),
            _ => {
                result.push('&');
                rest = &rest[1..];
                continue;
            }
        }
        rest = &rest[semi + 1..];
    }

    result.push_str(rest);
    result
}
