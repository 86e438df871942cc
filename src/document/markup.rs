//! HTML entity decoding and tag stripping, regex-free.
//!
//! The raw corpus double-escapes its markup: a record can contain
//! `&lt;br&gt;` which only becomes a `<br>` tag after entity decoding. Both
//! passes are simple scans; no HTML parser is involved.

/// Decode HTML entities (`&amp;`, `&lt;`, `&#xd;`, …) into characters.
///
/// Unknown entities are kept verbatim.
pub fn decode_entities(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '&' {
            result.push_str(&decode_one_entity(&mut chars));
        } else {
            result.push(ch);
        }
    }
    result
}

/// Decode a single entity, the `&` already consumed.
fn decode_one_entity(chars: &mut std::iter::Peekable<std::str::Chars>) -> String {
    let mut name = String::new();
    let mut terminated = false;

    // Entity names are short; give up after 10 characters.
    for _ in 0..10 {
        match chars.peek() {
            Some(&';') => {
                chars.next();
                terminated = true;
                break;
            }
            Some(&c) if c.is_alphanumeric() || c == '#' => {
                name.push(c);
                chars.next();
            }
            _ => break,
        }
    }
    if !terminated {
        return format!("&{name}");
    }

    match name.as_str() {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        "nbsp" => " ".to_string(),
        numeric if numeric.starts_with('#') => {
            let digits = &numeric[1..];
            let code_point = if digits.starts_with('x') || digits.starts_with('X') {
                u32::from_str_radix(&digits[1..], 16).ok()
            } else {
                digits.parse::<u32>().ok()
            };
            match code_point.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => format!("&{name};"),
            }
        }
        _ => format!("&{name};"),
    }
}

/// Strip `<…>` tag spans, replacing each tag with a space so word
/// boundaries survive `x<br>y`.
pub fn strip_tags(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_tag = false;

    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                result.push(' ');
            }
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result
}
