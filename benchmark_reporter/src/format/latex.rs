//!
//! LaTeX escaping.
//!

use std::borrow::Cow;

///
/// Escapes the characters that LaTeX treats as markup.
///
/// # Example
///
/// ```rust
/// use benchmark_reporter::format::latex::escape;
///
/// assert_eq!(escape("echo_server"), r"echo\_server");
/// assert_eq!(escape("12.5%"), r"12.5\%");
/// assert_eq!(escape("plain"), "plain");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(is_special) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for character in text.chars() {
        match character {
            '_' | '%' | '&' | '#' | '$' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(character);
            }
            '~' => escaped.push_str(r"\textasciitilde{}"),
            '^' => escaped.push_str(r"\textasciicircum{}"),
            '\\' => escaped.push_str(r"\textbackslash{}"),
            character => escaped.push(character),
        }
    }
    Cow::Owned(escaped)
}

fn is_special(character: char) -> bool {
    matches!(
        character,
        '_' | '%' | '&' | '#' | '$' | '{' | '}' | '~' | '^' | '\\'
    )
}
