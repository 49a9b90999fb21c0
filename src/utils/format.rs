//! Text formatting helpers for task rows and clipboard exports.

use humansize::{format_size, BINARY};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Human readable size, e.g. `1.50 MiB`.
#[must_use]
pub fn readable_size(bytes: u64) -> String {
    format_size(bytes, BINARY)
}

/// Escape single quotes so the value stays inside a single-quoted shell argument.
#[must_use]
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "\\'")
}

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(gdriveid|name|link)\}").expect("placeholder pattern is valid"))
}

/// Fill a downloader script template.
///
/// `{gdriveid}`, `{name}` and `{link}` are substituted in a single pass, so a
/// name that itself contains `{link}` is copied literally. Quotes in the name
/// and the link are escaped with [`escape_single_quotes`].
#[must_use]
pub fn render_script(template: &str, gdriveid: &str, name: &str, link: &str) -> String {
    let name = escape_single_quotes(name);
    let link = escape_single_quotes(link);

    placeholder_pattern()
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "gdriveid" => gdriveid.to_string(),
            "name" => name.clone(),
            _ => link.clone(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_size() {
        assert_eq!(readable_size(0), "0 B");
        assert_eq!(readable_size(1024), "1 KiB");
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_single_quotes("O'Brien's file"), "O\\'Brien\\'s file");
        assert_eq!(escape_single_quotes("plain"), "plain");
    }

    #[test]
    fn test_render_script_single_pass() {
        let rendered = render_script("'{name}' '{link}'", "", "{link}", "http://x/y");
        assert_eq!(rendered, "'{link}' 'http://x/y'");
    }

    #[test]
    fn test_render_script_keeps_unknown_placeholders() {
        let rendered = render_script("{gdriveid} {other}", "abc", "n", "l");
        assert_eq!(rendered, "abc {other}");
    }
}
