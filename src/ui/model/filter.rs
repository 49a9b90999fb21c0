//! Live text filter for the task list.
//!
//! The filter text is interpreted according to [`FilterMode`] and always matched
//! case-insensitively anywhere inside the name, the way a "contains" search
//! behaves. An invalid regular expression matches nothing.

use crate::config::FilterMode;
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone)]
enum Matcher {
    All,
    Pattern(Regex),
    Nothing,
}

#[derive(Debug, Clone)]
pub struct TextFilter {
    mode: FilterMode,
    text: String,
    matcher: Matcher,
}

impl TextFilter {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            text: String::new(),
            matcher: Matcher::All,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_active(&self) -> bool {
        !self.text.is_empty()
    }

    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
        self.matcher = compile(mode, &self.text);
    }

    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.matcher = compile(self.mode, text);
    }

    pub fn matches(&self, name: &str) -> bool {
        match &self.matcher {
            Matcher::All => true,
            Matcher::Pattern(regex) => regex.is_match(name),
            Matcher::Nothing => false,
        }
    }
}

fn compile(mode: FilterMode, text: &str) -> Matcher {
    if text.is_empty() {
        return Matcher::All;
    }

    let pattern = match mode {
        FilterMode::Regex => text.to_string(),
        FilterMode::Wildcard => wildcard_to_regex(text),
        FilterMode::FixedString => regex::escape(text),
    };

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(regex) => Matcher::Pattern(regex),
        Err(e) => {
            log::debug!("Filter: invalid pattern '{}': {}", text, e);
            Matcher::Nothing
        }
    }
}

/// Translate shell-style wildcards (`*`, `?`, `[...]`, `[!...]`) into an unanchored regex.
pub fn wildcard_to_regex(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            '[' => {
                let close = chars[i + 1..].iter().position(|&c| c == ']').map(|p| p + i + 1);
                match close {
                    Some(end) if end > i + 1 => {
                        out.push('[');
                        let mut body = &chars[i + 1..end];
                        if let Some((&'!', rest)) = body.split_first() {
                            out.push('^');
                            body = rest;
                        }
                        for &c in body {
                            if matches!(c, '\\' | '[' | '&' | '~') {
                                out.push('\\');
                            }
                            out.push(c);
                        }
                        out.push(']');
                        i = end;
                    }
                    _ => out.push_str(r"\["),
                }
            }
            c => {
                let mut buf = [0u8; 4];
                out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = TextFilter::new(FilterMode::Regex);
        assert!(filter.matches("anything"));
        assert!(!filter.is_active());
    }

    #[test]
    fn test_regex_is_case_insensitive_and_unanchored() {
        let mut filter = TextFilter::new(FilterMode::Regex);
        filter.set_text("mkv$");
        assert!(filter.matches("Movie.MKV"));
        assert!(!filter.matches("movie.mkv.part"));
    }

    #[test]
    fn test_invalid_regex_matches_nothing() {
        let mut filter = TextFilter::new(FilterMode::Regex);
        filter.set_text("(");
        assert!(!filter.matches("("));
    }

    #[test]
    fn test_fixed_string_treats_metacharacters_literally() {
        let mut filter = TextFilter::new(FilterMode::FixedString);
        filter.set_text("a.b(");
        assert!(filter.matches("xA.B(y"));
        assert!(!filter.matches("axb("));
    }

    #[test]
    fn test_wildcard() {
        let mut filter = TextFilter::new(FilterMode::Wildcard);
        filter.set_text("*.iso");
        assert!(filter.matches("ubuntu.ISO"));
        assert!(!filter.matches("ubuntu.img"));

        filter.set_text("disc?");
        assert!(filter.matches("Disc1 of 2"));

        filter.set_text("[!a]b");
        assert!(filter.matches("cb"));
        assert!(!filter.matches("ab"));
    }

    #[test]
    fn test_switching_mode_recompiles() {
        let mut filter = TextFilter::new(FilterMode::FixedString);
        filter.set_text("a.c");
        assert!(!filter.matches("abc"));
        filter.set_mode(FilterMode::Regex);
        assert!(filter.matches("abc"));
    }

    #[test]
    fn test_wildcard_translation() {
        assert_eq!(wildcard_to_regex("a*b?"), "a.*b.");
        assert_eq!(wildcard_to_regex("[abc"), r"\[abc");
        assert_eq!(wildcard_to_regex("x.y"), r"x\.y");
    }
}
