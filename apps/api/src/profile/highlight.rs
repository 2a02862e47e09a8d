use regex::{Captures, Regex};
use tracing::warn;

const HIGHLIGHT_OPEN: &str = r#"<span class="text-yellow-500 font-bold">"#;
const HIGHLIGHT_CLOSE: &str = "</span>";

/// Wraps whole-word, case-insensitive occurrences of `keywords` in
/// `description` with a highlight span. The span carries the keyword as
/// configured, not as it appeared in the text.
///
/// All keywords are matched in a single pass so a keyword never matches
/// inside markup inserted for another one. Longer keywords win over their
/// prefixes ("React Native" before "React").
pub fn highlight_keywords(description: &str, keywords: &[String]) -> String {
    let mut keywords: Vec<&str> = keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .collect();

    if description.is_empty() || keywords.is_empty() {
        return description.to_string();
    }

    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = match Regex::new(&format!(r"(?i)\b({alternation})\b")) {
        Ok(pattern) => pattern,
        Err(e) => {
            warn!("Could not build keyword highlight pattern: {e}");
            return description.to_string();
        }
    };

    pattern
        .replace_all(description, |caps: &Captures| {
            let matched = &caps[1];
            let keyword = keywords
                .iter()
                .find(|k| k.to_lowercase() == matched.to_lowercase())
                .copied()
                .unwrap_or(matched);
            format!("{HIGHLIGHT_OPEN}{keyword}{HIGHLIGHT_CLOSE}")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_highlights_whole_words_case_insensitively() {
        let out = highlight_keywords("Trabajo con python y Django.", &kw(&["Python", "Django"]));
        assert_eq!(
            out,
            r#"Trabajo con <span class="text-yellow-500 font-bold">Python</span> y <span class="text-yellow-500 font-bold">Django</span>."#
        );
    }

    #[test]
    fn test_does_not_match_inside_words() {
        let out = highlight_keywords("Javascript developer", &kw(&["Java"]));
        assert_eq!(out, "Javascript developer");
    }

    #[test]
    fn test_keywords_do_not_match_inserted_markup() {
        let out = highlight_keywords("Rust", &kw(&["Rust", "font", "span"]));
        assert_eq!(out, r#"<span class="text-yellow-500 font-bold">Rust</span>"#);
    }

    #[test]
    fn test_longer_keyword_wins() {
        let out = highlight_keywords("React Native apps", &kw(&["React", "React Native"]));
        assert!(out.starts_with(r#"<span class="text-yellow-500 font-bold">React Native</span>"#));
    }

    #[test]
    fn test_regex_metacharacters_are_escaped() {
        let out = highlight_keywords("Uso Node.js a diario, no Nodexjs", &kw(&["Node.js"]));
        assert_eq!(
            out,
            r#"Uso <span class="text-yellow-500 font-bold">Node.js</span> a diario, no Nodexjs"#
        );
    }

    #[test]
    fn test_no_keywords_returns_input() {
        assert_eq!(highlight_keywords("Hola", &[]), "Hola");
        assert_eq!(highlight_keywords("Hola", &kw(&["  "])), "Hola");
    }
}
