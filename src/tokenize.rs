//! Line normalization and word extraction
//!
//! Every line goes through the same steps regardless of where it came from:
//! - lowercase (locale independent)
//! - any Unicode dash punctuation becomes an ASCII `-`
//! - the right single quotation mark becomes an ASCII `'`
//! - words are one or more word characters, optionally joined to more word
//!   characters by a single `-` or `'` ("fine-tough", "couldn't")
//!
//! Word characters are ASCII letters, digits and underscore.

use regex::Regex;
use std::sync::OnceLock;

const RIGHT_SINGLE_QUOTE: char = '\u{2019}';

fn word_pattern() -> &'static Regex {
    static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();
    WORD_PATTERN.get_or_init(|| {
        Regex::new(r"[[:word:]]+[-']?[[:word:]]*").expect("valid word regex")
    })
}

fn dash_pattern() -> &'static Regex {
    static DASH_PATTERN: OnceLock<Regex> = OnceLock::new();
    DASH_PATTERN.get_or_init(|| Regex::new(r"\p{Pd}").expect("valid dash regex"))
}

/// Lowercase a line and replace Unicode dashes and right single quotes with ASCII
pub fn normalize_line(line: &str) -> String {
    let lowered = line.to_lowercase();
    let dashed = dash_pattern().replace_all(&lowered, "-");

    if dashed.contains(RIGHT_SINGLE_QUOTE) {
        dashed.replace(RIGHT_SINGLE_QUOTE, "'")
    } else {
        dashed.into_owned()
    }
}

/// Extract the normalized words of one line, in order
///
/// Empty lines yield no words.
///
/// # Example
/// ```
/// use wordgrams::tokenize::tokenize_line;
///
/// let words = tokenize_line("The beef was fine\u{2014}tough.");
/// assert_eq!(words, vec!["the", "beef", "was", "fine-tough"]);
/// ```
pub fn tokenize_line(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    let normalized = normalize_line(line);
    word_pattern()
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
