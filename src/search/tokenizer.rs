use std::collections::BTreeSet;

/// Characters that separate words in catalog text, in addition to whitespace
const DELIMITERS: &[char] = &[',', '(', ')', '[', ']', '/', '-'];

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || DELIMITERS.contains(&c)
}

/// Split text into the set of lowercase words used for exact-token search
///
/// Splits on runs of whitespace, commas, parentheses, brackets, slashes and hyphens.
/// No stemming and no stop words.
///
/// # Examples
///
/// ```
/// use brick_tracker::search::tokenize;
///
/// let tokens = tokenize("Dark Bluish Gray (Trans)");
/// let expected: Vec<&str> = vec!["bluish", "dark", "gray", "trans"];
/// assert_eq!(tokens.iter().map(String::as_str).collect::<Vec<_>>(), expected);
/// ```
pub fn tokenize(text: &str) -> BTreeSet<String> {
    if text.is_empty() {
        return BTreeSet::new();
    }

    text.to_lowercase()
        .split(is_delimiter)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize the identity fields of a part or sticker line
pub fn tokenize_identity(part_id: &str, name: &str, category: &str, color: &str) -> BTreeSet<String> {
    tokenize(&format!("{} {} {} {}", part_id, name, category, color))
}
