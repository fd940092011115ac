//! Text normalization for scoring: lowercases, splits on non-word characters,
//! removes stop words and single-character tokens, and reduces plural noun
//! forms so "systems" and "system" count as the same term.

/// Sorted for binary search.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "do", "for", "from", "had", "has",
    "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me",
    "my", "no", "not", "of", "on", "or", "our", "out", "so", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "up", "us", "was", "we", "were",
    "what", "when", "which", "who", "will", "with", "would", "you", "your",
];

/// Normalizes raw text into a whitespace-joined token string.
/// The output feeds both the similarity scorer and the skill differ, so the
/// same function is applied to resumes, job descriptions, and vocabulary terms.
pub fn preprocess(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Tokenize a string into normalized terms.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() > 1)
        .map(|w| normalize_token(&w.to_lowercase()))
        .filter(|w| w.len() > 1 && !is_stop_word(w))
        .collect()
}

/// Reduce common plural noun endings. Deliberately shallow: it only touches
/// suffixes that are safe to strip without a dictionary.
fn normalize_token(token: &str) -> String {
    if token.len() < 4 || token.chars().any(|c| c.is_ascii_digit()) {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{stem}ss");
    }
    if token.len() > 4 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
    }
    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    if let Some(stem) = token.strip_suffix('s') {
        return stem.to_string();
    }
    token.to_string()
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
