//! Small text helpers shared by the rejection filter, the scorer and the
//! similarity primitives. ASCII-oriented; multi-language handling is out of
//! scope.

use std::collections::HashSet;

use regex::Regex;

/// Words dropped before token-set comparison.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "also", "am", "an", "and", "any", "are",
    "around", "as", "at", "be", "been", "before", "being", "but", "by", "can", "could", "did",
    "do", "does", "during", "for", "from", "had", "has", "have", "he", "her", "here", "him",
    "his", "how", "i", "if", "in", "into", "is", "it", "its", "just", "me", "my", "near", "of",
    "off", "on", "or", "our", "out", "over", "she", "so", "some", "than", "that", "the", "their",
    "them", "then", "there", "these", "they", "this", "to", "under", "up", "us", "was", "we",
    "were", "what", "when", "where", "which", "while", "who", "will", "with", "would", "you",
    "your",
];

/// Lower-cased alphanumeric words, in order. Apostrophes inside words are
/// dropped so "didn't" and "didnt" agree.
pub fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.replace('\'', "").to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

pub fn word_count(text: &str) -> usize {
    words(text).len()
}

/// Distinct content words: lower-cased, stop words removed.
pub fn token_set(text: &str) -> HashSet<String> {
    words(text)
        .into_iter()
        .filter(|w| !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Lower-case, punctuation to spaces, whitespace collapsed.
pub fn normalize(text: &str) -> String {
    words(text).join(" ")
}

/// Sentences split on terminal punctuation; empty fragments dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().any(char::is_alphanumeric))
        .collect()
}

/// Paragraphs separated by a blank line.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Share of alphabetic characters that are upper-case, and the number of
/// alphabetic characters it was computed over.
pub fn caps_ratio(text: &str) -> (f64, usize) {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return (0.0, 0);
    }
    let upper = letters.iter().filter(|c| c.is_uppercase()).count();
    (upper as f64 / letters.len() as f64, letters.len())
}

/// Length of the longest run of one repeated non-whitespace character.
pub fn longest_char_run(text: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<char> = None;
    for c in text.chars() {
        if Some(c) == previous && !c.is_whitespace() {
            current += 1;
        } else {
            current = 1;
        }
        previous = Some(c);
        longest = longest.max(current);
    }
    longest
}

/// Number of distinct (lower-cased) matches of `re` in `text`.
pub fn distinct_hits(re: &Regex, text: &str) -> usize {
    re.find_iter(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
        .collect::<HashSet<_>>()
        .len()
}

/// Builds a case-insensitive whole-word alternation from a term list.
/// Spaces in terms match any whitespace run.
pub fn term_regex(terms: &[&str]) -> Regex {
    let alternation = terms
        .iter()
        .map(|t| regex::escape(t).replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).unwrap()
}
