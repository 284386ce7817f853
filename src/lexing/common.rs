//! Shared line utilities for node lexers
//!
//! Comment removal, keyword pattern building, name validation and quoted string scanning.

use crate::dictionary::{Dictionary, Keyword};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

pub const COMMENT_PREFIX: char = '#';
pub const UI_LITERAL_PREFIX: char = '<';
pub const UI_LITERAL_SUFFIX: char = '>';
pub const VALUE_WRAPPER: char = '"';

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{L}[\p{L}\p{N} ._-]*$").expect("valid name pattern"));

static NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number pattern"));

/// Removes a trailing comment from a line.
///
/// The last `#` starts a comment unless it directly follows a `<` (a UI literal like
/// `<#id>`), or the line ends with `>` or `"`, in which case the `#` belongs to a literal or a
/// value. This is line local and deliberately simple: a comment that itself ends with `"` or
/// `>` is kept as content.
pub fn remove_comment(line: &str) -> &str {
    let trimmed = line.trim_end();
    if trimmed.ends_with(UI_LITERAL_SUFFIX) || trimmed.ends_with(VALUE_WRAPPER) {
        return line;
    }
    match line.rfind(COMMENT_PREFIX) {
        None => line,
        Some(index) if line[..index].ends_with(UI_LITERAL_PREFIX) => line,
        Some(index) => &line[..index],
    }
}

/// Regex alternation for a word list, longest words first so that `dado que` wins over
/// `dado`. Inner spaces match any run of whitespace. `None` when there is no usable word.
pub fn keyword_alternation(words: &[String]) -> Option<String> {
    let mut words: Vec<&str> = words
        .iter()
        .map(|word| word.trim())
        .filter(|word| !word.is_empty())
        .collect();
    if words.is_empty() {
        return None;
    }
    words.sort_by_key(|word| std::cmp::Reverse(word.chars().count()));
    words.dedup();
    let alternatives: Vec<String> = words
        .iter()
        .map(|word| {
            word.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect();
    Some(alternatives.join("|"))
}

/// Builds a case-insensitive keyword regex, `pattern` receiving the alternation.
pub fn keyword_regex(words: &[String], pattern: impl FnOnce(&str) -> String) -> Option<Regex> {
    let alternation = keyword_alternation(words)?;
    Regex::new(&format!("(?i){}", pattern(&alternation))).ok()
}

/// A letter followed by letters, digits, spaces, `.`, `_` or `-`.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

pub fn is_number(value: &str) -> bool {
    NUMBER_REGEX.is_match(value)
}

/// Scans a quoted string at the start of `text`.
///
/// Returns the content between the quotes, with escapes kept verbatim, and the rest of the
/// text after the closing quote. `None` if `text` does not start with a quote or the quote is
/// never closed.
pub fn scan_quoted(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix(VALUE_WRAPPER)?;
    let mut escaped = false;
    for (index, c) in rest.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            VALUE_WRAPPER => return Some((&rest[..index], &rest[index + 1..])),
            _ => {}
        }
    }
    None
}

/// Characters that cannot appear in an import path.
const INVALID_PATH_CHARS: &[char] = &['<', '>', '"', '|', '?', '*'];

/// Path syntax accepted by imports: relative or absolute, `/` or `\` separators, `.` and `..`
/// segments, an optional drive letter.
pub fn is_valid_path(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    if path
        .chars()
        .any(|c| c.is_control() || INVALID_PATH_CHARS.contains(&c))
    {
        return false;
    }
    // A colon is only allowed right after a drive letter
    path.char_indices().all(|(index, c)| {
        c != ':' || (index == 1 && path.chars().next().is_some_and(|d| d.is_ascii_alphabetic()))
    })
}

/// The words of one keyword compiled into a line pattern
///
/// `template` receives the keyword alternation and returns the full pattern; matching is
/// always case-insensitive. Rebinding swaps the words and recompiles, nothing else changes.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    keyword: Keyword,
    template: fn(&str) -> String,
    words: Vec<String>,
    regex: Option<Regex>,
}

impl KeywordPattern {
    pub fn new(keyword: Keyword, template: fn(&str) -> String, dictionary: &Dictionary) -> Self {
        let mut pattern = Self {
            keyword,
            template,
            words: Vec::new(),
            regex: None,
        };
        pattern.rebind(dictionary);
        pattern
    }

    pub fn rebind(&mut self, dictionary: &Dictionary) {
        self.set_words(dictionary.words(self.keyword).to_vec());
    }

    pub fn set_words(&mut self, words: Vec<String>) {
        self.regex = keyword_regex(&words, self.template);
        self.words = words;
    }

    pub fn keyword(&self) -> Keyword {
        self.keyword
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.as_ref()?.captures(text)
    }
}

/// Text of a capture group, empty when the group did not participate.
pub fn group<'t>(captures: &Captures<'t>, index: usize) -> &'t str {
    captures.get(index).map_or("", |m| m.as_str())
}
