//! Splitting text into comparable tokens

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// The unit text is compared in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Lines, each keeping its trailing newline
    #[default]
    Lines,
    /// Identifiers, whitespace runs, and single punctuation characters
    Words,
    Chars,
    /// Extended grapheme clusters
    Graphemes,
}

/// Split `text` into tokens whose concatenation is `text` again
pub fn tokenize(text: &str, granularity: Granularity) -> Vec<&str> {
    match granularity {
        Granularity::Lines => text.split_inclusive('\n').collect(),
        Granularity::Words => words(text),
        Granularity::Chars => text
            .char_indices()
            .map(|(i, ch)| &text[i..i + ch.len_utf8()])
            .collect(),
        Granularity::Graphemes => text.graphemes(true).collect(),
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Space,
    Punct,
}

impl CharClass {
    fn of(ch: char) -> Self {
        if ch.is_alphanumeric() || ch == '_' {
            CharClass::Word
        } else if ch.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Punct
        }
    }
}

/// Separates identifiers from punctuation so code diffs line up on names
fn words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current = None;

    for (i, ch) in text.char_indices() {
        let class = CharClass::of(ch);
        match current {
            Some(prev) if prev == class && class != CharClass::Punct => {}
            Some(_) => {
                tokens.push(&text[start..i]);
                start = i;
            }
            None => {}
        }
        current = Some(class);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}
