//! Language mode selection.

use crate::models::entity::LanguageMode;

/// Leading characters inspected by auto-detection.
const DETECTION_PREFIX_CHARS: usize = 500;

/// Resolve `mode` against `text`, turning `Auto` into an explicit script.
pub fn resolve(text: &str, mode: LanguageMode) -> LanguageMode {
    match mode {
        LanguageMode::Auto => detect(text),
        explicit => explicit,
    }
}

/// Classify the leading 500 characters as Devanagari or Latin.
///
/// A single-script prefix wins outright; otherwise the majority count
/// decides. Ties, including text with no letters at all, go to English.
fn detect(text: &str) -> LanguageMode {
    let mut devanagari = 0usize;
    let mut latin = 0usize;

    for c in text.chars().take(DETECTION_PREFIX_CHARS) {
        if is_devanagari_letter(c) {
            devanagari += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    if devanagari > 0 && latin == 0 {
        LanguageMode::Nepali
    } else if latin > 0 && devanagari == 0 {
        LanguageMode::English
    } else if devanagari > latin {
        LanguageMode::Nepali
    } else {
        LanguageMode::English
    }
}

/// Devanagari letters, matras and combining signs. Excludes the danda and
/// Devanagari digits, which carry no script evidence on these documents.
fn is_devanagari_letter(c: char) -> bool {
    matches!(c, '\u{0901}'..='\u{0963}')
}
