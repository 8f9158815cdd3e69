//! Per-label validation of raw candidates.

use lazy_static::lazy_static;
use regex::Regex;

use super::rules::gazetteer;
use crate::models::entity::{Label, LanguageMode};

lazy_static! {
    /// Three digit groups interleaved with hyphen/space separators.
    static ref ID_GROUPED: Regex =
        Regex::new(r"[\d०-९].*?[\-\s].*?[\d०-९].*?[\-\s].*?[\d०-९]").unwrap();

    /// Four-digit Gregorian year, century 19 or 20.
    static ref YEAR_EN: Regex = Regex::new(r"\b(19|20)\d{2}\b").unwrap();

    /// Day of month, 1-31.
    static ref DAY_EN: Regex = Regex::new(r"\b([1-9]|[12][0-9]|3[01])\b").unwrap();

    /// Any run of Devanagari digits.
    static ref DIGITS_NE: Regex = Regex::new(r"[०१२३४५६७८९]+").unwrap();

    /// Entirely ASCII digits.
    static ref PURELY_NUMERIC: Regex = Regex::new(r"^\d+$").unwrap();
}

/// English month abbreviations recognized by date validation.
const MONTHS_EN: &[&str] = &[
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

/// Digit and separator characters accepted by the permissive identifier
/// check. Deliberately broad: recall is preferred over precision for
/// certificate numbers.
const ID_CHARS: &str = "0123456789०१२३४५६७८९-";

/// Devanagari digits.
const DIGITS_DEVANAGARI: &str = "०१२३४५६७८९";

/// Field-label fragments whose presence means a name rule over-captured
/// into an adjacent field.
const NAME_BLOCKLIST: &[&str] = &[
    "लिङ्ग", "जन्म", "स्थान", "जिल्ला", "Sex", "Date", "Birth", "थरः",
];

/// Accept or reject a trimmed candidate for `label` under the resolved
/// `mode`. `max_default_chars` bounds labels without a family-specific
/// length rule.
pub fn is_valid(label: Label, text: &str, mode: LanguageMode, max_default_chars: usize) -> bool {
    let chars = text.chars().count();
    if chars < 2 {
        return false;
    }

    match label {
        Label::Gender | Label::GenderEn => in_gazetteer(label, text),
        Label::District => {
            district_gazetteer_match(text, chars) || (2..=30).contains(&chars)
        }
        Label::Municipality => (2..=30).contains(&chars),
        Label::CitizenshipNumber | Label::CitizenshipNumberEn => is_valid_identifier(text),
        Label::Date | Label::DateEn => is_valid_date(text, mode),
        Label::Name | Label::NameEn => is_valid_name(text),
        Label::Ward | Label::WardEn => is_all_digits(text),
        // English municipality fields only carry the generic length bound.
        Label::MunicipalityEn => chars <= max_default_chars,
    }
}

/// Case-insensitive exact membership in the label's gazetteer.
fn in_gazetteer(label: Label, text: &str) -> bool {
    let Some(entries) = gazetteer::for_label(label) else {
        return false;
    };
    let upper = text.to_uppercase();
    entries.iter().any(|entry| entry.to_uppercase() == upper)
}

/// District candidates of three or more characters also match on either
/// direction of containment, to survive truncated OCR output.
fn district_gazetteer_match(text: &str, chars: usize) -> bool {
    if in_gazetteer(Label::District, text) {
        return true;
    }
    if chars < 3 {
        return false;
    }
    gazetteer::DISTRICT
        .iter()
        .any(|district| text.contains(district) || district.contains(text))
}

/// A certificate number shows three separated digit groups, or at minimum
/// any digit or separator character at all.
fn is_valid_identifier(text: &str) -> bool {
    ID_GROUPED.is_match(text) || text.chars().any(|c| ID_CHARS.contains(c))
}

fn is_valid_date(text: &str, mode: LanguageMode) -> bool {
    if mode == LanguageMode::English {
        let upper = text.to_uppercase();
        YEAR_EN.is_match(text)
            || MONTHS_EN.iter().any(|month| upper.contains(month))
            || DAY_EN.is_match(text)
    } else {
        DIGITS_NE.is_match(text)
    }
}

fn is_valid_name(text: &str) -> bool {
    if NAME_BLOCKLIST.iter().any(|word| text.contains(word)) {
        return false;
    }
    !PURELY_NUMERIC.is_match(text)
}

fn is_all_digits(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_digit())
        || text.chars().all(|c| DIGITS_DEVANAGARI.contains(c))
}
