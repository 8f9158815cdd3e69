//! Entity and label types for citizenship document fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled span extracted from a document.
///
/// `start` and `end` are half-open byte offsets into the *normalized* text
/// the rules matched against (see `WeakLabeler::normalize`), not the raw
/// input. `text` is the cleaned surface string and may be narrower than the
/// span it was cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Extracted surface text, after trimming and cleanup.
    pub text: String,

    /// Field category.
    pub label: Label,

    /// Start offset in the normalized text.
    pub start: usize,

    /// End offset in the normalized text (exclusive).
    pub end: usize,
}

impl Entity {
    pub fn new(text: impl Into<String>, label: Label, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            label,
            start,
            end,
        }
    }
}

/// Field categories extracted from citizenship documents.
///
/// Labels with an `En` suffix are the Latin-script variants of bilingual
/// fields; the base labels target Devanagari text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    CitizenshipNumber,
    CitizenshipNumberEn,
    Name,
    NameEn,
    Gender,
    GenderEn,
    Date,
    DateEn,
    District,
    Ward,
    WardEn,
    Municipality,
    MunicipalityEn,
}

impl Label {
    /// Every label, in catalog order.
    pub const ALL: [Label; 13] = [
        Label::CitizenshipNumber,
        Label::CitizenshipNumberEn,
        Label::Name,
        Label::NameEn,
        Label::Gender,
        Label::GenderEn,
        Label::Date,
        Label::DateEn,
        Label::District,
        Label::Ward,
        Label::WardEn,
        Label::Municipality,
        Label::MunicipalityEn,
    ];

    /// Catalog name of the label (`NAME`, `NAME_EN`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::CitizenshipNumber => "CITIZENSHIP_NUMBER",
            Label::CitizenshipNumberEn => "CITIZENSHIP_NUMBER_EN",
            Label::Name => "NAME",
            Label::NameEn => "NAME_EN",
            Label::Gender => "GENDER",
            Label::GenderEn => "GENDER_EN",
            Label::Date => "DATE",
            Label::DateEn => "DATE_EN",
            Label::District => "DISTRICT",
            Label::Ward => "WARD",
            Label::WardEn => "WARD_EN",
            Label::Municipality => "MUNICIPALITY",
            Label::MunicipalityEn => "MUNICIPALITY_EN",
        }
    }

    /// Display form used by the annotated rendering: `_EN` and `_NUMBER`
    /// suffixes dropped.
    pub fn short_name(&self) -> &'static str {
        match self {
            Label::CitizenshipNumber | Label::CitizenshipNumberEn => "CITIZENSHIP",
            Label::Name | Label::NameEn => "NAME",
            Label::Gender | Label::GenderEn => "GENDER",
            Label::Date | Label::DateEn => "DATE",
            Label::District => "DISTRICT",
            Label::Ward | Label::WardEn => "WARD",
            Label::Municipality | Label::MunicipalityEn => "MUNICIPALITY",
        }
    }

    /// Whether this label's rules target Latin-script text.
    pub fn is_english_variant(&self) -> bool {
        matches!(
            self,
            Label::CitizenshipNumberEn
                | Label::NameEn
                | Label::GenderEn
                | Label::DateEn
                | Label::WardEn
                | Label::MunicipalityEn
        )
    }

    /// Script-agnostic labels stay active under either explicit mode.
    ///
    /// Bare numeric date tokens appear on both document sides, so the
    /// Devanagari date rules also run during English extraction.
    pub fn is_script_agnostic(&self) -> bool {
        matches!(self, Label::Date)
    }

    /// Whether this label's rules are active under `mode`.
    ///
    /// Extraction resolves `Auto` to an explicit script before filtering;
    /// under `Auto` every label is considered active.
    pub fn runs_in(&self, mode: LanguageMode) -> bool {
        match mode {
            LanguageMode::Nepali => !self.is_english_variant(),
            LanguageMode::English => self.is_english_variant() || self.is_script_agnostic(),
            LanguageMode::Auto => true,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Language mode for an extraction call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguageMode {
    /// Decide from the text itself.
    #[default]
    #[serde(rename = "auto")]
    Auto,

    /// Latin-script rules only (plus script-agnostic labels).
    #[serde(rename = "en")]
    English,

    /// Devanagari rules only.
    #[serde(rename = "ne")]
    Nepali,
}

impl LanguageMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageMode::Auto => "auto",
            LanguageMode::English => "en",
            LanguageMode::Nepali => "ne",
        }
    }

    /// Parse the wire form (`auto`, `en`, `ne`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "auto" => Some(LanguageMode::Auto),
            "en" => Some(LanguageMode::English),
            "ne" => Some(LanguageMode::Nepali),
            _ => None,
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
