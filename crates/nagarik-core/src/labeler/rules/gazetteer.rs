//! Gazetteers and the OCR-noise correction table.

use crate::models::entity::Label;

/// Accepted gender values, Devanagari script. Includes the truncated OCR
/// form `पुंष`.
pub const GENDER: &[&str] = &["पुरुष", "महिला", "पुंष", "स्त्री", "अन्य", "निङ्ग"];

/// Accepted gender values, Latin script, dotted and bare abbreviations
/// included.
pub const GENDER_EN: &[&str] = &["Male", "Female", "Other", "N.", "M.", "F.", "N"];

/// Known district names, including frequent OCR misreadings (`गाःदि`,
/// `बागलुड`).
pub const DISTRICT: &[&str] = &[
    "काभ्रेपलाञ्चोक",
    "काठमाडौं",
    "म्याग्दी",
    "सप्तरी",
    "उदयपुर",
    "सिन्धुपाल्चोक",
    "ललितपुर",
    "मकवानपुर",
    "मोरङ",
    "गुल्मी",
    "बागलुङ",
    "कास्की",
    "पर्सा",
    "सर्लाही",
    "गाःदि",
    "बागलुड",
];

/// Gazetteer for `label`, if one exists.
pub fn for_label(label: Label) -> Option<&'static [&'static str]> {
    match label {
        Label::Gender => Some(GENDER),
        Label::GenderEn => Some(GENDER_EN),
        Label::District => Some(DISTRICT),
        _ => None,
    }
}

/// OCR-noise corrections applied to the whole text, in order, before any
/// rule runs.
///
/// Order is significant: later substitutions act on the output of earlier
/// ones, and longer garbles must precede their own prefixes (`नःपाः`
/// before `नःपा`).
pub const OCR_CORRECTIONS: &[(&str, &str)] = &[
    ("प्रजं", "प्रजा॰"),
    ("नःपाः", "नगरपालिका"),
    ("नःपा", "नगरपालिका"),
    ("यडा", "वडा"),
    ("बडा", "वडा"),
    ("जिल्ना", "जिल्ला"),
    ("निङ्ग", "लिङ्ग"),
    ("गाःवि", "गा.वि.स."),
    ("गाःपि", "गा.वि.स."),
];
