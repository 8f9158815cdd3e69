//! Per-label pattern tables for citizenship document fields.
//!
//! Patterns run against corrected text, so several entries target garbled
//! forms that the correction table may already have rewritten; they stay in
//! the tables to document the OCR variants and to catch partially corrected
//! text.
//!
//! The regex engine has no lookaround. Rules that need a trailing
//! non-consuming constraint end in a non-capturing alternation and are
//! declared with [`tailed`]: the entity span stops at capture group 1 and
//! the consumed tail only anchors the match.

use crate::models::entity::Label;

/// Source form of a single match rule.
pub struct RuleSpec {
    /// Pattern source, compiled at catalog construction.
    pub pattern: &'static str,

    /// The pattern ends in a context alternation; clamp the span to
    /// capture group 1.
    pub context_tail: bool,
}

const fn rule(pattern: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        context_tail: false,
    }
}

const fn tailed(pattern: &'static str) -> RuleSpec {
    RuleSpec {
        pattern,
        context_tail: true,
    }
}

/// Ordered rule lists per label. Order within a label decides discovery
/// order; label order matches the catalog enumeration.
pub const RULES: &[(Label, &[RuleSpec])] = &[
    (
        Label::CitizenshipNumber,
        &[
            // Labeled forms, tolerant of ? and mixed Devanagari/Latin digits
            rule(r"प्रजं\.?\s*([\d०-९\-\.\?]+)"),
            rule(r"प्रजा॰\.?\s*([\d०-९\-\.\?]+)"),
            rule(r"नाःप्रःनं\.?\s*([\d०-९\-\.\?\s]+)"),
            rule(r"नापप्रग्न.*?:\s*([\d०-९\-\.\?]+)"),
            // Standalone four-group number
            rule(r"\b[\d०-९]{1,2}[-\s\?]+[\d०-९]{1,2}[-\s\?]+[\d०-९]{1,2}[-\s\?]+[\d०-९]{4,5}\b"),
            rule(r"प्रजं[^\d]*([\d०-९].*?[\d०-९])"),
        ],
    ),
    (
        Label::CitizenshipNumberEn,
        &[
            rule(r"(?i)Citizenship\s+[A-Za-z]+\s+No\.?\s*[:\-]\s*([\d\s\-]+)"),
            rule(r"(?i)Citizenship\s+Certificate\s+No\.:\s*([\d\s\-]+)"),
            rule(r"\b\d{2}\s*[\-\s]\s*\d{2}\s*[\-\s]\s*\d{2}\s*[\-\s]\s*\d{4,5}\b"),
            rule(r"(?i)No\.:\s*([\d\-]+)"),
        ],
    ),
    (
        Label::Name,
        &[
            // Stop before the gender or birth field
            tailed(r"नाम\s+थरः\s+([^\n:।]{2,25}?)(?:\s+लिङ्ग|\s+जन्म|\s*[।\n]|$)"),
            tailed(r"नाम\s+थर\s+([^\n:।]{2,25}?)(?:\s+लिङ्ग|\s+जन्म|\s*[।\n]|$)"),
            tailed(r"नामपाः\s+([^\n:।]{2,25}?)(?:\s+लिङ्ग|\s+जन्म|\s*[。\n]|$)"),
            tailed(r"नाम\s+यर\s+([^\n:।]{2,25}?)(?:\s+लिङ्ग|\s+जन्म|\s*[।\n]|$)"),
            tailed(r"नाम थरः\s([^\n:।]{2,30}?)(?:\s+लिङ्ग)"),
        ],
    ),
    (
        Label::NameEn,
        &[
            tailed(r"(?i)Full\s+Name\s*[\(:]?\s*in\s+block\)?\s*:\s*([A-Z][A-Z\s]{2,30}[A-Z])(?:\s+Sex|\s+Date|$)"),
            tailed(r"(?i)Full\s+Name\.:\s*([A-Z][A-Z\s]{2,30}[A-Z])(?:\s+Sex|\s+Date|$)"),
            tailed(r"(?i)Name\s*:\s*([A-Z][A-Z\s]{2,30}[A-Z])(?:\s+Sex|\s+Date|$)"),
            tailed(r"(?i)Full Name\.:\s*([^\n]+?)(?:\s+Sex|\s+Date|\n|$)"),
        ],
    ),
    (
        Label::Gender,
        &[
            tailed(r"लिङ्ग\s+([^\s\n:]{3,8})(?:\s+जन्म|\s+महिला|\s+पुरुष|\s*[।\n]|$)"),
            tailed(r"लिङ्ग\s*:\s*([^\s\n:]{3,8})(?:\s+जन्म|\s+महिला|\s+पुरुष|\s*[।\n]|$)"),
            // Bare gazetteer word; validation keeps this tier safe
            rule(r"\b(महिला|पुरुष|पुरुंष|पुरुब|स्त्री|अन्य|निङ्ग)\b"),
            tailed(r"लिङ्ग[\s:]*([^\s\n:]{3,8})(?:\s+जन्म|\s*[।\n]|$)"),
        ],
    ),
    (
        Label::GenderEn,
        &[
            tailed(r"(?i)Sex\s*:\s*([A-Za-z\.]+)(?:\s+Date|\s+Full|\s*[\.\n]|$)"),
            tailed(r"(?i)Sex\s+([A-Za-z\.]+)(?:\s+Date|\s+Full|\s*[\.\n]|$)"),
            rule(r"(?i)\b(Male|Female|Other|N\.|M\.|F\.)\b"),
            tailed(r"(?i)Sex\s*:\s*([^\n]{1,10})(?:\s+Date|\s+Full|\n|$)"),
        ],
    ),
    (
        Label::Date,
        &[
            tailed(r"सालः\s*([०-९]{4})(?:\s+महिनाः|\s*[।\n]|$)"),
            tailed(r"महिनाः\s*([०-९]{1,2})(?:\s+गतेः|\s*[।\n]|$)"),
            tailed(r"गतेः\s*([०-९]{1,2})(?:\s+[^\s]|\s*[।\n]|$)"),
            tailed(r"मितिः\s*([०-९]{4})(?:\s+महिनाः|\s*[।\n]|$)"),
            // Any bare four-digit Devanagari year
            rule(r"\b[०-९]{4}\b"),
            rule(r"सालः\s*([०-९]+)"),
            rule(r"महिनाः\s*([०-९]+)"),
            rule(r"गतेः\s*([०-९]+)"),
        ],
    ),
    (
        Label::DateEn,
        &[
            tailed(r"(?i)Year\s*:\s*(\d{4})(?:\s+Month|\s+Day|\s*[\.\n]|$)"),
            tailed(r"(?i)Month\s*:\s*([A-Za-z\d]{2,})(?:\s+Day|\s*[\.\n]|$)"),
            tailed(r"(?i)Day\s*:\s*(\d{1,2})(?:\s+Birth|\s*[\.\n]|$)"),
            rule(r"(?i)Date of Birth.*?Year[:\s]*(\d{4})"),
            rule(r"(?i)Date of Birth.*?Month[:\s]*([A-Za-z\d]{2,})"),
            rule(r"(?i)Date of Birth.*?Day[:\s]*(\d{1,2})"),
            rule(r"\b\d{4}\b"),
            rule(r"\b\d{1,2}\b"),
            rule(r"(?i)Year[:\s]*(\d{4})"),
            rule(r"(?i)Month[:\s]*([A-Za-z\d]+)"),
            rule(r"(?i)Day[:\s]*(\d{1,2})"),
        ],
    ),
    (
        Label::District,
        &[
            tailed(r"जिल्ला\s*:\s*([^\n:।]{3,20})(?:\s+[नगाः]|\s*[।\n]|$)"),
            tailed(r"जिल्ला\s+([^\n:।]{3,20})(?:\s*[:।\n]|$)"),
            rule(r"जिल्ला[^\n]{0,20}:\s*([^\n:।]{3,20})"),
        ],
    ),
    (
        Label::Ward,
        &[
            tailed(r"वडा\s*नं\.?\s*:\s*([०-९\d]+)(?:\s+[^\s]|\s*[।\n]|$)"),
            tailed(r"वडा\s*नं\.?\s*([०-९\d]+)(?:\s+[^\s]|\s*[।\n]|$)"),
            tailed(r"वडा\s*:\s*([०-९\d]+)(?:\s+[^\s]|\s*[।\n]|$)"),
            // व misread as ब or य
            tailed(r"बडा\s*न\.?\s*([०-९\d]+)(?:\s+[^\s]|\s*[।\n]|$)"),
            rule(r"वडा\s*न\.?\s*:\s*([०-९\d]+)"),
            rule(r"यडा\s*न\.?\s*([०-९\d]+)"),
        ],
    ),
    (
        Label::WardEn,
        &[
            tailed(r"(?i)Ward\s+No\.\s*:\s*(\d+)(?:\s+[A-Z]|\s*[\.\n]|$)"),
            tailed(r"(?i)Ward\s+No\.\s*(\d+)(?:\s+[A-Z]|\s*[\.\n]|$)"),
            rule(r"(?i)Ward\s+No\.\s*:\s*(\d+)"),
        ],
    ),
    (
        Label::Municipality,
        &[
            rule(r"नगरपालिका\s*:\s*([^\n:।]{3,30})"),
            rule(r"नःपा\.?\s*:\s*([^\n:।]{3,30})"),
            rule(r"गा\.वि\.स\.\s*:\s*([^\n:।]{3,30})"),
            rule(r"गाःवि[^\n]{0,10}:\s*([^\n:।]{3,30})"),
        ],
    ),
    (
        Label::MunicipalityEn,
        &[
            rule(r"(?i)Municipality\s*:\s*([^\n:]{3,30})"),
            rule(r"(?i)VDC\s*:\s*([^\n:]{3,30})"),
            rule(r"(?i)Sub-Metropolitan\s*:\s*([^\n:]{3,30})"),
        ],
    ),
];
