//! Weak-supervision extraction engine.
//!
//! Pipeline: OCR-noise normalization, candidate generation over every rule
//! active under the resolved language mode, per-label validation, overlap
//! resolution, per-label cleanup.

use tracing::{debug, info, warn};

use crate::error::{CatalogError, RuleError};
use crate::models::config::LabelerConfig;
use crate::models::entity::{Entity, Label, LanguageMode};

use super::rules::{label_priority, MatchRule, RuleCatalog};
use super::{language, validate};

/// Delimiter characters trimmed from candidate edges.
const TRIM_CHARS: &[char] = &[' ', ':', '.', ',', ';', '।', '\n', '\t'];

/// Delimiters trimmed from gender values during cleanup.
const GENDER_TRIM: &[char] = &[' ', ':', '.'];

/// Trailing field-marker words that truncate a Devanagari name.
const NAME_MARKERS: &[&str] = &[
    "लिङ्ग", "महिला", "पुरुष", "जन्म", "स्थान", "जिल्ला", "जन्मम्थानः",
];

/// Administrative-unit markers stripped out of district values.
const DISTRICT_MARKERS: &[&str] = &[
    "नगरपालिका", "नःपाः", "गा.वि.स.", "गाःवि", "गाभयिः", "सः", ":",
];

/// Trait for entity labelers.
pub trait Labeler {
    /// Label entities in `text` under `mode`.
    ///
    /// Always returns a (possibly empty) entity list; rule-level faults are
    /// recovered internally.
    fn label_text(&self, text: &str, mode: LanguageMode) -> Vec<Entity>;
}

/// Rule-based labeler for citizenship document fields.
///
/// Holds the compiled catalog; one instance is built at process start and
/// may be shared across threads, each call operating on its own text.
pub struct WeakLabeler {
    catalog: RuleCatalog,
    config: LabelerConfig,
}

impl WeakLabeler {
    /// Create a labeler with default settings.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_config(LabelerConfig::default())
    }

    /// Create a labeler with explicit settings.
    pub fn with_config(config: LabelerConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            catalog: RuleCatalog::new()?,
            config,
        })
    }

    /// The rule catalog backing this labeler.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Apply the catalog's OCR corrections to the whole text, in declared
    /// order.
    ///
    /// Entity offsets refer to this corrected text, not the raw input.
    pub fn normalize(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for (garbled, canonical) in self.catalog.corrections() {
            if cleaned.contains(garbled) {
                cleaned = cleaned.replace(garbled, canonical);
            }
        }
        cleaned
    }

    /// The language mode extraction would run under for `text`.
    pub fn resolve_language(&self, text: &str, mode: LanguageMode) -> LanguageMode {
        language::resolve(text, mode)
    }

    /// Run one rule over `text`, appending validated candidates.
    ///
    /// A fault abandons this rule's remaining matches only.
    fn apply_rule(
        &self,
        label: Label,
        rule: &MatchRule,
        text: &str,
        mode: LanguageMode,
        out: &mut Vec<Entity>,
    ) -> Result<(), RuleError> {
        let mut at = 0;
        while at <= text.len() {
            let Some(caps) = rule.pattern.captures_at(text, at) else {
                break;
            };
            let whole = caps.get(0).unwrap();

            let (start, end, raw) = if rule.pattern.captures_len() > 1 {
                let group = caps
                    .get(1)
                    .ok_or(RuleError::MissingCapture { at: whole.start() })?;
                let end = if rule.context_tail {
                    group.end()
                } else {
                    whole.end()
                };
                (whole.start(), end, group.as_str())
            } else {
                (whole.start(), whole.end(), whole.as_str())
            };

            let trimmed = raw.trim_matches(TRIM_CHARS);
            if trimmed.chars().count() >= self.config.min_entity_chars
                && validate::is_valid(label, trimmed, mode, self.config.max_entity_chars)
            {
                out.push(Entity::new(trimmed, label, start, end));
            }

            // Resume from the span end so a consumed context tail stays
            // available to this rule's next match.
            at = if end > at {
                end
            } else {
                match text[at..].chars().next() {
                    Some(c) => at + c.len_utf8(),
                    None => break,
                }
            };
        }
        Ok(())
    }

    /// Per-label cleanup of deduplicated entities. Narrows text only;
    /// spans are final.
    fn post_process(&self, entities: Vec<Entity>) -> Vec<Entity> {
        let min = self.config.min_entity_chars;
        let mut result = Vec::with_capacity(entities.len());

        for mut entity in entities {
            match entity.label {
                Label::Name => {
                    let mut text = entity.text.as_str();
                    for marker in NAME_MARKERS {
                        if let Some(pos) = text.find(marker) {
                            text = &text[..pos];
                        }
                    }
                    if let Some(pos) = text.find(':') {
                        text = &text[..pos];
                    }
                    let text = text.trim();
                    if text.chars().count() >= min {
                        entity.text = text.to_string();
                        result.push(entity);
                    }
                }
                Label::District => {
                    let mut text = entity.text.clone();
                    for marker in DISTRICT_MARKERS {
                        if text.contains(marker) {
                            text = text.replace(marker, "");
                        }
                    }
                    // Several tokens left means the rule caught trailing
                    // context; the district name is the first one.
                    let text = text.split_whitespace().next().unwrap_or("");
                    if text.chars().count() >= min {
                        entity.text = text.to_string();
                        result.push(entity);
                    }
                }
                Label::Gender | Label::GenderEn => {
                    let trimmed = entity.text.trim_matches(GENDER_TRIM);
                    let text = match trimmed {
                        "N" | "M" | "F" => format!("{trimmed}."),
                        other => other.to_string(),
                    };
                    if !text.is_empty() {
                        entity.text = text;
                        result.push(entity);
                    }
                }
                _ => result.push(entity),
            }
        }

        result
    }
}

impl Labeler for WeakLabeler {
    fn label_text(&self, text: &str, mode: LanguageMode) -> Vec<Entity> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let resolved = language::resolve(text, mode);
        let cleaned = self.normalize(text);
        info!(
            "Labeling {} characters of text ({} mode)",
            cleaned.chars().count(),
            resolved
        );

        let mut candidates = Vec::new();
        for (label, rules) in self.catalog.iter() {
            if !label.runs_in(resolved) {
                continue;
            }
            for rule in rules {
                if let Err(err) = self.apply_rule(label, rule, &cleaned, resolved, &mut candidates)
                {
                    warn!("Skipping remaining matches of a {label} rule: {err}");
                }
            }
        }
        debug!("Generated {} validated candidates", candidates.len());

        let deduplicated = resolve_overlaps(candidates);
        let entities = self.post_process(deduplicated);
        debug!("Extraction complete: {} entities", entities.len());

        entities
    }
}

/// Reduce validated candidates to a non-overlapping set.
///
/// Candidates are sorted by start offset (stable, so equal starts keep
/// discovery order) and swept once left to right. Each incoming candidate is
/// compared only against the single most recently kept entity: higher
/// priority wins the slot, a priority tie goes to the shorter text, a full
/// tie keeps the earlier entity. The sweep never reconsiders entities kept
/// two or more positions back.
pub(crate) fn resolve_overlaps(mut candidates: Vec<Entity>) -> Vec<Entity> {
    if candidates.is_empty() {
        return candidates;
    }

    candidates.sort_by_key(|entity| entity.start);

    let mut kept: Vec<Entity> = Vec::with_capacity(candidates.len());
    for entity in candidates {
        let Some(last) = kept.last_mut() else {
            kept.push(entity);
            continue;
        };

        if entity.start >= last.end {
            kept.push(entity);
            continue;
        }

        let incoming = label_priority(entity.label);
        let held = label_priority(last.label);
        if incoming > held {
            *last = entity;
        } else if incoming == held
            && entity.text.chars().count() < last.text.chars().count()
        {
            // Same priority: the shorter match is assumed more precise.
            *last = entity;
        }
    }

    kept
}

/// Render `text` with `[matched-text](SHORT)` markers over each entity.
///
/// Markers are inserted back to front, by descending start offset, so
/// earlier insertions never shift offsets still to be processed. `text`
/// must be the normalized text the entities were extracted from; entities
/// whose span does not land on valid boundaries are skipped.
pub fn annotate(text: &str, entities: &[Entity]) -> String {
    if text.is_empty() || entities.is_empty() {
        return text.to_string();
    }

    let mut sorted: Vec<&Entity> = entities.iter().collect();
    sorted.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = text.to_string();
    for entity in sorted {
        let (Some(head), Some(tail)) = (result.get(..entity.start), result.get(entity.end..))
        else {
            continue;
        };
        let marker = format!("[{}]({})", entity.text, entity.label.short_name());
        let mut annotated = String::with_capacity(head.len() + marker.len() + tail.len());
        annotated.push_str(head);
        annotated.push_str(&marker);
        annotated.push_str(tail);
        result = annotated;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeler() -> WeakLabeler {
        WeakLabeler::new().unwrap()
    }

    #[test]
    fn test_empty_input() {
        assert!(labeler().label_text("", LanguageMode::Auto).is_empty());
        assert!(labeler().label_text("   \n ", LanguageMode::Auto).is_empty());
    }

    #[test]
    fn test_normalize_applies_corrections_in_order() {
        let l = labeler();
        assert_eq!(l.normalize("नःपाः"), "नगरपालिका");
        assert_eq!(l.normalize("बडा न. ५"), "वडा न. ५");
        assert_eq!(l.normalize("निङ्ग"), "लिङ्ग");
        assert_eq!(l.normalize("no garble"), "no garble");
    }

    #[test]
    fn test_nepali_scenario() {
        let l = labeler();
        let text = "नाम थरः सुमन शर्मा लिङ्ग पुरुष सालः २०५० महिनाः ०५ गतेः १५";
        let entities = l.label_text(text, LanguageMode::Nepali);

        let find = |label: Label| {
            entities
                .iter()
                .filter(|e| e.label == label)
                .map(|e| e.text.as_str())
                .collect::<Vec<_>>()
        };

        assert_eq!(find(Label::Name), vec!["सुमन शर्मा"]);
        assert_eq!(find(Label::Gender), vec!["पुरुष"]);
        let dates = find(Label::Date);
        assert!(dates.contains(&"२०५०"), "dates: {dates:?}");
        assert!(dates.contains(&"०५"), "dates: {dates:?}");
        assert!(dates.contains(&"१५"), "dates: {dates:?}");

        assert_no_overlaps(&entities);
    }

    #[test]
    fn test_english_scenario() {
        let l = labeler();
        let text = "Full Name: JOHN SMITH Sex: Male Year: 1998";
        let entities = l.label_text(text, LanguageMode::English);

        let texts: Vec<(Label, &str)> = entities
            .iter()
            .map(|e| (e.label, e.text.as_str()))
            .collect();

        assert!(texts.contains(&(Label::NameEn, "JOHN SMITH")), "{texts:?}");
        assert!(texts.contains(&(Label::GenderEn, "Male")), "{texts:?}");
        assert!(
            entities
                .iter()
                .any(|e| e.label == Label::DateEn && e.text.contains("1998")),
            "{texts:?}"
        );
        assert_no_overlaps(&entities);
    }

    #[test]
    fn test_garbled_ward_produces_no_entity() {
        let l = labeler();
        let entities = l.label_text("वडा नं: ?०५", LanguageMode::Nepali);
        assert!(
            entities.iter().all(|e| e.label != Label::Ward),
            "{entities:?}"
        );
    }

    #[test]
    fn test_ward_accepts_clean_digits() {
        let l = labeler();
        let entities = l.label_text("वडा नं: ०५", LanguageMode::Nepali);
        let wards: Vec<_> = entities.iter().filter(|e| e.label == Label::Ward).collect();
        assert_eq!(wards.len(), 1);
        assert_eq!(wards[0].text, "०५");
    }

    #[test]
    fn test_citizenship_number_with_ocr_garble() {
        let l = labeler();
        // प्रजं is corrected to प्रजा॰ before matching.
        let entities = l.label_text("ना.प्रजं. ३४-०१-७५-०१६३७", LanguageMode::Nepali);
        let ids: Vec<_> = entities
            .iter()
            .filter(|e| e.label == Label::CitizenshipNumber)
            .collect();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].text, "३४-०१-७५-०१६३७");
    }

    #[test]
    fn test_district_cleanup_strips_admin_markers() {
        let l = labeler();
        let entities = l.label_text("जिल्ला : काठमाडौं नगरपालिका", LanguageMode::Nepali);
        let districts: Vec<_> = entities
            .iter()
            .filter(|e| e.label == Label::District)
            .collect();
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].text, "काठमाडौं");
    }

    #[test]
    fn test_gender_cleanup_dots_single_letters() {
        let l = labeler();
        let before = vec![
            Entity::new("N", Label::GenderEn, 0, 6),
            Entity::new("Male", Label::GenderEn, 10, 14),
        ];
        let after = l.post_process(before);
        assert_eq!(after[0].text, "N.");
        assert_eq!(after[1].text, "Male");
    }

    #[test]
    fn test_name_cleanup_truncates_at_marker() {
        let l = labeler();
        let before = vec![Entity::new("सुमन शर्मा जन्म", Label::Name, 0, 40)];
        let after = l.post_process(before);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].text, "सुमन शर्मा");
        // Span is untouched by cleanup.
        assert_eq!((after[0].start, after[0].end), (0, 40));
    }

    #[test]
    fn test_name_cleanup_drops_emptied_entity() {
        let l = labeler();
        let before = vec![Entity::new("क जन्म", Label::Name, 0, 10)];
        let after = l.post_process(before);
        assert!(after.is_empty());
    }

    #[test]
    fn test_overlap_priority_wins() {
        // Identical span, identifier outranks municipality regardless of
        // discovery order.
        let a = Entity::new("12-34-56-7890", Label::CitizenshipNumber, 0, 13);
        let b = Entity::new("12-34-56-7890", Label::Municipality, 0, 13);

        let kept = resolve_overlaps(vec![a.clone(), b.clone()]);
        assert_eq!(kept, vec![a.clone()]);

        let kept = resolve_overlaps(vec![b, a.clone()]);
        assert_eq!(kept, vec![a]);
    }

    #[test]
    fn test_overlap_tie_keeps_shorter_text() {
        let long = Entity::new("JOHN SMITH", Label::NameEn, 0, 16);
        let short = Entity::new("SMITH", Label::NameEn, 5, 16);

        let kept = resolve_overlaps(vec![long.clone(), short.clone()]);
        assert_eq!(kept, vec![short]);
        // The longer candidate never displaces a shorter kept one.
        let short_first = Entity::new("SMITH", Label::NameEn, 0, 5);
        let kept = resolve_overlaps(vec![short_first.clone(), Entity::new("JOHN SMITH", Label::NameEn, 2, 16)]);
        assert_eq!(kept, vec![short_first]);
    }

    #[test]
    fn test_overlap_full_tie_keeps_earlier() {
        let first = Entity::new("२०५०", Label::Date, 0, 20);
        let second = Entity::new("०५१२", Label::Date, 4, 16);

        let kept = resolve_overlaps(vec![first.clone(), second]);
        assert_eq!(kept, vec![first]);
    }

    #[test]
    fn test_non_overlapping_candidates_all_kept() {
        let a = Entity::new("aa", Label::Ward, 0, 2);
        let b = Entity::new("bb", Label::Ward, 2, 4);
        let kept = resolve_overlaps(vec![b.clone(), a.clone()]);
        assert_eq!(kept, vec![a, b]);
    }

    #[test]
    fn test_annotate_inserts_markers_back_to_front() {
        let text = "Sex: Male Year: 1998";
        let entities = vec![
            Entity::new("Male", Label::GenderEn, 0, 9),
            Entity::new("1998", Label::DateEn, 10, 20),
        ];
        let rendered = annotate(text, &entities);
        assert_eq!(rendered, "[Male](GENDER) [1998](DATE)");
    }

    #[test]
    fn test_annotate_skips_out_of_bounds_spans() {
        let text = "short";
        let entities = vec![Entity::new("ghost", Label::NameEn, 2, 99)];
        assert_eq!(annotate(text, &entities), "short");
    }

    #[test]
    fn test_determinism() {
        let l = labeler();
        let text = "नाम थरः सुमन शर्मा लिङ्ग पुरुष सालः २०५० महिनाः ०५ गतेः १५";
        let first = l.label_text(text, LanguageMode::Auto);
        let second = l.label_text(text, LanguageMode::Auto);
        assert_eq!(first, second);
    }

    #[test]
    fn test_labeler_is_shareable() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<WeakLabeler>();
    }

    fn assert_no_overlaps(entities: &[Entity]) {
        for pair in entities.windows(2) {
            assert!(
                pair[0].end <= pair[1].start,
                "overlapping entities: {:?} and {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}
