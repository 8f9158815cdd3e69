//! End-to-end extraction properties over the public API.

use pretty_assertions::assert_eq;
use regex::Regex;

use nagarik_core::{annotate, Entity, Label, Labeler, LanguageMode, WeakLabeler};

const NEPALI_DOC: &str = "नाम थरः सुमन शर्मा लिङ्ग पुरुष सालः २०५० महिनाः ०५ गतेः १५";
const ENGLISH_DOC: &str = "Full Name: JOHN SMITH Sex: Male Year: 1998";

fn labeler() -> WeakLabeler {
    WeakLabeler::new().unwrap()
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

#[test]
fn output_is_sorted_and_non_overlapping() {
    let l = labeler();
    for (doc, mode) in [
        (NEPALI_DOC, LanguageMode::Nepali),
        (ENGLISH_DOC, LanguageMode::English),
        ("ना.प्रजा॰ ३४-०१-७५-०१६३७ जिल्ला : काठमाडौं वडा नं: ०५", LanguageMode::Nepali),
    ] {
        let entities = l.label_text(doc, mode);
        assert!(!entities.is_empty(), "no entities for {doc}");
        assert_no_overlaps(&entities);
        let mut starts: Vec<usize> = entities.iter().map(|e| e.start).collect();
        let sorted = {
            let mut s = starts.clone();
            s.sort_unstable();
            s
        };
        assert_eq!(starts, sorted);
        starts.dedup();
        assert_eq!(starts.len(), entities.len());
    }
}

#[test]
fn identical_input_gives_identical_output() {
    let l = labeler();
    let first = l.label_text(NEPALI_DOC, LanguageMode::Auto);
    let second = l.label_text(NEPALI_DOC, LanguageMode::Auto);
    assert_eq!(first, second);

    // A second labeler instance agrees as well.
    let other = labeler();
    assert_eq!(first, other.label_text(NEPALI_DOC, LanguageMode::Auto));
}

#[test]
fn explicit_english_mode_runs_no_nepali_only_rules() {
    let l = labeler();
    let entities = l.label_text(NEPALI_DOC, LanguageMode::English);
    for entity in &entities {
        assert!(
            entity.label.is_english_variant() || entity.label.is_script_agnostic(),
            "Nepali-only label {} leaked into English mode",
            entity.label
        );
    }
}

#[test]
fn explicit_nepali_mode_runs_no_english_rules() {
    let l = labeler();
    let entities = l.label_text(ENGLISH_DOC, LanguageMode::Nepali);
    for entity in &entities {
        assert!(
            !entity.label.is_english_variant(),
            "English label {} leaked into Nepali mode",
            entity.label
        );
    }
}

#[test]
fn nepali_scenario_extracts_expected_fields() {
    let l = labeler();
    let entities = l.label_text(NEPALI_DOC, LanguageMode::Nepali);

    let of = |label: Label| -> Vec<&str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    };

    assert_eq!(of(Label::Name), vec!["सुमन शर्मा"]);
    assert_eq!(of(Label::Gender), vec!["पुरुष"]);
    assert_eq!(of(Label::Date), vec!["२०५०", "०५", "१५"]);
    assert_no_overlaps(&entities);
}

#[test]
fn english_scenario_extracts_expected_fields() {
    let l = labeler();
    let entities = l.label_text(ENGLISH_DOC, LanguageMode::English);

    assert!(entities
        .iter()
        .any(|e| e.label == Label::NameEn && e.text == "JOHN SMITH"));
    assert!(entities
        .iter()
        .any(|e| e.label == Label::GenderEn && e.text == "Male"));
    assert!(entities
        .iter()
        .any(|e| e.label == Label::DateEn && e.text.contains("1998")));
    assert_no_overlaps(&entities);
}

#[test]
fn garbled_ward_digit_is_rejected() {
    let l = labeler();
    let entities = l.label_text("वडा नं: ?०५", LanguageMode::Nepali);
    assert!(entities.iter().all(|e| e.label != Label::Ward), "{entities:?}");
}

#[test]
fn auto_mode_matches_explicit_mode() {
    let l = labeler();
    assert_eq!(
        l.resolve_language(NEPALI_DOC, LanguageMode::Auto),
        LanguageMode::Nepali
    );
    assert_eq!(
        l.resolve_language(ENGLISH_DOC, LanguageMode::Auto),
        LanguageMode::English
    );
    assert_eq!(
        l.label_text(NEPALI_DOC, LanguageMode::Auto),
        l.label_text(NEPALI_DOC, LanguageMode::Nepali)
    );
    assert_eq!(
        l.label_text(ENGLISH_DOC, LanguageMode::Auto),
        l.label_text(ENGLISH_DOC, LanguageMode::English)
    );
}

#[test]
fn empty_and_blank_input_yield_no_entities() {
    let l = labeler();
    assert!(l.label_text("", LanguageMode::Auto).is_empty());
    assert!(l.label_text("  \t\n", LanguageMode::Auto).is_empty());
}

#[test]
fn rendering_preserves_every_entity() {
    let l = labeler();

    for (doc, mode) in [
        (NEPALI_DOC, LanguageMode::Nepali),
        (ENGLISH_DOC, LanguageMode::English),
    ] {
        let entities = l.label_text(doc, mode);
        let rendered = annotate(&l.normalize(doc), &entities);

        // Every entity reappears as a marker, in order, with its exact
        // text and short label; the rendering loses nothing.
        let marker = Regex::new(r"\[([^\]]*)\]\(([A-Z]+)\)").unwrap();
        let markers: Vec<(&str, &str)> = marker
            .captures_iter(&rendered)
            .map(|c| {
                (
                    c.get(1).unwrap().as_str(),
                    c.get(2).unwrap().as_str(),
                )
            })
            .collect();

        let expected: Vec<(&str, &str)> = entities
            .iter()
            .map(|e| (e.text.as_str(), e.label.short_name()))
            .collect();

        assert_eq!(markers, expected, "rendering of {doc}");
    }
}

#[test]
fn priority_prefers_identifier_over_bare_date() {
    let l = labeler();
    // The leading group is also a four-digit run a date rule claims; the
    // identifier label must win the span.
    let entities = l.label_text("प्रजा॰ २०५०-०४-०४४८२", LanguageMode::Nepali);
    let ids: Vec<_> = entities
        .iter()
        .filter(|e| e.label == Label::CitizenshipNumber)
        .collect();
    assert_eq!(ids.len(), 1);
    assert!(entities.iter().all(|e| e.label != Label::Date), "{entities:?}");
}

#[test]
fn shared_labeler_across_threads() {
    let l = std::sync::Arc::new(labeler());
    let mut handles = Vec::new();
    for _ in 0..4 {
        let l = l.clone();
        handles.push(std::thread::spawn(move || {
            l.label_text(NEPALI_DOC, LanguageMode::Auto)
        }));
    }
    let baseline = l.label_text(NEPALI_DOC, LanguageMode::Auto);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), baseline);
    }
}
