//! Rule catalog: compiled match rules, gazetteers, OCR corrections and the
//! label-priority table.

pub mod gazetteer;
pub mod patterns;

use regex::Regex;

use crate::error::CatalogError;
use crate::models::entity::Label;

pub use patterns::RuleSpec;

/// A compiled match rule for one label.
pub struct MatchRule {
    /// Compiled pattern.
    pub pattern: Regex,

    /// The pattern ends in a context alternation: the entity span stops at
    /// capture group 1 and the consumed tail only anchors the match.
    pub context_tail: bool,
}

/// Immutable registry of match rules and lookup tables.
///
/// Built once per process, then shared read-only across any number of
/// concurrent extraction calls; nothing here is mutated after construction.
pub struct RuleCatalog {
    rules: Vec<(Label, Vec<MatchRule>)>,
}

impl RuleCatalog {
    /// Compile the built-in catalog.
    ///
    /// An invalid baked-in pattern surfaces here, once, as a
    /// [`CatalogError`]; extraction calls never see pattern compilation.
    pub fn new() -> Result<Self, CatalogError> {
        let mut rules = Vec::with_capacity(patterns::RULES.len());
        for (label, specs) in patterns::RULES {
            let mut compiled = Vec::with_capacity(specs.len());
            for spec in *specs {
                let pattern =
                    Regex::new(spec.pattern).map_err(|source| CatalogError::Pattern {
                        label: label.as_str(),
                        source,
                    })?;
                compiled.push(MatchRule {
                    pattern,
                    context_tail: spec.context_tail,
                });
            }
            rules.push((*label, compiled));
        }
        Ok(Self { rules })
    }

    /// All labels with at least one rule, in catalog order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.rules.iter().map(|(label, _)| *label)
    }

    /// Ordered rules for `label`.
    pub fn rules_for(&self, label: Label) -> &[MatchRule] {
        self.rules
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Labels with their rules, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Label, &[MatchRule])> {
        self.rules
            .iter()
            .map(|(label, rules)| (*label, rules.as_slice()))
    }

    /// Gazetteer entries for `label`, if the label is gazetteer-backed.
    pub fn gazetteer(&self, label: Label) -> Option<&'static [&'static str]> {
        gazetteer::for_label(label)
    }

    /// OCR corrections, in application order.
    pub fn corrections(&self) -> &'static [(&'static str, &'static str)] {
        gazetteer::OCR_CORRECTIONS
    }
}

/// Overlap-resolution priority for `label`.
///
/// A total function: labels outside the table rank lowest.
pub fn label_priority(label: Label) -> u8 {
    match label {
        Label::CitizenshipNumber | Label::CitizenshipNumberEn => 10,
        Label::Name | Label::NameEn => 9,
        Label::Gender | Label::GenderEn => 8,
        Label::Date | Label::DateEn => 7,
        Label::District => 6,
        Label::Ward => 5,
        Label::Municipality => 4,
        _ => 0,
    }
}
