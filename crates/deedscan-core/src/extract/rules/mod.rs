//! Rule-based field extractors for purchase agreements.
//!
//! Each field is resolved by a [`RuleChain`]: an ordered list of named
//! [`Rule`]s tried against the normalized text. The first rule that matches
//! decides the field; a chain where nothing matches, or whose winning match
//! is blank, yields `None`, which the parser records as [`crate::NOT_FOUND`].

pub mod address;
pub mod cardinal;
pub mod dates;
pub mod parties;
pub mod patterns;
pub mod price;

use std::cell::OnceCell;

use tracing::trace;

use crate::models::record::Field;

pub use address::address_chain;
pub use cardinal::words_to_number;
pub use dates::date_chain;
pub use parties::{buyer_chain, match_joint_parties, seller_chain, JointParties};
pub use price::price_chain;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The record field this extractor fills.
    fn field(&self) -> Field;

    /// Extract the field from normalized text.
    fn extract(&self, input: &RuleInput<'_>) -> Option<ExtractionMatch<String>>;
}

/// A value recovered by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Name of the rule that produced the value.
    pub rule: &'static str,
    /// Byte span of the whole pattern match in the normalized text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            rule: "",
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }

    fn start(&self) -> usize {
        self.position.map(|(s, _)| s).unwrap_or(usize::MAX)
    }
}

/// Normalized text shared by every rule of one parse.
///
/// The joint buyer/seller match is computed at most once and then consulted
/// by both party chains.
pub struct RuleInput<'a> {
    text: &'a str,
    joint: OnceCell<Option<JointParties>>,
}

impl<'a> RuleInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            joint: OnceCell::new(),
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// The joint "Seller Name / Buyer Name" block, if it split cleanly.
    pub fn joint_parties(&self) -> Option<&JointParties> {
        self.joint
            .get_or_init(|| match_joint_parties(self.text))
            .as_ref()
    }
}

/// Signature of a single pattern attempt.
pub type RuleFn = fn(&RuleInput<'_>) -> Option<ExtractionMatch<String>>;

/// One named pattern attempt within a chain.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    apply: RuleFn,
}

impl Rule {
    pub const fn new(name: &'static str, apply: RuleFn) -> Self {
        Self { name, apply }
    }

    /// Run this rule alone.
    pub fn apply(&self, input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
        (self.apply)(input).map(|mut m| {
            m.rule = self.name;
            m
        })
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// How a chain picks among its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Rules are tried in order; the first match wins, even when its value
    /// is blank.
    Priority,
    /// Every rule is tried; the match starting earliest in the text wins,
    /// ties going to the earlier rule.
    Leftmost,
}

/// Ordered fallback chain for one field.
#[derive(Debug, Clone)]
pub struct RuleChain {
    field: Field,
    selection: Selection,
    rules: Vec<Rule>,
}

impl RuleChain {
    pub fn new(field: Field, selection: Selection, rules: Vec<Rule>) -> Self {
        Self {
            field,
            selection,
            rules,
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    fn resolve_priority(&self, input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
        for rule in &self.rules {
            match rule.apply(input) {
                Some(m) if m.value.trim().is_empty() => {
                    trace!("{}: rule {} matched an empty value", self.field, rule.name);
                    return None;
                }
                Some(m) => return Some(m),
                None => trace!("{}: rule {} did not match", self.field, rule.name),
            }
        }
        None
    }

    fn resolve_leftmost(&self, input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
        let mut best: Option<ExtractionMatch<String>> = None;
        for rule in &self.rules {
            let Some(m) = rule.apply(input) else {
                trace!("{}: rule {} did not match", self.field, rule.name);
                continue;
            };
            if best.as_ref().is_none_or(|b| m.start() < b.start()) {
                best = Some(m);
            }
        }
        best.filter(|m| !m.value.trim().is_empty())
    }
}

impl FieldExtractor for RuleChain {
    fn field(&self) -> Field {
        self.field
    }

    fn extract(&self, input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
        match self.selection {
            Selection::Priority => self.resolve_priority(input),
            Selection::Leftmost => self.resolve_leftmost(input),
        }
    }
}

/// Trimmed capture group `index` with the span of the whole match.
pub(crate) fn capture_match(caps: &regex::Captures<'_>, index: usize) -> Option<ExtractionMatch<String>> {
    let whole = caps.get(0)?;
    let value = caps.get(index)?.as_str().trim().to_string();
    Some(ExtractionMatch::new(value).with_position(whole.start(), whole.end()))
}
