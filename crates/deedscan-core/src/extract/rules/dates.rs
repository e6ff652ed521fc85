//! Key date extraction.
//!
//! The first slash-delimited date is taken verbatim. Month and day values are
//! not range-checked.

use crate::models::record::Field;

use super::patterns::DATE_SLASHED;
use super::{ExtractionMatch, Rule, RuleChain, RuleInput, Selection};

fn first_slashed_date(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let m = DATE_SLASHED.find(input.text())?;
    Some(ExtractionMatch::new(m.as_str().to_string()).with_position(m.start(), m.end()))
}

pub const FIRST_SLASHED_DATE: Rule = Rule::new("first_slashed_date", first_slashed_date);

pub fn date_chain() -> RuleChain {
    RuleChain::new(Field::KeyDates, Selection::Priority, vec![FIRST_SLASHED_DATE])
}
