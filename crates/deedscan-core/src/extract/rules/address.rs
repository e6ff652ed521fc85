//! Property address extraction.

use crate::models::record::Field;

use super::patterns::{ADDRESS_KNOWN_AS, ADDRESS_PROPERTY_CITY};
use super::{capture_match, ExtractionMatch, Rule, RuleChain, RuleInput, Selection};

fn known_as_located(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = ADDRESS_KNOWN_AS.captures(input.text())?;
    capture_match(&caps, 1)
}

fn property_known_as_city(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = ADDRESS_PROPERTY_CITY.captures(input.text())?;
    capture_match(&caps, 1)
}

pub const KNOWN_AS_LOCATED: Rule = Rule::new("is_known_as_located", known_as_located);
pub const PROPERTY_KNOWN_AS_CITY: Rule = Rule::new("property_known_as_city", property_known_as_city);

/// Property address: whichever alternative matches first in the document.
pub fn address_chain() -> RuleChain {
    RuleChain::new(
        Field::PropertyAddress,
        Selection::Leftmost,
        vec![KNOWN_AS_LOCATED, PROPERTY_KNOWN_AS_CITY],
    )
}
