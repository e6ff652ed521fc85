//! Offer price extraction.
//!
//! Tier one reads the price spelled out in words ("The purchase price is
//! Two Hundred Thousand ONLY.") and renders the converted number without
//! separators. Tier two takes the first dollar amount in the text verbatim,
//! separators included. The two tiers therefore format differently:
//! `$200000` against `$150,000`.

use tracing::debug;

use crate::models::record::Field;

use super::cardinal::words_to_number;
use super::patterns::{PRICE_DOLLAR_AMOUNT, PRICE_IN_WORDS};
use super::{ExtractionMatch, Rule, RuleChain, RuleInput, Selection};

fn price_in_words(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = PRICE_IN_WORDS.captures(input.text())?;
    let whole = caps.get(0)?;
    let phrase = caps[1].replace(" and ", " ");

    match words_to_number(&phrase) {
        Ok(amount) => Some(
            ExtractionMatch::new(format!("${}", amount)).with_position(whole.start(), whole.end()),
        ),
        Err(e) => {
            debug!("Price phrase {:?} is not a number ({}), trying dollar amounts", phrase, e);
            None
        }
    }
}

fn first_dollar_amount(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = PRICE_DOLLAR_AMOUNT.captures(input.text())?;
    let whole = caps.get(0)?;
    Some(ExtractionMatch::new(format!("${}", &caps[1])).with_position(whole.start(), whole.end()))
}

pub const PRICE_IN_WORDS_RULE: Rule = Rule::new("purchase_price_in_words", price_in_words);
pub const FIRST_DOLLAR_AMOUNT_RULE: Rule = Rule::new("first_dollar_amount", first_dollar_amount);

/// Offer price: spelled-out purchase price, then the first dollar amount.
pub fn price_chain() -> RuleChain {
    RuleChain::new(
        Field::OfferPrice,
        Selection::Priority,
        vec![PRICE_IN_WORDS_RULE, FIRST_DOLLAR_AMOUNT_RULE],
    )
}
