//! Buyer and seller extraction.
//!
//! Both chains start from the same joint match: the two-column
//! "Seller Name / Buyer Name" block that OCR flattens into
//! `Seller Name Buyer Name <seller block> <buyer block> SELLER(S) BUYER(S)`.
//! The first five-digit run (a ZIP code) ends the seller block.

use crate::models::config::SellerPhrase;
use crate::models::record::Field;

use super::patterns::{
    BUYER_TO_SELLER, JOINT_PARTIES, POSTAL_CODE_RUN, SELLER_INTRO_CORRECTED,
    SELLER_INTRO_LENIENT, SELLER_INTRO_OBSERVED,
};
use super::{capture_match, ExtractionMatch, Rule, RuleChain, RuleInput, Selection};

/// Seller and buyer blocks split out of the joint party match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointParties {
    /// Text before the first five-digit run, trimmed.
    pub seller: String,
    /// Text between the first and the second five-digit run, trimmed.
    pub buyer: String,
    /// Span of the whole joint match.
    pub position: (usize, usize),
}

/// Find the joint party block and split it at its ZIP codes.
///
/// Returns `None` when the block is absent or contains no five-digit run,
/// so there is nothing to separate the two parties by.
pub fn match_joint_parties(text: &str) -> Option<JointParties> {
    let caps = JOINT_PARTIES.captures(text)?;
    let whole = caps.get(0)?;
    let block = caps.get(1)?.as_str();

    let mut codes = POSTAL_CODE_RUN.find_iter(block);
    let first = codes.next()?;
    let buyer_end = codes.next().map(|m| m.start()).unwrap_or(block.len());

    Some(JointParties {
        seller: block[..first.start()].trim().to_string(),
        buyer: block[first.end()..buyer_end].trim().to_string(),
        position: (whole.start(), whole.end()),
    })
}

fn joint_buyer(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let joint = input.joint_parties()?;
    let (start, end) = joint.position;
    Some(ExtractionMatch::new(joint.buyer.clone()).with_position(start, end))
}

fn joint_seller(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let joint = input.joint_parties()?;
    let (start, end) = joint.position;
    Some(ExtractionMatch::new(joint.seller.clone()).with_position(start, end))
}

fn leading_word_to_seller(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = BUYER_TO_SELLER.captures(input.text())?;
    capture_match(&caps, 1)
}

fn seller_intro_observed(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = SELLER_INTRO_OBSERVED.captures(input.text())?;
    capture_match(&caps, 1)
}

fn seller_intro_corrected(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = SELLER_INTRO_CORRECTED.captures(input.text())?;
    capture_match(&caps, 1)
}

fn seller_intro_lenient(input: &RuleInput<'_>) -> Option<ExtractionMatch<String>> {
    let caps = SELLER_INTRO_LENIENT.captures(input.text())?;
    capture_match(&caps, 1)
}

pub const JOINT_BUYER: Rule = Rule::new("joint_party_block", joint_buyer);
pub const JOINT_SELLER: Rule = Rule::new("joint_party_block", joint_seller);
pub const LEADING_WORD_TO_SELLER: Rule = Rule::new("leading_word_to_seller", leading_word_to_seller);

/// Seller introduction rule for the configured phrase variant.
pub fn seller_intro_rule(phrase: SellerPhrase) -> Rule {
    match phrase {
        SellerPhrase::Observed => Rule::new("seller_intro_ia_are", seller_intro_observed),
        SellerPhrase::Corrected => Rule::new("seller_intro_is_are", seller_intro_corrected),
        SellerPhrase::Lenient => Rule::new("seller_intro_either", seller_intro_lenient),
    }
}

/// Buyer: joint block, then "<Word> to seller" at the start of the text.
pub fn buyer_chain() -> RuleChain {
    RuleChain::new(
        Field::BuyerName,
        Selection::Priority,
        vec![JOINT_BUYER, LEADING_WORD_TO_SELLER],
    )
}

/// Seller: joint block, then "The Seller(s) ... residing at".
pub fn seller_chain(phrase: SellerPhrase) -> RuleChain {
    RuleChain::new(
        Field::SellerName,
        Selection::Priority,
        vec![JOINT_SELLER, seller_intro_rule(phrase)],
    )
}
