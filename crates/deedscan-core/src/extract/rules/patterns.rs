//! Regex patterns for purchase-agreement extraction.
//!
//! All patterns assume whitespace-normalized input.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Two-column party block flattened to one line:
    // "Seller Name Buyer Name <seller address> <buyer address> SELLER(S) BUYER(S)"
    pub static ref JOINT_PARTIES: Regex = Regex::new(
        r"(?i)Seller Name\s+Buyer Name\s+(.*?)\s+SELLER\(S\)\s+BUYER\(S\)"
    ).unwrap();

    // Five-digit run ending an address block
    pub static ref POSTAL_CODE_RUN: Regex = Regex::new(r"\d{5}").unwrap();

    // "<Name> to seller ..." at the very start of the document
    pub static ref BUYER_TO_SELLER: Regex = Regex::new(
        r"(?i)^(\w+)\s+to seller"
    ).unwrap();

    // Seller introduction as printed on the forms ("ia/are")
    pub static ref SELLER_INTRO_OBSERVED: Regex = Regex::new(
        r"(?i)The Seller\(s\) ia/are\s+(.*?)\s+residing at"
    ).unwrap();

    pub static ref SELLER_INTRO_CORRECTED: Regex = Regex::new(
        r"(?i)The Seller\(s\) is/are\s+(.*?)\s+residing at"
    ).unwrap();

    pub static ref SELLER_INTRO_LENIENT: Regex = Regex::new(
        r"(?i)The Seller\(s\) i[as]/are\s+(.*?)\s+residing at"
    ).unwrap();

    // Property address
    pub static ref ADDRESS_KNOWN_AS: Regex = Regex::new(
        r"(?i)is known as_\s*(.*?)\s+located"
    ).unwrap();

    pub static ref ADDRESS_PROPERTY_CITY: Regex = Regex::new(
        r"(?i)Property known as\s*(.*?)\s+\(City\)"
    ).unwrap();

    // Offer price
    pub static ref PRICE_IN_WORDS: Regex = Regex::new(
        r"(?i)The purchase price is\s+(.*?)\s+ONLY\."
    ).unwrap();

    pub static ref PRICE_DOLLAR_AMOUNT: Regex = Regex::new(
        r"\$\s*(\d[\d,]*)"
    ).unwrap();

    // m/d/yy or m/d/yyyy, unvalidated
    pub static ref DATE_SLASHED: Regex = Regex::new(
        r"\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})"
    ).unwrap();
}
