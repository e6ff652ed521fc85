//! End-to-end extraction scenarios on representative transcripts.

use deedscan_core::{
    extract_fields, AgreementParser, ExtractedRecord, Field, PurchaseAgreementParser,
    SellerPhrase, NOT_FOUND,
};
use pretty_assertions::assert_eq;

#[test]
fn joint_party_block_splits_at_first_zip() {
    let record = extract_fields(
        "... Seller Name Buyer Name 123 Main St 90210 456 Oak Ave 10001 SELLER(S) BUYER(S) ...",
    );
    assert_eq!(record.seller_name(), "123 Main St");
    assert_eq!(record.buyer_name(), "456 Oak Ave");
}

#[test]
fn price_in_words_drops_separators() {
    let record = extract_fields("The purchase price is Two Hundred Thousand ONLY.");
    assert_eq!(record.offer_price(), "$200000");
}

#[test]
fn price_dollar_amount_keeps_separators() {
    let record = extract_fields("Total due: $150,000 payable");
    assert_eq!(record.offer_price(), "$150,000");
}

#[test]
fn first_slashed_date_is_key_date() {
    let record = extract_fields("executed on 05/21/2023 in the presence of");
    assert_eq!(record.key_dates(), "05/21/2023");
}

#[test]
fn unrelated_text_is_all_not_found() {
    let record = extract_fields("random unrelated text");
    assert_eq!(record, ExtractedRecord::new());
    for (_, value) in record.fields() {
        assert_eq!(value, NOT_FOUND);
    }
}

#[test]
fn leading_word_before_to_seller_is_buyer() {
    let record = extract_fields("Jordan to seller under the terms of this agreement");
    assert_eq!(record.buyer_name(), "Jordan");
    assert_eq!(record.seller_name(), NOT_FOUND);
}

#[test]
fn multi_page_transcript_with_ocr_noise() {
    let transcript = "Avery to seller\n\nthe property which\nis known as_   22 Willow Way,\nPortland OR\n\
                      located at the corner\x0c\nThe Seller(s) ia/are  Sam  Ortiz\nresiding at 9 Pine\n\
                      The purchase price is Three Hundred and Ten Thousand Five Hundred ONLY.\n\
                      Dated 7/4/24";

    let record = extract_fields(transcript);
    assert_eq!(
        record,
        ExtractedRecord::new()
            .with(Field::BuyerName, "Avery")
            .with(Field::SellerName, "Sam Ortiz")
            .with(Field::PropertyAddress, "22 Willow Way, Portland OR")
            .with(Field::OfferPrice, "$310500")
            .with(Field::KeyDates, "7/4/24")
    );
}

#[test]
fn malformed_price_words_fall_back_to_dollar_amount() {
    let record = extract_fields(
        "The purchase price is Five Thousand Two Million ONLY. Escrow deposit: $ 25,000",
    );
    assert_eq!(record.offer_price(), "$25,000");
}

#[test]
fn provenance_names_the_winning_rules() {
    let parser = PurchaseAgreementParser::new().with_seller_phrase(SellerPhrase::Lenient);
    let result = parser.parse(
        "Kai to seller. The Seller(s) is/are Dana Wu residing at 1 Elm. Property known as 5 Bay Rd (City) $90,000",
    );

    let rules: Vec<_> = Field::ALL
        .iter()
        .map(|f| result.resolution(*f).and_then(|r| r.rule))
        .collect();
    assert_eq!(
        rules,
        vec![
            Some("leading_word_to_seller"),
            Some("seller_intro_either"),
            Some("property_known_as_city"),
            Some("first_dollar_amount"),
            None,
        ]
    );
    assert_eq!(result.warnings, vec!["Could not extract key date".to_string()]);
}

#[test]
fn empty_joint_segments_do_not_fall_back() {
    let record = extract_fields(
        "Seller Name Buyer Name 90210 Bob Ray 10001 SELLER(S) BUYER(S) \
         The Seller(s) ia/are Pat Doe residing at 9 Pine",
    );
    assert_eq!(record.seller_name(), NOT_FOUND);
    assert_eq!(record.buyer_name(), "Bob Ray");

    let record =
        extract_fields("Jordan to seller Seller Name Buyer Name 12 Bay St 02134 SELLER(S) BUYER(S)");
    assert_eq!(record.buyer_name(), NOT_FOUND);
    assert_eq!(record.seller_name(), "12 Bay St");
}

#[test]
fn joint_block_without_zip_leaves_fallbacks_in_play() {
    let record = extract_fields(
        "Jordan to seller Seller Name Buyer Name Ann Lee Bob Ray SELLER(S) BUYER(S) \
         The Seller(s) ia/are Pat Doe residing at 9 Pine",
    );
    assert_eq!(record.buyer_name(), "Jordan");
    assert_eq!(record.seller_name(), "Pat Doe");
}
