//! The five-field record produced for every purchase agreement.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder for a field that could not be recovered from the text.
pub const NOT_FOUND: &str = "Not Found";

/// Fields of an [`ExtractedRecord`], in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    BuyerName,
    SellerName,
    PropertyAddress,
    OfferPrice,
    KeyDates,
}

impl Field {
    /// All fields in output order.
    pub const ALL: [Field; 5] = [
        Field::BuyerName,
        Field::SellerName,
        Field::PropertyAddress,
        Field::OfferPrice,
        Field::KeyDates,
    ];

    /// Key used in serialized output.
    pub fn key(self) -> &'static str {
        match self {
            Field::BuyerName => "buyerName",
            Field::SellerName => "sellerName",
            Field::PropertyAddress => "propertyAddress",
            Field::OfferPrice => "offerPrice",
            Field::KeyDates => "keyDates",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::BuyerName => "Buyer",
            Field::SellerName => "Seller",
            Field::PropertyAddress => "Property address",
            Field::OfferPrice => "Offer price",
            Field::KeyDates => "Key date",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fields recovered from one purchase agreement.
///
/// Every field holds either a non-empty value or [`NOT_FOUND`]. All writes,
/// deserialization included, go through [`ExtractedRecord::set`], which
/// collapses empty and whitespace-only values to the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RecordFields")]
pub struct ExtractedRecord {
    buyer_name: String,
    seller_name: String,
    property_address: String,
    offer_price: String,
    key_dates: String,
}

/// Wire shape accepted when reading a record back; absent keys are not found.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordFields {
    #[serde(default)]
    buyer_name: Option<String>,
    #[serde(default)]
    seller_name: Option<String>,
    #[serde(default)]
    property_address: Option<String>,
    #[serde(default)]
    offer_price: Option<String>,
    #[serde(default)]
    key_dates: Option<String>,
}

impl From<RecordFields> for ExtractedRecord {
    fn from(raw: RecordFields) -> Self {
        let mut record = Self::new();
        record.set(Field::BuyerName, raw.buyer_name);
        record.set(Field::SellerName, raw.seller_name);
        record.set(Field::PropertyAddress, raw.property_address);
        record.set(Field::OfferPrice, raw.offer_price);
        record.set(Field::KeyDates, raw.key_dates);
        record
    }
}

impl Default for ExtractedRecord {
    fn default() -> Self {
        Self {
            buyer_name: NOT_FOUND.to_string(),
            seller_name: NOT_FOUND.to_string(),
            property_address: NOT_FOUND.to_string(),
            offer_price: NOT_FOUND.to_string(),
            key_dates: NOT_FOUND.to_string(),
        }
    }
}

impl ExtractedRecord {
    /// A record with every field set to [`NOT_FOUND`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buyer_name(&self) -> &str {
        &self.buyer_name
    }

    pub fn seller_name(&self) -> &str {
        &self.seller_name
    }

    pub fn property_address(&self) -> &str {
        &self.property_address
    }

    pub fn offer_price(&self) -> &str {
        &self.offer_price
    }

    pub fn key_dates(&self) -> &str {
        &self.key_dates
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::BuyerName => &self.buyer_name,
            Field::SellerName => &self.seller_name,
            Field::PropertyAddress => &self.property_address,
            Field::OfferPrice => &self.offer_price,
            Field::KeyDates => &self.key_dates,
        }
    }

    /// Set a field; `None`, empty and blank values become [`NOT_FOUND`].
    pub fn set(&mut self, field: Field, value: Option<String>) {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| NOT_FOUND.to_string());

        let slot = match field {
            Field::BuyerName => &mut self.buyer_name,
            Field::SellerName => &mut self.seller_name,
            Field::PropertyAddress => &mut self.property_address,
            Field::OfferPrice => &mut self.offer_price,
            Field::KeyDates => &mut self.key_dates,
        };
        *slot = value;
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, Some(value.into()));
        self
    }

    pub fn is_found(&self, field: Field) -> bool {
        self.get(field) != NOT_FOUND
    }

    /// Fields that hold the sentinel.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.is_found(*f))
            .collect()
    }

    /// True when nothing at all was recovered.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.is_found(*f))
    }

    /// Iterate `(field, value)` pairs in output order.
    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}
