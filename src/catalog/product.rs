use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::unit::Unit;

/// One labelled specification row, e.g. `Material: brass`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

impl Spec {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Payload describing the single product shown on the card.
///
/// Field names are snake_case; the camelCase spellings used by web payloads
/// are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDisplay {
    /// Image reference: a local path or an http(s) URL.
    pub image: String,
    pub brand: String,
    /// Opaque identifier, displayed verbatim.
    #[serde(alias = "partNumber")]
    pub part_number: String,
    pub title: String,
    /// Display order is significant; duplicates are kept.
    pub specs: Vec<Spec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guarantee: Option<String>,
    pub price: Decimal,
    #[serde(alias = "originalPrice")]
    pub original_price: Decimal,
    /// Percentage shown on the badge. Never derived from the prices.
    pub discount: u32,
    #[serde(default = "default_in_stock", alias = "inStock")]
    pub in_stock: bool,
    #[serde(default)]
    pub unit: Unit,
}

fn default_in_stock() -> bool {
    true
}

impl ProductDisplay {
    /// The guarantee text, if there is any to show.
    pub fn guarantee(&self) -> Option<&str> {
        self.guarantee.as_deref().filter(|text| !text.is_empty())
    }

    /// Built-in payload used when no product file is configured.
    pub fn demo() -> Self {
        Self {
            image: "https://hebbkx1anhila5yf.public.blob.vercel-storage.com/image-NCgTj36piYbhjyHbOtlsFzNUhQpNeB.png".to_string(),
            brand: "Omnires".to_string(),
            part_number: "2123532".to_string(),
            title: "Connection with a handle Omnires round".to_string(),
            specs: vec![
                Spec::new("Material of execution", "brass"),
                Spec::new("Manufacturer's color", "chrome"),
            ],
            guarantee: Some("5 years".to_string()),
            price: Decimal::new(4500, 2),
            original_price: Decimal::new(5500, 2),
            discount: 30,
            in_stock: true,
            unit: Unit::Item,
        }
    }
}
