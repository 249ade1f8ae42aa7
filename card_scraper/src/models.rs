//! Card records as returned by the API and as written to cards.json

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single element of an API page.
///
/// Each field is `Some` whenever its key is present in the source object,
/// even if the value is `null`, and `None` only when the key is absent.
/// Every other key the API sends is ignored.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiCard {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub rarity: Option<Value>,
    #[serde(default, rename = "konamiID", deserialize_with = "present")]
    pub konami_id: Option<Value>,
}

/// Maps any present value (including `null`) to `Some`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl ApiCard {
    /// Whether the source record carried a `rarity` key
    pub fn has_rarity(&self) -> bool {
        self.rarity.is_some()
    }

    /// Reduce to the retained fields, or `None` if the record is filtered out.
    pub fn into_card(self) -> Option<Card> {
        Some(Card {
            name: self.name?,
            rarity: self.rarity?,
            konami_id: self.konami_id?,
        })
    }
}

/// A card as written to cards.json. Field order is the output key order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Card {
    pub name: Value,
    pub rarity: Value,
    #[serde(rename = "konamiID")]
    pub konami_id: Value,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
