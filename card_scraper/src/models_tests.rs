//! Tests for card record parsing and filtering

use crate::models::{ApiCard, Card};
use serde_json::json;

#[test]
fn api_card_ignores_unknown_fields() {
    let card_json = r#"{
        "_id": "5f8a0c",
        "name": "Dark Magician",
        "rarity": "UR",
        "konamiID": 4041,
        "type": "Monster",
        "race": "Spellcaster",
        "atk": 2500
    }"#;

    let card: ApiCard = serde_json::from_str(card_json).unwrap();
    assert_eq!(card.name, Some(json!("Dark Magician")));
    assert_eq!(card.rarity, Some(json!("UR")));
    assert_eq!(card.konami_id, Some(json!(4041)));
}

#[test]
fn api_card_absent_rarity_is_none() {
    let card: ApiCard = serde_json::from_str(r#"{ "name": "B", "konamiID": 2 }"#).unwrap();
    assert!(!card.has_rarity());
    assert_eq!(card.into_card(), None);
}

#[test]
fn api_card_null_rarity_counts_as_present() {
    let card: ApiCard =
        serde_json::from_str(r#"{ "name": "B", "rarity": null, "konamiID": 2 }"#).unwrap();
    assert!(card.has_rarity());
    assert_eq!(card.rarity, Some(serde_json::Value::Null));
}

#[test]
fn into_card_keeps_three_fields() {
    let card: ApiCard =
        serde_json::from_str(r#"{ "name": "A", "rarity": "Common", "konamiID": 1, "atk": 0 }"#)
            .unwrap();

    let card = card.into_card().unwrap();
    assert_eq!(
        card,
        Card {
            name: json!("A"),
            rarity: json!("Common"),
            konami_id: json!(1),
        }
    );
}

#[test]
fn into_card_requires_name_and_konami_id() {
    let no_name: ApiCard = serde_json::from_str(r#"{ "rarity": "N", "konamiID": 1 }"#).unwrap();
    let no_id: ApiCard = serde_json::from_str(r#"{ "name": "A", "rarity": "N" }"#).unwrap();

    assert_eq!(no_name.into_card(), None);
    assert_eq!(no_id.into_card(), None);
}

#[test]
fn card_serializes_konami_id_key() {
    let card = Card {
        name: json!("A"),
        rarity: json!("Common"),
        konami_id: json!(1),
    };
    let text = serde_json::to_string(&card).unwrap();
    assert_eq!(text, r#"{"name":"A","rarity":"Common","konamiID":1}"#);
}

#[test]
fn page_must_be_an_array() {
    let result: Result<Vec<ApiCard>, _> = serde_json::from_str(r#"{ "cards": [] }"#);
    assert!(result.is_err());
}
