//! Tests for character/record

use super::*;

fn record(id: u64, name: &str, jap_name: Option<&str>) -> CharacterRecord {
    CharacterRecord {
        id,
        name: name.to_string(),
        jap_name: jap_name.map(str::to_string),
        img_url: format!("https://img.example/{}.jpg", id),
    }
}

#[test]
fn test_deserialize_service_payload() {
    let json = r#"[
        {"id": 1, "name": "Ai", "jap_name": "あい", "rom_name": "Ai", "img_url": "https://img.example/1.jpg"},
        {"id": 2, "name": "Mizu", "jap_name": null, "rom_name": null, "img_url": "https://img.example/2.jpg"}
    ]"#;

    let records: Vec<CharacterRecord> = serde_json::from_str(json).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0], record(1, "Ai", Some("あい")));
    assert_eq!(records[1].jap_name, None);
}

#[test]
fn test_deserialize_missing_jap_name_defaults_to_none() {
    let json = r#"{"id": 3, "name": "X", "img_url": "u"}"#;
    let parsed: CharacterRecord = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.jap_name, None);
}

#[test]
fn test_deserialize_rejects_missing_name() {
    let json = r#"{"id": 3, "jap_name": "あ", "img_url": "u"}"#;
    assert!(serde_json::from_str::<CharacterRecord>(json).is_err());
}

#[test]
fn test_enrich_adds_romaji() {
    let enriched = EnrichedCharacter::from_record(record(1, "Ai", Some("あい")));
    assert_eq!(enriched.romaji, "ai");
    assert_eq!(enriched.jap_name(), "あい");
}

#[test]
fn test_enrich_without_jap_name_has_empty_romaji() {
    let enriched = EnrichedCharacter::from_record(record(2, "Nameless", None));
    assert_eq!(enriched.romaji, "");
    assert_eq!(enriched.jap_name(), "");
}

#[test]
fn test_enrich_all_preserves_order() {
    let enriched = enrich_all(vec![
        record(5, "B", Some("び")),
        record(4, "A", Some("あ")),
    ]);
    let ids: Vec<u64> = enriched.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![5, 4]);
}

#[test]
fn test_detail_lines_order() {
    let enriched = EnrichedCharacter::from_record(record(1, "Ai", Some("あい")));
    let labels: Vec<&str> = enriched.detail_lines().iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, vec!["Japanese Name", "Romaji Name", "Image"]);
    assert_eq!(enriched.detail_lines()[1].1, "ai");
}

#[test]
fn test_serialize_flattens_record() {
    let enriched = EnrichedCharacter::from_record(record(1, "Ai", Some("あい")));
    let value = serde_json::to_value(&enriched).unwrap();
    assert_eq!(value["name"], "Ai");
    assert_eq!(value["romaji"], "ai");
    assert_eq!(value["id"], 1);
}

#[test]
fn test_service_message_without_total() {
    let parsed: ServiceMessage =
        serde_json::from_str(r#"{"message": "Database cleared and reinitialized."}"#).unwrap();
    assert_eq!(parsed.total_characters, None);
}
