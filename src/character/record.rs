use serde::{Deserialize, Serialize};

use super::romaji::to_romaji;

/// A character record as returned by the search service
///
/// Extra fields in the payload (e.g. `rom_name`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CharacterRecord {
    pub id: u64,
    pub name: String,
    /// Japanese-script name; the service column is nullable
    #[serde(default)]
    pub jap_name: Option<String>,
    pub img_url: String,
}

/// A record augmented with its romanized reading
///
/// Built once per search response and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrichedCharacter {
    #[serde(flatten)]
    pub record: CharacterRecord,
    pub romaji: String,
}

impl EnrichedCharacter {
    pub fn from_record(record: CharacterRecord) -> Self {
        let romaji = record.jap_name.as_deref().map(to_romaji).unwrap_or_default();
        Self { record, romaji }
    }

    pub fn id(&self) -> u64 {
        self.record.id
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn jap_name(&self) -> &str {
        self.record.jap_name.as_deref().unwrap_or_default()
    }

    pub fn img_url(&self) -> &str {
        &self.record.img_url
    }

    /// Labelled rows displayed under the record's name
    pub fn detail_lines(&self) -> [(&'static str, &str); 3] {
        [
            ("Japanese Name", self.jap_name()),
            ("Romaji Name", self.romaji.as_str()),
            ("Image", self.img_url()),
        ]
    }
}

/// Enrich a full search response, preserving order
pub fn enrich_all(records: Vec<CharacterRecord>) -> Vec<EnrichedCharacter> {
    records.into_iter().map(EnrichedCharacter::from_record).collect()
}

/// Status message returned by the service's maintenance routes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceMessage {
    pub message: String,
    #[serde(default)]
    pub total_characters: Option<u64>,
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
