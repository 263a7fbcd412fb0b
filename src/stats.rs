use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    // Counts are written as decimal strings.
    #[serde(rename = "caracters", with = "decimal_string")]
    pub characters: usize,
    #[serde(with = "decimal_string")]
    pub words: usize,
    #[serde(rename = "letters_frequencys")]
    pub letter_frequencies: BTreeMap<String, usize>,
    #[serde(rename = "words_frequencys")]
    pub word_frequencies: BTreeMap<String, usize>,
}

mod decimal_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &usize, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
