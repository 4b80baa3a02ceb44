use std::{error, fmt, fs, path::Path};

use model::shop::Shop;
use serde::Deserialize;

/// Snapshot of the coffee shop feed shipped with the build, for use
/// when no live dataset is available.
const BUNDLED_SHOPS: &str = include_str!("../data/coffeeshops.json");

/// The feed's JSON envelope: an OData-style wrapper with the records
/// in a `value` array.
#[derive(Debug, Deserialize)]
pub struct ShopsEnvelope {
    #[serde(rename = "@odata.context")]
    pub context: Option<String>,
    pub value: Vec<Shop>,
}

#[derive(Debug)]
pub enum DatasetError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(why) => write!(f, "could not read dataset: {}", why),
            DatasetError::Parse(why) => write!(f, "could not parse dataset: {}", why),
        }
    }
}

impl error::Error for DatasetError {}

impl From<std::io::Error> for DatasetError {
    fn from(why: std::io::Error) -> Self {
        DatasetError::Io(why)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(why: serde_json::Error) -> Self {
        DatasetError::Parse(why)
    }
}

/// Parses an envelope-shaped JSON document into shop records.
pub fn from_json(json: &str) -> Result<Vec<Shop>, DatasetError> {
    let envelope: ShopsEnvelope = serde_json::from_str(json)?;
    log::info!("loaded {} coffee shops", envelope.value.len());
    Ok(envelope.value)
}

/// Loads an envelope-shaped JSON file from disk.
pub fn load_from_path(path: &Path) -> Result<Vec<Shop>, DatasetError> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Parses the snapshot compiled into the crate.
pub fn bundled() -> Result<Vec<Shop>, DatasetError> {
    from_json(BUNDLED_SHOPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_an_envelope() {
        let shops = from_json(
            r#"{
                "@odata.context": "https://api.example.com/odata/$metadata#CoffeeShops",
                "value": [
                    {
                        "id": 7,
                        "name": "Dogwood Coffee",
                        "latitude": 44.9483,
                        "longitude": -93.2899,
                        "isGood": true,
                        "hours": [
                            {"dayOfWeek": 1, "openTime": "PT6H30M", "closeTime": "PT18H"}
                        ]
                    }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(shops.len(), 1);
        assert_eq!(shops[0].name, "Dogwood Coffee");
        assert_eq!(shops[0].hours[0].open_time, 390);
    }

    #[test]
    fn rejects_a_document_without_envelope() {
        assert!(from_json(r#"[{"id": 1}]"#).is_err());
    }

    #[test]
    fn bundled_snapshot_parses() {
        let shops = bundled().unwrap();
        assert!(!shops.is_empty());
        assert!(shops.iter().all(|shop| !shop.name.is_empty()));
    }
}
