use std::io::Read;
use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Passenger, Sex};

/// The fixed remote CSV resource the dashboard explores.
pub const DATASET_URL: &str =
    "https://web.stanford.edu/class/archive/cs/cs109/cs109.1166/stuff/titanic.csv";

// ---------------------------------------------------------------------------
// LoadError – the one consequential error kind
// ---------------------------------------------------------------------------

/// The dataset could not be fetched or parsed. Fatal at startup: every
/// downstream derivation depends on a valid [`Dataset`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: unrecognised sex value '{value}'")]
    UnknownSex { row: usize, value: String },
}

// ---------------------------------------------------------------------------
// Public entry-point: memoised process-wide load
// ---------------------------------------------------------------------------

static DATASET: OnceLock<Result<Dataset, LoadError>> = OnceLock::new();

/// Fetch and parse the dataset, once per process. Subsequent calls return
/// the cached result; there is no invalidation.
pub fn load() -> Result<&'static Dataset, &'static LoadError> {
    DATASET.get_or_init(fetch_and_parse).as_ref()
}

fn fetch_and_parse() -> Result<Dataset, LoadError> {
    log::info!("fetching dataset from {DATASET_URL}");
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let response = client.get(DATASET_URL).send()?.error_for_status()?;
    parse_reader(response)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One raw CSV record. Columns beyond these (siblings aboard, etc.) are
/// ignored by the deserializer.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Pclass")]
    pclass: u8,
    #[serde(rename = "Age")]
    age: Option<f64>,
    #[serde(rename = "Fare")]
    fare: f64,
    #[serde(rename = "Survived")]
    survived: u8,
}

/// Parse CSV text from any reader into a [`Dataset`]. Split out from the
/// HTTP fetch so it can be exercised on in-memory bytes.
pub fn parse_reader<R: Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut passengers = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = result?;
        let sex = Sex::parse(&raw.sex).ok_or_else(|| LoadError::UnknownSex {
            row: row_no,
            value: raw.sex.clone(),
        })?;

        passengers.push(Passenger {
            name: raw.name,
            sex,
            pclass: raw.pclass,
            age: raw.age,
            fare: raw.fare,
            survived: raw.survived != 0,
        });
    }

    log::info!("parsed {} passenger records", passengers.len());
    Ok(Dataset::from_passengers(passengers))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Survived,Pclass,Name,Sex,Age,Siblings/Spouses Aboard,Parents/Children Aboard,Fare
1,1,Miss. Laina Heikkinen,female,26,0,0,7.925
0,3,Mr. Owen Harris Braund,male,22,1,0,7.25
1,2,Mrs. Unknown,female,,0,0,13.0
";

    #[test]
    fn parses_typed_fields_and_ignores_extra_columns() {
        let ds = parse_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);

        let first = &ds.passengers[0];
        assert_eq!(first.name, "Miss. Laina Heikkinen");
        assert_eq!(first.sex, Sex::Female);
        assert_eq!(first.pclass, 1);
        assert_eq!(first.age, Some(26.0));
        assert!(first.survived);

        let second = &ds.passengers[1];
        assert_eq!(second.fare, 7.25);
        assert!(!second.survived);
    }

    #[test]
    fn blank_age_becomes_none() {
        let ds = parse_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.passengers[2].age, None);
    }

    #[test]
    fn unknown_sex_value_is_rejected() {
        let bad = "Survived,Pclass,Name,Sex,Age,Fare\n1,1,X,unknown,30,5.0\n";
        let err = parse_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownSex { row: 0, .. }));
    }

    #[test]
    fn malformed_numeric_cell_is_rejected() {
        let bad = "Survived,Pclass,Name,Sex,Age,Fare\n1,first,X,male,30,5.0\n";
        assert!(matches!(
            parse_reader(bad.as_bytes()),
            Err(LoadError::Csv(_))
        ));
    }

    #[test]
    fn empty_file_yields_empty_dataset() {
        let ds = parse_reader("Survived,Pclass,Name,Sex,Age,Fare\n".as_bytes()).unwrap();
        assert!(ds.is_empty());
    }
}
