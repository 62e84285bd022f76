//! Loads the raw IPC rows from a CSV or JSON file.
//!
//! The loader only checks the structure of the file: two columns per record,
//! or a JSON list of `{"Mes": ..., "IPC": ...}` objects. Parsing the month and
//! index value of each row is left to [crate::ipc::normalize], which skips
//! rows it cannot read.

use std::{fs, path::Path};

use serde_json::Value;
use time::OffsetDateTime;

use crate::{
    Error,
    ipc::{RawMonth, RawRow, RawValue, Series, build_series},
};

const EXPECTED_COLUMNS: usize = 2;
const JSON_MONTH_KEY: &str = "Mes";
const JSON_INDEX_VALUE_KEY: &str = "IPC";

/// How to read a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetOptions {
    /// The field delimiter for CSV files.
    pub delimiter: u8,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read the dataset at `path` and build the series from it.
///
/// # Errors
/// Returns [Error::DatasetIo] if the file cannot be read and
/// [Error::DataFormat] if it does not have the expected structure. A file
/// without any usable rows is not an error, it produces an empty series.
pub fn load_dataset(path: &Path, options: &DatasetOptions) -> Result<Series, Error> {
    let rows = read_rows(path, options)?;
    let series = build_series(&rows);

    tracing::info!(
        "Loaded {} observations from {} rows in {}",
        series.len(),
        rows.len(),
        path.display()
    );

    if series.is_empty() {
        tracing::warn!(
            "The dataset {} has no usable rows, the dashboard will be empty",
            path.display()
        );
    }

    Ok(series)
}

/// Read the raw rows of the dataset at `path`, choosing the format by file
/// extension.
pub fn read_rows(path: &Path, options: &DatasetOptions) -> Result<Vec<RawRow>, Error> {
    let text = fs::read_to_string(path)
        .map_err(|error| Error::DatasetIo(format!("{}: {error}", path.display())))?;

    let extension = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("csv") => parse_csv_rows(&text, options.delimiter),
        Some("json") => parse_json_rows(&text),
        _ => Err(Error::DataFormat(format!(
            "unsupported dataset file {}, expected a .csv or .json file",
            path.display()
        ))),
    }
}

/// Parse CSV text with a header line and two columns: month and index value.
///
/// # Errors
/// Returns [Error::DataFormat] if the header or any record does not have
/// exactly two columns.
pub fn parse_csv_rows(text: &str, delimiter: u8) -> Result<Vec<RawRow>, Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let header_columns = reader
        .headers()
        .map_err(|error| Error::DataFormat(format!("could not read the CSV header: {error}")))?
        .len();

    if header_columns != EXPECTED_COLUMNS {
        return Err(Error::DataFormat(format!(
            "the CSV header has {header_columns} columns, expected {EXPECTED_COLUMNS}"
        )));
    }

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|error| Error::DataFormat(format!("could not read a CSV record: {error}")))?;

        if record.len() != EXPECTED_COLUMNS {
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or_default();

            return Err(Error::DataFormat(format!(
                "line {line} has {} columns, expected {EXPECTED_COLUMNS}",
                record.len()
            )));
        }

        rows.push(RawRow::from_text(&record[0], &record[1]));
    }

    Ok(rows)
}

/// Parse a JSON array of `{"Mes": ..., "IPC": ...}` objects.
///
/// "Mes" may be a label such as "Jan-24" or a timestamp in milliseconds since
/// the Unix epoch. "IPC" may be a number or text.
///
/// # Errors
/// Returns [Error::DataFormat] if the text is not a JSON array of objects or
/// an object is missing one of the two keys.
pub fn parse_json_rows(text: &str) -> Result<Vec<RawRow>, Error> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_str(text)
        .map_err(|error| Error::DataFormat(format!("could not parse JSON: {error}")))?;

    let Value::Array(records) = value else {
        return Err(Error::DataFormat(
            "expected a JSON array of records".to_owned(),
        ));
    };

    records
        .iter()
        .enumerate()
        .map(|(position, record)| {
            let Value::Object(fields) = record else {
                return Err(Error::DataFormat(format!(
                    "record {position} is not a JSON object"
                )));
            };

            let missing_key = |key: &str| {
                Error::DataFormat(format!("record {position} is missing the key \"{key}\""))
            };

            let month = fields
                .get(JSON_MONTH_KEY)
                .ok_or_else(|| missing_key(JSON_MONTH_KEY))?;
            let index_value = fields
                .get(JSON_INDEX_VALUE_KEY)
                .ok_or_else(|| missing_key(JSON_INDEX_VALUE_KEY))?;

            Ok(RawRow {
                month: json_month(month),
                index_value: json_index_value(index_value),
            })
        })
        .collect()
}

fn json_month(value: &Value) -> RawMonth {
    match value {
        Value::String(label) => RawMonth::Label(label.clone()),
        Value::Number(number) => epoch_millis(number)
            .and_then(|millis| {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
            })
            .map(|date_time| RawMonth::Date(date_time.date()))
            .unwrap_or_else(|| RawMonth::Label(number.to_string())),
        other => RawMonth::Label(other.to_string()),
    }
}

/// Epoch milliseconds from an integer, or from a float with no fractional part.
fn epoch_millis(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|millis| millis.is_finite() && millis.fract() == 0.0)
            .filter(|millis| (i64::MIN as f64..=i64::MAX as f64).contains(millis))
            .map(|millis| millis as i64)
    })
}

fn json_index_value(value: &Value) -> RawValue {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(RawValue::Number)
            .unwrap_or_else(|| RawValue::Text(number.to_string())),
        Value::String(text) => RawValue::Text(text.clone()),
        other => RawValue::Text(other.to_string()),
    }
}
