//! Pipe-delimited result tables produced by the benchmark runs.
//!
//! Each data row becomes a [`ResultRecord`] keyed by the header names. Rows keep
//! file order; nothing about the fields is interpreted here beyond trimming.

use std::{fs::File, path::Path};

use ahash::AHashMap;

use crate::CompareError;

pub const NAME_FIELD: &str = "Name";
/// Area columns in lookup order.
pub const AREA_FIELDS: &[&str] = &["Catchment_Area", "Area"];
/// Wall-clock columns in lookup order.
pub const WALL_TIME_FIELDS: &[&str] = &["Wall_Clock", "Wall_Time"];

pub const TABLE_DELIMITER: u8 = b'|';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRecord {
    fields: AHashMap<String, String>,
}

impl ResultRecord {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let fields = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { fields }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME_FIELD)
    }

    pub fn area(&self) -> Option<&str> {
        first_present(self, AREA_FIELDS)
    }

    pub fn wall_time(&self) -> Option<&str> {
        first_present(self, WALL_TIME_FIELDS)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Returns the value of the first field in `names` that the record carries.
pub fn first_present<'a>(record: &'a ResultRecord, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| record.get(name))
}

pub fn load_table(path: &Path) -> Result<Vec<ResultRecord>, CompareError> {
    if !path.exists() {
        return Err(CompareError::missing_file("table", path));
    }
    let file = File::open(path).map_err(|e| CompareError::io(format!("{}: {e}", path.display())))?;
    read_table(file).map_err(|e| match e {
        CompareError::Parse(msg) => CompareError::parse(format!("{}: {msg}", path.display())),
        other => other,
    })
}

pub fn read_table<R: std::io::Read>(reader: R) -> Result<Vec<ResultRecord>, CompareError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(TABLE_DELIMITER)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = reader
        .headers()
        .map_err(|e| CompareError::parse(e.to_string()))?
        .clone();
    if headers.iter().all(str::is_empty) {
        return Err(CompareError::parse("missing header row"));
    }
    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| CompareError::parse(e.to_string()))?;
        let record = ResultRecord::from_pairs(
            headers
                .iter()
                .zip(row.iter())
                .filter(|(header, _)| !header.is_empty()),
        );
        records.push(record);
    }
    Ok(records)
}
