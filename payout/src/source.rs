use crate::{
	error::{Error, Result},
	transfer::TransferRecord,
};
use multisend::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::{fs, io, path::Path};

/// Reads transfer records from `path`, dispatching on the file extension.
///
/// Csv files must carry `receiver` and `amount` columns, json files must hold
/// an array of `{ receiver, amount }` objects. Any other extension is rejected
/// before the file is opened.
pub fn read_transfer_file(path: &Path) -> Result<Vec<TransferRecord>> {
	let extension = path
		.extension()
		.map(|ext| ext.to_string_lossy().to_lowercase())
		.unwrap_or_default();

	match extension.as_str() {
		"csv" => parse_csv(fs::File::open(path)?),
		"json" => parse_json(&fs::read(path)?),
		_ => Err(Error::UnsupportedFormat(extension)),
	}
}

/// Csv row shape. The amount is requested as a string and parsed here: left to
/// the csv deserializer's type inference it would take an f64 round trip and
/// lose any precision finer than a float.
#[derive(Debug, Deserialize)]
struct CsvRow {
	receiver: Address,
	#[serde(deserialize_with = "decimal_from_text")]
	amount: Decimal,
}

fn decimal_from_text<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = String::deserialize(deserializer)?;
	raw.trim().parse().map_err(serde::de::Error::custom)
}

impl From<CsvRow> for TransferRecord {
	fn from(row: CsvRow) -> Self {
		TransferRecord { receiver: row.receiver, amount: row.amount }
	}
}

/// Parses csv transfer rows; columns beyond `receiver` and `amount` are ignored.
pub fn parse_csv(input: impl io::Read) -> Result<Vec<TransferRecord>> {
	let mut reader = csv::Reader::from_reader(input);
	let rows = reader.deserialize::<CsvRow>().collect::<Result<Vec<_>, _>>()?;
	Ok(rows.into_iter().map(Into::into).collect())
}

/// Parses a json array of transfer records.
pub fn parse_json(input: &[u8]) -> Result<Vec<TransferRecord>> {
	serde_json::from_slice(input).map_err(Into::into)
}
