use crate::error::{Error, Result};
use log::*;

/// Splits `records` into contiguous batches of at most `size` elements,
/// preserving order. All batches are full except possibly the last; an empty
/// input yields no batches at all.
pub fn partition<T>(records: Vec<T>, size: usize) -> Result<Vec<Vec<T>>> {
	if size == 0 {
		return Err(Error::InvalidBatchSize(size));
	}

	let total = records.len();
	let mut batches = Vec::with_capacity(total.div_ceil(size));
	let mut records = records.into_iter();
	loop {
		let batch: Vec<T> = records.by_ref().take(size).collect();
		if batch.is_empty() {
			break;
		}
		batches.push(batch);
	}

	info!("Splitting {} transfers into {} batches of size {}", total, batches.len(), size);
	Ok(batches)
}
