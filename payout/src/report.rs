use multisend::MultiSendTx;

/// Shape of a prepared batch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
	pub batches: usize,
	pub batch_size: usize,
	/// Length of the final batch; `None` when there are no batches.
	pub last_batch: Option<usize>,
}

/// Summarizes partitioned batches: how many there are and how full the last one is.
pub fn summarize<T>(batches: &[Vec<T>], batch_size: usize) -> BatchSummary {
	BatchSummary {
		batches: batches.len(),
		batch_size,
		last_batch: batches.last().map(Vec::len),
	}
}

impl std::fmt::Display for BatchSummary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.last_batch {
			Some(last) => write!(
				f,
				"Prepared {} bundles of size {} (last having {})",
				self.batches, self.batch_size, last
			),
			None => write!(f, "Prepared 0 bundles of size {}", self.batch_size),
		}
	}
}

/// One-line description of a bundle: transfer count and receiver range.
pub fn describe(bundle: &[MultiSendTx]) -> String {
	match (bundle.first(), bundle.last()) {
		(Some(first), Some(last)) => format!(
			"{} transfers to receivers {} through {}",
			bundle.len(),
			first.to,
			last.to
		),
		_ => String::from("no transfers"),
	}
}
