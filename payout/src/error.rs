use multisend::{Address, AmountError};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type of the payout pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("unsupported file type {0:?}")]
	UnsupportedFormat(String),

	#[error("invalid batch size {0}, must be at least 1")]
	InvalidBatchSize(usize),

	#[error("transfer to {receiver} carries an unusable amount: {source}")]
	Amount {
		receiver: Address,
		#[source]
		source: AmountError,
	},

	#[error("failed to read transfer file: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to parse csv transfer file: {0}")]
	Csv(#[from] csv::Error),

	#[error("failed to parse json transfer file: {0}")]
	Json(#[from] serde_json::Error),
}
