pub mod error;
pub mod partition;
pub mod pipeline;
pub mod report;
pub mod source;
pub mod transfer;

pub use error::{Error, Result};
pub use transfer::TransferRecord;

/// Default number of transfers per multisend bundle.
pub const DEFAULT_BATCH_SIZE: usize = 200;
