use crate::{
	error::{Error, Result},
	partition::partition,
	report::{describe, summarize},
	transfer::TransferRecord,
};
use async_trait::async_trait;
use log::*;
use multisend::MultiSendTx;

/// Question put to the operator before any bundle is handed over.
const CONFIRM_QUESTION: &str = "Do you want to send these transactions to the EVM?";

/// Decides whether the prepared bundles may be handed over for submission.
#[async_trait]
pub trait ExecutionGate {
	async fn confirm(&mut self, question: &str) -> Result<bool>;
}

/// Receives prepared bundles, one at a time and in order.
#[async_trait]
pub trait BundleSubmitter {
	async fn submit(&mut self, bundle: &[MultiSendTx]) -> Result<()>;
}

/// Builds the multisend instruction bundles for `transfers`: partition into
/// batches of `batch_size`, then convert every record of every batch in order.
pub fn prepare(transfers: Vec<TransferRecord>, batch_size: usize) -> Result<Vec<Vec<MultiSendTx>>> {
	let batches = partition(transfers, batch_size)?;

	let mut bundles = Vec::with_capacity(batches.len());
	for batch in &batches {
		let mut bundle = Vec::with_capacity(batch.len());
		for transfer in batch {
			let tx = transfer
				.as_multisend_tx()
				.map_err(|source| Error::Amount { receiver: transfer.receiver, source })?;
			bundle.push(tx);
		}
		bundles.push(bundle);
	}
	Ok(bundles)
}

/// Runs the payout pipeline: prepare the bundles, report them, ask the gate,
/// then hand the bundles to the submitter strictly one after another.
/// Returns the number of bundles handed over.
pub async fn run(
	transfers: Vec<TransferRecord>,
	batch_size: usize,
	gate: &mut dyn ExecutionGate,
	submitter: &mut dyn BundleSubmitter,
) -> Result<usize> {
	if transfers.is_empty() {
		info!("No transfers to make, nothing to do");
		return Ok(0);
	}

	info!("Preparing transaction data...");
	let bundles = prepare(transfers, batch_size)?;
	info!("{}", summarize(&bundles, batch_size));

	if !gate.confirm(CONFIRM_QUESTION).await? {
		info!("Submission declined, no bundle handed over");
		return Ok(0);
	}

	for bundle in &bundles {
		info!("initiating {}", describe(bundle));
		submitter.submit(bundle).await?;
	}
	Ok(bundles.len())
}
