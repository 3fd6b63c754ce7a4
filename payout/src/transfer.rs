use multisend::{to_wei, Address, AmountError, MultiSendOperation, MultiSendTx};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One requested payout, as listed in the transfer file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransferRecord {
	pub receiver: Address,
	pub amount: Decimal,
}

impl TransferRecord {
	/// Converts the record into a plain-call multisend instruction carrying
	/// the amount in wei.
	pub fn as_multisend_tx(&self) -> Result<MultiSendTx, AmountError> {
		Ok(MultiSendTx {
			operation: MultiSendOperation::Call,
			to: self.receiver,
			value: to_wei(self.amount)?,
			data: Vec::new(),
		})
	}
}
