use crate::Address;
use sp_core::U256;

/// Call type of a multisend instruction. The discriminants are the
/// operation bytes of the packed encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiSendOperation {
	Call = 0,
	DelegateCall = 1,
}

/// One instruction of a multisend bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiSendTx {
	pub operation: MultiSendOperation,
	pub to: Address,
	pub value: U256,
	pub data: Vec<u8>,
}
