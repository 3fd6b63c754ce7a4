mod address;
mod amount;
mod encode;
mod tx;

pub use address::Address;
pub use amount::{to_units, to_wei, AmountError, NATIVE_DECIMALS};
pub use encode::{
	encode_erc20_transfer, encode_multi_send, ERC20_TRANSFER_SELECTOR, MULTI_SEND_SELECTOR,
};
pub use tx::{MultiSendOperation, MultiSendTx};

pub use sp_core::U256;
