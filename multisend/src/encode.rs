use crate::{Address, MultiSendTx};
use log::*;
use sp_core::U256;

/// Selector of the multisend contract's `multiSend(bytes)` method.
pub const MULTI_SEND_SELECTOR: [u8; 4] = [0x8d, 0x80, 0xff, 0x0a];

/// Selector of the erc20 `transfer(address,uint256)` method.
pub const ERC20_TRANSFER_SELECTOR: [u8; 4] = [0xa9, 0x05, 0x9c, 0xbb];

/// Width of an ABI word.
const WORD: usize = 32;

fn push_word(out: &mut Vec<u8>, value: U256) {
	let mut word = [0u8; WORD];
	value.to_big_endian(&mut word);
	out.extend_from_slice(&word);
}

/// Packs one instruction into the multisend wire layout:
/// operation byte, receiver, value word, data length word, raw data.
fn pack_tx(out: &mut Vec<u8>, tx: &MultiSendTx) {
	out.push(tx.operation as u8);
	out.extend_from_slice(&tx.to.0);
	push_word(out, tx.value);
	push_word(out, U256::from(tx.data.len()));
	out.extend_from_slice(&tx.data);
}

/// Builds the call data of a `multiSend(bytes)` call executing `txs` in order.
pub fn encode_multi_send(txs: &[MultiSendTx]) -> Vec<u8> {
	info!("packing {} transfers into a multiSend call", txs.len());
	let mut packed = Vec::new();
	for tx in txs {
		pack_tx(&mut packed, tx);
	}

	let mut call = Vec::with_capacity(4 + 3 * WORD + packed.len());
	call.extend_from_slice(&MULTI_SEND_SELECTOR);
	// ABI head of the single dynamic `bytes` argument: offset, then byte length.
	push_word(&mut call, U256::from(WORD));
	push_word(&mut call, U256::from(packed.len()));
	call.extend_from_slice(&packed);
	// The bytes payload is right-padded to a whole word.
	let trailing = packed.len() % WORD;
	if trailing != 0 {
		call.resize(call.len() + WORD - trailing, 0);
	}
	call
}

/// Builds the call data of an erc20 `transfer(address,uint256)` call.
pub fn encode_erc20_transfer(receiver: Address, amount: U256) -> Vec<u8> {
	let mut call = Vec::with_capacity(4 + 2 * WORD);
	call.extend_from_slice(&ERC20_TRANSFER_SELECTOR);
	call.extend_from_slice(&[0u8; 12]);
	call.extend_from_slice(&receiver.0);
	push_word(&mut call, amount);
	call
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::MultiSendOperation;
	use sp_core::keccak_256;
	use std::str::FromStr;

	fn receiver() -> Address {
		Address::from_str("0xde786877a10dbb7eba25a4da65aecf47654f08ab").unwrap()
	}

	fn native_transfer() -> MultiSendTx {
		MultiSendTx {
			operation: MultiSendOperation::Call,
			to: receiver(),
			value: U256::from(16),
			data: Vec::new(),
		}
	}

	fn erc20_transfer() -> MultiSendTx {
		let token = Address::from_str("0x1111111111111111111111111111111111111111").unwrap();
		MultiSendTx {
			operation: MultiSendOperation::Call,
			to: token,
			value: U256::zero(),
			data: encode_erc20_transfer(receiver(), U256::from(15)),
		}
	}

	#[test]
	fn selectors_match_their_signatures() {
		assert_eq!(&keccak_256(b"multiSend(bytes)")[..4], &MULTI_SEND_SELECTOR[..]);
		assert_eq!(&keccak_256(b"transfer(address,uint256)")[..4], &ERC20_TRANSFER_SELECTOR[..]);
	}

	#[test]
	fn encodes_an_empty_bundle() {
		let expected = concat!(
			"8d80ff0a",
			"0000000000000000000000000000000000000000000000000000000000000020",
			"0000000000000000000000000000000000000000000000000000000000000000",
		);
		assert_eq!(hex::encode(encode_multi_send(&[])), expected);
	}

	#[test]
	fn encodes_a_native_transfer() {
		let expected = concat!(
			"8d80ff0a",
			"0000000000000000000000000000000000000000000000000000000000000020",
			"0000000000000000000000000000000000000000000000000000000000000055",
			"00de786877a10dbb7eba25a4da65aecf47654f08ab0000000000000000000000",
			"0000000000000000000000000000000000000000100000000000000000000000",
			"0000000000000000000000000000000000000000000000000000000000000000",
		);
		assert_eq!(hex::encode(encode_multi_send(&[native_transfer()])), expected);
	}

	#[test]
	fn encodes_an_erc20_transfer() {
		let expected = concat!(
			"8d80ff0a",
			"0000000000000000000000000000000000000000000000000000000000000020",
			"0000000000000000000000000000000000000000000000000000000000000099",
			"0011111111111111111111111111111111111111110000000000000000000000",
			"0000000000000000000000000000000000000000000000000000000000000000",
			"000000000000000000000000000000000000000044a9059cbb00000000000000",
			"0000000000de786877a10dbb7eba25a4da65aecf47654f08ab00000000000000",
			"0000000000000000000000000000000000000000000000000f00000000000000",
		);
		assert_eq!(hex::encode(encode_multi_send(&[erc20_transfer()])), expected);
	}

	#[test]
	fn packing_preserves_instruction_order() {
		let expected = concat!(
			"8d80ff0a",
			"0000000000000000000000000000000000000000000000000000000000000020",
			"00000000000000000000000000000000000000000000000000000000000000ee",
			"0011111111111111111111111111111111111111110000000000000000000000",
			"0000000000000000000000000000000000000000000000000000000000000000",
			"000000000000000000000000000000000000000044a9059cbb00000000000000",
			"0000000000de786877a10dbb7eba25a4da65aecf47654f08ab00000000000000",
			"0000000000000000000000000000000000000000000000000f00de786877a10d",
			"bb7eba25a4da65aecf47654f08ab000000000000000000000000000000000000",
			"0000000000000000000000000010000000000000000000000000000000000000",
			"0000000000000000000000000000000000000000000000000000000000000000",
		);
		assert_eq!(
			hex::encode(encode_multi_send(&[erc20_transfer(), native_transfer()])),
			expected
		);

		let expected = concat!(
			"8d80ff0a",
			"0000000000000000000000000000000000000000000000000000000000000020",
			"00000000000000000000000000000000000000000000000000000000000000ee",
			"00de786877a10dbb7eba25a4da65aecf47654f08ab0000000000000000000000",
			"0000000000000000000000000000000000000000100000000000000000000000",
			"0000000000000000000000000000000000000000000011111111111111111111",
			"1111111111111111111100000000000000000000000000000000000000000000",
			"0000000000000000000000000000000000000000000000000000000000000000",
			"00000000000000000044a9059cbb000000000000000000000000de786877a10d",
			"bb7eba25a4da65aecf47654f08ab000000000000000000000000000000000000",
			"000000000000000000000000000f000000000000000000000000000000000000",
		);
		assert_eq!(
			hex::encode(encode_multi_send(&[native_transfer(), erc20_transfer()])),
			expected
		);
	}
}
