use sp_core::{keccak_256, H160};

/// A 20-byte account address of an EVM chain.
#[derive(Eq, PartialEq, Copy, Clone, Default, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; 20]);

impl_serde::impl_fixed_hash_serde!(Address, 20);

// Displays the address with its EIP-55 mixed-case checksum.
impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let address = hex::encode(self.0);
		let address_hash = hex::encode(keccak_256(address.as_bytes()));

		let checksum: String =
			address
				.char_indices()
				.fold(String::from("0x"), |mut acc, (index, address_char)| {
					let n = u16::from_str_radix(&address_hash[index..index + 1], 16)
						.expect("Keccak256 hashed; qed");

					if n > 7 {
						// hash nibble 8..f selects uppercase
						acc.push_str(&address_char.to_uppercase().to_string())
					} else {
						acc.push(address_char)
					}

					acc
				});
		write!(f, "{checksum}")
	}
}

impl core::fmt::Debug for Address {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{:?}", H160(self.0))
	}
}

impl From<[u8; 20]> for Address {
	fn from(bytes: [u8; 20]) -> Self {
		Self(bytes)
	}
}

impl From<Address> for [u8; 20] {
	fn from(value: Address) -> Self {
		value.0
	}
}

impl From<H160> for Address {
	fn from(h160: H160) -> Self {
		Self(h160.0)
	}
}

impl From<Address> for H160 {
	fn from(value: Address) -> Self {
		H160(value.0)
	}
}

impl std::str::FromStr for Address {
	type Err = &'static str;
	fn from_str(input: &str) -> Result<Self, Self::Err> {
		H160::from_str(input).map(Into::into).map_err(|_| "invalid hex address.")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	// EIP-55 reference addresses.
	const CHECKSUMMED: &[&str] = &[
		"0x52908400098527886E0F7030069857D2E4169EE7",
		"0x8617E340B3D01FA5F11F306F4090FD50E238070D",
		"0xde709f2102306220921060314715629080e2fb77",
		"0x27b1fdb04752bbc536007a920d24acb045561c26",
		"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
		"0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
		"0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
		"0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
	];

	#[test]
	fn display_checksums_the_address() {
		for expected in CHECKSUMMED {
			let address = Address::from_str(&expected.to_lowercase()).unwrap();
			assert_eq!(address.to_string(), *expected);
		}
	}

	#[test]
	fn parses_with_and_without_prefix() {
		let with = Address::from_str("0xde786877a10dbb7eba25a4da65aecf47654f08ab").unwrap();
		let without = Address::from_str("de786877a10dbb7eba25a4da65aecf47654f08ab").unwrap();
		assert_eq!(with, without);
		assert_eq!(with.0[0], 0xde);
	}

	#[test]
	fn rejects_malformed_input() {
		assert!(Address::from_str("").is_err());
		assert!(Address::from_str("0x1234").is_err());
		assert!(Address::from_str("0xzz786877a10dbb7eba25a4da65aecf47654f08ab").is_err());
	}

	#[test]
	fn serde_uses_hex_strings() {
		let address: Address =
			serde_json::from_str("\"0xde786877a10dbb7eba25a4da65aecf47654f08ab\"").unwrap();
		assert_eq!(address.0[19], 0xab);
		let json = serde_json::to_string(&address).unwrap();
		assert_eq!(json, "\"0xde786877a10dbb7eba25a4da65aecf47654f08ab\"");
	}
}
