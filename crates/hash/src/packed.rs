use core::{
	ffi::CStr,
	fmt::{Display, Formatter, LowerHex, Result as FmtResult},
};

use serde::{Deserialize, Serialize};

const HASH_MASK: u32 = 0x00FF_FFFF;
const LENGTH_SHIFT: u32 = 24;

/// A djb2 hash with the input's byte length folded into its top byte.
///
/// The low 24 bits hold the low 24 bits of the hash, the high 8 bits hold the length modulo 256.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct PackedHash(u32);

impl PackedHash {
	#[must_use]
	pub const fn new(raw: u32) -> Self {
		Self(raw)
	}

	/// Lengths of 256 or more alias onto their low byte.
	#[must_use]
	pub const fn from_parts(hash: u64, length: usize) -> Self {
		let masked_hash = (hash as u32) & HASH_MASK;
		let length_byte = (length as u32 & 0xFF) << LENGTH_SHIFT;

		Self(masked_hash | length_byte)
	}

	#[must_use]
	pub fn from_c_str(s: &CStr) -> Self {
		crate::pack(s.to_bytes())
	}

	#[must_use]
	pub const fn get(self) -> u32 {
		self.0
	}

	#[must_use]
	pub const fn hash_bits(self) -> u32 {
		self.0 & HASH_MASK
	}

	#[must_use]
	pub const fn length_byte(self) -> u8 {
		(self.0 >> LENGTH_SHIFT) as u8
	}
}

impl Display for PackedHash {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		write!(f, "{:#010x}", self.0)
	}
}

impl LowerHex for PackedHash {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		LowerHex::fmt(&self.0, f)
	}
}

impl From<PackedHash> for u32 {
	fn from(value: PackedHash) -> Self {
		value.get()
	}
}

impl From<&CStr> for PackedHash {
	fn from(value: &CStr) -> Self {
		Self::from_c_str(value)
	}
}

#[cfg(test)]
mod tests {
	use alloc::{format, string::String};

	use super::PackedHash;

	#[test]
	fn parts_are_split_back_out() {
		let packed = PackedHash::from_parts(177_670, 1);

		assert_eq!(packed.get(), 0x0102_B606);
		assert_eq!(packed.hash_bits(), 0x0002_B606);
		assert_eq!(packed.length_byte(), 1);
	}

	#[test]
	fn high_hash_bits_are_cleared() {
		let packed = PackedHash::from_parts(u64::MAX, 0);

		assert_eq!(packed.get(), 0x00FF_FFFF);
	}

	#[test]
	fn length_aliases_mod_256() {
		assert_eq!(PackedHash::from_parts(5381, 256), PackedHash::from_parts(5381, 0));
		assert_eq!(PackedHash::from_parts(5381, 257).length_byte(), 1);
	}

	#[test]
	fn display_is_zero_padded_lowercase_hex() {
		assert_eq!(format!("{}", PackedHash::new(0x1505)), "0x00001505");
		assert_eq!(format!("{}", PackedHash::new(0x0102_B606)), "0x0102b606");
		assert_eq!(format!("{:08x}", PackedHash::new(0xAB)), "000000ab");
	}

	#[test]
	fn serializes_as_bare_integer() -> Result<(), ron::Error> {
		let packed = PackedHash::new(0x0102_B606);

		let output: String = ron::to_string(&packed)?;

		assert_eq!(output, "16954886");

		let back: PackedHash = ron::from_str(&output).map_err(|e| e.code)?;

		assert_eq!(back, packed);

		Ok(())
	}
}
