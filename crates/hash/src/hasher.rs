use core::hash::Hasher;

/// Starting value of the djb2 accumulator.
pub const DJB2_SEED: u64 = 5381;

/// A [`Hasher`] running the djb2 recurrence (`hash * 33 + byte`) over every byte written to it.
///
/// Unlike [`pack`](crate::pack), the hasher does not stop at zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Djb2 {
	state: u64,
}

impl Djb2 {
	#[must_use]
	pub const fn new() -> Self {
		Self::with_seed(DJB2_SEED)
	}

	#[must_use]
	pub const fn with_seed(seed: u64) -> Self {
		Self { state: seed }
	}

	#[inline]
	pub fn update(&mut self, byte: u8) {
		self.state = (self.state << 5)
			.wrapping_add(self.state)
			.wrapping_add(u64::from(byte));
	}
}

impl Default for Djb2 {
	fn default() -> Self {
		Self::new()
	}
}

impl Hasher for Djb2 {
	fn finish(&self) -> u64 {
		self.state
	}

	fn write(&mut self, bytes: &[u8]) {
		for &byte in bytes {
			self.update(byte);
		}
	}

	fn write_u8(&mut self, i: u8) {
		self.update(i);
	}
}

#[cfg(test)]
mod tests {
	use core::hash::{BuildHasher, BuildHasherDefault, Hasher as _};

	use super::{DJB2_SEED, Djb2};

	#[test]
	fn untouched_hasher_is_seed() {
		assert_eq!(Djb2::new().finish(), DJB2_SEED);
		assert_eq!(Djb2::default(), Djb2::new());
	}

	#[test]
	fn single_byte() {
		let mut hasher = Djb2::new();
		hasher.write_u8(b'a');

		assert_eq!(hasher.finish(), 177_670);
	}

	#[test]
	fn zero_bytes_are_hashed() {
		let mut hasher = Djb2::new();
		hasher.write(b"a\0");

		assert_eq!(hasher.finish(), 177_670 * 33);
	}

	#[test]
	fn wraps_instead_of_overflowing() {
		let mut hasher = Djb2::with_seed(u64::MAX);
		hasher.write_u8(0xff);

		let expected = u64::MAX.wrapping_mul(33).wrapping_add(0xff);

		assert_eq!(hasher.finish(), expected);
	}

	#[test]
	fn split_writes_match_single_write() {
		let mut whole = Djb2::new();
		whole.write(b"hello world");

		let mut split = BuildHasherDefault::<Djb2>::default().build_hasher();
		split.write(b"hello");
		split.write(b" world");

		assert_eq!(whole.finish(), split.finish());
	}
}
