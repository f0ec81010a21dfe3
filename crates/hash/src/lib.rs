#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

#[cfg(test)]
extern crate alloc;

mod hasher;
mod packed;

use core::{
	error::Error as CoreError,
	fmt::{Display, Formatter, Result as FmtResult},
	hash::Hasher as _,
};

use tracing::{debug, trace};

pub use self::{hasher::*, packed::*};

/// Hashes `input` and packs its length into the result.
///
/// # Errors
///
/// Returns [`PackError::InvalidInput`] if no input was supplied. An empty input is valid.
pub fn compute(input: Option<&[u8]>) -> Result<PackedHash, PackError> {
	let Some(input) = input else {
		debug!("no input supplied");
		return Err(PackError::InvalidInput);
	};

	Ok(pack(input))
}

/// The infallible half of [`compute`].
#[must_use]
pub fn pack(input: &[u8]) -> PackedHash {
	let input = terminated(input);

	let hash = djb2(input);

	let packed = PackedHash::from_parts(hash, input.len());

	trace!(length = input.len(), hash, packed = packed.get(), "packed input");

	packed
}

/// The raw djb2 hash of `input`, up to its first zero byte.
#[must_use]
pub fn djb2(input: &[u8]) -> u64 {
	let mut hasher = Djb2::new();
	hasher.write(terminated(input));
	hasher.finish()
}

/// Everything before the first zero byte in `input`.
#[must_use]
pub fn terminated(input: &[u8]) -> &[u8] {
	match input.iter().position(|&b| matches!(b, 0)) {
		Some(end) => &input[..end],
		None => input,
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
	InvalidInput,
}

impl Display for PackError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::InvalidInput => f.write_str("no input was supplied to hash"),
		}
	}
}

impl CoreError for PackError {}
