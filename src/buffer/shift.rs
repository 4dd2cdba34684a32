/*! Whole-buffer shifts and rotates.

Every operation here splits its bit count into a whole-byte component, which
moves or resizes the byte sequence, and a sub-byte remainder in `1 .. 8`,
which shifts each byte and carries the overflow into its neighbor.

The two families do not use the same byte significance.

- Shifts carry sub-byte overflow upward through the byte indices: on a left
  shift, the bits leaving the top of byte `k` enter the bottom of byte `k + 1`,
  so byte `0` is the least significant. The whole-byte component appends or
  drops bytes at the end of the buffer.
- Rotates carry downward: on a left rotate, the bits leaving the top of byte
  `k` enter the bottom of byte `k - 1` (cyclically), so byte `0` is the most
  significant. The whole-byte component is a cyclic rotation of the byte
  sequence toward index `0`.

The rotations are therefore exact rotations of a big-endian integer, and
compose and invert as such. The shifts are not inverses of each other; see
[`BitBuffer::shift_left`] for the growth rule.
!*/

use core::iter;

use super::BitBuffer;

/// Splits a bit count into its whole-byte and sub-byte components.
#[inline]
fn split(amount: usize) -> (usize, u32) {
	(amount >> 3, (amount & 7) as u32)
}

/// Rotates a byte sequence by `by` positions toward index `0`.
///
/// Negative and over-range amounts wrap. An empty sequence stays empty.
pub(super) fn rotate_bytes(bytes: &[u8], by: isize) -> Vec<u8> {
	let mut out = bytes.to_vec();
	if let Ok(len) = isize::try_from(out.len()) {
		if len > 0 {
			out.rotate_left(by.rem_euclid(len) as usize);
		}
	}
	out
}

impl BitBuffer {
	/// Shifts the buffer toward its higher-indexed bytes by `amount` bits.
	///
	/// The buffer grows so that no set bit is lost. The whole-byte part of
	/// `amount` appends `amount / 8` zero bytes to the end of the buffer; a
	/// nonzero sub-byte remainder then reserves one further byte for the bits
	/// carried out of the last byte, and moves every bit `amount % 8` places
	/// toward the higher byte indices. The result is always exactly
	/// `ceil(amount / 8)` bytes longer than the input, and its top byte is kept
	/// even when it is zero.
	///
	/// An `amount` of zero or less returns an unchanged copy.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0x01].shift_left(1), bitbuf![0x02, 0x00]);
	/// assert_eq!(bitbuf![0x81].shift_left(1), bitbuf![0x02, 0x01]);
	/// assert_eq!(bitbuf![0x01].shift_left(8), bitbuf![0x01, 0x00]);
	/// assert_eq!(bitbuf![0x01].shift_left(0), bitbuf![0x01]);
	/// ```
	pub fn shift_left(&self, amount: isize) -> Self {
		match usize::try_from(amount) {
			Ok(amount) => self.shift_left_by(amount),
			Err(_) => self.clone(),
		}
	}

	/// Shifts the buffer toward its lower-indexed bytes by `amount` bits.
	///
	/// The whole-byte part of `amount` removes the last `amount / 8` bytes of
	/// the buffer, emptying it at most. The sub-byte remainder then moves every
	/// bit `amount % 8` places toward the lower byte indices, dropping the bits
	/// that fall off the bottom of byte `0` and filling the top of the last
	/// byte with zeros. The sub-byte step never changes the length.
	///
	/// An `amount` of zero or less returns an unchanged copy.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0x02].shift_right(1), bitbuf![0x01]);
	/// assert_eq!(bitbuf![0x00, 0x01].shift_right(1), bitbuf![0x80, 0x00]);
	/// assert_eq!(bitbuf![0xaa, 0xbb].shift_right(8), bitbuf![0xaa]);
	/// assert!(bitbuf![0xff].shift_right(64).is_empty());
	/// ```
	pub fn shift_right(&self, amount: isize) -> Self {
		match usize::try_from(amount) {
			Ok(amount) => self.shift_right_by(amount),
			Err(_) => self.clone(),
		}
	}

	/// Shifts by a signed amount: positive amounts shift left, negative
	/// amounts shift right by the magnitude.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = bitbuf![0x02];
	/// assert_eq!(buf.shift(1), buf.shift_left(1));
	/// assert_eq!(buf.shift(-1), buf.shift_right(1));
	/// ```
	pub fn shift(&self, amount: isize) -> Self {
		if amount < 0 {
			self.shift_right_by(amount.unsigned_abs())
		}
		else {
			self.shift_left_by(amount.unsigned_abs())
		}
	}

	fn shift_left_by(&self, amount: usize) -> Self {
		if amount == 0 {
			return self.clone();
		}
		let (whole, sub) = split(amount);
		tracing::trace!(whole, sub, "shifting left");

		let mut bytes = self.bytes.clone();
		bytes.resize(bytes.len() + whole, 0);
		if sub == 0 {
			return Self::from_bytes(bytes);
		}

		//  Pair each byte with its predecessor, with a zero before the first
		//  byte and a zero byte appended to receive the final carry.
		iter::once(&0)
			.chain(bytes.iter())
			.zip(bytes.iter().chain(iter::once(&0)))
			.map(|(&prev, &this)| (this << sub) | (prev >> (8 - sub)))
			.collect()
	}

	fn shift_right_by(&self, amount: usize) -> Self {
		if amount == 0 {
			return self.clone();
		}
		let (whole, sub) = split(amount);
		tracing::trace!(whole, sub, "shifting right");

		let bytes = &self.bytes[.. self.bytes.len().saturating_sub(whole)];
		if sub == 0 {
			return Self::from_slice(bytes);
		}

		//  Pair each byte with its successor, with a zero after the last byte.
		bytes
			.iter()
			.zip(bytes.iter().skip(1).chain(iter::once(&0)))
			.map(|(&this, &next)| (this >> sub) | (next << (8 - sub)))
			.collect()
	}

	/// Rotates the buffer left by `amount` bits.
	///
	/// The buffer is read as a big-endian integer: byte `0` is the most
	/// significant. Bits leaving the top of byte `0` re-enter at the bottom of
	/// the last byte. The whole-byte part of `amount` is a cyclic rotation of
	/// the byte sequence toward index `0`; the remainder moves each bit
	/// `amount % 8` places, carrying the top bits of byte `k + 1` into the
	/// bottom of byte `k`.
	///
	/// The length never changes. A negative `amount` rotates right by its
	/// magnitude.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0x80, 0x00].rotate_left(1), bitbuf![0x00, 0x01]);
	/// assert_eq!(bitbuf![0x12, 0x34].rotate_left(8), bitbuf![0x34, 0x12]);
	/// assert_eq!(bitbuf![0x81].rotate_left(1), bitbuf![0x03]);
	/// ```
	pub fn rotate_left(&self, amount: isize) -> Self {
		if amount < 0 {
			return self.rotate_right_by(amount.unsigned_abs());
		}
		self.rotate_left_by(amount.unsigned_abs())
	}

	/// Rotates the buffer right by `amount` bits.
	///
	/// This is the exact inverse of [`rotate_left`]: bits leaving the bottom of
	/// the last byte re-enter at the top of byte `0`, the whole-byte part
	/// rotates the byte sequence away from index `0`, and the remainder carries
	/// the low bits of byte `k - 1` into the top of byte `k`.
	///
	/// The length never changes. A negative `amount` rotates left by its
	/// magnitude.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0x00, 0x01].rotate_right(1), bitbuf![0x80, 0x00]);
	/// assert_eq!(bitbuf![0x12, 0x34].rotate_right(4), bitbuf![0x41, 0x23]);
	/// ```
	///
	/// [`rotate_left`]: Self::rotate_left
	pub fn rotate_right(&self, amount: isize) -> Self {
		if amount < 0 {
			return self.rotate_left_by(amount.unsigned_abs());
		}
		self.rotate_right_by(amount.unsigned_abs())
	}

	/// Rotates by a signed amount: positive amounts rotate left, negative
	/// amounts rotate right.
	///
	/// This is the same as [`rotate_left`], and exists for symmetry with
	/// [`shift`].
	///
	/// [`rotate_left`]: Self::rotate_left
	/// [`shift`]: Self::shift
	#[inline]
	pub fn rotate(&self, amount: isize) -> Self {
		self.rotate_left(amount)
	}

	fn rotate_left_by(&self, amount: usize) -> Self {
		let len = self.bytes.len();
		if amount == 0 || len == 0 {
			return self.clone();
		}
		let (whole, sub) = split(amount);
		tracing::trace!(whole, sub, "rotating left");

		let bytes = rotate_bytes(&self.bytes, whole as isize);
		if sub == 0 {
			return Self::from_bytes(bytes);
		}

		//  Byte `k` takes its carry from byte `k + 1`, wrapping at the end.
		bytes
			.iter()
			.zip(bytes.iter().cycle().skip(1))
			.map(|(&this, &next)| (this << sub) | (next >> (8 - sub)))
			.collect()
	}

	fn rotate_right_by(&self, amount: usize) -> Self {
		let len = self.bytes.len();
		if amount == 0 || len == 0 {
			return self.clone();
		}
		let (whole, sub) = split(amount);
		tracing::trace!(whole, sub, "rotating right");

		let bytes = rotate_bytes(&self.bytes, -(whole as isize));
		if sub == 0 {
			return Self::from_bytes(bytes);
		}

		//  Byte `k` takes its carry from byte `k - 1`, wrapping at the front.
		bytes
			.iter()
			.zip(bytes.iter().cycle().skip(len - 1))
			.map(|(&this, &prev)| (this >> sub) | (prev << (8 - sub)))
			.collect()
	}
}
