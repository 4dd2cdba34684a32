//! Boolean combination and single-bit access.

use super::BitBuffer;

use crate::error::{
	Error,
	Result,
};

impl BitBuffer {
	/// Combines two buffers of equal length byte-by-byte.
	///
	/// This is the shared engine of [`and`], [`or`], and [`xor`]. Buffers of
	/// different length are refused rather than truncated to the shorter.
	///
	/// [`and`]: Self::and
	/// [`or`]: Self::or
	/// [`xor`]: Self::xor
	fn zip_bytes<F>(&self, rhs: &Self, mut func: F) -> Result<Self>
	where F: FnMut(u8, u8) -> u8 {
		if self.len() != rhs.len() {
			let err = Error::LengthMismatch {
				left: self.len(),
				right: rhs.len(),
			};
			tracing::debug!(%err, "refusing bitwise operation");
			return Err(err);
		}
		Ok(self
			.bytes
			.iter()
			.zip(rhs.bytes.iter())
			.map(|(&a, &b)| func(a, b))
			.collect())
	}

	/// Computes the Boolean `AND` of two buffers.
	///
	/// # Errors
	///
	/// Fails with [`Error::LengthMismatch`] if the buffers differ in length.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let a = bitbuf![0b0101_0100];
	/// let b = bitbuf![0b0011_0000];
	/// assert_eq!(a.and(&b).unwrap(), bitbuf![0b0001_0000]);
	/// assert!(a.and(&bitbuf![0, 0]).is_err());
	/// ```
	pub fn and(&self, rhs: &Self) -> Result<Self> {
		self.zip_bytes(rhs, |a, b| a & b)
	}

	/// Computes the Boolean `OR` of two buffers.
	///
	/// # Errors
	///
	/// Fails with [`Error::LengthMismatch`] if the buffers differ in length.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let a = bitbuf![0b0101_0100];
	/// let b = bitbuf![0b0011_0000];
	/// assert_eq!(a.or(&b).unwrap(), bitbuf![0b0111_0100]);
	/// ```
	pub fn or(&self, rhs: &Self) -> Result<Self> {
		self.zip_bytes(rhs, |a, b| a | b)
	}

	/// Computes the Boolean `XOR` of two buffers.
	///
	/// # Errors
	///
	/// Fails with [`Error::LengthMismatch`] if the buffers differ in length.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let a = bitbuf![0b0101_0100];
	/// let b = bitbuf![0b0011_0000];
	/// assert_eq!(a.xor(&b).unwrap(), bitbuf![0b0110_0100]);
	/// ```
	pub fn xor(&self, rhs: &Self) -> Result<Self> {
		self.zip_bytes(rhs, |a, b| a ^ b)
	}

	/// Inverts every bit in the buffer. The length is unchanged.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0xf0, 0x00].complement(), bitbuf![0x0f, 0xff]);
	/// ```
	pub fn complement(&self) -> Self {
		self.map_bytes(|byte| !byte)
	}

	/// Tests a single bit.
	///
	/// Bit `index` lives in byte `index / 8`, at position `index % 8` from the
	/// least significant end. Indices that are negative or run past the end of
	/// the buffer are not errors; they read as `false`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = bitbuf![0x01, 0x80];
	/// assert!(buf.test_bit(0));
	/// assert!(buf.test_bit(15));
	/// assert!(!buf.test_bit(1));
	/// assert!(!buf.test_bit(16));
	/// assert!(!buf.test_bit(-1));
	/// ```
	pub fn test_bit(&self, index: isize) -> bool {
		usize::try_from(index)
			.ok()
			.and_then(|idx| self.bytes.get(idx >> 3).map(|&byte| (idx, byte)))
			.map_or(false, |(idx, byte)| (byte >> (idx & 7)) & 1 == 1)
	}

	/// Constructs the smallest buffer that holds bit `index`, with only that
	/// bit set.
	///
	/// The buffer is `index / 8 + 1` bytes long.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(BitBuffer::bit(0), bitbuf![0x01]);
	/// assert_eq!(BitBuffer::bit(9), bitbuf![0x00, 0x02]);
	/// ```
	pub fn bit(index: usize) -> Self {
		let mut bytes = vec![0; (index >> 3) + 1];
		bytes[index >> 3] = 1 << (index & 7);
		Self::from_bytes(bytes)
	}

	/// Produces a copy with bit `index` set, growing with zero bytes if the
	/// buffer is too short to hold it.
	///
	/// A negative index returns an unchanged copy.
	pub fn set_bit(&self, index: isize) -> Self {
		self.with_bit(index, true, |byte, mask| byte | mask)
	}

	/// Produces a copy with bit `index` cleared.
	///
	/// Bits outside the buffer are already clear, so an out-of-range index
	/// returns an unchanged copy.
	pub fn clear_bit(&self, index: isize) -> Self {
		self.with_bit(index, false, |byte, mask| byte & !mask)
	}

	/// Produces a copy with bit `index` inverted, growing with zero bytes if
	/// the buffer is too short to hold it.
	///
	/// A negative index returns an unchanged copy.
	pub fn complement_bit(&self, index: isize) -> Self {
		self.with_bit(index, true, |byte, mask| byte ^ mask)
	}

	fn with_bit<F>(&self, index: isize, grow: bool, func: F) -> Self
	where F: FnOnce(u8, u8) -> u8 {
		let mut out = self.clone();
		let Ok(idx) = usize::try_from(index) else {
			return out;
		};
		let elt = idx >> 3;
		if elt >= out.bytes.len() {
			if !grow {
				return out;
			}
			out.bytes.resize(elt + 1, 0);
		}
		out.bytes[elt] = func(out.bytes[elt], 1 << (idx & 7));
		out
	}

	/// Counts the set bits in the buffer.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0xff, 0x0f].pop_count(), 12);
	/// ```
	pub fn pop_count(&self) -> usize {
		self.bytes.iter().map(|byte| byte.count_ones() as usize).sum()
	}

	/// Counts the cleared bits in the buffer.
	pub fn count_zeros(&self) -> usize {
		self.bit_len() - self.pop_count()
	}

	/// Renders the buffer as a string of binary digits.
	///
	/// Each byte becomes eight digits, most significant first, and the bytes
	/// are emitted last-to-first. This is the same text the [`Binary`]
	/// formatter produces without the alternate flag.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = bitbuf![0x01, 0x80];
	/// assert_eq!(buf.binary_string(), "1000000000000001");
	/// ```
	///
	/// [`Binary`]: core::fmt::Binary
	pub fn binary_string(&self) -> String {
		format!("{:b}", self)
	}
}
