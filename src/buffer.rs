/*! The owned byte buffer.

This module defines [`BitBuffer`] and its storage-level API: construction,
length queries, and access to the raw bytes. The bit-level algebra lives in the
submodules and is documented on the methods it adds to the type.
!*/

mod ops;
mod shift;
mod traits;


/** An arbitrary-length sequence of bytes, treated as one wide integer.

`BitBuffer` is a newtype over `Vec<u8>`. It has value semantics: none of its
algebraic methods modify the receiver, and each returns a new buffer. Cloning
copies the bytes.

# Bit Numbering

Single-bit operations ([`test_bit`], [`bit`], [`set_bit`], and friends) use a
little-endian numbering. Bit `i` lives in byte `i / 8`, at position `i % 8`
counted from the least significant bit of that byte.

# Length

The length of a buffer is counted in bytes, and never changes after
construction. Operations that need more room produce a longer buffer: a left
shift by `n` bits always grows the result by `ceil(n / 8)` bytes, even when the
new bytes end up zero. Leading zero bytes are never trimmed.

[`bit`]: Self::bit
[`set_bit`]: Self::set_bit
[`test_bit`]: Self::test_bit
**/
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitBuffer {
	bytes: Vec<u8>,
}

impl BitBuffer {
	/// Constructs a new, empty, `BitBuffer`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = BitBuffer::new();
	/// assert!(buf.is_empty());
	/// assert_eq!(buf.bit_len(), 0);
	/// ```
	#[inline]
	pub fn new() -> Self {
		Self { bytes: Vec::new() }
	}

	/// Constructs a buffer of `len` zero bytes.
	#[inline]
	pub fn zeroed(len: usize) -> Self {
		Self {
			bytes: vec![0; len],
		}
	}

	/// Wraps a vector of bytes, verbatim.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// let buf = BitBuffer::from_bytes(vec![0xff, 0x00]);
	/// assert_eq!(buf.to_hex(), "ff00");
	/// ```
	#[inline]
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Copies a slice of bytes into a new buffer.
	#[inline]
	pub fn from_slice(bytes: &[u8]) -> Self {
		Self {
			bytes: bytes.to_vec(),
		}
	}

	/// Returns the number of bytes in the buffer.
	///
	/// This is a byte count, not a bit count. See [`bit_len`].
	///
	/// [`bit_len`]: Self::bit_len
	#[inline]
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Returns `true` if the buffer holds no bytes.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Returns the number of bits in the buffer, which is always eight times
	/// its length.
	#[inline]
	pub fn bit_len(&self) -> usize {
		self.bytes.len() << 3
	}

	/// Views the buffer’s bytes.
	#[inline]
	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Copies the buffer’s bytes out into a new vector.
	#[inline]
	pub fn to_bytes(&self) -> Vec<u8> {
		self.bytes.clone()
	}

	/// Unwraps the buffer into its underlying vector, without copying.
	#[inline]
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Applies a function to every byte, producing a buffer of equal length.
	#[inline]
	pub(crate) fn map_bytes<F>(&self, func: F) -> Self
	where F: FnMut(u8) -> u8 {
		self.bytes.iter().copied().map(func).collect()
	}
}
