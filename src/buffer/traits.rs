/*! General trait implementations for `BitBuffer`.

The algebra is provided through inherent methods only. This module holds the
conversion, iteration, and formatting traits.
!*/

use super::BitBuffer;

use crate::error::Error;

use core::{
	borrow::Borrow,
	fmt::{
		self,
		Binary,
		Debug,
		Display,
		Formatter,
		LowerHex,
		UpperHex,
	},
	iter::FromIterator,
	slice,
	str::FromStr,
};

use std::vec;

impl From<Vec<u8>> for BitBuffer {
	#[inline]
	fn from(bytes: Vec<u8>) -> Self {
		Self::from_bytes(bytes)
	}
}

impl From<&[u8]> for BitBuffer {
	#[inline]
	fn from(bytes: &[u8]) -> Self {
		Self::from_slice(bytes)
	}
}

impl From<BitBuffer> for Vec<u8> {
	#[inline]
	fn from(buf: BitBuffer) -> Self {
		buf.into_bytes()
	}
}

impl FromIterator<u8> for BitBuffer {
	fn from_iter<I>(iter: I) -> Self
	where I: IntoIterator<Item = u8> {
		Self::from_bytes(iter.into_iter().collect())
	}
}

impl<'a> FromIterator<&'a u8> for BitBuffer {
	fn from_iter<I>(iter: I) -> Self
	where I: IntoIterator<Item = &'a u8> {
		iter.into_iter().copied().collect()
	}
}

impl IntoIterator for BitBuffer {
	type IntoIter = vec::IntoIter<u8>;
	type Item = u8;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.bytes.into_iter()
	}
}

impl<'a> IntoIterator for &'a BitBuffer {
	type IntoIter = slice::Iter<'a, u8>;
	type Item = &'a u8;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.bytes.iter()
	}
}

impl AsRef<[u8]> for BitBuffer {
	#[inline]
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl Borrow<[u8]> for BitBuffer {
	#[inline]
	fn borrow(&self) -> &[u8] {
		self.as_bytes()
	}
}

/// Parses strict hexadecimal text. See [`BitBuffer::try_from_hex`].
impl FromStr for BitBuffer {
	type Err = Error;

	#[inline]
	fn from_str(text: &str) -> Result<Self, Self::Err> {
		Self::try_from_hex(text)
	}
}

/** Renders the buffer for debugging as its type name around its hex text.

# Examples

```rust
use bitbuf::prelude::*;

assert_eq!(format!("{:?}", bitbuf![0xca, 0xfe]), "BitBuffer(cafe)");
```
**/
impl Debug for BitBuffer {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_tuple("BitBuffer")
			.field(&format_args!("{:x}", self))
			.finish()
	}
}

/// Renders the buffer as lowercase hexadecimal text, identical to
/// [`BitBuffer::to_hex`].
impl Display for BitBuffer {
	#[inline]
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		LowerHex::fmt(self, fmt)
	}
}

/** Renders the buffer as binary digits, last byte first.

Each byte is written as eight digits, most significant first. The alternate
flag (`{:#b}`) prepends `0b`.

# Examples

```rust
use bitbuf::prelude::*;

let buf = bitbuf![0x0f, 0x01];
assert_eq!(format!("{:b}", buf), "0000000100001111");
assert_eq!(format!("{:#b}", buf), "0b0000000100001111");
```
**/
impl Binary for BitBuffer {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		if fmt.alternate() {
			fmt.write_str("0b")?;
		}
		self.bytes
			.iter()
			.rev()
			.try_for_each(|byte| write!(fmt, "{:08b}", byte))
	}
}

/** Renders the buffer as lowercase hexadecimal digits, first byte first.

Each byte is written as two digits. The alternate flag (`{:#x}`) prepends
`0x`.
**/
impl LowerHex for BitBuffer {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		if fmt.alternate() {
			fmt.write_str("0x")?;
		}
		self.bytes
			.iter()
			.try_for_each(|byte| write!(fmt, "{:02x}", byte))
	}
}

/// Renders the buffer as uppercase hexadecimal digits, first byte first.
impl UpperHex for BitBuffer {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		if fmt.alternate() {
			fmt.write_str("0x")?;
		}
		self.bytes
			.iter()
			.try_for_each(|byte| write!(fmt, "{:02X}", byte))
	}
}
