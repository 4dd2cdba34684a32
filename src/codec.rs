/*! Text and byte conversions.

These are thin layers over the buffer’s bytes. Byte `0` is always the first
byte of the text form.

# Hexadecimal

[`BitBuffer::to_hex`] writes two lowercase digits per byte with no separators.
There are two decoders:

- [`BitBuffer::from_hex`] is lenient. Input of odd length is treated as if it
  had a leading `'0'`, and each pair of characters becomes one byte. A pair
  containing any character that is not a hexadecimal digit decodes to `0`
  rather than failing. This matches the behavior of existing producers of this
  format and is kept for compatibility.
- [`BitBuffer::try_from_hex`] applies the same odd-length padding, but rejects
  invalid digits with [`Error::Hex`]. The [`FromStr`] implementation uses it.

# Base64

The standard alphabet, with padding. Decoding failures are reported as
[`Error::Decode`].

# UTF-8

[`BitBuffer::to_utf8_lossy`] replaces invalid sequences with U+FFFD;
[`BitBuffer::to_utf8`] refuses them with [`Error::Utf8`].

[`FromStr`]: core::str::FromStr
!*/

use std::borrow::Cow;

use base64::{
	engine::general_purpose::STANDARD,
	Engine,
};
use tap::Pipe;

use crate::{
	buffer::BitBuffer,
	error::{
		Error,
		Result,
	},
};

/// Decodes one pair of hexadecimal digits, or `None` if either is invalid.
#[inline]
fn hex_pair(high: char, low: char) -> Option<u8> {
	let high = high.to_digit(16)?;
	let low = low.to_digit(16)?;
	Some(((high << 4) | low) as u8)
}

/// Prepends a `'0'` to text of odd length, so that it splits evenly into
/// byte-sized pairs.
fn pad_even(text: &str) -> Cow<str> {
	if text.chars().count() % 2 == 1 {
		Cow::Owned(format!("0{}", text))
	}
	else {
		Cow::Borrowed(text)
	}
}

impl BitBuffer {
	/// Decodes hexadecimal text, leniently.
	///
	/// Text of odd length is left-padded with a `'0'`. Each pair of characters
	/// is one byte; a pair that contains an invalid digit becomes `0`.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(BitBuffer::from_hex("ff00"), bitbuf![0xff, 0x00]);
	/// assert_eq!(BitBuffer::from_hex("f"), bitbuf![0x0f]);
	/// assert_eq!(BitBuffer::from_hex("zz01"), bitbuf![0x00, 0x01]);
	/// ```
	pub fn from_hex(text: &str) -> Self {
		let chars = pad_even(text).chars().collect::<Vec<_>>();
		chars
			.chunks(2)
			.map(|pair| {
				hex_pair(pair[0], pair[1]).unwrap_or_else(|| {
					tracing::trace!(
						pair = %pair.iter().collect::<String>(),
						"invalid hex pair decoded as zero"
					);
					0
				})
			})
			.collect()
	}

	/// Decodes hexadecimal text, strictly.
	///
	/// Text of odd length is left-padded with a `'0'`, as in [`from_hex`].
	///
	/// # Errors
	///
	/// Fails with [`Error::Hex`] if the text contains a character that is not a
	/// hexadecimal digit.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(BitBuffer::try_from_hex("abc").unwrap(), bitbuf![0x0a, 0xbc]);
	/// assert!(BitBuffer::try_from_hex("zz01").is_err());
	/// ```
	///
	/// [`from_hex`]: Self::from_hex
	pub fn try_from_hex(text: &str) -> Result<Self> {
		hex::decode(pad_even(text).as_bytes())
			.map_err(|err| {
				tracing::debug!(%err, "rejecting hex input");
				Error::from(err)
			})?
			.pipe(Self::from_bytes)
			.pipe(Ok)
	}

	/// Encodes the buffer as lowercase hexadecimal text, two digits per byte.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(bitbuf![0xff, 0x00].to_hex(), "ff00");
	/// assert_eq!(bitbuf![0x0f].to_hex(), "0f");
	/// ```
	pub fn to_hex(&self) -> String {
		hex::encode(self.as_bytes())
	}

	/// Decodes standard base64 text, with padding.
	///
	/// # Errors
	///
	/// Fails with [`Error::Decode`] if the text is not valid base64.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(BitBuffer::from_base64("/wA=").unwrap(), bitbuf![0xff, 0x00]);
	/// assert!(BitBuffer::from_base64("not base64!").is_err());
	/// ```
	pub fn from_base64(text: &str) -> Result<Self> {
		STANDARD
			.decode(text)
			.map_err(|err| {
				tracing::debug!(%err, "rejecting base64 input");
				Error::from(err)
			})?
			.pipe(Self::from_bytes)
			.pipe(Ok)
	}

	/// Encodes the buffer as standard base64 text, with padding.
	pub fn to_base64(&self) -> String {
		STANDARD.encode(self.as_bytes())
	}

	/// Copies the UTF-8 encoding of a string into a new buffer.
	#[inline]
	pub fn from_utf8(text: &str) -> Self {
		Self::from_slice(text.as_bytes())
	}

	/// Views the buffer as UTF-8 text.
	///
	/// # Errors
	///
	/// Fails with [`Error::Utf8`] if the bytes are not well-formed UTF-8.
	pub fn to_utf8(&self) -> Result<&str> {
		core::str::from_utf8(self.as_bytes()).map_err(Error::from)
	}

	/// Decodes the buffer as UTF-8 text, replacing each invalid sequence with
	/// U+FFFD REPLACEMENT CHARACTER.
	///
	/// # Examples
	///
	/// ```rust
	/// use bitbuf::prelude::*;
	///
	/// assert_eq!(BitBuffer::from_utf8("héllo").to_utf8_lossy(), "héllo");
	/// assert_eq!(bitbuf![0x68, 0xff].to_utf8_lossy(), "h\u{fffd}");
	/// ```
	pub fn to_utf8_lossy(&self) -> String {
		String::from_utf8_lossy(self.as_bytes()).into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_pairs() {
		assert_eq!(hex_pair('f', 'f'), Some(0xff));
		assert_eq!(hex_pair('A', '0'), Some(0xa0));
		assert_eq!(hex_pair('g', '0'), None);
		assert_eq!(hex_pair('0', 'é'), None);
	}

	#[test]
	fn odd_padding() {
		assert_eq!(pad_even("abc"), "0abc");
		assert_eq!(pad_even("ab"), "ab");
		assert_eq!(pad_even(""), "");
		assert!(matches!(pad_even("ab"), Cow::Borrowed(_)));
	}

	#[test]
	fn lenient_hex() {
		assert!(BitBuffer::from_hex("").is_empty());
		assert_eq!(BitBuffer::from_hex("FF0a"), bitbuf![0xff, 0x0a]);
		assert_eq!(BitBuffer::from_hex("1g"), bitbuf![0x00]);
		//  Multi-byte characters are one digit each, not one per byte.
		assert_eq!(BitBuffer::from_hex("é1"), bitbuf![0x00]);
		assert_eq!(BitBuffer::from_hex("ff é"), bitbuf![0xff, 0x00]);
	}

	#[test]
	fn strict_hex() {
		assert_eq!(BitBuffer::try_from_hex("f").unwrap(), bitbuf![0x0f]);
		assert!(matches!(BitBuffer::try_from_hex("1g"), Err(Error::Hex(_))));
		assert_eq!("cafe".parse::<BitBuffer>().unwrap(), bitbuf![0xca, 0xfe]);
	}

	#[test]
	fn base64_round_trip() {
		let buf = bitbuf![0xde, 0xad, 0xbe, 0xef];
		assert_eq!(buf.to_base64(), "3q2+7w==");
		assert_eq!(BitBuffer::from_base64("3q2+7w==").unwrap(), buf);
		assert!(matches!(
			BitBuffer::from_base64("3q2+7w="),
			Err(Error::Decode(_))
		));
		assert_eq!(BitBuffer::new().to_base64(), "");
	}

	#[test]
	fn utf8() {
		let buf = BitBuffer::from_utf8("bits");
		assert_eq!(buf.as_bytes(), b"bits");
		assert_eq!(buf.to_utf8().unwrap(), "bits");
		assert!(matches!(bitbuf![0xc3].to_utf8(), Err(Error::Utf8(_))));
		assert_eq!(bitbuf![0xc3].to_utf8_lossy(), "\u{fffd}");
	}
}
