/*! `serde`-powered de/serialization

Human-readable formats, such as JSON, carry a buffer as its lowercase hex text.
Compact formats carry it as a byte string. Self-describing formats may also
deliver a plain sequence of `u8`, which is accepted in either mode.

Hex text is decoded strictly: an invalid digit is a deserialization error, not
a zero byte.
!*/

#![cfg(feature = "serde")]

use core::fmt::{
	self,
	Formatter,
};

use serde::{
	de::{
		self,
		Deserializer,
		SeqAccess,
		Unexpected,
		Visitor,
	},
	Deserialize,
	Serialize,
	Serializer,
};

use crate::buffer::BitBuffer;

impl Serialize for BitBuffer {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		if serializer.is_human_readable() {
			serializer.serialize_str(&self.to_hex())
		}
		else {
			serializer.serialize_bytes(self.as_bytes())
		}
	}
}

/// A Serde visitor to pull `BitBuffer` data out of a serialized stream.
#[derive(Clone, Copy, Default, Debug)]
struct BitBufferVisitor;

impl<'de> Visitor<'de> for BitBufferVisitor {
	type Value = BitBuffer;

	fn expecting(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.write_str("a hex string, a byte string, or a sequence of bytes")
	}

	fn visit_str<E>(self, text: &str) -> Result<Self::Value, E>
	where E: de::Error {
		BitBuffer::try_from_hex(text)
			.map_err(|_| E::invalid_value(Unexpected::Str(text), &self))
	}

	fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E>
	where E: de::Error {
		Ok(BitBuffer::from_slice(bytes))
	}

	fn visit_byte_buf<E>(self, bytes: Vec<u8>) -> Result<Self::Value, E>
	where E: de::Error {
		Ok(BitBuffer::from_bytes(bytes))
	}

	/// Visit a sequence of anonymous bytes, in buffer order.
	fn visit_seq<V>(self, mut seq: V) -> Result<Self::Value, V::Error>
	where V: SeqAccess<'de> {
		let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(byte) = seq.next_element::<u8>()? {
			bytes.push(byte);
		}
		Ok(BitBuffer::from_bytes(bytes))
	}
}

impl<'de> Deserialize<'de> for BitBuffer {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		if deserializer.is_human_readable() {
			deserializer.deserialize_any(BitBufferVisitor)
		}
		else {
			deserializer.deserialize_byte_buf(BitBufferVisitor)
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::prelude::*;
	use serde_test::{
		assert_de_tokens,
		assert_de_tokens_error,
		assert_tokens,
		Configure,
		Token,
	};

	#[test]
	fn empty() {
		let buf = BitBuffer::new();
		assert_tokens(&buf.clone().readable(), &[Token::Str("")]);
		assert_tokens(&buf.compact(), &[Token::Bytes(&[])]);
	}

	#[test]
	fn readable() {
		let buf = bitbuf![0xca, 0xfe];
		assert_tokens(&buf.clone().readable(), &[Token::Str("cafe")]);
		//  Odd-length hex is padded on the way in.
		assert_de_tokens(&bitbuf![0x0a, 0xfe].readable(), &[Token::Str("afe")]);
	}

	#[test]
	fn compact() {
		let buf = bitbuf![0xca, 0xfe];
		assert_tokens(&buf.clone().compact(), &[Token::Bytes(&[0xca, 0xfe])]);
		assert_de_tokens(&buf.clone().compact(), &[Token::ByteBuf(&[
			0xca, 0xfe,
		])]);
		assert_de_tokens(&buf.compact(), &[
			Token::Seq { len: Some(2) },
			Token::U8(0xca),
			Token::U8(0xfe),
			Token::SeqEnd,
		]);
	}

	#[test]
	fn invalid_hex() {
		assert_de_tokens_error::<serde_test::Readable<BitBuffer>>(
			&[Token::Str("cafx")],
			"invalid value: string \"cafx\", expected a hex string, a byte \
			 string, or a sequence of bytes",
		);
	}
}
