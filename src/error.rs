/*! Failure reporting.

Almost every operation in this crate is total. The exceptions are the strict
text decoders and the binary Boolean operators, which refuse operands of
different lengths instead of silently truncating to the shorter one.
!*/

use core::str::Utf8Error;

/// The error type for the fallible operations of this crate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
	/// The text given to [`BitBuffer::from_base64`] is not valid base64.
	///
	/// [`BitBuffer::from_base64`]: crate::buffer::BitBuffer::from_base64
	#[error("malformed base64 input: {0}")]
	Decode(#[from] base64::DecodeError),

	/// The text given to a strict hexadecimal decoder contains a character
	/// outside `[0-9a-fA-F]`.
	#[error("malformed hex input: {0}")]
	Hex(#[from] hex::FromHexError),

	/// The buffer does not hold well-formed UTF-8.
	#[error("buffer is not valid UTF-8: {0}")]
	Utf8(#[from] Utf8Error),

	/// A binary Boolean operator was applied to buffers of different lengths.
	#[error(
		"bitwise operands differ in length: {left} bytes against {right} bytes"
	)]
	LengthMismatch {
		/// Byte length of the receiver.
		left: usize,
		/// Byte length of the argument.
		right: usize,
	},
}

/// Shorthand for results whose error type is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
