/*! `bitbuf` – byte buffers as one wide integer.

This crate provides [`BitBuffer`], an owned, arbitrary-length sequence of bytes
that behaves as a single unsigned integer for the purposes of bit-level
manipulation. There is no fixed width and no sign: a buffer is exactly as wide
as the bytes it holds, and the algebra grows or shrinks it as needed.

The operations are value-in, value-out. Every method that produces a new bit
pattern borrows its receiver and returns a fresh buffer, so a `BitBuffer` can
be handed to any number of readers, on any number of threads, without anyone
observing a change.

# The algebra

- Boolean combination: [`and`], [`or`], [`xor`], and [`complement`]. The binary
  operators require both operands to have the same length, and report a
  [`LengthMismatch`] otherwise.
- Shifts: [`shift_left`] and [`shift_right`]. Left shifts grow the buffer so
  that no set bit is lost; right shifts drop whole bytes from the end and lose
  bits off the bottom.
- Rotates: [`rotate_left`] and [`rotate_right`]. The buffer length never
  changes and no bit is ever lost, so every rotation can be undone.
- Single bits: [`test_bit`], [`BitBuffer::bit`], and [`pop_count`].

Indexing of single bits is little-endian within a byte: bit `0` is the least
significant bit of byte `0`, bit `8` is the least significant bit of byte `1`,
and so on.

# Conversions

Buffers convert to and from raw bytes, hexadecimal text, base64 text, and UTF-8
text. See the [`codec`] module for the exact rules, including the lenient hex
decoder.

```rust
use bitbuf::prelude::*;

let buf = BitBuffer::from_hex("ff00");
assert_eq!(buf.as_bytes(), &[0xff, 0x00]);
assert_eq!(buf.pop_count(), 8);

let rot = bitbuf![0x80, 0x00].rotate_left(1);
assert_eq!(rot, bitbuf![0x00, 0x01]);
```

# Feature Flags

- `serde`: implements `Serialize` and `Deserialize` for [`BitBuffer`].
- `testing`: exports the [`testing`] module, which contains `proptest`
  strategies for generating random buffers and a logging initializer for test
  suites.

[`BitBuffer`]: crate::buffer::BitBuffer
[`BitBuffer::bit`]: crate::buffer::BitBuffer::bit
[`LengthMismatch`]: crate::error::Error::LengthMismatch
[`and`]: crate::buffer::BitBuffer::and
[`codec`]: crate::codec
[`complement`]: crate::buffer::BitBuffer::complement
[`or`]: crate::buffer::BitBuffer::or
[`pop_count`]: crate::buffer::BitBuffer::pop_count
[`rotate_left`]: crate::buffer::BitBuffer::rotate_left
[`rotate_right`]: crate::buffer::BitBuffer::rotate_right
[`shift_left`]: crate::buffer::BitBuffer::shift_left
[`shift_right`]: crate::buffer::BitBuffer::shift_right
[`test_bit`]: crate::buffer::BitBuffer::test_bit
[`testing`]: crate::testing
[`xor`]: crate::buffer::BitBuffer::xor
!*/

#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod buffer;
pub mod codec;
pub mod error;
pub mod prelude;

#[cfg(feature = "serde")]
mod serdes;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use crate::error::{
	Error,
	Result,
};
