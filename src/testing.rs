/*! Random buffer generation and test logging.

This module is compiled for the crate’s own tests, and exported to downstream
crates by the `testing` feature. It provides [`proptest`] strategies that
produce buffers of random length and content, independent of the algebra they
will be used to check.

The strategies wrap the public constructors: [`buffers`] and
[`buffers_of_len`] feed random byte vectors to [`BitBuffer::from_bytes`], and
[`text_buffers`] feeds random strings to [`BitBuffer::from_utf8`]. The
[`Arbitrary`] implementation mixes both, so `any::<BitBuffer>()` produces
mostly raw binary buffers with some valid UTF-8 among them.

```rust
use bitbuf::{prelude::*, testing};
use proptest::prelude::*;

proptest! {
	#[test]
	fn complement_involutes(buf in testing::buffers(0 .. 32)) {
		prop_assert_eq!(buf.complement().complement(), buf);
	}
}
```

[`proptest`]: https://docs.rs/proptest
!*/

use std::sync::Once;

use proptest::{
	arbitrary::Arbitrary,
	collection::{
		self,
		SizeRange,
	},
	prelude::*,
};

use crate::buffer::BitBuffer;

static INIT_LOGGING: Once = Once::new();

/// Generates buffers whose byte length lies in `size`.
pub fn buffers(size: impl Into<SizeRange>) -> impl Strategy<Value = BitBuffer> {
	collection::vec(any::<u8>(), size).prop_map(BitBuffer::from_bytes)
}

/// Generates buffers of exactly `len` bytes.
pub fn buffers_of_len(len: usize) -> impl Strategy<Value = BitBuffer> {
	buffers(len)
}

/// Generates pairs of buffers that share one random length in `size`.
///
/// Use this to exercise the binary Boolean operators, which refuse operands of
/// different lengths.
pub fn buffer_pairs(
	size: impl Into<SizeRange>,
) -> impl Strategy<Value = (BitBuffer, BitBuffer)> {
	let size = size.into();
	(size.start() ..= size.end_incl())
		.prop_flat_map(|len| (buffers_of_len(len), buffers_of_len(len)))
}

/// Generates buffers holding the UTF-8 encoding of random strings of `size`
/// characters.
pub fn text_buffers(
	size: impl Into<SizeRange>,
) -> impl Strategy<Value = BitBuffer> {
	collection::vec(any::<char>(), size).prop_map(|chars| {
		BitBuffer::from_utf8(&chars.into_iter().collect::<String>())
	})
}

impl Arbitrary for BitBuffer {
	type Parameters = SizeRange;
	type Strategy = BoxedStrategy<Self>;

	fn arbitrary_with(size: Self::Parameters) -> Self::Strategy {
		prop_oneof![
			3 => buffers(size.clone()),
			1 => text_buffers(size),
		]
		.boxed()
	}
}

/// Installs a `tracing` subscriber that writes through the test harness’s
/// captured output.
///
/// Safe to call from every test; only the first call installs anything, and
/// an already-installed global subscriber is left in place.
pub fn init_test_logging() {
	INIT_LOGGING.call_once(|| {
		let _ = tracing_subscriber::fmt()
			.with_max_level(tracing::Level::TRACE)
			.with_test_writer()
			.with_target(true)
			.with_ansi(false)
			.try_init();
	});
}
