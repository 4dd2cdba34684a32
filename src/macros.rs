//! Constructor macros for the crate’s buffer type.

/** Constructs a new [`BitBuffer`] from a byte-pattern description.

This macro takes the same argument syntax as [`vec!`]: it may be invoked with
either a sequence of byte expressions, or a single byte expression and a
repetition counter. Every byte expression must have type `u8`; integer literals
are typed accordingly, and literals that do not fit in a byte are rejected by
the compiler rather than truncated.

# Examples

```rust
use bitbuf::prelude::*;

let empty = bitbuf![];
assert!(empty.is_empty());

let pair = bitbuf![0xff, 0x00];
assert_eq!(pair.to_hex(), "ff00");

let zeros = bitbuf![0; 4];
assert_eq!(zeros.len(), 4);
assert_eq!(zeros.pop_count(), 0);
```

[`BitBuffer`]: crate::buffer::BitBuffer
[`vec!`]: macro@std::vec
**/
#[macro_export]
macro_rules! bitbuf {
	() => {
		$crate::buffer::BitBuffer::new()
	};

	($byte:expr; $len:expr) => {{
		let bytes: ::std::vec::Vec<u8> = ::std::vec![$byte; $len];
		$crate::buffer::BitBuffer::from_bytes(bytes)
	}};

	($($byte:expr),+ $(,)?) => {{
		let bytes: ::std::vec::Vec<u8> = ::std::vec![$($byte),+];
		$crate::buffer::BitBuffer::from_bytes(bytes)
	}};
}
