/*! `BitBuffer` is a plain value: it must be shareable across threads and
usable as a map key, with no interior mutability.
!*/

use bitbuf::prelude::*;
use static_assertions::*;

use std::{
	collections::HashSet,
	thread,
};

assert_impl_all!(
	BitBuffer: Clone,
	Default,
	Send,
	Sync,
	Eq,
	Ord,
	core::hash::Hash,
	core::fmt::Debug,
	core::fmt::Display,
	core::fmt::Binary,
	core::str::FromStr,
	AsRef<[u8]>,
	From<Vec<u8>>
);
assert_not_impl_any!(BitBuffer: Copy, core::ops::Not, core::ops::Shl<usize>);
assert_impl_all!(BitBufferError: std::error::Error, Send, Sync);

#[test]
fn shared_readers() {
	let buf = bitbuf![0x0f, 0xf0, 0xaa];
	let handles = (0 .. 4isize)
		.map(|n| {
			let buf = buf.clone();
			thread::spawn(move || buf.rotate_left(n * 3).rotate_right(n * 3))
		})
		.collect::<Vec<_>>();
	for handle in handles {
		assert_eq!(handle.join().unwrap(), buf);
	}
}

#[test]
fn hash_by_value() {
	let set = [bitbuf![0x01], bitbuf![0x01], bitbuf![0x01, 0x00]]
		.iter()
		.cloned()
		.collect::<HashSet<_>>();
	//  Trailing zero bytes are significant.
	assert_eq!(set.len(), 2);
}
