/*! [`bitbuf`] symbol export.

This module collects the general public API into a single spot for inclusion, as
`use bitbuf::prelude::*;`, without polluting the root namespace of the crate.

[`bitbuf`]: crate
!*/

pub use crate::{
	bitbuf,
	buffer::BitBuffer,
	error::Error as BitBufferError,
};
