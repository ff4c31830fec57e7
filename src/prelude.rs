/*! `bitpic` Prelude

This collects the general public API into a single spot for inclusion, as
`use bitpic::prelude::*;`, without polluting the root namespace of the
crate.
!*/

pub use crate::{
	render::{
		render_into,
		SENTINEL,
	},
	verify::PicError,
};

#[cfg(feature = "alloc")]
pub use crate::{
	pictured::Pictured,
	render::render,
	verify::verify,
	view::PicRender,
};
