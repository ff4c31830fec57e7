/*! Deferred rendering through the formatting system.

Log and trace call sites rarely want a byte vector; they want something
that renders only when the record is actually written. [`Pictured`] pairs a
pic with a value and defers the engine to [`Display`].
!*/

use core::fmt::{
	self,
	Debug,
	Display,
	Formatter,
};

use alloc::string::String;

use tap::Pipe;
use wyz::fmt::FmtForward;

use crate::render::render;

/** A pic template bound to a value, rendered on demand.

The pair implements [`Display`], running the engine only when formatting
actually happens, so a `Pictured` costs nothing to construct and carry
around until something prints it. The formatting system is text-oriented,
so output bytes outside UTF-8 are replaced on the way through; render with
[`render()`] to keep raw bytes.

# Examples

```rust
use bitpic::Pictured;

let flags = Pictured::new(b"'TX= RX= AK= ER=", 0b1011);
assert_eq!(flags.to_string(), "TX rx AK ER");
```

[`render()`]: crate::render::render
**/
#[derive(Clone, Copy, Eq, PartialEq)]
pub struct Pictured<'a> {
	/// The pic template.
	pic: &'a [u8],
	/// The value the template describes.
	bits: u64,
}

impl<'a> Pictured<'a> {
	/// Binds a pic template to a value.
	#[inline]
	pub fn new(pic: &'a [u8], bits: u64) -> Self {
		Self { pic, bits }
	}

	/// The bound template.
	#[inline]
	pub fn pic(&self) -> &'a [u8] {
		self.pic
	}

	/// The bound value.
	#[inline]
	pub fn bits(&self) -> u64 {
		self.bits
	}
}

impl Debug for Pictured<'_> {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		fmt.debug_struct("Pictured")
			.field("bits", &self.bits.fmt_upper_hex())
			.field("text", &self.fmt_display())
			.finish()
	}
}

impl Display for Pictured<'_> {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		render(self.pic, self.bits)
			.pipe(|text| fmt.write_str(&String::from_utf8_lossy(&text)))
	}
}
