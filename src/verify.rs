/*! Template vetting.

Rendering never fails: a malformed `@`-command degrades to the in-band
[`SENTINEL`] splice. Callers that embed their templates, and would rather
learn about a bad one up front than find the sentinel in a log line, can
vet the template here and get a typed answer carrying the fault's position.

[`SENTINEL`]: crate::render::SENTINEL
!*/

use core::fmt::{
	self,
	Display,
	Formatter,
};

#[cfg(feature = "alloc")]
use crate::render::scan;

/// A malformed `@`-command in a pic template.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PicError {
	/// The two bytes before the `@` parsed to a bit count of zero, or of
	/// more than 64.
	BitCount {
		/// Template offset of the offending `@`.
		at: usize,
		/// The parsed bit count.
		dd: u8,
	},
	/// An `@` with fewer than two template bytes before it, leaving no
	/// room for a bit count.
	Clipped {
		/// Template offset of the offending `@`.
		at: usize,
	},
}

impl Display for PicError {
	fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
		match *self {
			Self::BitCount { at, dd } => write!(
				fmt,
				"`@`-command at template offset {} takes {} bits; only 1 \
				 through 64 can be taken",
				at, dd,
			),
			Self::Clipped { at } => write!(
				fmt,
				"`@` at template offset {} has no room for a two-digit bit \
				 count",
				at,
			),
		}
	}
}

#[cfg(feature = "std")]
impl std::error::Error for PicError {
}

/** Vets a pic template without rendering it.

This walks the template exactly as [`render()`] would and reports the first
malformed `@`-command. Conditional bits only choose between emitting,
folding, and skipping a label, never how much template is consumed, so one
pass over a zero value witnesses every fault the template can raise.

# Examples

```rust
use bitpic::{verify, PicError};

assert!(verify(b"'Type:'F Id:0xHH").is_ok());
assert_eq!(verify(b"skip !65@"), Err(PicError::BitCount { at: 8, dd: 65 }));
```

[`render()`]: crate::render::render
**/
#[cfg(feature = "alloc")]
pub fn verify(pic: &[u8]) -> Result<(), PicError> {
	let mut scratch = alloc::vec![0u8; pic.len()];
	match scan(pic, 0, &mut scratch).fault {
		None => Ok(()),
		Some(fault) => Err(fault),
	}
}
