/*! `bitpic` – bit-packed data made readable.

This crate renders a 64-bit value as human-readable text, directed by a
compact pictorial template (a *pic*). Labels, flags, numeric fields,
characters, and IPv4 addresses in the output reflect the state of individual
bits of the input. The renderer makes a single right-to-left pass over the
template, performs exactly one allocation (of the template's length), and
fits environments where a general-purpose formatting library is too heavy to
carry: peripheral control planes, log shippers, and high-throughput trace
paths.

A pic is written in reading order, most significant bit on the left, so a
narrower integer can be zero-widened and fed in directly.

```rust
use bitpic::render;

let header = 0xafdf_dead_beef_4d0e_u64;
let text = render(
	b"'Type:'F 'EXT=.ACK= Id:0xFHH from IPv4.Address32@:D.16@",
	header,
);
assert_eq!(text, b"Type:5 ext.ACK Id:0x7DF from 222.173.190.239:19726");
```

# Pic language

In reading order:

- `\x` emits the byte `x` uninterpreted, except that `\n` and `\t` map to
  newline and tab. Escapes apply everywhere, quoted text included.
- `'…'` is quoted literal text.
- `'LABEL*`, where `*` is one of `= < > ?`, is a conditional label. Each of
  the four commands consumes one bit: `?` appends the bit as a digit, `>`
  shows the label only when the bit is set, `<` only when it is clear, and
  `=` folds the label to lowercase when the bit is clear. Labels chain, so
  one opening `'` serves a whole run such as `'SYN=.ACK<.ERR>.EXT=`.
- `B`, `E`, `F`, `H`, `G`, `A`, and `C` consume 1, 2, 3, 4, 5, 7, and 8
  bits and emit the field as a binary, quaternary, octal, uppercase-hex,
  c32s, 7-bit, or 8-bit character rendition.
- `!dd@` discards `dd` bits; `D…dd@` prints a `dd`-bit field as an unsigned
  decimal; `I…32@` prints a 32-bit field as an IPv4 dotted quad.
- Any other byte is emitted verbatim, so punctuation, spacing, and prose
  need no escape. A malformed `@`-command does not fail the call: the
  [`SENTINEL`] is spliced into the output instead.

# Feature flags

- `std` (default): implies `alloc`, and adds `std::error::Error` for
  [`PicError`].
- `alloc`: the allocating conveniences, namely [`render()`], [`verify()`],
  [`PicRender`], and [`Pictured`]. Without it the crate is wholly
  allocation-free and [`render_into()`] drives the engine inside a
  caller-provided buffer.
!*/

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(debug_assertions, warn(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(missing_docs))]

#[cfg(feature = "alloc")]
extern crate alloc;

mod mode;
mod writer;

pub mod prelude;
pub mod render;
pub mod verify;

#[cfg(feature = "alloc")]
pub mod pictured;

#[cfg(feature = "alloc")]
pub mod view;

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
