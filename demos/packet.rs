/*! This example renders a synthetic packet header the way a trace line
would show it.

The packet packs, from bit 63 down: a 3-bit type, extension and
acknowledgement flags, an 11-bit session id, a 32-bit source address, and a
16-bit source port. One pic describes the whole layout; narrower headers of
the same family reuse its tail.
!*/

use bitpic::{
	render,
	Pictured,
};

const TRACE: &[u8] = b"Type:'F 'Ext:? Ack:? Id:0xFHH from IPv4:Address32@:D.16@";

fn build() -> u64 {
	let mut packet = 0u64;

	//  Type 5, extension clear, acknowledgement set.
	packet |= 5 << 61;
	packet |= 1 << 59;
	//  Session id.
	packet |= 0x7DF << 48;
	//  Source address and port.
	packet |= u64::from(u32::from_be_bytes([222, 173, 190, 239])) << 16;
	packet |= 19726;

	packet
}

fn parse(packet: u64) {
	let line = render(TRACE, packet);
	assert_eq!(
		line,
		b"Type:5 Ext:0 Ack:1 Id:0x7DF from 222.173.190.239:19726",
	);

	//  The same packet, shown as flag indicators instead.
	assert_eq!(
		render(b"'EXT=.ACK= 0xFHH!48@", packet),
		b"ext.ACK 0x7DF",
	);
}

fn main() {
	let packet = build();
	parse(packet);

	//  `Pictured` defers the engine until the value actually prints.
	println!("{}", Pictured::new(TRACE, packet));
}
