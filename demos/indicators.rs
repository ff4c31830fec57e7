/*! This example shows a bit's state six different ways, then dispatches
whole packets through a pic table keyed on their type field.

Indicator pics are the bread and butter of trace lines: the same four bits
can print as digits, bulbs, labeled digits, case folds, or presence marks,
whichever reads best in the log at hand.
!*/

use bitpic::{
	render,
	Pictured,
};

fn indicator_rows() {
	let rows: &[(&str, &[u8])] = &[
		("digits", b" B  B  B  B"),
		("bulbs", b"' @=  @=  @=  @="),
		("labeled", b"'t? r? a? e?"),
		("casefold", b"'TX= RX= AK= ER="),
		("when set", b"'TX> RX> AK> ER>"),
		("when clear", b"'TX< RX< AK< ER<"),
	];
	for value in [11u64, 10, 5] {
		println!("___ bits: {:04b} ___", value);
		for &(name, pic) in rows {
			println!("{:>10}: {}", name, Pictured::new(pic, value));
		}
		println!();
	}
}

/// Picks the pic for a packet by its 3-bit type field.
fn shape(packet: u16) -> &'static [u8] {
	const SHAPES: &[&[u8]] = &[
		b"'Intaps: REP=.GRE=.SAB=.UMG=.DAG=.ERR= ml:A",
		b"'CRCspe:' GG !02@'(Error detected!)>",
		b"        unknown packet type (F!13@)",
		b"        unknown packet type (F!13@)",
		b"'LinkUP:' for D.13@ seconds",
		b"'  seen: PT:'F 'EXT=.ACK= Id:0xFHH",
		b"        unknown packet type (F!13@)",
		b"Status:' (Failure detected!)< oil:F gas:F ice:F spot:F",
	];
	SHAPES[usize::from(packet >> 13)]
}

fn dispatch() {
	let tail = 0x15D7u16;
	for ty in 0 .. 8u16 {
		let packet = tail | ty << 13;
		println!(
			"t{} :: {}",
			ty,
			String::from_utf8_lossy(&render(shape(packet), u64::from(packet))),
		);
	}
}

fn main() {
	indicator_rows();
	dispatch();
}
