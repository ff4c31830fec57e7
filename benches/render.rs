/*! Rendering throughput.

The renderer exists to beat general-purpose formatting on the hot path, so
these benches keep a `format!` equivalent alongside for comparison. Pic
length is the dominant cost; the hex ladder shows the scaling.
!*/

#![feature(test)]

extern crate test;

use bitpic::render;
use test::Bencher;

const HEADER: u64 = 0xafdf_dead_beef_4d0e;

#[bench]
fn short_pic(b: &mut Bencher) {
	b.iter(|| render(b"'PT:'F 'EXT=.ACK= Id:0xFHH!48@", HEADER));
}

#[bench]
fn fixed_width_pic(b: &mut Bencher) {
	b.iter(|| render(b"'PT:'F 'EXT=.ACK= Id:0xFHH from HHHHHH:HH", HEADER));
}

#[bench]
fn address_pic(b: &mut Bencher) {
	b.iter(|| render(b"'PT:'F 'EXT=.ACK= Id:0xFHH from IPv4:Address32@:D.16@", HEADER));
}

#[bench]
fn label_row(b: &mut Bencher) {
	b.iter(|| render(b"'SYN=.ACK<.ERR>.EXT= 'OVL=.RTX=", HEADER >> 56));
}

#[bench]
fn hex_16(b: &mut Bencher) {
	b.iter(|| render(b"HHHHHHHHHHHHHHHH", HEADER));
}

#[bench]
fn hex_8(b: &mut Bencher) {
	b.iter(|| render(b"HHHHHHHH", HEADER));
}

#[bench]
fn hex_4(b: &mut Bencher) {
	b.iter(|| render(b"HHHH", HEADER));
}

#[bench]
fn hex_2(b: &mut Bencher) {
	b.iter(|| render(b"HH", HEADER));
}

#[bench]
fn format_equivalent(b: &mut Bencher) {
	b.iter(|| {
		format!(
			"PT:{} Ext:{} Ack:{} Id:0x{:03X} from {}.{}.{}.{}:{}",
			HEADER >> 61,
			HEADER >> 60 & 1,
			HEADER >> 59 & 1,
			HEADER >> 48 & 0x7FF,
			HEADER >> 40 & 255,
			HEADER >> 32 & 255,
			HEADER >> 24 & 255,
			HEADER >> 16 & 255,
			HEADER & 0xFFFF,
		)
	});
}
