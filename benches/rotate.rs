/*! This benchmark compares the speeds of the rotators across shift amounts.

Whole-byte amounts only permute the byte sequence, while sub-byte amounts also
walk every byte to carry bits across boundaries. The gap between the two
series is the cost of that carry pass.
!*/

use bitbuf::prelude::*;

use criterion::{
	criterion_group,
	criterion_main,
	BenchmarkId,
	Criterion,
};

fn rotate_cmp(c: &mut Criterion) {
	let buf = (0 .. 64u8).map(|n| n.wrapping_mul(37)).collect::<BitBuffer>();

	let mut grp = c.benchmark_group("rotators");
	for shamt in [1isize, 7, 8, 9, 63, 64, 65, 255] {
		grp.bench_with_input(
			BenchmarkId::new("rotate_left", shamt),
			&shamt,
			|b, shamt| b.iter(|| buf.rotate_left(*shamt)),
		);
		grp.bench_with_input(
			BenchmarkId::new("rotate_right", shamt),
			&shamt,
			|b, shamt| b.iter(|| buf.rotate_right(*shamt)),
		);
	}
}

criterion_group!(rotators, rotate_cmp);
criterion_main!(rotators);
