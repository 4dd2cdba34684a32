/*! Shifts allocate a new buffer for every call, and left shifts grow it. This
benchmark tracks both directions over buffers of increasing size.
!*/

use bitbuf::prelude::*;

use criterion::{
	black_box,
	criterion_group,
	criterion_main,
	BenchmarkId,
	Criterion,
};

fn shift_cmp(c: &mut Criterion) {
	let mut grp = c.benchmark_group("shifters");
	for len in [16usize, 256, 4096] {
		let buf = BitBuffer::zeroed(len).complement();
		grp.bench_with_input(BenchmarkId::new("shift_left", len), &buf, |b, buf| {
			b.iter(|| buf.shift_left(black_box(13)))
		});
		grp.bench_with_input(
			BenchmarkId::new("shift_right", len),
			&buf,
			|b, buf| b.iter(|| buf.shift_right(black_box(13))),
		);
	}
}

criterion_group!(shifters, shift_cmp);
criterion_main!(shifters);
