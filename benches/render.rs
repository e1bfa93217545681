#[macro_use]
extern crate criterion;
extern crate gmandel;

use criterion::Criterion;
use gmandel::{render_exhaustive, Surface, TileScheduler, Viewport};

fn subdivided(c: &mut Criterion) {
    c.bench_function("tiled 320x240", |b| {
        let vp = Viewport::new(320, 240).unwrap();
        let mut surface = Surface::new(320, 240).unwrap();
        let scheduler = TileScheduler::default();
        b.iter(|| scheduler.render(&vp, &mut surface).unwrap())
    });
}

fn exhaustive(c: &mut Criterion) {
    c.bench_function("exhaustive 320x240", |b| {
        let vp = Viewport::new(320, 240).unwrap();
        let mut surface = Surface::new(320, 240).unwrap();
        b.iter(|| render_exhaustive(&vp, &mut surface))
    });
}

criterion_group!(benches, subdivided, exhaustive);
criterion_main!(benches);
