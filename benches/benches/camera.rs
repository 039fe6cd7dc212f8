// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_camera2d::{Camera2D, ZoomDirection};

fn camera() -> Camera2D {
    let mut camera = Camera2D::new(Size::new(1280.0, 720.0));
    camera.reset(4000.0, 2500.0);
    camera
}

fn bench_zoom_at(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/zoom_at");
    let cursor = Point::new(640.0, 200.0);

    group.bench_function("in_out_pair", |b| {
        let mut camera = camera();
        b.iter(|| {
            camera.zoom_at_screen(black_box(cursor), ZoomDirection::In);
            camera.zoom_at_screen(black_box(cursor), ZoomDirection::Out);
        });
    });

    group.finish();
}

fn bench_pan_and_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("camera/pan");

    group.bench_function("pan_by_screen", |b| {
        let mut camera = camera();
        let mut sign = 1.0;
        b.iter(|| {
            camera.pan_by_screen(black_box(Vec2::new(3.0 * sign, -2.0 * sign)));
            sign = -sign;
        });
    });

    group.bench_function("screen_to_content", |b| {
        let camera = camera();
        b.iter(|| black_box(camera.screen_to_content(black_box(Point::new(321.0, 123.0)))));
    });

    group.finish();
}

criterion_group!(benches, bench_zoom_at, bench_pan_and_convert);
criterion_main!(benches);
