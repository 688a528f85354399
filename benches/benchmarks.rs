//! Benchmarks for the alignment core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use slant_align::{align, preview, AlignError, DiagonalBaseline, LayoutSource, StyleSink};

/// In-memory stand-in for the DOM surface.
struct GridSurface {
    container_width: f64,
    spacer_height: f64,
    offsets: Vec<f64>,
    margins: Vec<f64>,
}

impl GridSurface {
    fn with_icons(count: usize) -> Self {
        Self {
            container_width: 400.0,
            spacer_height: 200.0,
            offsets: (0..count).map(|i| 120.0 + 90.0 * i as f64).collect(),
            margins: vec![0.0; count],
        }
    }
}

impl LayoutSource for GridSurface {
    fn container_width(&self) -> Result<f64, AlignError> {
        Ok(self.container_width)
    }

    fn spacer_height(&self) -> Result<f64, AlignError> {
        Ok(self.spacer_height)
    }

    fn icon_count(&self) -> usize {
        self.offsets.len()
    }

    fn icon_offset(&self, index: usize) -> Result<f64, AlignError> {
        Ok(self.offsets[index])
    }
}

impl StyleSink for GridSurface {
    fn set_top_margin(&mut self, index: usize, margin_px: f64) -> Result<(), AlignError> {
        self.margins[index] = margin_px;
        Ok(())
    }
}

fn bench_margin_math(c: &mut Criterion) {
    c.bench_function("margin_single_icon", |b| {
        let baseline = DiagonalBaseline::from_reference(400.0, 200.0);
        b.iter(|| black_box(baseline.margin_top(black_box(300.0))));
    });
}

fn bench_align_home_page(c: &mut Criterion) {
    c.bench_function("align_home_page_row", |b| {
        let mut surface = GridSurface::with_icons(4);
        b.iter(|| {
            align(&mut surface).unwrap();
        });
        black_box(&surface.margins);
    });
}

fn bench_align_wide_row(c: &mut Criterion) {
    c.bench_function("align_wide_row", |b| {
        let mut surface = GridSurface::with_icons(64);
        b.iter(|| {
            align(&mut surface).unwrap();
        });
        black_box(&surface.margins);
    });
}

fn bench_preview_wide_row(c: &mut Criterion) {
    c.bench_function("preview_wide_row", |b| {
        let surface = GridSurface::with_icons(64);
        b.iter(|| black_box(preview(&surface).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_margin_math,
    bench_align_home_page,
    bench_align_wide_row,
    bench_preview_wide_row,
);

criterion_main!(benches);
