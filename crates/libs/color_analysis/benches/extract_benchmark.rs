use color_analysis::{ColorAnalyzer, ExtractionOptions, extract_dominant_colors};
use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgb, RgbImage};
use std::hint::black_box;

/// Smooth gradients with a few hard edges, roughly what a product photo looks like.
fn photo(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let band = (x * 4 / width) as u8;
        Rgb([
            band.wrapping_mul(60).wrapping_add((y % 40) as u8),
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
        ])
    })
}

fn bench_extraction(c: &mut Criterion) {
    let small = photo(400, 300);
    let large = photo(2000, 1500);
    let options = ExtractionOptions::default();

    c.bench_function("extract_3_colors_400x300", |b| {
        b.iter(|| extract_dominant_colors(black_box(&small), &options).expect("extraction"));
    });
    c.bench_function("extract_3_colors_2000x1500", |b| {
        b.iter(|| extract_dominant_colors(black_box(&large), &options).expect("extraction"));
    });

    let options = options.with_num_colors(8);
    c.bench_function("extract_8_colors_2000x1500", |b| {
        b.iter(|| extract_dominant_colors(black_box(&large), &options).expect("extraction"));
    });

    let analyzer = ColorAnalyzer::default();
    c.bench_function("analyze_2000x1500", |b| {
        b.iter(|| analyzer.analyze(black_box(large.clone())).expect("analysis"));
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
