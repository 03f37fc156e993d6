use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegano_merge_core::PixelMerger;

pub fn image_unmerging(c: &mut Criterion) {
    c.bench_function("Image Unmerging", |b| {
        let merged: RgbImage =
            ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));

        b.iter(|| PixelMerger::unmerge(&merged))
    });
}

criterion_group!(benches, image_unmerging);
criterion_main!(benches);
