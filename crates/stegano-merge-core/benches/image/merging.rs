use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegano_merge_core::PixelMerger;

pub fn image_merging(c: &mut Criterion) {
    c.bench_function("Image Merging", |b| {
        let carrier: RgbImage =
            ImageBuffer::from_fn(256, 256, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret: RgbImage =
            ImageBuffer::from_fn(128, 128, |x, y| Rgb([y as u8, x as u8, (x + y) as u8]));

        b.iter(|| PixelMerger::merge(&carrier, &secret).expect("Secret does not fit"))
    });
}

criterion_group!(benches, image_merging);
criterion_main!(benches);
