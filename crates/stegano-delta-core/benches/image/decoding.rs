use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use stegano_delta_core::{CodecOptions, Embedder, Extractor, Message};

pub fn image_decoding(c: &mut Criterion) {
    let master: RgbaImage =
        ImageBuffer::from_fn(512, 512, |x, y| Rgba([(x ^ y) as u8, x as u8, y as u8, 255]));
    let opts = CodecOptions::default();
    let (encoded, _) = Embedder::new(&opts)
        .embed(&Message::from_text("Hello World! ".repeat(32).as_str()), &master)
        .expect("Cannot embed secret message");

    c.bench_function("Image Decoding", |b| {
        b.iter(|| {
            Extractor::new(&opts)
                .extract(&encoded, &master)
                .expect("Cannot extract secret message")
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
