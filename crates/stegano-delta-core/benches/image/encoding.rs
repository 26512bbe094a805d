use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgba, RgbaImage};
use stegano_delta_core::{CodecOptions, Embedder, LinearIndex, Message};

pub fn image_encoding(c: &mut Criterion) {
    let plain_image: RgbaImage =
        ImageBuffer::from_fn(512, 512, |x, y| Rgba([(x ^ y) as u8, x as u8, y as u8, 255]));
    let secret_message = Message::from_text("Hello World! ".repeat(32).as_str());

    c.bench_function("Image Encoding", |b| {
        let opts = CodecOptions::default();
        b.iter(|| {
            Embedder::new(&opts)
                .embed(&secret_message, &plain_image)
                .expect("Cannot embed secret message")
        })
    });

    c.bench_function("Image Encoding Row Major", |b| {
        let opts = CodecOptions::default().with_linear_index(LinearIndex::RowMajor);
        b.iter(|| {
            Embedder::new(&opts)
                .embed(&secret_message, &plain_image)
                .expect("Cannot embed secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
