use blip_core::codec::{Decoder, Encoder, EncoderOptions};
use criterion::{criterion_group, criterion_main, Criterion};
use image::RgbaImage;

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let secret_message = b"Hello World!".repeat(64);
        let img = Encoder::new(EncoderOptions::overwrite(256))
            .expect("Invalid options")
            .encode(&secret_message[..], None::<RgbaImage>)
            .expect("Cannot encode secret message");
        let decoder = Decoder::new();

        b.iter(|| {
            decoder
                .decode(&img, None)
                .expect("Failed to decode secret message");
        })
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
