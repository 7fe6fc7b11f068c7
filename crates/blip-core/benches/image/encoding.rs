use blip_core::codec::{Encoder, EncoderOptions, Region};
use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

pub fn image_encoding(c: &mut Criterion) {
    let secret_message = b"Hello World!".repeat(64);

    c.bench_function("Image Encoding", |b| {
        let encoder = Encoder::new(EncoderOptions::overwrite(256)).expect("Invalid options");

        b.iter(|| {
            encoder
                .encode(&secret_message[..], None::<RgbaImage>)
                .expect("Cannot encode secret message");
        })
    });

    c.bench_function("Image Embedding", |b| {
        let plain_image = RgbaImage::from_fn(512, 512, |x, y| Rgba([x as u8, y as u8, 0x7f, 0xff]));
        let region = Region::new(0, 511, 128, 383).expect("Invalid region");
        let encoder = Encoder::new(EncoderOptions::embed(region.into())).expect("Invalid options");

        b.iter(|| {
            encoder
                .encode(&secret_message[..], Some(plain_image.clone()))
                .expect("Cannot embed secret message");
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
