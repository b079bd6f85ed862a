use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use imgsign_imgproxy::{Config, Endpoint, GravityType, Options, ResizingType};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("imgproxy");

    for (name, encode_path) in [("plain", false), ("encoded", true)] {
        group.bench_function(name, |b| {
            let endpoint = Endpoint::new(
                Config::new()
                    .with_base_url("http://localhost")
                    .with_key("943b421c9eb07c830af81030552c86009268de4e532ba2ee2eab8247c6da0881")
                    .with_salt("520f986b998545b4785e0defbc4f3c1203f22de2374a3d53cb7a7fe9fea309c5")
                    .with_encode_path(encode_path),
            )
            .expect("endpoint must be valid");

            b.iter(|| {
                let options = Options::new()
                    .resize(ResizingType::Fill, 300, 400, false, false)
                    .gravity(GravityType::Smart)
                    .quality(80)
                    .format("webp");

                endpoint
                    .generate(options, "s3://bucket/path/to/image.jpg")
                    .expect("must success")
            })
        });
    }

    group.finish();
}
