use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pixelkit_image::{Image, ImageSize};
use pixelkit_imgproc::filter::{filter, filter_separable, gaussian_kernel_1d, Kernel2};

fn bench_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spatial Filter");

    for (width, height) in [(256, 224), (512, 448)].iter() {
        for kernel_size in [3, 5, 9, 17].iter() {
            group.throughput(criterion::Throughput::Elements(
                (*width * *height * *kernel_size) as u64,
            ));

            let parameter_string = format!("{}x{}x{}", width, height, kernel_size);

            let image_size = ImageSize {
                width: *width,
                height: *height,
            };
            let image_data = (0..width * height).map(|x| (x % 256) as f64).collect();
            let image = Image::<f64>::new(image_size, image_data).unwrap();
            let output = Image::<f64>::from_size_val(image_size, 0.0).unwrap();

            let sigma = *kernel_size as f64 / 6.0;
            let taps = gaussian_kernel_1d::<f64>(sigma, *kernel_size).unwrap();
            let dense = Kernel2::from_fn(*kernel_size, *kernel_size, |r, c| taps[r] * taps[c]);

            group.bench_with_input(
                BenchmarkId::new("dense", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(filter(src, &mut dst, &dense, 1.0, false)))
                },
            );

            group.bench_with_input(
                BenchmarkId::new("separable", &parameter_string),
                &(&image, &output),
                |b, i| {
                    let (src, mut dst) = (i.0, i.1.clone());
                    b.iter(|| black_box(filter_separable(src, &mut dst, &taps, &taps, 1.0, false)))
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_filters);
criterion_main!(benches);
