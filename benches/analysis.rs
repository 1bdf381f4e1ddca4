use climate_mirror::{
    analyze, compare, LatLon, Month, ObservationSample, ObservationSeries,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn synthetic_series(region: &str, warming_per_year: f64) -> ObservationSeries {
    let samples = (2000..=2024)
        .flat_map(|year| {
            (1..=12).map(move |month| ObservationSample {
                month: Month::new(month, year),
                temperature_c: 19.0 + warming_per_year * f64::from(year - 2000),
                rainfall_mm: 1.5 + f64::from(month % 4),
                solar_radiation_mj_m2: 20.0,
            })
        })
        .collect();
    ObservationSeries::new(region, LatLon(-1.29, 36.82), samples, 0)
}

fn bench_analysis(c: &mut Criterion) {
    let nairobi = synthetic_series("Nairobi", 0.03);
    let mombasa = synthetic_series("Mombasa", 0.01);

    c.bench_function("analyze_25_years", |b| {
        b.iter(|| analyze(black_box(&nairobi), "Nairobi"))
    });

    let first = analyze(&nairobi, "Nairobi");
    let second = analyze(&mombasa, "Mombasa");
    c.bench_function("compare_two_regions", |b| {
        b.iter(|| compare(black_box(first.as_ref()), black_box(second.as_ref())))
    });
}

criterion_group!(benches, bench_analysis);
criterion_main!(benches);
