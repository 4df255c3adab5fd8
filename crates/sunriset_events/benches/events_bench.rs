use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sunriset_events::{
    AltitudeSpec, CalendarDate, GeoCoordinate, daily_almanac, day_length, event_times,
};

fn event_times_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 3, 20);
    let delhi = GeoCoordinate::new(77.209, 28.6139);
    let arctic = GeoCoordinate::new(18.0, 68.0);

    let mut group = c.benchmark_group("event_times");
    group.bench_function("sunrise_sunset_mid_latitude", |b| {
        b.iter(|| event_times(black_box(date), black_box(delhi), AltitudeSpec::SUNRISE_SUNSET))
    });
    group.bench_function("astronomical_twilight_mid_latitude", |b| {
        b.iter(|| {
            event_times(
                black_box(date),
                black_box(delhi),
                AltitudeSpec::ASTRONOMICAL_TWILIGHT,
            )
        })
    });
    group.bench_function("sunrise_sunset_near_polar_edge", |b| {
        b.iter(|| {
            event_times(
                black_box(CalendarDate::new(2021, 5, 27)),
                black_box(arctic),
                AltitudeSpec::SUNRISE_SUNSET,
            )
        })
    });
    group.finish();
}

fn day_length_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 3, 20);
    let coord = GeoCoordinate::new(77.209, 28.6139);

    c.bench_function("day_length", |b| {
        b.iter(|| day_length(black_box(date), black_box(coord), AltitudeSpec::SUNRISE_SUNSET))
    });
}

fn almanac_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2024, 3, 20);
    let coord = GeoCoordinate::new(-0.1276, 51.5072);

    c.bench_function("daily_almanac", |b| {
        b.iter(|| daily_almanac(black_box(date), black_box(coord)))
    });
}

criterion_group!(benches, event_times_bench, day_length_bench, almanac_bench);
criterion_main!(benches);
