use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gok_sky::{
    BodyConfig, CONSTELLATIONS, GeoLocation, METEOR_SHOWERS, ObserverFrame, RiseSetConfig,
    SkyEventConfig, approximate_local_noon_jd, compute_all_events, compute_bodies,
    detect_sky_events, project_constellations,
};
use gok_time::UtcTime;

fn sky_bench(c: &mut Criterion) {
    let time = UtcTime::new(2024, 8, 12, 21, 0, 0.0);
    let loc = GeoLocation::from_lat_lon(41.145, 27.4081);
    let frame = ObserverFrame::new(&time, &loc).unwrap();
    let body_config = BodyConfig::default();

    let mut group = c.benchmark_group("sky");
    group.bench_function("compute_bodies", |b| {
        b.iter(|| compute_bodies(black_box(&frame), &body_config))
    });
    group.bench_function("project_constellations", |b| {
        b.iter(|| project_constellations(black_box(&frame), &CONSTELLATIONS))
    });
    group.bench_function("detect_sky_events", |b| {
        b.iter(|| {
            detect_sky_events(black_box(&time), 41.145, &METEOR_SHOWERS, &SkyEventConfig::default())
        })
    });
    group.finish();
}

fn riseset_bench(c: &mut Criterion) {
    let loc = GeoLocation::from_lat_lon(41.145, 27.4081);
    let noon = approximate_local_noon_jd(2_460_534.5, loc.longitude_deg);
    let config = RiseSetConfig::default();

    c.bench_function("compute_all_events", |b| {
        b.iter(|| compute_all_events(black_box(&loc), black_box(noon), &config))
    });
}

criterion_group!(benches, sky_bench, riseset_bench);
criterion_main!(benches);
