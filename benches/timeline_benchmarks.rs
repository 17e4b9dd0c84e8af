use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kantai::{
    Coordinate, Dataset, ExportConfig, Frame, Place, Timestamp, Vessel, VesselEvent, geojson,
    position_at, time_bounds, track_up_to,
};

const DAY_MS: i64 = 86_400_000;

fn fleet(vessels: usize, events_per_vessel: usize) -> Dataset {
    let mut dataset = Dataset::new();
    for p in 0..50 {
        let coord = Coordinate::new(-40.0 + p as f64 * 1.5, 100.0 + p as f64 * 1.2);
        dataset = dataset.with_place(format!("port{}", p), Place::new(format!("Port {}", p), coord));
    }

    for v in 0..vessels {
        let events = (0..events_per_vessel)
            .map(|e| {
                let date = Timestamp::from_millis(((v + e * 3) as i64) * DAY_MS).to_date_string();
                VesselEvent::new(date, format!("port{}", (v + e) % 50).as_str())
            })
            .collect();
        dataset = dataset.with_vessel(
            format!("vessel{}", v),
            Vessel::new(format!("Vessel {}", v), "IJN").with_events(events),
        );
    }
    dataset
}

fn benchmark_vessel_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("vessel_queries");

    for events in [10, 100, 1_000] {
        let dataset = fleet(1, events);
        let vessel = dataset.vessel("vessel0").unwrap();
        let mid = Timestamp::from_millis((events as i64 * 3 / 2) * DAY_MS + DAY_MS / 3);

        group.bench_with_input(BenchmarkId::new("position_at", events), &mid, |b, t| {
            b.iter(|| position_at(black_box(vessel), &dataset.places, *t))
        });

        group.bench_with_input(BenchmarkId::new("track_up_to", events), &mid, |b, t| {
            b.iter(|| track_up_to(black_box(vessel), &dataset.places, *t))
        });
    }

    group.finish();
}

fn benchmark_dataset_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset_queries");
    let dataset = fleet(100, 50);
    let t = Timestamp::from_millis(80 * DAY_MS);

    group.bench_function("time_bounds_100x50", |b| {
        b.iter(|| time_bounds(black_box(&dataset)))
    });

    group.bench_function("frame_100x50", |b| b.iter(|| Frame::at(black_box(&dataset), t)));

    let frame = Frame::at(&dataset, t);
    let config = ExportConfig::default();
    group.bench_function("frame_geojson_100x50", |b| {
        b.iter(|| geojson::frame_to_geojson(black_box(&frame), &dataset.places, &config).unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_vessel_queries, benchmark_dataset_queries);
criterion_main!(benches);
