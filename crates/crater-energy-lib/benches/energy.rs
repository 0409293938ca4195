use criterion::{criterion_group, criterion_main, Criterion};
use crater_energy_lib::{
    compute_energy, format_energy, CraterGeometry, DisplayMode, ImpactType, MaterialTable,
};
use std::hint::black_box;

fn benchmark_energy(c: &mut Criterion) {
    let table = MaterialTable::builtin();
    let circle = CraterGeometry::Circular { diameter_cm: 10.0 };
    let ellipse = CraterGeometry::Elliptical {
        width_cm: 14.0,
        height_cm: 6.0,
    };

    c.bench_function("normal_circular_steel", |b| {
        b.iter(|| {
            let joules = compute_energy(
                black_box(5.0),
                &circle,
                black_box(2.0),
                ImpactType::Normal,
                "steel",
                table,
            )
            .expect("valid inputs");
            black_box(joules)
        });
    });

    c.bench_function("clean_elliptical_rock", |b| {
        b.iter(|| {
            let joules = compute_energy(
                black_box(2.5),
                &ellipse,
                black_box(4.0),
                ImpactType::Clean,
                "rock",
                table,
            )
            .expect("valid inputs");
            black_box(joules)
        });
    });

    c.bench_function("format_auto", |b| {
        b.iter(|| black_box(format_energy(black_box(Some(2_345_678.9)), DisplayMode::Auto)));
    });
}

criterion_group!(benches, benchmark_energy);
criterion_main!(benches);
