use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use starsky::precession::{prec_matrix_ecl, prec_matrix_equ};
use starsky::ref_system::{equ2hor, rotpn, RefSystem};
use starsky::sky::{vertexize, CatalogueStar, Observer};
use starsky::time::gmst;

/// Uniform random catalogue star over the whole sphere, magnitude in [-1.5, 8]
#[inline]
fn rand_star(rng: &mut StdRng) -> CatalogueStar {
    let z: f64 = rng.random_range(-1.0..=1.0);
    CatalogueStar {
        ra: rng.random_range(0.0..360.0),
        dec: z.asin().to_degrees(),
        magnitude: rng.random_range(-1.5..8.0),
    }
}

fn bench_vertexize(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED_57A2);
    let samples = 10_000usize;
    let observer = Observer::from_degrees(53.319927, -6.264353).unwrap();

    c.bench_function("vertexize/10k_stars", |b| {
        b.iter_batched(
            || {
                // Pre-generate the catalogue outside the timed section
                (0..samples)
                    .map(|_| rand_star(&mut rng))
                    .collect::<Vec<_>>()
            },
            |stars| {
                let vertices = vertexize(black_box(&stars), black_box(60384.57), &observer);
                black_box(vertices);
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_equ2hor(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let samples = 10_000usize;
    let lat = 53.319927f64.to_radians();

    c.bench_function("equ2hor/10k", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| {
                        let dec = rng.random_range(-1.0f64..=1.0).asin();
                        let tau = rng.random_range(0.0..std::f64::consts::TAU);
                        (dec, tau)
                    })
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (dec, tau) in cases {
                    black_box(equ2hor(black_box(dec), black_box(tau), lat));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_matrices(c: &mut Criterion) {
    c.bench_function("prec_matrix_equ", |b| {
        b.iter(|| prec_matrix_equ(black_box(-0.5), black_box(0.24)))
    });

    c.bench_function("prec_matrix_ecl", |b| {
        b.iter(|| prec_matrix_ecl(black_box(-0.5), black_box(0.24)))
    });

    c.bench_function("rotpn/equm_b1950_to_eclm_date", |b| {
        b.iter(|| {
            rotpn(
                black_box(&RefSystem::Equm(-0.5)),
                black_box(&RefSystem::Eclm(0.24)),
            )
        })
    });

    c.bench_function("gmst", |b| b.iter(|| gmst(black_box(60384.573266782405))));
}

criterion_group!(benches, bench_vertexize, bench_equ2hor, bench_matrices);
criterion_main!(benches);
