use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hifitime::Epoch;
use nalgebra::{Matrix6, Vector3};

use odmkit::number_format::{align_decimal_column, format_number};
use odmkit::opm::{CovarianceMatrix, Data, Header, Metadata, Opm, StateVector};
use odmkit::ref_system::{RefFrame, TimeSystem};

/// Values spanning both notations and both signs.
fn mixed_column() -> Vec<f64> {
    (0..64)
        .map(|i| {
            let exp = (i % 24) - 8;
            let sign = if i % 3 == 0 { -1.0 } else { 1.0 };
            sign * 1.234_567_89 * 10f64.powi(exp)
        })
        .collect()
}

fn bench_format_number(c: &mut Criterion) {
    let values = mixed_column();
    c.bench_function("format_number", |b| {
        b.iter(|| {
            for &x in &values {
                black_box(format_number(black_box(x)));
            }
        })
    });
}

fn bench_align_column(c: &mut Criterion) {
    let values = mixed_column();
    c.bench_function("align_decimal_column", |b| {
        b.iter(|| black_box(align_decimal_column(black_box(&values))))
    });
}

fn bench_full_message(c: &mut Criterion) {
    let epoch = Epoch::from_gregorian_utc_hms(2011, 2, 24, 1, 2, 3);
    let mut data = Data::new(StateVector::new(
        epoch,
        &Vector3::new(6655.9942, -40218.5751, -82.9375),
        &Vector3::new(3.11548208, 0.47042605, -0.00101495),
    ));
    data.set_covariance_matrix(Some(CovarianceMatrix::from_matrix(
        &(Matrix6::identity() * 1.0e-7),
    )));
    let opm = Opm::new(
        Header::new("ESA").with_creation_date(epoch),
        Metadata::new("Dragon", "2010-026A", "EARTH", RefFrame::Gcrf, TimeSystem::Utc),
        data,
        None,
    )
    .expect("valid message");

    c.bench_function("opm_write", |b| {
        b.iter(|| {
            let mut buffer = Vec::with_capacity(4096);
            opm.write(&mut buffer).expect("writing to memory");
            black_box(buffer)
        })
    });
}

criterion_group!(
    benches,
    bench_format_number,
    bench_align_column,
    bench_full_message
);
criterion_main!(benches);
