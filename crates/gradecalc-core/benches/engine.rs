use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecalc_core::engine::{compute_term, evaluate, required_for_finals};
use gradecalc_core::model::{GradeSheet, Term, TermInput};

fn term(absences: u32, exam: f64) -> TermInput {
    TermInput {
        absences,
        exam,
        quizzes: 90.0,
        requirements: 85.0,
        recitation: 88.0,
    }
}

fn bench_compute_term(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_term");

    let passing = term(1, 80.0);
    let failing = term(5, 80.0);

    group.bench_function("computed", |b| {
        b.iter(|| compute_term(black_box(Term::Prelim), black_box(&passing)))
    });
    group.bench_function("failed", |b| {
        b.iter(|| compute_term(black_box(Term::Prelim), black_box(&failing)))
    });

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let sheet = GradeSheet {
        prelim: term(0, 80.0),
        midterm: term(1, 90.0),
        finals: term(2, 70.0),
    };

    c.bench_function("evaluate", |b| b.iter(|| evaluate(black_box(&sheet))));
    c.bench_function("required_for_finals", |b| {
        b.iter(|| required_for_finals(black_box(84.37), black_box(90.0), black_box(75.0)))
    });
}

criterion_group!(benches, bench_compute_term, bench_evaluate);
criterion_main!(benches);
