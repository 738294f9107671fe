use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradecalc_core::model::{Component, Field, RawForm};
use gradecalc_core::validator::validate_form;

fn form_with(absences: &str, score: &str) -> RawForm {
    let mut form = RawForm::new();
    for field in Field::all() {
        let value = if field.component == Component::Absences {
            absences
        } else {
            score
        };
        form.set(field, value);
    }
    form
}

fn bench_validate_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_form");

    let valid = form_with("1", "87.5");
    let invalid_last = {
        let mut form = form_with("1", "87.5");
        form.set(
            Field::new(gradecalc_core::Term::Final, Component::Recitation),
            "n/a",
        );
        form
    };

    group.bench_function("valid", |b| b.iter(|| validate_form(black_box(&valid))));
    group.bench_function("invalid_last_field", |b| {
        b.iter(|| validate_form(black_box(&invalid_last)))
    });

    group.finish();
}

criterion_group!(benches, bench_validate_form);
criterion_main!(benches);
