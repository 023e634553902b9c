use criterion::{black_box, criterion_group, criterion_main, Criterion};

use curvegrade_core::geometry::Point;
use curvegrade_core::model::{Drawing, GradingThresholds, ProblemDescriptor};
use curvegrade_core::resample::resample;
use curvegrade_core::similarity::compare;
use curvegrade_core::CurveGrader;

fn wobbly_stroke(problem: &ProblemDescriptor, samples: usize) -> Vec<Point> {
    let path = resample(&problem.reference, samples).unwrap();
    path.iter()
        .enumerate()
        .map(|(i, &p)| {
            let jitter = ((i as f64) * 0.7).sin() * 0.01;
            problem.plot.to_raw(p.offset(0.0, jitter))
        })
        .collect()
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    let problem = ProblemDescriptor::stress_strain_steel();
    let dense = resample(&problem.reference, 2000).unwrap();

    group.bench_function("reference->160", |b| {
        b.iter(|| resample(black_box(&problem.reference), black_box(160)))
    });

    group.bench_function("2000->160", |b| {
        b.iter(|| resample(black_box(&dense), black_box(160)))
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    let problem = ProblemDescriptor::stress_strain_steel();
    let thresholds = GradingThresholds::default();
    let reference = resample(&problem.reference, 160).unwrap();
    let user: Vec<Point> = reference.iter().map(|p| p.offset(0.02, -0.01)).collect();

    group.bench_function("160x160", |b| {
        b.iter(|| compare(black_box(&user), black_box(&reference), black_box(&thresholds)))
    });

    group.finish();
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");
    let problem = ProblemDescriptor::stress_strain_steel();
    let grader = CurveGrader::new(problem.clone()).unwrap();

    group.bench_function("single_stroke_400", |b| {
        let drawing = Drawing::new(vec![wobbly_stroke(&problem, 400)]);
        b.iter(|| grader.grade(black_box(&drawing)))
    });

    group.bench_function("too_short", |b| {
        let drawing = Drawing::new(vec![wobbly_stroke(&problem, 5)]);
        b.iter(|| grader.grade(black_box(&drawing)))
    });

    group.finish();
}

criterion_group!(benches, bench_resample, bench_compare, bench_grade);
criterion_main!(benches);
