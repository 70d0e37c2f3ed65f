use pwl_tree::*;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        building_sampled_tree,
        evaluating_sampled_tree,
        evaluating_legality_guard,
}

fn samples() -> Samples {
    Samples::univariate(|x| x * x * x, pwl_core::MIN_X, pwl_core::MAX_X, pwl_core::NUM_SAMPLES)
        .expect("valid domain")
}

fn building_sampled_tree(c: &mut criterion::Criterion) {
    c.bench_function("build a 101-sample search tree", |b| {
        b.iter(|| SampleTreeBuilder::new("result".into(), "var".into(), samples()).build())
    });
}

fn evaluating_sampled_tree(c: &mut criterion::Criterion) {
    let effect = SampleTreeBuilder::new("result".into(), "var".into(), samples()).build();
    let snapshot = Snapshot::new().with("var".into(), 3.3);
    c.bench_function("evaluate a 101-sample search tree", |b| {
        b.iter(|| effect.apply(&snapshot))
    });
}

fn evaluating_legality_guard(c: &mut criterion::Criterion) {
    let location = FeatureKey::state("Player 1", "location");
    let guard = Tree::guard(Predicate::equals(location.clone(), [1, 3]));
    let snapshot = Snapshot::new().with(location, 0);
    c.bench_function("evaluate a legality guard", |b| {
        b.iter(|| guard.legal(&snapshot))
    });
}
