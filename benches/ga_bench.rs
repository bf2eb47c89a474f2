//! Criterion benchmarks for the GA engine.
//!
//! Uses the all-ones problem to measure algorithm overhead: one generational
//! step at several population sizes, and a full run to a solution.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_genalg::ga::{GaConfig, GaRunner, GeneticAlgorithm};
use u_genalg::problems::AllOnes;
use u_genalg::random::create_rng;

// ===========================================================================
// One generation: crossover + mutation + evaluation
// ===========================================================================

fn bench_generation_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_generation");

    for &size in &[50usize, 200, 1000] {
        let config = GaConfig::default()
            .with_population_size(size)
            .with_mutation_rate(0.01);
        let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
        let mut rng = create_rng(42);
        let mut population = ga.init_population(128, &mut rng).unwrap();
        ga.eval_population(&mut population);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let offspring = ga.crossover_population(black_box(&population), &mut rng);
                let mut next = ga.mutate_population(offspring, &mut rng);
                ga.eval_population(&mut next);
                next
            });
        });
    }

    group.finish();
}

// ===========================================================================
// Full run
// ===========================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_run");
    group.sample_size(10);

    for &len in &[32usize, 64] {
        let config = GaConfig::default()
            .with_population_size(100)
            .with_mutation_rate(1.0 / len as f64)
            .with_max_generations(5_000)
            .with_seed(42);

        group.bench_with_input(BenchmarkId::new("all_ones", len), &len, |b, &len| {
            b.iter(|| GaRunner::run(&AllOnes, black_box(&config), len).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation_step, bench_full_run);
criterion_main!(benches);
