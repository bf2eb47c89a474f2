//! End-to-end properties of the engine on the all-ones problem.

use proptest::prelude::*;
use u_genalg::ga::{GaConfig, GeneticAlgorithm, Individual, Population};
use u_genalg::problems::AllOnes;
use u_genalg::random::create_rng;

fn population(genomes: &[&str]) -> Population {
    Population::from_individuals(genomes.iter().map(|g| g.parse().unwrap()).collect())
}

#[test]
fn test_four_by_three_scenario() {
    let config = GaConfig::default().with_population_size(4);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut pop = population(&["111", "100", "000", "110"]);

    ga.eval_population(&mut pop);

    let by_genome = |g: &str| {
        pop.individuals()
            .iter()
            .find(|i| i.to_string() == g)
            .map(Individual::fitness)
            .unwrap()
    };
    assert!((by_genome("111") - 1.0).abs() < 1e-12);
    assert!((by_genome("100") - 0.333).abs() < 1e-3);
    assert!((by_genome("000") - 0.0).abs() < 1e-12);
    assert!((by_genome("110") - 0.667).abs() < 1e-3);

    assert_eq!(pop.fittest(0).to_string(), "111");
    assert!(ga.is_termination_condition_met(&pop));
}

#[test]
fn test_full_mutation_scenario() {
    let config = GaConfig::default()
        .with_population_size(4)
        .with_mutation_rate(1.0)
        .with_elitism_count(0);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut rng = create_rng(42);

    let pop = population(&["00000", "00000", "00000", "00000"]);
    let next = ga.mutate_population(pop, &mut rng);

    assert_eq!(next.size(), 4);
    for ind in next.individuals() {
        assert_eq!(ind.genome(), &[true; 5]);
    }
}

#[test]
fn test_termination_without_all_ones() {
    let config = GaConfig::default().with_population_size(3);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut pop = population(&["1110", "0111", "1011"]);
    ga.eval_population(&mut pop);
    assert!(!ga.is_termination_condition_met(&pop));
}

#[test]
fn test_elites_pass_through_with_zero_rates() {
    let config = GaConfig::default()
        .with_population_size(20)
        .with_crossover_rate(0.0)
        .with_mutation_rate(0.0)
        .with_elitism_count(5);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut rng = create_rng(11);

    let mut pop = ga.init_population(24, &mut rng).unwrap();
    ga.eval_population(&mut pop);
    let elites: Vec<Individual> = (0..5).map(|r| pop.fittest(r).clone()).collect();

    let next = ga.mutate_population(ga.crossover_population(&pop, &mut rng), &mut rng);
    for (rank, elite) in elites.iter().enumerate() {
        assert_eq!(next.individual(rank).genome(), elite.genome());
    }
}

#[test]
fn test_elites_survive_full_rates() {
    let config = GaConfig::default()
        .with_population_size(20)
        .with_crossover_rate(1.0)
        .with_mutation_rate(1.0)
        .with_elitism_count(3);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut rng = create_rng(5);

    let mut pop = ga.init_population(16, &mut rng).unwrap();
    ga.eval_population(&mut pop);
    let elites: Vec<Individual> = (0..3).map(|r| pop.fittest(r).clone()).collect();

    let next = ga.mutate_population(ga.crossover_population(&pop, &mut rng), &mut rng);
    assert_eq!(&next.individuals()[..3], &elites[..]);
}

#[test]
fn test_seeded_step_is_deterministic() {
    let step = |seed: u64| {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_mutation_rate(0.05);
        let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
        let mut rng = create_rng(seed);
        let mut pop = ga.init_population(40, &mut rng).unwrap();
        ga.eval_population(&mut pop);
        let offspring = ga.crossover_population(&pop, &mut rng);
        ga.mutate_population(offspring, &mut rng)
    };

    assert_eq!(step(99), step(99));
    assert_ne!(step(99), step(100));
}

#[test]
fn test_fitness_improves_over_generations() {
    let config = GaConfig::default()
        .with_population_size(50)
        .with_mutation_rate(0.01);
    let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
    let mut rng = create_rng(3);

    let mut pop = ga.init_population(64, &mut rng).unwrap();
    ga.eval_population(&mut pop);
    let initial_mean = pop.mean_fitness().unwrap();

    for _ in 0..40 {
        let offspring = ga.crossover_population(&pop, &mut rng);
        pop = ga.mutate_population(offspring, &mut rng);
        ga.eval_population(&mut pop);
    }

    let final_mean = pop.mean_fitness().unwrap();
    assert!(
        final_mean > initial_mean,
        "mean fitness should rise: {initial_mean} -> {final_mean}"
    );
}

proptest! {
    #[test]
    fn prop_random_individuals_are_well_formed(seed in any::<u64>(), len in 1usize..200) {
        let ind = Individual::random(len, &mut create_rng(seed));
        prop_assert_eq!(ind.genome_length(), len);
        prop_assert!(!ind.is_evaluated());
    }

    #[test]
    fn prop_fittest_dominates_after_evaluation(
        seed in any::<u64>(),
        size in 1usize..40,
        len in 1usize..32,
    ) {
        let config = GaConfig::default()
            .with_population_size(size)
            .with_elitism_count(0);
        let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
        let mut rng = create_rng(seed);
        let mut pop = ga.init_population(len, &mut rng).unwrap();
        ga.eval_population(&mut pop);

        let top = pop.fittest(0).fitness();
        for rank in 1..pop.size() {
            prop_assert!(top >= pop.fittest(rank).fitness());
        }
        let sum: f64 = pop.individuals().iter().map(Individual::fitness).sum();
        prop_assert!((pop.fitness() - sum).abs() < 1e-9);
    }

    #[test]
    fn prop_generation_preserves_shape(
        seed in any::<u64>(),
        size in 1usize..30,
        len in 1usize..24,
    ) {
        let config = GaConfig::default()
            .with_population_size(size)
            .with_elitism_count(0)
            .with_mutation_rate(0.1);
        let ga = GeneticAlgorithm::new(AllOnes, config).unwrap();
        let mut rng = create_rng(seed);
        let mut pop = ga.init_population(len, &mut rng).unwrap();
        ga.eval_population(&mut pop);

        let next = ga.mutate_population(ga.crossover_population(&pop, &mut rng), &mut rng);
        prop_assert_eq!(next.size(), size);
        prop_assert_eq!(next.genome_length(), len);
    }
}
