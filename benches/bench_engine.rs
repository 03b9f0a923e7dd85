use criterion::{black_box, criterion_group, criterion_main, Criterion};
use knapsack_ga::{
    evolution::{GeneticAlgorithmKnapsack, KnapsackOptions},
    individual::Individual,
    item::Item,
    rng::RandomNumberGenerator,
};

fn items(count: usize) -> Vec<Item> {
    let mut rng = RandomNumberGenerator::from_seed(17);
    (0..count)
        .map(|_| {
            let weight = 1.0 + (rng.uniform() * 50.0).floor();
            let value = (rng.uniform() * 100.0).floor();
            Item::new(weight, value).unwrap()
        })
        .collect()
}

fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_engine");
    for size in [20, 100, 500].iter() {
        let items = items(*size);
        let capacity = items.iter().map(Item::weight).sum::<f64>() / 3.0;
        let options = KnapsackOptions::builder()
            .population_size(50)
            .generations(50)
            .build();

        group.bench_function(&format!("run_{}_items", size), |b| {
            b.iter(|| {
                let mut engine =
                    GeneticAlgorithmKnapsack::new(items.clone(), capacity, options.clone())
                        .unwrap();
                black_box(engine.run())
            })
        });
    }
    group.finish();
}

fn bench_repair(c: &mut Criterion) {
    let items = items(500);
    let capacity = items.iter().map(Item::weight).sum::<f64>() / 10.0;
    let mut rng = RandomNumberGenerator::from_seed(3);

    c.bench_function("repair_500_items", |b| {
        b.iter(|| {
            let mut individual = Individual::from_genes(vec![true; items.len()]);
            individual.repair(&mut rng, black_box(&items), capacity);
            black_box(individual)
        })
    });
}

criterion_group!(benches, bench_engine, bench_repair);
criterion_main!(benches);
