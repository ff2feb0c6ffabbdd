use criterion::{black_box, criterion_group, criterion_main, Criterion};
use elementary::Automaton;

fn rule110_benchmark(c: &mut Criterion) {
  c.bench_function("rule 110, 1024 cells, 1000 generations", |b| b.iter(|| {
    let mut auto = Automaton::new(110, 1024).unwrap();

    auto.simulate(black_box(1000));
  }));
}

criterion_group!(benches, rule110_benchmark);
criterion_main!(benches);
