// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use stevedore_model::{
    assignment::Assignment,
    index::{ContainerIndex, OrderIndex},
    model::{Model, ModelBuilder},
};
use stevedore_repair::{
    engine::RepairEngine, monitor::iteration::IterationLimitMonitor, selector::PairSelector,
};

/// Builds a repairable instance: windows are derived from a hidden target
/// partition with a little slack, and the starting assignment dumps every
/// order into container 0.
fn build_instance(num_orders: usize, num_containers: usize, seed: u64) -> (Model<i64>, Assignment) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let quantities: Vec<i64> = (0..num_orders).map(|_| rng.random_range(1..=20)).collect();
    let mut target_sums = vec![0_i64; num_containers];
    for &quantity in &quantities {
        let container = rng.random_range(0..num_containers);
        target_sums[container] += quantity;
    }

    let mut builder = ModelBuilder::with_capacity(num_orders, num_containers);
    for &quantity in &quantities {
        builder = builder.add_order(quantity, rng.random_range(1..=100));
    }
    for &sum in &target_sums {
        builder = builder.add_container((sum - 2).max(0), sum + 2);
    }
    let model = builder.build().expect("generated instance must be valid");

    let mut assignment = Assignment::new_unassigned(num_orders);
    for order in 0..num_orders {
        assignment.assign(OrderIndex::new(order), Some(ContainerIndex::new(0)));
    }

    (model, assignment)
}

fn bench_repair(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_benchmark");

    for &(num_orders, num_containers) in &[(20, 4), (50, 8), (100, 10)] {
        let (model, start) = build_instance(num_orders, num_containers, 0xC0FFEE);
        let label = format!("{}x{}", num_orders, num_containers);

        group.throughput(Throughput::Elements(num_orders as u64));
        group.bench_with_input(BenchmarkId::new("repair", &label), &model, |b, model| {
            b.iter(|| {
                let mut assignment = start.clone();
                let mut selector = PairSelector::new(ChaCha8Rng::seed_from_u64(42));
                let mut monitor = IterationLimitMonitor::new(20_000);
                let outcome = RepairEngine::new().run(
                    black_box(model),
                    black_box(&mut assignment),
                    &mut selector,
                    &mut monitor,
                );
                black_box(outcome)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_repair);
criterion_main!(benches);
