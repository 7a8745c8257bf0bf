use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use recordkeep_core::{Adjustable, DomainResult, Entity, InMemoryRepository, ItemId, Quantity, Repository};

#[derive(Debug, Clone)]
struct Crate {
    id: ItemId,
    quantity: Quantity,
}

impl Entity for Crate {
    type Id = ItemId;
    const KIND: &'static str = "crate";

    fn id(&self) -> ItemId {
        self.id
    }
}

impl Adjustable for Crate {
    type Input = i64;
    type Value = Quantity;

    fn validate_input(input: i64) -> DomainResult<Quantity> {
        Quantity::new(input)
    }

    fn apply_value(&mut self, value: Quantity) {
        self.quantity = value;
    }
}

fn filled(size: u32) -> InMemoryRepository<Crate> {
    let mut repo = InMemoryRepository::new();
    for raw in 1..=size {
        let id = ItemId::new(raw).expect("positive id");
        repo.add(Crate {
            id,
            quantity: Quantity::from(raw),
        })
        .expect("unique id");
    }
    repo
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_add");

    for size in [100u32, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(u64::from(*size)));
        group.bench_with_input(BenchmarkId::new("fill", size), size, |b, &size| {
            b.iter(|| black_box(filled(size)));
        });
    }

    group.finish();
}

fn bench_lookup_and_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_lookup_update");
    let mut repo = filled(10_000);
    let target = ItemId::new(5_000).expect("positive id");

    group.bench_function("get", |b| {
        b.iter(|| black_box(repo.get(target).is_ok()));
    });

    group.bench_function("update", |b| {
        b.iter(|| black_box(repo.update(target, 42).is_ok()));
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("repository_snapshot");

    for size in [100u32, 10_000].iter() {
        let repo = filled(*size);
        group.bench_with_input(BenchmarkId::new("all", size), size, |b, _| {
            b.iter(|| black_box(repo.all().len()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_lookup_and_update, bench_snapshot);
criterion_main!(benches);
