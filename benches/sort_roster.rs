//! This bench sorts and saves a large roster.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use roster::{Roster, RosterEntry};
use tempfile::TempDir;

/// Builds a roster with names and ids in scrambled order.
fn preseed_roster(size: u64) -> Roster {
    (0..size)
        .map(|i| {
            let id = (i * 7919) % size;
            RosterEntry::new(
                id,
                format!("Student {:05}", (i * 104_729) % size),
                format!("student{id}@example.com"),
                format!("G{}", id % 12),
            )
            .unwrap()
        })
        .collect()
}

fn sort(c: &mut Criterion) {
    c.bench_function("sort by name then id", |b| {
        b.iter_batched(
            || preseed_roster(10_000),
            |mut roster| {
                roster.sort_by_name();
                roster.sort_by_id();
                roster
            },
            BatchSize::SmallInput,
        );
    });
}

fn save(c: &mut Criterion) {
    let roster = preseed_roster(10_000);
    let tmp_dir = TempDir::new().unwrap();
    let path = tmp_dir.path().join("data.csv");

    c.bench_function("save roster", |b| {
        b.iter(|| roster.save_to_file(&path).unwrap());
    });
}

criterion_group!(benches, sort, save);
criterion_main!(benches);
