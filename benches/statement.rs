use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rust_decimal::Decimal;
use tempfile::tempdir;
use wallet_core::statement::{
    FixedClock, StatementGroup, StatementStore, StatementTotals, TransactionPosition,
    TransactionRecord,
};
use wallet_core::storage::{
    FileByteStore, KeyValueDatasource, MemoryByteStore, StatementDatasource,
};

fn build_sample_groups(txn_count: usize) -> Vec<StatementGroup> {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let per_day = 20;
    (0..txn_count.div_ceil(per_day))
        .rev()
        .map(|day| {
            let transactions = (0..per_day)
                .map(|row| {
                    let idx = day * per_day + row;
                    let amount = Decimal::new(500 + (idx % 100) as i64 * 25, 2);
                    if idx % 4 == 0 {
                        TransactionRecord::income(format!("Income {idx}"), amount * Decimal::TEN)
                    } else {
                        TransactionRecord::expense(format!("Expense {idx}"), amount)
                    }
                })
                .collect();
            StatementGroup::new(start + Duration::days(day as i64), transactions)
        })
        .collect()
}

fn store_with(groups: &[StatementGroup]) -> StatementStore {
    let datasource = KeyValueDatasource::new(MemoryByteStore::new());
    datasource.save(groups);
    StatementStore::load(Box::new(datasource)).with_clock(Box::new(FixedClock(
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap(),
    )))
}

fn bench_totals(c: &mut Criterion) {
    let groups = build_sample_groups(black_box(10_000));

    c.bench_function("totals_rescan_10k", |b| {
        b.iter(|| black_box(StatementTotals::from_groups(&groups)))
    });
}

fn bench_mutations(c: &mut Criterion) {
    let groups = build_sample_groups(10_000);

    c.bench_function("record_then_remove_10k", |b| {
        b.iter_batched(
            || store_with(&groups),
            |mut store| {
                store
                    .record_transaction(TransactionRecord::expense("Coffee", Decimal::from(7)))
                    .expect("record");
                let removed = store
                    .remove_transaction(TransactionPosition::new(0, 0))
                    .expect("remove");
                store.remove_group_if_empty(0).expect("cleanup");
                black_box(removed);
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_persistence(c: &mut Criterion) {
    let groups = build_sample_groups(10_000);
    let dir = tempdir().expect("tempdir");
    let datasource =
        KeyValueDatasource::new(FileByteStore::new(dir.path().to_path_buf()).expect("store"));

    c.bench_function("statement_save_10k", |b| {
        b.iter(|| datasource.save(black_box(&groups)))
    });

    datasource.save(&groups);

    c.bench_function("statement_load_10k", |b| {
        b.iter(|| black_box(datasource.load()))
    });
}

criterion_group!(benches, bench_totals, bench_mutations, bench_persistence);
criterion_main!(benches);
