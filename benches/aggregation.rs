use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expense_core::{aggregate::classify_all, ExpenseRecord, ExpenseSummary, RecordStore};

fn synthetic(count: u32) -> Vec<ExpenseRecord> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
    (1..=count)
        .map(|id| ExpenseRecord::new(id, (id % 97) as f64 * 3.5, "Item", "Bench", date))
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let sample = RecordStore::sample().expect("sample");
    c.bench_function("summary_sample", |b| {
        b.iter(|| ExpenseSummary::from_records(black_box(sample.all())))
    });

    let large = synthetic(10_000);
    c.bench_function("classify_10k", |b| b.iter(|| classify_all(black_box(&large))));
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
