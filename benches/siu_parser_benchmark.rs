use criterion::{Criterion, criterion_group, criterion_main};
use octofhir_siu::{
    BatchConfig, extract_appointment, normalize_timestamp, parse_message, process_batch,
};
use std::hint::black_box;

const MESSAGE: &str = "MSH|^~\\&|SCHED_SYS|CLINIC_A|EHR_SYS|HOSPITAL|20250502090000||SIU^S12|MSG001|P|2.5\r\
PID|1||P12345||Doe^John^^^Mr.||19850210|M|||123 Main St^^Springfield^IL^62701\r\
SCH|123456|^^^20250502130000^^60|ROUTINE|^^Clinic A Room 203|^Smith^Jane^MD^D67890\r\
PV1|1|O|OPD^203||||^Smith^Jane^MD|||REF123";

fn benchmark_tokenizer(c: &mut Criterion) {
    c.bench_function("parse_message", |b| {
        b.iter(|| black_box(parse_message(black_box(MESSAGE))))
    });
}

fn benchmark_extraction(c: &mut Criterion) {
    let message = parse_message(MESSAGE).unwrap();

    c.bench_function("extract_appointment", |b| {
        b.iter(|| black_box(extract_appointment(black_box(&message))))
    });
}

fn benchmark_timestamps(c: &mut Criterion) {
    let values = vec![
        "2025",
        "20250502",
        "20250502130000",
        "20250502130000.1234-0500",
        "not-a-date",
    ];

    c.bench_function("normalize_timestamp", |b| {
        b.iter(|| {
            for value in &values {
                black_box(normalize_timestamp(black_box(value)));
            }
        })
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let content = vec![MESSAGE; 100].join("\r\n\r\n");
    let sequential = BatchConfig::default();
    let parallel = BatchConfig {
        parallel: true,
        ..BatchConfig::default()
    };

    let mut group = c.benchmark_group("batch_100");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(process_batch(black_box(&content), &sequential)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(process_batch(black_box(&content), &parallel)))
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_tokenizer,
    benchmark_extraction,
    benchmark_timestamps,
    benchmark_batch
);
criterion_main!(benches);
