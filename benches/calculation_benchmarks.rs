//! Performance benchmarks for the Employee Lifecycle Engine.
//!
//! The derived views (exit progress, probation interpolation, hour
//! deltas) are recomputed on every read, so the pure calculators need to
//! stay cheap even for large templates.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use uuid::Uuid;

use lifecycle_engine::calculation::{
    format_hour_delta, generate_tasks, hour_delta, progress_percent,
};
use lifecycle_engine::models::{AssignedRole, ExitRecord, TemplateTask};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn make_exit() -> ExitRecord {
    ExitRecord {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        organization_id: Uuid::new_v4(),
        resignation_date: date("2024-05-31"),
        last_working_day: date("2024-06-30"),
        reason_for_leaving: "relocation".to_string(),
        exit_interview_feedback: String::new(),
        is_eligible_for_rehire: true,
    }
}

fn make_blueprints(count: usize) -> Vec<TemplateTask> {
    (0..count)
        .map(|i| TemplateTask {
            id: Uuid::new_v4(),
            template_id: Uuid::new_v4(),
            task_name: format!("task {i}"),
            description: "generated benchmark blueprint".to_string(),
            due_before_days: (i % 30) as u32,
            default_assigned_role: AssignedRole::It,
        })
        .collect()
}

fn bench_task_generation(c: &mut Criterion) {
    let exit = make_exit();
    let mut group = c.benchmark_group("task_generation");
    for count in [5, 50, 500] {
        let blueprints = make_blueprints(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &blueprints,
            |b, blueprints| b.iter(|| generate_tasks(black_box(&exit), black_box(blueprints))),
        );
    }
    group.finish();
}

fn bench_progress_percent(c: &mut Criterion) {
    let start = date("2024-03-01");
    let end = date("2024-05-30");
    let today = date("2024-04-15");
    c.bench_function("progress_percent", |b| {
        b.iter(|| progress_percent(black_box(start), black_box(end), black_box(today)))
    });
}

fn bench_hour_delta(c: &mut Criterion) {
    c.bench_function("hour_delta", |b| {
        b.iter(|| {
            let delta = hour_delta(
                black_box(Some("09:00")),
                black_box(Some("18:00")),
                black_box(Some("09:00")),
                black_box(Some("17:30")),
            );
            format_hour_delta(delta)
        })
    });
}

criterion_group!(
    benches,
    bench_task_generation,
    bench_progress_percent,
    bench_hour_delta
);
criterion_main!(benches);
