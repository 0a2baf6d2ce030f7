//! Criterion benchmarks for hot paths in taskd.
//!
//! Run with:
//!   cargo bench
//!
//! Covers:
//!   - Index page rendering (string assembly per request)
//!   - HTML escaping (runs on every description shown)
//!   - Flash cookie seal/open (HMAC-SHA256 round trip)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use taskd::tasks::TaskRow;
use taskd::web::flash::{self, Flash};
use taskd::web::pages;

// ─── Page rendering ──────────────────────────────────────────────────────────

fn sample_tasks(n: usize) -> Vec<TaskRow> {
    (0..n)
        .map(|i| TaskRow {
            id: i as i64 + 1,
            description: format!("task number {i} with a plausible description"),
            completed: i % 3 == 0,
        })
        .collect()
}

fn bench_page_render(c: &mut Criterion) {
    let empty: Vec<TaskRow> = Vec::new();
    let ten = sample_tasks(10);
    let hundred = sample_tasks(100);
    let flashes = vec![Flash::error("The task description cannot be empty.")];

    c.bench_function("render_index_empty", |b| {
        b.iter(|| {
            let html = pages::index(black_box(&empty), black_box(&[]));
            black_box(html);
        });
    });

    c.bench_function("render_index_10_tasks", |b| {
        b.iter(|| {
            let html = pages::index(black_box(&ten), black_box(&flashes));
            black_box(html);
        });
    });

    c.bench_function("render_index_100_tasks", |b| {
        b.iter(|| {
            let html = pages::index(black_box(&hundred), black_box(&[]));
            black_box(html);
        });
    });
}

// ─── HTML escaping ───────────────────────────────────────────────────────────

fn bench_escape_html(c: &mut Criterion) {
    let clean = "Water the plants before the weekend trip";
    let dirty = r#"<script>alert("x")</script> & <b>'markup'</b> everywhere"#;
    let long_clean = "a".repeat(4096);

    c.bench_function("escape_clean_line", |b| {
        b.iter(|| {
            let s = pages::escape_html(black_box(clean));
            black_box(s);
        });
    });

    c.bench_function("escape_dirty_line", |b| {
        b.iter(|| {
            let s = pages::escape_html(black_box(dirty));
            black_box(s);
        });
    });

    c.bench_function("escape_long_clean_4k", |b| {
        b.iter(|| {
            let s = pages::escape_html(black_box(&long_clean));
            black_box(s);
        });
    });
}

// ─── Flash cookies ───────────────────────────────────────────────────────────

fn bench_flash_cookie(c: &mut Criterion) {
    let secret = b"bench-secret-key-not-for-production";
    let flashes = vec![
        Flash::error("The task description cannot be empty."),
        Flash::info("Task added."),
    ];
    let sealed = flash::seal(&flashes, secret).unwrap();

    c.bench_function("flash_seal_two_messages", |b| {
        b.iter(|| {
            let cookie = flash::seal(black_box(&flashes), black_box(secret)).unwrap();
            black_box(cookie);
        });
    });

    c.bench_function("flash_open_valid", |b| {
        b.iter(|| {
            let messages = flash::open(black_box(&sealed), black_box(secret));
            black_box(messages);
        });
    });

    c.bench_function("flash_open_tampered", |b| {
        let mut tampered = sealed.clone();
        tampered.replace_range(0..1, "x");
        b.iter(|| {
            let messages = flash::open(black_box(&tampered), black_box(secret));
            black_box(messages);
        });
    });
}

// ─── Entry point ─────────────────────────────────────────────────────────────

criterion_group!(benches, bench_page_render, bench_escape_html, bench_flash_cookie);
criterion_main!(benches);
