use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mirage_core::{Language, ScanEngine, detect_language};

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn generate_500_loc_typescript() -> String {
    let mut code = String::with_capacity(20000);
    code.push_str("// Generated 500 LOC TypeScript file for benchmarking\n\n");

    for i in 0..25 {
        code.push_str(&format!(
            r#"interface Entity{i} {{
    id: number;
    name: string;
    createdAt: Date;
    updatedAt: Date;
    metadata?: Record<string, unknown>;
}}

function processEntity{i}(entity: Entity{i}): Entity{i} {{
    const result = {{
        ...entity,
        updatedAt: new Date(),
    }};
    if (entity.metadata) {{
        result.metadata = {{ ...entity.metadata, processed: true }};
    }}
    return result;
}}

async function fetchEntity{i}(id: number): Promise<Entity{i} | null> {{
    const response = await fetch(`/api/entities/{i}/${{id}}`);
    if (!response.ok) {{
        return null;
    }}
    return response.json();
}}

"#,
            i = i
        ));
    }

    code
}

fn generate_100_snippets() -> Vec<String> {
    (0..100)
        .map(|i| {
            format!(
                r#"def process_{i}(items=[]):
    for idx in range(len(items)):
        if items[idx] == None:
            print "missing"
    return items
"#,
                i = i
            )
        })
        .collect()
}

fn read_fixture(path: &str) -> String {
    std::fs::read_to_string(format!("{}/{}", FIXTURES_DIR, path))
        .unwrap_or_else(|_| panic!("Failed to read fixture: {}", path))
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    for (name, path) in [
        ("python", "python/hallucinations.py"),
        ("go", "go/hallucinations.go"),
        ("typescript", "typescript/hallucinations.ts"),
    ] {
        let code = read_fixture(path);
        group.bench_function(name, |b| b.iter(|| detect_language(black_box(&code))));
    }

    group.finish();
}

fn bench_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");

    let engine = ScanEngine::new();

    let hallucination_code = r#"
const items = [];
if (items.isEmpty()) {
    print(items.len());
}
items.push_back(1);
const last = items[-1];
"#;

    group.bench_function("hallucination_rules", |b| {
        b.iter(|| engine.scan(black_box(hallucination_code), Language::JavaScript))
    });

    let security_code = r#"
const API_KEY = "sk_live_abc123xyz789";
const password = "password123";

function getUserById(id) {
    return query("SELECT * FROM users WHERE id = " + id);
}

eval(userInput);
elem.innerHTML = content;
"#;

    group.bench_function("security_rules", |b| {
        b.iter(|| engine.scan(black_box(security_code), Language::JavaScript))
    });

    let clean_code = r#"
const PI = 3.14159;

function calculateArea(radius) {
    return PI * radius * radius;
}

export { calculateArea };
"#;

    group.bench_function("clean_code", |b| {
        b.iter(|| engine.scan(black_box(clean_code), Language::JavaScript))
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    let engine = ScanEngine::new();
    let code_500 = generate_500_loc_typescript();
    let lines_500 = code_500.lines().count();

    group.throughput(Throughput::Elements(lines_500 as u64));
    group.bench_function("scan_500_loc", |b| {
        b.iter(|| engine.scan(black_box(&code_500), Language::TypeScript))
    });

    let snippets = generate_100_snippets();

    for size in [10, 25, 50, 100] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("snippet_count", size), &size, |b, &size| {
            b.iter(|| {
                for snippet in snippets.iter().take(size) {
                    let _ = engine.scan(black_box(snippet), Language::Python);
                }
            })
        });
    }

    group.finish();
}

fn bench_latency_percentiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("latency");

    let engine = ScanEngine::new();
    let code_500 = generate_500_loc_typescript();

    group.bench_function("p95_500_loc_detect_scan", |b| {
        b.iter_custom(|iters| {
            let mut durations: Vec<_> = (0..iters)
                .map(|_| {
                    let start = Instant::now();
                    let language = detect_language(black_box(&code_500));
                    let _ = engine.scan(black_box(&code_500), language);
                    start.elapsed()
                })
                .collect();
            durations.sort();
            let p95_idx = ((iters as f64) * 0.95) as usize;
            let p95_idx = p95_idx.min(durations.len().saturating_sub(1));
            durations[p95_idx]
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(10);

    let engine = ScanEngine::new();
    let quotes = "\"".repeat(50_000);
    let long_line = format!("const x = {};", "a".repeat(100_000));

    group.bench_function("unbalanced_quotes", |b| {
        b.iter(|| engine.scan(black_box(&quotes), Language::JavaScript))
    });
    group.bench_function("single_long_line", |b| {
        b.iter(|| engine.scan(black_box(&long_line), Language::JavaScript))
    });

    for count in [10_000, 40_000] {
        let short_lines = "a.isEmpty();\n".repeat(count);
        let one_line = "a.isEmpty();".repeat(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("matches_short_lines", count), &short_lines, |b, text| {
            b.iter(|| engine.scan(black_box(text), Language::JavaScript))
        });
        group.bench_with_input(BenchmarkId::new("matches_one_line", count), &one_line, |b, text| {
            b.iter(|| engine.scan(black_box(text), Language::JavaScript))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_detection,
    bench_rules,
    bench_scan,
    bench_latency_percentiles,
    bench_pathological
);
criterion_main!(benches);
