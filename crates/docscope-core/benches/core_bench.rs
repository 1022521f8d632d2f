//! Criterion benchmarks for docscope-core.
//!
//! ## Benchmark groups
//!
//! 1. **assessment** — Single-docstring quality assessment at several
//!    docstring shapes.
//! 2. **extraction** — Parse + function discovery on synthetic modules.
//! 3. **pipeline** — Full `analyze` end to end.
//!
//! ## Running
//!
//! ```sh
//! cargo bench --manifest-path crates/docscope-core/Cargo.toml
//! # Run only the assessment group:
//! cargo bench --manifest-path crates/docscope-core/Cargo.toml -- assessment
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use docscope_core::quality::assess;
use docscope_core::{AnalysisConfig, ArgInfo, FunctionInfo, PythonAnalyzer};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_info() -> FunctionInfo {
    FunctionInfo {
        name: "process".to_string(),
        line: 1,
        complexity: 6,
        is_private: false,
        is_test: false,
        args: vec![
            ArgInfo {
                name: "payload".to_string(),
                type_annotation: Some("dict".to_string()),
                default: None,
            },
            ArgInfo {
                name: "strict".to_string(),
                type_annotation: Some("bool".to_string()),
                default: Some("False".to_string()),
            },
        ],
        returns: Some("list".to_string()),
        decorators: vec![],
        current_docstring: String::new(),
    }
}

const FULL_DOCSTRING: &str = "\
Process the raw payload into validated records.

This function is responsible for the full validation pass over the
incoming payload. It normalizes field names, rejects records with
missing identifiers, and provides a clean list for downstream storage.

Args:
    payload: Raw records keyed by identifier.
    strict: Reject instead of skipping invalid records.

Returns:
    Validated records in input order.

Raises:
    ValueError: If an identifier is duplicated.

Examples:
    >>> process(payload)
";

/// Synthetic module with `n` small functions, half documented.
fn synthetic_module(n: usize) -> String {
    let mut code = String::new();
    for i in 0..n {
        if i % 2 == 0 {
            code.push_str(&format!(
                "def handler_{i}(request, session):\n    \"\"\"Handle request {i}.\"\"\"\n    if request:\n        return session\n    return None\n\n"
            ));
        } else {
            code.push_str(&format!(
                "def worker_{i}(items):\n    return [x for x in items if x]\n\n"
            ));
        }
    }
    code
}

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

fn bench_assessment(c: &mut Criterion) {
    let config = AnalysisConfig::default();
    let info = sample_info();
    let mut group = c.benchmark_group("assessment");

    group.bench_function("empty", |b| {
        b.iter(|| assess(black_box(""), "process", &info, &config))
    });
    group.bench_function("brief", |b| {
        b.iter(|| assess(black_box("Handle one request quickly."), "process", &info, &config))
    });
    group.bench_function("full", |b| {
        b.iter(|| assess(black_box(FULL_DOCSTRING), "process", &info, &config))
    });

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let analyzer = PythonAnalyzer::new();
    let mut group = c.benchmark_group("extraction");

    for size in [10usize, 100, 500] {
        let module = synthetic_module(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &module, |b, module| {
            b.iter(|| analyzer.analyze(black_box(module), "bench.py").unwrap())
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let analyzer = PythonAnalyzer::new();
    let module = synthetic_module(50);

    c.bench_function("pipeline/analyze_50_functions", |b| {
        b.iter(|| analyzer.analyze(black_box(&module), "bench.py").unwrap())
    });
}

criterion_group!(benches, bench_assessment, bench_extraction, bench_pipeline);
criterion_main!(benches);
