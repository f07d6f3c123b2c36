//! Parsing and flattening throughput.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use spacey_analyzer::{CanonicalRenderer, analyze, analyze_program, parser::Parser};

const BINARY_SEARCH: &str = "\
function binarySearch(X, V, n) {
    let low, high, mid;
    low = 0;
    high = n - 1;
    while (low <= high) {
        mid = (low + high) / 2;
        if (X < V[mid])
            high = mid - 1;
        else if (X > V[mid])
            low = mid + 1;
        else
            return mid;
    }
    return -1;
}
";

fn else_if_ladder(depth: usize) -> String {
    let mut src = String::from("if (x == 0) { y = 0; }");
    for i in 1..depth {
        src.push_str(&format!(" else if (x == {i}) {{ y = y + {i}; }}"));
    }
    src.push_str(" else { y--; }");
    src
}

fn bench_analyze(c: &mut Criterion) {
    c.bench_function("analyze binary search", |b| {
        b.iter(|| analyze(black_box(BINARY_SEARCH)))
    });

    let ladder = else_if_ladder(500);
    c.bench_function("analyze 500-deep else-if", |b| {
        b.iter(|| analyze(black_box(&ladder)))
    });
}

fn bench_flatten_only(c: &mut Criterion) {
    let program = match Parser::new(BINARY_SEARCH).parse_program() {
        Ok(program) => program,
        Err(e) => panic!("benchmark source failed to parse: {e}"),
    };
    c.bench_function("flatten binary search", |b| {
        b.iter(|| analyze_program(black_box(&program), &CanonicalRenderer))
    });
}

criterion_group!(benches, bench_analyze, bench_flatten_only);
criterion_main!(benches);
