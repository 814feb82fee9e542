// benches/resolve_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rcountries::Phone;

// Type for the bench inputs: (calling code, optional dialing prefix).
type BenchEntity = (&'static str, Option<&'static str>);

/// A mix of bare codes and prefixed lookups, so the measurement covers
/// the priority, longest-match and fallback paths rather than one happy
/// path.
fn setup_resolution_data() -> Vec<BenchEntity> {
    vec![
        // Bare NANPA code, first-candidate policy
        ("1", None),
        // Exact three-digit match
        ("+1", Some("325")),
        // One-digit hint shared by many candidates
        ("1", Some("3")),
        // Crown-dependency prefix under the UK code
        ("44", Some("1534")),
        // Truncated hint
        ("+44", Some("15")),
        // Hint matching nothing, fallback path
        ("7", Some("999")),
        // Single-territory code
        ("880", None),
    ]
}

fn resolution_benchmark(c: &mut Criterion) {
    let inputs = setup_resolution_data();

    let mut group = c.benchmark_group("Calling-code resolution");

    group.bench_function("rcountries: resolve()", |b| {
        b.iter(|| {
            for (code, prefix) in &inputs {
                let _ = match prefix {
                    Some(prefix) => {
                        Phone::resolve_with_prefix(black_box(*code), black_box(*prefix))
                    }
                    None => Phone::resolve(black_box(*code)),
                };
            }
        })
    });

    group.finish();
}

criterion_group!(benches, resolution_benchmark);
criterion_main!(benches);
