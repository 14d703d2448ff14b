use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resdoc_core::render::{normalize, Format, RenderOptions};
use resdoc_core::{resolve_version, sort_resources, Mode, Resource, Version};

fn sample(n: usize) -> Vec<Resource> {
    (0..n)
        .map(|i| {
            let mode = match i % 3 {
                0 => Mode::Managed,
                1 => Mode::Data,
                _ => Mode::Unspecified,
            };
            let resource_type = format!("type_{}", (i * 7919) % n);
            Resource::new(resource_type, format!("p{}", i % 5), "hashicorp/p")
                .with_mode(mode)
                .with_version(Version::Constraints(vec![format!("= 1.{}.0", i % 10)]))
        })
        .collect()
}

fn sample_json(n: usize) -> String {
    let records: Vec<serde_json::Value> = sample(n)
        .iter()
        .map(|r| {
            serde_json::json!({
                "type": r.resource_type,
                "provider": r.provider_name,
                "source": r.provider_source,
                "mode": r.mode.as_str(),
                "version": r.version,
            })
        })
        .collect();
    serde_json::Value::Array(records).to_string()
}

fn bench_sort(c: &mut Criterion) {
    let resources = sample(1_000);
    c.bench_function("sort_resources_1000", |b| {
        b.iter(|| sort_resources(black_box(resources.clone())))
    });
}

fn bench_resolve(c: &mut Criterion) {
    let clauses = ["= 1.2.3", "~> 1.2", "> 1.0, < 2.0", "1.2.3"];
    c.bench_function("resolve_version", |b| {
        b.iter(|| {
            for clause in clauses {
                black_box(resolve_version(&[clause]));
            }
        })
    });
}

fn bench_normalize(c: &mut Criterion) {
    let json = sample_json(1_000);
    let cases = [
        ("normalize_markdown", Format::Markdown),
        ("normalize_json", Format::Json),
    ];
    for (name, format) in cases {
        let options = RenderOptions { format, sort: true };
        c.bench_function(name, |b| b.iter(|| normalize(black_box(&json), &options)));
    }
}

criterion_group!(benches, bench_sort, bench_resolve, bench_normalize);
criterion_main!(benches);
