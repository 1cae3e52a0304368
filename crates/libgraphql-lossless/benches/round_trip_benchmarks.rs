mod fixtures;

use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libgraphql_lossless::TreeBuilder;

// ─── Group 1: Concrete Parse ──────────────────────────────

fn concrete_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("concrete_parse");

    group.bench_function("schema", |b| {
        b.iter(|| black_box(libgraphql_cst::parse(fixtures::SCHEMA)))
    });

    group.bench_function("query", |b| {
        b.iter(|| black_box(libgraphql_cst::parse(fixtures::QUERY)))
    });

    group.finish();
}

// ─── Group 2: Lossless Tree Building ──────────────────────

fn tree_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_build");

    let inputs: &[(&str, String)] = &[
        ("schema", fixtures::SCHEMA.to_string()),
        ("query", fixtures::QUERY.to_string()),
        ("commented_schema_200", fixtures::generated::commented_schema(200)),
        ("nested_depth_30", fixtures::generated::deeply_nested_query(30)),
    ];

    for (label, input) in inputs {
        let concrete = libgraphql_cst::parse(input).unwrap();
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(*label, |b| {
            b.iter(|| {
                black_box(
                    TreeBuilder::new(input).build(&concrete, "bench.graphql", None),
                )
            })
        });
    }

    group.finish();
}

// ─── Group 3: Full Round Trip ─────────────────────────────

fn round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("round_trip");

    let large = fixtures::generated::commented_schema(200);
    let inputs: &[(&str, &str)] = &[
        ("schema", fixtures::SCHEMA),
        ("query", fixtures::QUERY),
        ("commented_schema_200", &large),
    ];

    for &(label, input) in inputs {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_function(label, |b| {
            b.iter(|| {
                let document = libgraphql_lossless::parse(input).unwrap();
                black_box(libgraphql_lossless::print(&document))
            })
        });
    }

    group.finish();
}

// ─── Group 4: Printing Only ───────────────────────────────

fn print_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("print");

    let document = libgraphql_lossless::parse(fixtures::SCHEMA).unwrap();
    group.bench_function("schema", |b| {
        b.iter(|| black_box(libgraphql_lossless::print(&document)))
    });

    group.finish();
}

// ─── Criterion Entrypoint ────────────────────────────────

criterion_group!(benches, concrete_parse, tree_build, round_trip, print_only);
criterion_main!(benches);
