use aho_counter::Automaton;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn text(len: usize) -> String {
    let mut seed = 0x2545_f491u32;
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            char::from(b'a' + (seed % 4) as u8)
        })
        .collect()
}

fn bench_count(c: &mut Criterion) {
    let patterns = ["ab", "abc", "bcd", "dab", "aaaa", "cabd", "dddc"];
    let automaton = Automaton::build(patterns).unwrap();

    let mut group = c.benchmark_group("count_occurrences");
    for len in [1_000, 100_000] {
        let text = text(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| automaton.count_occurrences(black_box(text.as_str())).unwrap())
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let patterns: Vec<String> = (0..500).map(|i| text(8 + i % 8)[i % 4..].to_string()).collect();
    c.bench_function("build_500_patterns", |b| {
        b.iter(|| Automaton::build(black_box(&patterns)).unwrap())
    });
}

criterion_group!(benches, bench_count, bench_build);
criterion_main!(benches);
