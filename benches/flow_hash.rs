use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flowhash::{lookup3, murmur3_32, FlowHasher, FlowKey, HashFamily, FLOW_KEY_LEN};

fn bench_flow(c: &mut Criterion) {
    let key = FlowKey::new(0xC0A80101, 0x08080808, 12345, 80, 6);
    let mut group = c.benchmark_group("flow");
    group.throughput(Throughput::Bytes(FLOW_KEY_LEN as u64));
    for family in HashFamily::ALL {
        let hasher = FlowHasher::new(family, 0x12345678);
        group.bench_function(BenchmarkId::from_parameter(family), |b| {
            b.iter(|| hasher.hash(black_box(&key)))
        });
    }
    group.finish();
}

fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes");
    for len in [13usize, 64, 1024] {
        let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("murmur3", len), &data, |b, data| {
            b.iter(|| murmur3_32(black_box(data), 0))
        });
        group.bench_with_input(BenchmarkId::new("lookup3", len), &data, |b, data| {
            b.iter(|| lookup3(black_box(data), 0))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_flow, bench_bytes);
criterion_main!(benches);
