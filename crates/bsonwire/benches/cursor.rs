//! Benchmark – `bsonwire::Cursor` readers and key sizing
#![allow(missing_docs)]

use std::time::Duration;

use bsonwire::{Cursor, Writer, array_key_size, index_to_key, string_size};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// An array body of `count` int32 elements followed by `count` string
/// elements of `string_len` bytes each, keys `"0"`, `"1"`, ...
fn make_payload(count: usize, string_len: usize) -> Vec<u8> {
    let content = vec![b'x'; string_len];
    let size: usize = (0..count)
        .map(|i| array_key_size(i) + 4 + array_key_size(count + i) + string_size(string_len))
        .sum();
    let mut buf = vec![0u8; size];
    let mut w = Writer::new(&mut buf);
    for i in 0..count {
        w.write_u8(0x10);
        w.write_index_key(i);
        w.write_i32(i32::try_from(i).unwrap_or(i32::MAX));
    }
    for i in 0..count {
        w.write_u8(0x02);
        w.write_index_key(count + i);
        w.write_string(&content);
    }
    assert_eq!(w.remaining(), 0);
    buf
}

fn read_all(data: &[u8], count: usize) -> usize {
    let mut c = Cursor::new(data);
    let mut total = 0usize;
    for _ in 0..count {
        total += c.read_u8().unwrap().len;
        total += c.read_cstr().unwrap().len;
        total += c.read_i32().unwrap().len;
    }
    for _ in 0..count {
        total += c.read_u8().unwrap().len;
        total += c.read_cstr().unwrap().len;
        total += c.read_str().unwrap().len;
    }
    total
}

fn bench_cursor(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor");
    group.measurement_time(Duration::from_secs(5));

    for &(count, string_len) in &[(16, 8), (1_000, 8), (1_000, 256)] {
        let payload = make_payload(count, string_len);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("read_elements", format!("{count}x{string_len}")),
            &payload,
            |b, payload| b.iter(|| read_all(black_box(payload), count)),
        );
    }
    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("keys");
    group.bench_function("array_key_size", |b| {
        b.iter(|| (0..10_000).map(|i| array_key_size(black_box(i))).sum::<usize>());
    });
    group.bench_function("index_to_key", |b| {
        b.iter(|| (0..10_000).map(|i| index_to_key(black_box(i)).as_bytes().len()).sum::<usize>());
    });
    group.bench_function("write_index_key", |b| {
        let mut buf = [0u8; 21];
        b.iter(|| {
            (0..10_000)
                .map(|i| Writer::new(&mut buf).write_index_key(black_box(i)))
                .sum::<usize>()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_cursor, bench_keys);
criterion_main!(benches);
