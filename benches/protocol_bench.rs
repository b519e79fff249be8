//! Benchmarks for the map client.
//!
//! Run with: cargo bench

use bytes::BytesMut;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use map_filler::utils::{encode_request, take_line};
use map_filler::{Connection, Entry, FastrandRandom, MapService, TcpMapService};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Benchmark building request frames.
fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    group.bench_function("random_entry", |b| {
        b.iter(|| black_box(Entry::random(&FastrandRandom, 100_000)));
    });

    group.bench_function("put_request", |b| {
        let entry = Entry::numbered(42_424);
        b.iter(|| {
            black_box(encode_request(&[
                "PUT",
                "persistent-map",
                &entry.key,
                &entry.value,
            ]))
        });
    });

    group.finish();
}

/// Benchmark splitting reply frames.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for lines in [1usize, 16, 256].iter() {
        let mut input = BytesMut::new();
        for i in 0..*lines {
            input.extend_from_slice(format!("ERR map {} is read-only\n", i).as_bytes());
        }

        group.throughput(Throughput::Elements(*lines as u64));
        group.bench_with_input(BenchmarkId::new("error_lines", lines), &input, |b, input| {
            b.iter(|| {
                let mut buf = input.clone();
                while let Some(line) = take_line(&mut buf) {
                    black_box(line);
                }
            });
        });
    }

    group.finish();
}

/// Benchmark one fill iteration over loopback.
fn bench_round_trip(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    let addr = rt.block_on(async {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let (read, mut write) = socket.into_split();
            let mut lines = BufReader::new(read).lines();
            let mut size = 0u64;
            while let Ok(Some(line)) = lines.next_line().await {
                let reply = match line.split(' ').next() {
                    Some("PING") => "PONG".to_string(),
                    Some("PUT") => {
                        size += 1;
                        "OK".to_string()
                    }
                    Some("SIZE") => size.to_string(),
                    _ => "BYE".to_string(),
                };
                write.write_all(format!("{}\n", reply).as_bytes()).await.unwrap();
            }
        });
        addr
    });

    let mut conn = rt.block_on(TcpMapService.connect(&addr)).unwrap();

    c.bench_function("put_then_size", |b| {
        b.iter(|| {
            rt.block_on(async {
                let entry = Entry::random(&FastrandRandom, 100_000);
                conn.put("persistent-map", &entry.key, &entry.value)
                    .await
                    .unwrap();
                black_box(conn.size("persistent-map").await.unwrap());
            })
        });
    });
}

criterion_group!(benches, bench_encoding, bench_parsing, bench_round_trip);
criterion_main!(benches);
