use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lzo::Lzo;
use std::thread;
use std::time::Duration;

/// Buffers with a shared vocabulary but distinct content
fn make_buffers(count: usize, size: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| {
            let line = format!("record {i:06}: status=ok retries=0 payload=");
            line.bytes().cycle().take(size).collect()
        })
        .collect()
}

/// Split the buffers into one contiguous share per thread and run `job` on
/// every buffer, sharing a single codec handle
fn fan_out<F>(lzo: Lzo, buffers: &[Vec<u8>], threads: usize, job: F) -> usize
where
    F: Fn(&Lzo, &[u8]) -> usize + Sync,
{
    let share = buffers.len().div_ceil(threads);
    thread::scope(|scope| {
        let workers: Vec<_> = buffers
            .chunks(share)
            .map(|part| {
                let job = &job;
                let lzo = &lzo;
                scope.spawn(move || part.iter().map(|buf| job(lzo, buf)).sum::<usize>())
            })
            .collect();

        workers
            .into_iter()
            .map(|worker| worker.join().expect("worker panicked"))
            .sum()
    })
}

fn parallel_compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_compression");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(20);

    for (count, size) in [(8, 1 << 20), (128, 64 << 10), (2048, 4 << 10)] {
        let buffers = make_buffers(count, size);
        group.throughput(Throughput::Bytes((count * size) as u64));

        for threads in [1, 2, 4, 8] {
            let id = BenchmarkId::new(format!("{count}x{}KB", size >> 10), threads);
            group.bench_with_input(id, &buffers, |b, buffers| {
                b.iter(|| fan_out(Lzo::new(), buffers, threads, |lzo, buf| lzo.compress(buf).len()));
            });
        }
    }

    group.finish();
}

fn parallel_decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_decompression");
    group.measurement_time(Duration::from_secs(15));
    group.sample_size(20);

    for (count, size) in [(8, 1 << 20), (128, 64 << 10)] {
        let streams: Vec<Vec<u8>> = make_buffers(count, size).iter().map(lzo::compress).collect();
        group.throughput(Throughput::Bytes((count * size) as u64));

        for threads in [1, 2, 4, 8] {
            let id = BenchmarkId::new(format!("{count}x{}KB", size >> 10), threads);
            group.bench_with_input(id, &streams, |b, streams| {
                b.iter(|| {
                    let total = fan_out(Lzo::new(), streams, threads, |lzo, buf| {
                        lzo.decompress(buf).map_or(0, |out| out.len())
                    });
                    assert_eq!(total, count * size);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, parallel_compression, parallel_decompression);
criterion_main!(benches);
