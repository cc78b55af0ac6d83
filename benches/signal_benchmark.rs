/*!
 * Signal Controller Benchmarks
 *
 * Deliver/poll throughput and suspend wake latency
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use signal_delivery::signals::*;
use signal_delivery::ThreadId;
use std::sync::Arc;
use std::thread;

fn bench_deliver_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("deliver_next");

    for threads in [1u32, 64, 1024] {
        let controller = SignalController::default();
        for i in 0..threads {
            controller.initialize(ThreadId::from(i));
        }
        let target = ThreadId::from(threads / 2);

        group.bench_with_input(BenchmarkId::from_parameter(threads), &target, |b, target| {
            b.iter(|| {
                controller.deliver(*target, Signal::SIGUSR1);
                black_box(controller.next(*target, SignalSet::EMPTY));
            });
        });
    }

    group.finish();
}

fn bench_next_empty(c: &mut Criterion) {
    let controller = SignalController::default();
    let target = ThreadId::from(1u32);

    c.bench_function("next_empty", |b| {
        b.iter(|| black_box(controller.next(target, SignalSet::EMPTY)));
    });
}

fn bench_suspend_wake(c: &mut Criterion) {
    c.bench_function("suspend_wake", |b| {
        b.iter(|| {
            let controller = Arc::new(SignalController::default());
            let target = ThreadId::from(1u32);
            let waiter = {
                let controller = controller.clone();
                thread::spawn(move || controller.suspend(target, SignalSet::EMPTY))
            };

            controller.deliver(target, Signal::SIGALRM);
            black_box(waiter.join().unwrap());
        });
    });
}

criterion_group!(benches, bench_deliver_next, bench_next_empty, bench_suspend_wake);
criterion_main!(benches);
