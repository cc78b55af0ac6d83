/*!
 * Signal Concurrency Tests
 *
 * Blocking wake behavior and lock linearization under parallel callers
 */

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use signal_delivery::signals::*;
use signal_delivery::ThreadId;
use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

fn sig(n: i64) -> Signal {
    Signal::new(n).unwrap()
}

#[test]
fn test_suspend_wakes_only_for_unblocked_signal() {
    let controller = Arc::new(SignalController::default());
    let target = ThreadId::from(1u32);
    controller.initialize(target);

    let (tx, rx) = mpsc::channel();
    let waiter = {
        let controller = controller.clone();
        thread::spawn(move || {
            let signal = controller.suspend(target, SignalSet::all_except(sig(7)));
            tx.send(signal).unwrap();
        })
    };

    // Give thread time to park
    thread::sleep(Duration::from_millis(50));

    controller.deliver(target, sig(2));
    assert!(rx.recv_timeout(Duration::from_millis(150)).is_err());

    controller.deliver(target, sig(7));
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), sig(7));
    waiter.join().unwrap();

    // The blocked signal is still pending
    assert_eq!(controller.pending(target), SignalSet::single(sig(2)));
}

#[test]
fn test_suspend_wakes_on_broadcast() {
    let controller = Arc::new(SignalController::default());
    let target = ThreadId::from(5u32);

    let (tx, rx) = mpsc::channel();
    let waiter = {
        let controller = controller.clone();
        thread::spawn(move || tx.send(controller.suspend(target, SignalSet::EMPTY)).unwrap())
    };

    thread::sleep(Duration::from_millis(50));
    controller.deliver(DeliveryTarget::Broadcast, Signal::SIGHUP);

    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), Signal::SIGHUP);
    waiter.join().unwrap();
    assert_eq!(controller.process_pending(), SignalSet::EMPTY);
}

#[test]
fn test_broadcast_wakes_exactly_one_consumer() {
    let controller = Arc::new(SignalController::default());
    let (tx, rx) = mpsc::channel();

    let waiters: Vec<_> = (0..2u32)
        .map(|i| {
            let controller = controller.clone();
            let tx = tx.clone();
            thread::spawn(move || {
                let thread_id = ThreadId::from(i + 10);
                let signal = controller.suspend(thread_id, SignalSet::EMPTY);
                tx.send((thread_id, signal)).unwrap();
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    controller.deliver(DeliveryTarget::Broadcast, Signal::SIGUSR1);

    let (first_thread, first_signal) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(first_signal, Signal::SIGUSR1);
    // The other waiter was woken too but found nothing and parked again
    assert!(rx.recv_timeout(Duration::from_millis(150)).is_err());

    controller.deliver(DeliveryTarget::Broadcast, Signal::SIGUSR2);
    let (second_thread, second_signal) = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(second_signal, Signal::SIGUSR2);
    assert!(first_thread != second_thread);

    for waiter in waiters {
        waiter.join().unwrap();
    }
}

#[test]
fn test_targeted_delivery_not_stolen_by_other_waiter() {
    let controller = Arc::new(SignalController::default());
    let (a, b) = (ThreadId::from(1u32), ThreadId::from(2u32));
    let (tx, rx) = mpsc::channel();

    let waiters: Vec<_> = [a, b]
        .into_iter()
        .map(|thread_id| {
            let controller = controller.clone();
            let tx = tx.clone();
            thread::spawn(move || {
                let signal = controller.suspend(thread_id, SignalSet::EMPTY);
                tx.send((thread_id, signal)).unwrap();
            })
        })
        .collect();

    thread::sleep(Duration::from_millis(50));
    controller.deliver(b, Signal::SIGINT);
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), (b, Signal::SIGINT));

    controller.deliver(a, Signal::SIGQUIT);
    assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), (a, Signal::SIGQUIT));

    for waiter in waiters {
        waiter.join().unwrap();
    }
}

#[test]
fn test_concurrent_polls_never_double_consume() {
    const POLLERS: u32 = 8;

    let controller = Arc::new(SignalController::default());
    for signal in Signal::all() {
        controller.deliver(DeliveryTarget::Broadcast, signal);
    }

    let barrier = Arc::new(Barrier::new(POLLERS as usize));
    let handles: Vec<_> = (0..POLLERS)
        .map(|i| {
            let controller = controller.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                let mut rng = StdRng::seed_from_u64(u64::from(i));
                let thread_id = ThreadId::from(i);
                let mut taken = Vec::new();
                barrier.wait();
                for _ in 0..64 {
                    let blocked = SignalSet::from_bits(rng.gen::<u32>());
                    if let Some(signal) = controller.next(thread_id, blocked) {
                        taken.push(signal);
                    }
                }
                taken
            })
        })
        .collect();

    let mut all: Vec<Signal> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    // Sweep whatever random masks left behind
    let sweeper = ThreadId::from(100u32);
    while let Some(signal) = controller.next(sweeper, SignalSet::EMPTY) {
        all.push(signal);
    }

    let unique: HashSet<Signal> = all.iter().copied().collect();
    assert_eq!(all.len(), 32);
    assert_eq!(unique.len(), 32);
}

#[test]
fn test_concurrent_deliveries_all_recorded() {
    let controller = Arc::new(SignalController::default());
    let target = ThreadId::from(1u32);

    let handles: Vec<_> = Signal::all()
        .map(|signal| {
            let controller = controller.clone();
            thread::spawn(move || controller.deliver(target, signal))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(controller.pending(target), SignalSet::ALL);
    assert_eq!(controller.stats().signals_delivered_thread, 32);
}
