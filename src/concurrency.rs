//! Fan-out/fan-in over a rendezvous channel.
//!
//! One thread per input, one shared zero-capacity channel to collect results.
//! Deliberately minimal: no pooling, no cancellation, no timeouts. A worker
//! that never sends would hang the receive loop, which is acceptable here only
//! because the inputs are hardcoded and terminate quickly.

use crossbeam::channel;
use std::io::{self, Write};
use std::thread;

/// Iterative Fibonacci. `u64` because fib(50) already needs more than 32 bits.
pub fn fib(n: u64) -> u64 {
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

/// Spawn one worker per input, perform exactly `inputs.len()` blocking
/// receives on a single rendezvous channel, then sort ascending and print.
pub fn fan_out_fan_in(out: &mut dyn Write) -> io::Result<()> {
    let inputs = [30u64, 20, 35, 10, 50];

    // capacity 0: every send blocks until the collector is ready to pair
    let (tx, rx) = channel::bounded::<u64>(0);

    for &n in &inputs {
        let tx = tx.clone();
        thread::spawn(move || {
            let _ = tx.send(fib(n));
        });
    }
    drop(tx); // workers hold the only senders now

    let mut results = Vec::with_capacity(inputs.len());
    for _ in 0..inputs.len() {
        results.push(rx.recv().expect("every worker sends exactly once"));
    }

    results.sort_unstable();
    for v in &results {
        writeln!(out, "{}", v)?;
    }
    Ok(())
}
