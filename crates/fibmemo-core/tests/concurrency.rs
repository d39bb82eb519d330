//! Concurrent lookups against one shared calculator.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use rayon::prelude::*;

use fibmemo_core::{CalculatorOptions, MemoizedCalculator};

fn reference_table(max: usize) -> Vec<BigUint> {
    let mut table = vec![BigUint::from(0u32), BigUint::from(1u32)];
    for i in 2..=max {
        let next = &table[i - 1] + &table[i - 2];
        table.push(next);
    }
    table
}

/// Deterministic spread of indices over `1..=modulus`.
fn scattered(i: u64, modulus: u64) -> u64 {
    (i.wrapping_mul(2_654_435_761) >> 7) % modulus + 1
}

#[test]
fn ten_thousand_concurrent_lookups() {
    let calc = MemoizedCalculator::new();
    let table = reference_table(1000);

    let start = Instant::now();
    let mismatches: Vec<u64> = (0..10_000u64)
        .into_par_iter()
        .map(|i| scattered(i, 1000))
        .filter(|&n| calc.fibonacci(Some(n as i64)).unwrap().as_ref() != &table[n as usize])
        .collect();

    assert!(mismatches.is_empty(), "wrong values for {mismatches:?}");
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[test]
fn threads_share_one_instance_across_both_paths() {
    let calc = Arc::new(
        MemoizedCalculator::with_options(&CalculatorOptions::with_eager_limit(200)).unwrap(),
    );
    let table = Arc::new(reference_table(600));

    let handles: Vec<_> = (0..32u64)
        .map(|t| {
            let calc = Arc::clone(&calc);
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for i in 0..50u64 {
                    let n = scattered(t * 50 + i, 600);
                    let value = calc.fibonacci_at(n);
                    assert_eq!(value.as_ref(), &table[n as usize], "F({n}) on thread {t}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn scoped_threads_hit_the_boundary() {
    let calc = MemoizedCalculator::with_options(&CalculatorOptions::with_eager_limit(100)).unwrap();
    let table = reference_table(110);

    thread::scope(|s| {
        for n in 95..=110u64 {
            let calc = &calc;
            let table = &table;
            s.spawn(move || {
                assert_eq!(calc.fibonacci_at(n).as_ref(), &table[n as usize]);
            });
        }
    });
}

#[test]
fn shared_instance_initializes_once() {
    let ptrs: Vec<usize> = (0..16)
        .into_par_iter()
        .map(|_| std::ptr::from_ref(fibmemo_core::shared()) as usize)
        .collect();
    assert!(ptrs.windows(2).all(|w| w[0] == w[1]));
}
