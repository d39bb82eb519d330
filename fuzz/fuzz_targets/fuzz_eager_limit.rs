#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibmemo_core::{CalculatorOptions, MemoizedCalculator};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use the first two bytes as L and the next two as n, capped for speed.
    let limit = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000;
    let n = u64::from(u16::from_le_bytes([data[2], data[3]])) % 4_000 + 1;

    let Ok(calc) = MemoizedCalculator::with_options(&CalculatorOptions::with_eager_limit(limit))
    else {
        assert!(limit < 3);
        return;
    };

    let mut a = BigUint::from(0u32);
    let mut b = BigUint::from(1u32);
    for _ in 0..n {
        let next = &a + &b;
        a = std::mem::replace(&mut b, next);
    }
    assert_eq!(calc.fibonacci_at(n).as_ref(), &a, "L={limit} n={n}");
});
