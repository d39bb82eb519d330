#![no_main]

use std::sync::OnceLock;

use libfuzzer_sys::fuzz_target;

use fibmemo_core::{CalculatorOptions, FibError, MemoizedCalculator};

fn calculator() -> &'static MemoizedCalculator {
    static CALC: OnceLock<MemoizedCalculator> = OnceLock::new();
    CALC.get_or_init(|| {
        MemoizedCalculator::with_options(&CalculatorOptions::with_eager_limit(1_000)).unwrap()
    })
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        let _ = calculator().fibonacci(None);
        return;
    }
    let raw = i64::from_le_bytes(data[..8].try_into().unwrap());

    // Keep positive indices small enough to extend quickly.
    let n = if raw > 0 { raw % 5_000 + 1 } else { raw };

    match calculator().fibonacci(Some(n)) {
        Ok(value) => {
            assert!(n > 0);
            let f1 = calculator().fibonacci_at(n as u64 + 1);
            let f2 = calculator().fibonacci_at(n as u64 + 2);
            assert_eq!(value.as_ref() + f1.as_ref(), f2.into_owned());
        }
        Err(FibError::InvalidArgument(msg)) => {
            assert!(n <= 0);
            assert_eq!(msg, format!("Argument must be positive, but is: {n}"));
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
});
