#![no_main]

use libfuzzer_sys::fuzz_target;

use fibpair_core::{CalculatorFactory, DefaultFactory, FibIndex};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 10000 so the linear oracle stays fast
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 10_000;
    let n = FibIndex::new(n);

    let factory = DefaultFactory::new();
    let expected = factory.get("linear").unwrap().calculate(n);
    for name in ["fast", "iterative", "memo"] {
        let value = factory.get(name).unwrap().calculate(n);
        assert_eq!(value, expected, "{name} != linear at n={n}");
    }
});
