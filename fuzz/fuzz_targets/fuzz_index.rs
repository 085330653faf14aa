#![no_main]

use libfuzzer_sys::fuzz_target;

use fibpair_core::FibIndex;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and must agree with a plain u64 parse of
    // the trimmed text (minus an optional leading '+').
    let parsed = text.parse::<FibIndex>();
    let trimmed = text.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let plain = if digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse::<u64>().ok()
    } else {
        None
    };
    assert_eq!(parsed.ok().map(FibIndex::get), plain, "input {text:?}");

    // The JSON path must never panic either.
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
        let _ = FibIndex::try_from(&value);
    }
});
