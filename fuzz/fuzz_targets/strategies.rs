#![no_main]

use libfuzzer_sys::fuzz_target;

use decodebench::Strategy;

fuzz_target!(|data: &[u8]| {
    for strategy in Strategy::ALL {
        if let Ok(prepared) = strategy.prepare(data) {
            let _ = prepared.decode();
        }
    }
});
