#![no_main]

use libfuzzer_sys::fuzz_target;

use decodebench::json::Document;
use decodebench::record;

fuzz_target!(|data: &[u8]| {
    let doc = Document::from_json_bytes_lossy(data);
    for element in doc.root().array_value() {
        let _ = record::from_json(element);
        let _ = record::from_json_dictionary(element);
    }
});
