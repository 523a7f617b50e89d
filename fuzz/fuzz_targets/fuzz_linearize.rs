#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use treegrid::infrastructure::data_source::{parse_records, DataFormat};
use treegrid::{TreeFields, TreeLinearizer};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Arbitrary parent links must end in an order or an error
        if let Ok(records) = parse_records(content, DataFormat::Json, Path::new("fuzz.json")) {
            if let Ok(fields) = TreeFields::new("id", "parent") {
                let _ = TreeLinearizer::new(fields).linearize(&records);
            }
        }
    }
});
