#![no_main]

use libfuzzer_sys::fuzz_target;
use threemf_codec::{ImportConfig, IndexPolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(document) = threemf_codec::parser::parse_model_xml(xml) {
        let config = ImportConfig::new().with_index_policy(IndexPolicy::SkipInvalid);
        if let Ok(objects) = threemf_codec::decoder::materialize(document, &config) {
            for object in objects {
                let count = object.mesh.vertices.len();
                assert!(object.mesh.triangles.iter().all(|t| t.indices().iter().all(|&i| i < count)));
            }
        }
    }
});
