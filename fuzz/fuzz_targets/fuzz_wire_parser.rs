#![no_main]

use libfuzzer_sys::fuzz_target;
use rmf_site_editor::{parse_building, write_building, MapFormat};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    for format in [MapFormat::Yaml, MapFormat::Json] {
        // Jedes erfolgreich dekodierte Building muss sich wieder schreiben lassen
        if let Ok(building) = parse_building(text, format) {
            let written = write_building(&building, format).expect("re-export failed");
            let reparsed = parse_building(&written, format).expect("re-import failed");
            assert_eq!(reparsed, building);
        }
    }
});
