#![no_main]
use libfuzzer_sys::fuzz_target;

use rescanf_core::stdio::{ConvSpec, Directive, MAX_DIRECTIVES, compile, sscanf};

// Splits the fuzz input at the first NUL into (format, source). The format
// compiler must never panic on arbitrary bytes; the engine must never panic
// when the format binds no destination slots.
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let format = &data[..split];
    let source = &data[(split + 1).min(data.len())..];

    let directives = compile(format);
    if directives.len() > MAX_DIRECTIVES {
        return;
    }

    let binds_slot = directives.iter().any(|d| {
        matches!(
            d,
            Directive::Convert(ConvSpec { arg: Some(_), .. })
        )
    });
    if !binds_slot {
        let _ = sscanf(source, format, &mut []);
    }
});
