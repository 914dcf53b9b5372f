#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = certkit_x509::serial_number_hex(data);
    let _ = certkit_x509::authority_key_identifier_hex(data);
});
