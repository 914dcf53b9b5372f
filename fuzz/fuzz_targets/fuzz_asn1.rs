#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = certkit_asn1::Reader::new(data);
    while !reader.is_empty() {
        if reader.read_tlv().is_err() {
            break;
        }
    }
});
