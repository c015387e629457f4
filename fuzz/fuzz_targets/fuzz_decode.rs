#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic.
    if let Ok(image) = bmpascii::BmpImage::from_bytes(data) {
        // Neither may in-range queries on whatever decoded.
        let _ = image.pixel(0, 0);
        let _ = image.pixel(image.width() - 1, image.height() - 1);
    }
});
