//! Length-keyed XOR obfuscation used by PKA containers.

use log::trace;

/// Key byte applied at a given counter value.
///
/// Only the low byte of the counter takes part in the XOR. Negative counters
/// keep their two's-complement low byte.
#[inline]
pub fn key_byte(counter: i64) -> u8 {
    (counter & 0xFF) as u8
}

/// Apply the XOR stream in place.
///
/// The counter starts at `data.len()` and drops by one after every byte, so
/// byte `i` is XORed with the low byte of `len - i`. XOR is its own inverse,
/// so the same call obfuscates plaintext and deobfuscates a container.
pub fn xor_stream_in_place(data: &mut [u8]) {
    trace!("Applying length-keyed XOR stream to {} bytes", data.len());

    let mut counter = data.len() as i64;
    for byte in data.iter_mut() {
        *byte ^= key_byte(counter);
        counter -= 1;
    }
}

/// Copying variant of [`xor_stream_in_place`].
pub fn xor_stream(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    xor_stream_in_place(&mut out);
    out
}
