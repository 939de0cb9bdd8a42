//! Stress test: flipping any single byte of a sealed payload must fail
//! authentication, never yield a different plaintext.

use sealkit::coder::cipher::NONCE_SIZE;
use sealkit::{Coder, CoderConfig, CoderError, SymmetricCoder};

fn flip_byte(sealed: &str, index: usize, mask: u8) -> String {
    let mut bytes = hex::decode(sealed).expect("coder output is valid hex");
    bytes[index] ^= mask;
    hex::encode(bytes)
}

#[test]
fn stress_every_body_byte_flip_detected() {
    for len in [16, 24, 32] {
        let coder =
            SymmetricCoder::new(CoderConfig::new(vec![len as u8; len], 4)).expect("config is valid");
        let sealed = coder
            .encrypt("attack at dawn, bring snacks")
            .expect("encrypt should succeed");
        let total = sealed.len() / 2;

        for index in NONCE_SIZE..total {
            for mask in [0x01, 0x80, 0xFF] {
                let tampered = flip_byte(&sealed, index, mask);
                assert!(
                    matches!(coder.decrypt(&tampered), Err(CoderError::AuthenticationFailed)),
                    "key {len}: flip of byte {index} with mask {mask:#04x} was not detected"
                );
            }
        }
    }
}

#[test]
fn stress_every_nonce_byte_flip_detected() {
    let coder = SymmetricCoder::new(CoderConfig::new(vec![3u8; 32], 4)).expect("config is valid");
    let sealed = coder.encrypt("nonce bound").expect("encrypt should succeed");

    for index in 0..NONCE_SIZE {
        let tampered = flip_byte(&sealed, index, 0x01);
        assert!(matches!(
            coder.decrypt(&tampered),
            Err(CoderError::AuthenticationFailed)
        ));
    }
}

#[test]
fn stress_truncation_detected() {
    let coder = SymmetricCoder::new(CoderConfig::new(vec![4u8; 16], 4)).expect("config is valid");
    let sealed = coder.encrypt("truncate me").expect("encrypt should succeed");
    let total = sealed.len() / 2;

    for keep in NONCE_SIZE..total {
        let truncated = &sealed[..keep * 2];
        assert!(matches!(
            coder.decrypt(truncated),
            Err(CoderError::AuthenticationFailed)
        ));
    }
    for keep in 0..NONCE_SIZE {
        let truncated = &sealed[..keep * 2];
        assert!(matches!(
            coder.decrypt(truncated),
            Err(CoderError::MalformedInput(_))
        ));
    }
}

#[test]
fn stress_appended_bytes_detected() {
    let coder = SymmetricCoder::new(CoderConfig::new(vec![8u8; 32], 4)).expect("config is valid");
    let sealed = coder.encrypt("no trailing data").expect("encrypt should succeed");
    let extended = format!("{sealed}00");
    assert!(matches!(
        coder.decrypt(&extended),
        Err(CoderError::AuthenticationFailed)
    ));
}
