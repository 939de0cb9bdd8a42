//! Concurrency test: one coder shared across threads.
//!
//! Validates that a coder is usable from many threads at once and that
//! results stay consistent.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::thread;

use sealkit::{get_secret, Coder, CoderConfig, SymmetricCoder};

#[test]
fn stress_32_concurrent_encryptors() {
    let coder = Arc::new(
        SymmetricCoder::new(CoderConfig::new(vec![11u8; 32], 4)).expect("config is valid"),
    );
    let sealed = Arc::new(Mutex::new(Vec::new()));

    let mut handles = Vec::new();
    for thread_id in 0..32 {
        let coder = Arc::clone(&coder);
        let sealed = Arc::clone(&sealed);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let text = format!("Thread {thread_id} message {i}");
                let out = coder.encrypt(&text).expect("encrypt should succeed");
                sealed.lock().unwrap().push((text, out));
            }
        });
        handles.push(handle);
    }

    for h in handles {
        h.join().unwrap();
    }

    let sealed = sealed.lock().unwrap();
    assert_eq!(sealed.len(), 3_200);

    let unique: HashSet<_> = sealed.iter().map(|(_, out)| out.clone()).collect();
    assert_eq!(unique.len(), 3_200);

    for (text, out) in sealed.iter() {
        assert_eq!(&coder.decrypt(out).expect("decrypt should succeed"), text);
    }
}

#[test]
fn stress_concurrent_hash_verifiers() {
    let coder: Arc<dyn Coder> = Arc::new(
        SymmetricCoder::new(CoderConfig::new(vec![12u8; 24], 4)).expect("config is valid"),
    );
    let hash = Arc::new(coder.hash("shared password").expect("hash should succeed"));

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let coder = Arc::clone(&coder);
            let hash = Arc::clone(&hash);
            thread::spawn(move || {
                for _ in 0..5 {
                    assert!(coder.verify_hash(&hash, "shared password").is_ok());
                    assert!(coder.verify_hash(&hash, "other password").is_err());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}

#[test]
fn stress_concurrent_secret_generation() {
    let handles: Vec<_> = (0..16)
        .map(|_| {
            thread::spawn(|| {
                (0..100)
                    .map(|_| get_secret(32).expect("secret generation should succeed"))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut all = HashSet::new();
    for h in handles {
        for secret in h.join().unwrap() {
            assert_eq!(secret.len(), 32);
            assert!(all.insert(secret), "duplicate secret generated");
        }
    }
    assert_eq!(all.len(), 1_600);
}
