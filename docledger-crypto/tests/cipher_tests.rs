use docledger_crypto::{CryptoError, KeyMaterial, decrypt, encrypt};

#[test]
fn roundtrip_restores_plaintext() {
    let material = KeyMaterial::generate().unwrap();
    let plaintext = b"the quick brown fox jumps over the lazy dog";

    let ciphertext = encrypt(plaintext, material.key(), material.iv()).unwrap();
    let recovered = decrypt(&ciphertext, material.key(), material.iv()).unwrap();

    assert_eq!(recovered, plaintext);
}

#[test]
fn seventeen_byte_input_pads_to_two_blocks() {
    let material = KeyMaterial::generate().unwrap();
    let plaintext = [0xAAu8; 17];

    let ciphertext = encrypt(&plaintext, material.key(), material.iv()).unwrap();
    assert_eq!(ciphertext.len(), 32);

    let recovered = decrypt(&ciphertext, material.key(), material.iv()).unwrap();
    assert_eq!(recovered, plaintext);
}

#[test]
fn wrong_key_byte_fails_decryption() {
    let material = KeyMaterial::generate().unwrap();
    let plaintext = [0xAAu8; 17];
    let ciphertext = encrypt(&plaintext, material.key(), material.iv()).unwrap();

    let mut wrong_key = *material.key();
    wrong_key[0] ^= 0x01;

    let result = decrypt(&ciphertext, &wrong_key, material.iv());
    assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));
}

#[test]
fn empty_plaintext_roundtrips() {
    let material = KeyMaterial::generate().unwrap();
    let ciphertext = encrypt(b"", material.key(), material.iv()).unwrap();
    // One full block of padding.
    assert_eq!(ciphertext.len(), 16);
    let recovered = decrypt(&ciphertext, material.key(), material.iv()).unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn short_key_is_invalid_material_not_decryption_failure() {
    let material = KeyMaterial::generate().unwrap();
    let ciphertext = encrypt(b"data", material.key(), material.iv()).unwrap();

    let result = decrypt(&ciphertext, &[0u8; 16], material.iv());
    assert!(matches!(result, Err(CryptoError::InvalidKeyMaterial(_))));

    let result = encrypt(b"data", &[0u8; 16], material.iv());
    assert!(matches!(result, Err(CryptoError::InvalidKeyMaterial(_))));
}

#[test]
fn short_iv_is_invalid_material() {
    let material = KeyMaterial::generate().unwrap();
    let result = encrypt(b"data", material.key(), &[0u8; 8]);
    assert!(matches!(result, Err(CryptoError::InvalidKeyMaterial(_))));
}

#[test]
fn empty_ciphertext_fails() {
    let material = KeyMaterial::generate().unwrap();
    let result = decrypt(b"", material.key(), material.iv());
    assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));
}

#[test]
fn unaligned_ciphertext_fails() {
    let material = KeyMaterial::generate().unwrap();
    let result = decrypt(&[0u8; 31], material.key(), material.iv());
    assert!(matches!(result, Err(CryptoError::DecryptionFailed(_))));
}

#[test]
fn flipping_any_ciphertext_byte_never_yields_the_plaintext() {
    let material = KeyMaterial::generate().unwrap();
    let plaintext = b"sensitive document content, two blocks long....";
    let ciphertext = encrypt(plaintext, material.key(), material.iv()).unwrap();

    for i in 0..ciphertext.len() {
        let mut tampered = ciphertext.clone();
        tampered[i] ^= 0xFF;
        match decrypt(&tampered, material.key(), material.iv()) {
            Ok(recovered) => assert_ne!(
                recovered,
                plaintext.to_vec(),
                "tampered byte {i} silently round-tripped"
            ),
            Err(CryptoError::DecryptionFailed(_)) => {}
            Err(other) => panic!("unexpected error kind for byte {i}: {other}"),
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn roundtrip_over_arbitrary_bytes(plaintext in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let material = KeyMaterial::generate().unwrap();
            let ciphertext = encrypt(&plaintext, material.key(), material.iv()).unwrap();
            prop_assert_eq!(ciphertext.len(), (plaintext.len() / 16 + 1) * 16);
            let recovered = decrypt(&ciphertext, material.key(), material.iv()).unwrap();
            prop_assert_eq!(recovered, plaintext);
        }
    }
}
