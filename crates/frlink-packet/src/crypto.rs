//! Payload encryption for the BLE link.
//!
//! Encrypted BLE frames carry an AES-128-CBC ciphertext of the PKCS#7 padded
//! payload. Both ends share a fixed key and an all-zero IV; there is no key
//! exchange or rotation.
//!
//! Padding removal is lenient: a decrypted buffer whose trailing bytes do not
//! form valid PKCS#7 padding is returned unchanged instead of being rejected.

use crate::PacketError;
use aes::cipher::block_padding::NoPadding;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use aes::Aes128;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;

/// AES block size in bytes.
pub const AES_BLOCK_SIZE: usize = 16;

/// Key shared by the host and the peripheral.
pub const DEFAULT_AES_KEY: [u8; 16] = *b"QSDfagQ141GS6JF8";

/// Initialization vector shared by the host and the peripheral.
pub const DEFAULT_AES_IV: [u8; 16] = [0u8; 16];

// ============================================================================
// Padding
// ============================================================================

/// Pad `data` to a multiple of [`AES_BLOCK_SIZE`] with PKCS#7.
///
/// A full block of padding is appended when `data` is already aligned, so the
/// result is never empty.
pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let pad_len = AES_BLOCK_SIZE - (data.len() % AES_BLOCK_SIZE);
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip PKCS#7 padding if it is well formed, otherwise return `data` as is.
pub fn pkcs7_unpad(mut data: Vec<u8>) -> Vec<u8> {
    let Some(&last) = data.last() else {
        return data;
    };
    let pad_len = last as usize;
    if pad_len == 0 || pad_len > data.len() {
        return data;
    }
    let start = data.len() - pad_len;
    if data[start..].iter().all(|&b| b == last) {
        data.truncate(start);
    }
    data
}

// ============================================================================
// AES-128-CBC
// ============================================================================

/// Encrypt `plaintext` with AES-128-CBC after PKCS#7 padding.
///
/// Always returns at least one block; an empty plaintext encrypts a block of
/// sixteen `0x10` bytes.
pub fn aes128_cbc_encrypt(plaintext: &[u8], key: &[u8; 16], iv: &[u8; 16]) -> Vec<u8> {
    let padded = pkcs7_pad(plaintext);
    Aes128CbcEnc::new(key.into(), iv.into()).encrypt_padded_vec_mut::<NoPadding>(&padded)
}

/// Decrypt AES-128-CBC `ciphertext` and remove PKCS#7 padding leniently.
///
/// Fails only when the ciphertext is not a whole number of blocks.
pub fn aes128_cbc_decrypt(
    ciphertext: &[u8],
    key: &[u8; 16],
    iv: &[u8; 16],
) -> Result<Vec<u8>, PacketError> {
    let plain = Aes128CbcDec::new(key.into(), iv.into())
        .decrypt_padded_vec_mut::<NoPadding>(ciphertext)
        .map_err(|_| PacketError::InvalidCiphertextLength {
            len: ciphertext.len(),
            block: AES_BLOCK_SIZE,
        })?;
    Ok(pkcs7_unpad(plain))
}

// ============================================================================
// Encryption Context
// ============================================================================

/// Key material used for BLE payload encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncryptionContext {
    /// AES-128 key.
    pub key: [u8; 16],
    /// CBC initialization vector.
    pub iv: [u8; 16],
}

impl Default for EncryptionContext {
    fn default() -> Self {
        EncryptionContext {
            key: DEFAULT_AES_KEY,
            iv: DEFAULT_AES_IV,
        }
    }
}

impl EncryptionContext {
    /// Create a context with an explicit key and IV.
    pub fn new(key: [u8; 16], iv: [u8; 16]) -> Self {
        EncryptionContext { key, iv }
    }

    /// Encrypt a payload.
    pub fn encrypt(&self, plaintext: &[u8]) -> Vec<u8> {
        aes128_cbc_encrypt(plaintext, &self.key, &self.iv)
    }

    /// Decrypt a payload.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, PacketError> {
        aes128_cbc_decrypt(ciphertext, &self.key, &self.iv)
    }
}

// ============================================================================
// Tests
// ============================================================================
