//! Shared building blocks for the frlink wire formats.
//!
//! The SOC/MCU serial link and the BLE link use different integrity checks and
//! only the BLE link encrypts payloads, but both codecs draw from this crate:
//!
//! - [`checksum`]: the two's-complement additive checksum (serial link) and the
//!   XOR check (BLE link).
//! - [`crypto`]: AES-128-CBC with PKCS#7 padding and the shared default key.
//! - [`hex`]: spaced hex dumps and tolerant hex parsing for tooling.

pub mod checksum;
pub mod crypto;
mod error;
pub mod hex;

pub use checksum::{additive_checksum, xor_checksum, ChecksumKind};
pub use crypto::{
    aes128_cbc_decrypt, aes128_cbc_encrypt, pkcs7_pad, pkcs7_unpad, EncryptionContext,
    AES_BLOCK_SIZE, DEFAULT_AES_IV, DEFAULT_AES_KEY,
};
pub use error::PacketError;
