//! RSA encrypt/decrypt with base64 framing at the text boundary
//!
//! Keys arrive as base64 text. Unknown characters (line breaks, indentation)
//! are ignored before decoding. The decoded bytes may be PEM or DER, in
//! PKCS#8/SPKI or PKCS#1 form.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::rand_core::OsRng;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use crate::enums::RsaPadding;
use crate::error::{CheatSheetError, Result};

const PEM_MARKER: &[u8] = b"-----BEGIN";

fn is_base64_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

/// Decode standard base64, skipping any byte outside the alphabet
pub fn decode_base64_lenient(text: &str) -> Result<Vec<u8>> {
    let cleaned: Vec<u8> = text.bytes().filter(|b| is_base64_char(*b)).collect();
    Ok(STANDARD.decode(cleaned)?)
}

fn parse_public_key(bytes: &[u8]) -> Result<RsaPublicKey> {
    let parsed = if bytes.starts_with(PEM_MARKER) {
        let pem = std::str::from_utf8(bytes).map_err(|_| CheatSheetError::KeyParse("public"))?;
        RsaPublicKey::from_public_key_pem(pem)
            .ok()
            .or_else(|| RsaPublicKey::from_pkcs1_pem(pem).ok())
    } else {
        RsaPublicKey::from_public_key_der(bytes)
            .ok()
            .or_else(|| RsaPublicKey::from_pkcs1_der(bytes).ok())
    };
    parsed.ok_or(CheatSheetError::KeyParse("public"))
}

fn parse_private_key(bytes: &[u8]) -> Result<RsaPrivateKey> {
    let parsed = if bytes.starts_with(PEM_MARKER) {
        let pem = std::str::from_utf8(bytes).map_err(|_| CheatSheetError::KeyParse("private"))?;
        RsaPrivateKey::from_pkcs8_pem(pem)
            .ok()
            .or_else(|| RsaPrivateKey::from_pkcs1_pem(pem).ok())
    } else {
        RsaPrivateKey::from_pkcs8_der(bytes)
            .ok()
            .or_else(|| RsaPrivateKey::from_pkcs1_der(bytes).ok())
    };
    parsed.ok_or(CheatSheetError::KeyParse("private"))
}

/// Encrypt UTF-8 `plain_text` and return the ciphertext as standard base64
pub fn encrypt_rsa(plain_text: &str, public_key: &str, padding: RsaPadding) -> Result<String> {
    let key = parse_public_key(&decode_base64_lenient(public_key)?).inspect_err(|err| {
        debug!(error = %err, "rejecting public key");
    })?;

    let mut rng = OsRng;
    let data = plain_text.as_bytes();
    let cipher = match padding {
        RsaPadding::Pkcs1v15 => key.encrypt(&mut rng, Pkcs1v15Encrypt, data)?,
        RsaPadding::OaepSha256 => key.encrypt(&mut rng, Oaep::new::<Sha256>(), data)?,
    };

    Ok(STANDARD.encode(cipher))
}

/// Decrypt base64 `cipher_text` and return the UTF-8 plaintext
pub fn decrypt_rsa(cipher_text: &str, private_key: &str, padding: RsaPadding) -> Result<String> {
    let cipher = decode_base64_lenient(cipher_text)?;
    let key = parse_private_key(&decode_base64_lenient(private_key)?).inspect_err(|err| {
        debug!(error = %err, "rejecting private key");
    })?;

    let plain = match padding {
        RsaPadding::Pkcs1v15 => key.decrypt(Pkcs1v15Encrypt, &cipher)?,
        RsaPadding::OaepSha256 => key.decrypt(Oaep::new::<Sha256>(), &cipher)?,
    };

    Ok(String::from_utf8(plain)?)
}
