//! # Hex Codec
//!
//! Lower-case hexadecimal presentation of derived keys, and decoding of operator-supplied
//! expected hashes. Backed by the `hex` crate.

use crate::error::Pbkdf2Error;

/// Encode bytes as lower-case hex: two digits per byte, no prefix, no separators.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::encode_hex;
///
/// assert_eq!(encode_hex(&[0x0c, 0x60, 0xff]), "0c60ff");
/// ```
#[inline]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// Upper- and lower-case digits are both accepted.
///
/// # Errors
///
/// [`Pbkdf2Error::InvalidEncoding`] on odd length or any non-hex character
/// (including whitespace and a `0x` prefix).
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::decode_hex;
///
/// assert_eq!(decode_hex("0c60FF")?, vec![0x0c, 0x60, 0xff]);
/// assert!(decode_hex("abc").is_err());
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
#[inline]
pub fn decode_hex(input: &str) -> Result<Vec<u8>, Pbkdf2Error> {
    Ok(hex::decode(input)?)
}
