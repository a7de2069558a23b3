// SPDX-License-Identifier: AGPL-3.0-or-later

//! Base64 engine shared by cursors and global ids.
//!
//! Encoding is canonical padded standard base64. Decoding accepts what common standard base64
//! decoders accept: line breaks are skipped and non-zero trailing bits in the last symbol are
//! ignored. Padding is still required.
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Encodes a value as padded standard base64.
pub(crate) fn encode(value: &str) -> String {
    ENGINE.encode(value)
}

/// Decodes a base64 value into a string, `None` if it is not base64 or not UTF-8.
pub(crate) fn decode(value: &str) -> Option<String> {
    let value: String = value
        .chars()
        .filter(|c| !matches!(c, '\r' | '\n'))
        .collect();

    ENGINE
        .decode(value)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
}
