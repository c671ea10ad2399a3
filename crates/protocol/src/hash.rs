//! MD5 / SHA-1 digest helpers.
//!
//! The gateway signs with MD5; SHA-1 is kept alongside because some
//! companion endpoints in the same platform family use it for content
//! checksums. Hex output is lowercase — the signature layer uppercases
//! where the wire contract demands it.

use {
    base64::{Engine as _, engine::general_purpose::STANDARD as BASE64},
    md5::{Digest, Md5},
    sha1::Sha1,
};

/// Output encoding for digest helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashEncoding {
    /// Lowercase hexadecimal.
    #[default]
    Hex,
    /// Standard base64 with padding.
    Base64,
}

/// MD5 digest of `data`, rendered per `encoding`.
#[must_use]
pub fn md5(data: impl AsRef<[u8]>, encoding: HashEncoding) -> String {
    render(&Md5::digest(data.as_ref()), encoding)
}

/// SHA-1 digest of `data`, rendered per `encoding`.
#[must_use]
pub fn sha1(data: impl AsRef<[u8]>, encoding: HashEncoding) -> String {
    render(&Sha1::digest(data.as_ref()), encoding)
}

fn render(bytes: &[u8], encoding: HashEncoding) -> String {
    match encoding {
        HashEncoding::Hex => bytes.iter().map(|b| format!("{b:02x}")).collect(),
        HashEncoding::Base64 => BASE64.encode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn md5_hex_known_vector() {
        assert_eq!(
            md5("abc", HashEncoding::Hex),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }

    #[test]
    fn md5_base64_known_vector() {
        assert_eq!(md5("abc", HashEncoding::Base64), "kAFQmDzST7DWlj99KOF/cg==");
    }

    #[test]
    fn md5_empty_input() {
        assert_eq!(
            md5("", HashEncoding::Hex),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }

    #[test]
    fn sha1_hex_known_vector() {
        assert_eq!(
            sha1("abc", HashEncoding::Hex),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
    }

    #[test]
    fn sha1_base64_known_vector() {
        assert_eq!(
            sha1("abc", HashEncoding::Base64),
            "qZk+NkcGgWq6PiVxeFDCbJzQ2J0="
        );
    }

    #[test]
    fn default_encoding_is_hex() {
        assert_eq!(HashEncoding::default(), HashEncoding::Hex);
    }

    #[test]
    fn byte_slices_accepted() {
        assert_eq!(
            md5([0x61_u8, 0x62, 0x63], HashEncoding::Hex),
            md5("abc", HashEncoding::Hex)
        );
    }
}
