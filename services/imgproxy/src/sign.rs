use imgsign_core::hash::{base64_url_encode, salted_hmac_sha256};
use imgsign_core::{Error, Result};

use super::constants::MAX_SIGNATURE_SIZE;

/// Compute the imgproxy signature of `payload`.
///
/// ## Format
///
/// ```text
/// base64url_no_pad(truncate(HMAC-SHA256(key, salt + payload), size))
/// ```
///
/// ## Reference
///
/// - [Signing a URL](https://docs.imgproxy.net/usage/signing_url)
pub fn sign(key: &[u8], salt: &[u8], size: usize, payload: &str) -> Result<String> {
    if size == 0 || size > MAX_SIGNATURE_SIZE {
        return Err(Error::invalid_signature_size(format!(
            "signature size must be between 1 and {MAX_SIGNATURE_SIZE}, got {size}"
        )));
    }

    let digest = salted_hmac_sha256(key, salt, payload.as_bytes())?;
    Ok(base64_url_encode(&digest[..size]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgsign_core::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(1, "6w"; "one byte")]
    #[test_case(15, "6wIzqvuZtfHT1LL3J_z0"; "fifteen bytes")]
    #[test_case(32, "6wIzqvuZtfHT1LL3J_z0MStJSJnqlIWzouiWqW0bzLI"; "full digest")]
    fn test_sign(size: usize, expected: &str) {
        let signature = sign(b"key", b"salt", size, "/bXkvaW1hZ2UuanBn").unwrap();
        assert_eq!(signature, expected);
        assert_eq!(signature.len(), (size * 4).div_ceil(3));
    }

    #[test_case(0; "zero")]
    #[test_case(33; "past digest")]
    fn test_sign_invalid_size(size: usize) {
        let err = sign(b"key", b"salt", size, "/plain/my/image.jpg").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSignatureSize);
    }

    #[test]
    fn test_salt_is_written_before_payload() {
        let salted = sign(b"key", b"salt", 32, "/plain/a.jpg").unwrap();
        let concatenated = sign(b"key", b"", 32, "salt/plain/a.jpg").unwrap();
        let swapped = sign(b"key", b"/plain/a.jpg", 32, "salt").unwrap();

        assert_eq!(salted, concatenated);
        assert_ne!(salted, swapped);
    }
}
