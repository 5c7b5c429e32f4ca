//! Transport (base64) decoding of the audio payload returned by the speech service.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// The payload was not valid standard, padded base64.
#[derive(Debug, Error)]
#[error("Malformed audio payload: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Decode a transport-encoded payload into the exact bytes it represents.
///
/// Every 4 characters yield 3 bytes; the final group may be padded with `=`.
/// Characters outside the standard alphabet, a length that does not fit the
/// block structure, or misplaced padding are rejected.
pub fn decode(transport_text: &str) -> Result<Vec<u8>, DecodeError> {
    Ok(STANDARD.decode(transport_text)?)
}

/// Encode bytes with the same alphabet [`decode`] accepts.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_blocks() {
        assert_eq!(decode("AAB/").unwrap(), vec![0x00, 0x00, 0x7f]);
    }

    #[test]
    fn decodes_padded_tail() {
        assert_eq!(decode("/38=").unwrap(), vec![0xff, 0x7f]);
        assert_eq!(decode("AA==").unwrap(), vec![0x00]);
    }

    #[test]
    fn empty_text_is_empty_bytes() {
        assert!(decode("").unwrap().is_empty());
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        assert!(decode("AA*A").is_err());
        assert!(decode("AA-_").is_err());
    }

    #[test]
    fn rejects_truncated_blocks() {
        assert!(decode("AAA").is_err());
        assert!(decode("A").is_err());
    }

    #[test]
    fn round_trips_through_encode() {
        for text in ["", "AA==", "AAB/", "SGVsbG8sIHJlYWRlciE=", "AACAAP9/"] {
            let bytes = decode(text).unwrap();
            assert_eq!(encode(&bytes), text);
        }
    }

    #[test]
    fn round_trips_every_byte_value() {
        let bytes: Vec<u8> = (0..=255).collect();
        for len in 0..bytes.len() {
            let text = encode(&bytes[..len]);
            assert_eq!(decode(&text).unwrap(), &bytes[..len]);
        }
    }

    #[test]
    fn error_message_mentions_payload() {
        let err = decode("@@@@").unwrap_err();
        assert!(err.to_string().contains("Malformed audio payload"));
    }
}
