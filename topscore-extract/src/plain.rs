use encoding_rs::WINDOWS_1252;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode bytes as UTF-8 (dropping a byte-order mark), falling back to
/// Windows-1252 when the buffer is not valid UTF-8.
pub fn decode_text_best_effort(raw: &[u8]) -> String {
    let body = raw.strip_prefix(UTF8_BOM).unwrap_or(raw);
    match std::str::from_utf8(body) {
        Ok(text) => text.to_string(),
        Err(_) => {
            log::debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(body);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        assert_eq!(decode_text_best_effort("Hé".as_bytes()), "Hé");
    }

    #[test]
    fn test_bom_is_dropped() {
        assert_eq!(decode_text_best_effort(b"\xEF\xBB\xBFklasse"), "klasse");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // 0xE9 is 'é' in Windows-1252 and invalid as a lone UTF-8 byte
        assert_eq!(decode_text_best_effort(b"Caf\xE9"), "Café");
    }
}
