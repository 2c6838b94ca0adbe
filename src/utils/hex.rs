/// nibble_to_hex maps value in range 0..=15 to it's uppercase ascii hex digit.
#[inline]
pub(crate) fn nibble_to_hex(nibble: u8) -> u8 {
    debug_assert!(nibble <= 0xF);
    if nibble > 9 {
        b'A' + nibble - 10
    } else {
        b'0' + nibble
    }
}

/// hex_to_nibble is inverse of `nibble_to_hex`.
/// Unlike encoding it accepts lowercase digits as well.
#[inline]
pub(crate) fn hex_to_nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        _ => None,
    }
}

/// encode_hex_char returns two ascii chars, high nibble first.
#[inline]
pub(crate) fn encode_hex_char(b: u8) -> [u8; 2] {
    [
        nibble_to_hex((b >> 4) & 0xF),
        nibble_to_hex(b & 0xF),
    ]
}
