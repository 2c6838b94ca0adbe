use std::io::{self, Cursor, Write};

use crate::encoding::hex::{hex_decode, hex_string, HexReader, HexWriter};
use crate::region::{region_code_from_locale, Region};

fn drain_reader(r: &mut impl io::Read) {
    loop {
        let mut buf = [0u8; 32];
        if let Ok(sz) = r.read(&mut buf) {
            if sz == 0 {
                break;
            }
        } else {
            break;
        }
    }
}

pub fn fuzz_hex_decoder(data: &[u8]) {
    if let Ok(decoded) = hex_decode(data) {
        // decoder accepts lowercase so only case insensitive match is guaranteed
        assert!(hex_string(&decoded).as_bytes().eq_ignore_ascii_case(data));
    }
}

pub fn fuzz_hex_reader(data: &[u8]) {
    let mut reader = Cursor::new(data);
    {
        let mut d = HexReader::new(&mut reader);
        drain_reader(&mut d);
    }
}

pub fn fuzz_hex_writer(data: &[u8]) {
    let mut w = HexWriter::new(Vec::new());
    if w.write_all(data).is_ok() {
        assert_eq!(w.into_inner(), hex_string(data).into_bytes());
    }
}

pub fn fuzz_parse_locale(data: &[u8]) {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Some(code) = region_code_from_locale(text) {
            let _ = Region::from_region_code(&code);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_fuzz_targets_survive_samples() {
        for d in [
            &b""[..],
            &b"0"[..],
            &b"00ff"[..],
            &b"zz"[..],
            &b"en_US.UTF-8"[..],
            &[0xFF, 0xFE, b'-', b'_'][..],
        ].iter() {
            fuzz_hex_decoder(d);
            fuzz_hex_reader(d);
            fuzz_hex_writer(d);
            fuzz_parse_locale(d);
        }
    }
}
