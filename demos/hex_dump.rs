use std::env;
use std::fs::File;
use std::io::{self, Read, Write};

use emufront::encoding::hex::HexWriter;
use emufront::HexString;

const HEADER: &[u8] = b"\x4E\x45\x53\x1A\x02\x01\x01\x00";

fn main() -> io::Result<()> {
    println!("iNES header as hex: {}", HEADER.hex_string());

    // Dump file given as first argument, 16 bytes per line.
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => return Ok(()),
    };
    let mut f = File::open(&path)?;
    let stdout = io::stdout();
    let mut w = HexWriter::new(stdout.lock());
    let mut buf = [0u8; 16];
    loop {
        let sz = f.read(&mut buf)?;
        if sz == 0 {
            break;
        }
        w.write_all(&buf[..sz])?;
        println!();
    }
    w.flush()
}
