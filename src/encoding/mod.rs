use std::fmt::Debug;

pub mod hex;

pub trait Encoder {
    fn encode(input: &[u8]) -> String {
        let mut s = String::new();
        Self::encode_to_string(input, &mut s);
        s
    }

    /// encode_to_string appends encoded input to `res` and returns count of bytes appended.
    fn encode_to_string(input: &[u8], res: &mut String) -> usize;
}

pub trait Decoder {
    type Error: Debug;

    fn decode(input: &[u8]) -> Result<Vec<u8>, Self::Error> {
        let mut v = Vec::new();
        Self::decode_to_vec(input, &mut v)?;
        Ok(v)
    }

    // decoded values are arbitrary bytes so they go to vec rather than string
    fn decode_to_vec(input: &[u8], res: &mut Vec<u8>) -> Result<usize, Self::Error>;
}
