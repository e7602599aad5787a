// src/bitreader.rs
//! MSB-first bit source, mirror of `bitwriter`. Refills one byte at a time;
//! end-of-source is only noticed when a bit past the last byte is requested.

use std::io::{self, Read};

use bitstream_io::{BigEndian, BitRead, BitReader};

pub struct BitSource<R: Read> {
    reader: BitReader<R, BigEndian>,
    bits:   u64,
}

impl<R: Read> BitSource<R> {
    pub fn new(source: R) -> Self {
        Self {
            reader: BitReader::endian(source, BigEndian),
            bits:   0,
        }
    }

    /// Fails with `UnexpectedEof` once the source is exhausted.
    pub fn read_bit(&mut self) -> io::Result<bool> {
        let bit = self.reader.read_bit()?;
        self.bits += 1;
        Ok(bit)
    }

    pub fn read_byte(&mut self) -> io::Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.read_bit()? as u8;
        }
        Ok(byte)
    }

    pub fn bits_read(&self) -> u64 {
        self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwriter::BitSink;
    use std::io::Cursor;

    #[test]
    fn reads_high_bit_first() {
        let data = [0b1010_0000u8];
        let mut r = BitSource::new(Cursor::new(&data[..]));
        assert!(r.read_bit().unwrap());
        assert!(!r.read_bit().unwrap());
        assert!(r.read_bit().unwrap());
        assert_eq!(r.bits_read(), 3);
    }

    #[test]
    fn byte_straddles_boundary() {
        let data = [0b1110_0010u8, 0b1000_0000];
        let mut r = BitSource::new(Cursor::new(&data[..]));
        assert!(r.read_bit().unwrap());
        assert_eq!(r.read_byte().unwrap(), 0xC5);
    }

    #[test]
    fn eof_is_lazy() {
        let data = [0xFFu8];
        let mut r = BitSource::new(Cursor::new(&data[..]));
        for _ in 0..8 {
            assert!(r.read_bit().unwrap());
        }
        let err = r.read_bit().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
        assert_eq!(r.bits_read(), 8);
    }

    #[test]
    fn matches_writer() {
        let mut out = Vec::new();
        let mut w = BitSink::new(&mut out);
        w.write_bit(false).unwrap();
        w.write_byte(0x7E).unwrap();
        w.write_bit(true).unwrap();
        w.flush().unwrap();

        let mut r = BitSource::new(Cursor::new(&out[..]));
        assert!(!r.read_bit().unwrap());
        assert_eq!(r.read_byte().unwrap(), 0x7E);
        assert!(r.read_bit().unwrap());
        // six padding zeros, then nothing
        for _ in 0..6 {
            assert!(!r.read_bit().unwrap());
        }
        assert!(r.read_bit().is_err());
    }
}
