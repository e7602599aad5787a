// src/bitwriter.rs
//! MSB-first bit sink. Tree and payload share one writer so the payload
//! starts on whatever bit the tree ended on.

use std::io::{self, Write};

use bitstream_io::{BigEndian, BitWrite, BitWriter};
use bitvec::prelude::*;

pub struct BitSink<W: Write> {
    writer: BitWriter<W, BigEndian>,
    bits:   u64,
}

impl<W: Write> BitSink<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: BitWriter::endian(sink, BigEndian),
            bits:   0,
        }
    }

    pub fn write_bit(&mut self, bit: bool) -> io::Result<()> {
        self.writer.write_bit(bit)?;
        self.bits += 1;
        Ok(())
    }

    /// Same bits as eight `write_bit` calls, high bit first.
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.writer.write(8, byte)?;
        self.bits += 8;
        Ok(())
    }

    pub fn write_code(&mut self, code: &BitSlice<u8, Msb0>) -> io::Result<()> {
        for bit in code.iter().by_vals() {
            self.writer.write_bit(bit)?;
        }
        self.bits += code.len() as u64;
        Ok(())
    }

    /// Logical bits written so far, padding excluded.
    pub fn bits_written(&self) -> u64 {
        self.bits
    }

    /// Zero-pads the trailing partial byte, flushes, and hands the sink back.
    pub fn flush(mut self) -> io::Result<W> {
        self.writer.byte_align()?;
        let mut sink = self.writer.into_writer();
        sink.flush()?;
        Ok(sink)
    }
}
