//! Payload encoder.
//! Writes each input byte's code in order. Padding is left to the caller's
//! final `flush`, after which nothing else is written.

use std::io::Write;

use crate::bitwriter::BitSink;
use crate::codes::CodeTable;
use crate::error::{HuffError, Result};

pub fn encode_payload<W: Write>(input: &[u8], table: &CodeTable, w: &mut BitSink<W>) -> Result<()> {
    for &byte in input {
        let code = table.get(byte).ok_or(HuffError::MissingCode { symbol: byte })?;
        w.write_code(code)?;
    }
    Ok(())
}
