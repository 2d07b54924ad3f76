use std::cmp;
use std::io::{self, Write};

use hashbrown::HashMap;
use log::{debug, error, trace};

use crate::common;
use crate::err::Error;

/// Bytes shown per row by `Memory::print`.
pub const DUMP_ROW_BYTES: usize = 32;

/// Linear memory backing a single VM execution.
///
/// Besides the byte store, the memory remembers how many bytes were written
/// at each offset, so a later `get(offset)` returns exactly what was stored
/// there without the caller passing the size again.
///
/// The store only grows. Callers must `resize` before any write whose range
/// could exceed the current store; `set` never grows memory on its own.
#[derive(Debug, Default)]
pub struct Memory {
    store: Vec<u8>,
    // Logical length. Advanced by the size of each write, or by 1 for a
    // zero sized write. Not tied to store.len().
    pos: u64,
    // offset => length of the value most recently written at offset.
    sizes: HashMap<u64, usize>,
}

impl Memory {
    pub fn new() -> Self {
        Memory::default()
    }

    /// Grow the store to at least `size` bytes, zero filled. Never shrinks.
    pub fn resize(&mut self, size: u64) {
        if (self.store.len() as u64) < size {
            debug!("mem.resize {} => {}", self.store.len(), size);
            self.store.resize(size as usize, u8::default())
        }
    }

    /// Write `val` at `offset`, panics if `size` exceeds the whole store.
    ///
    /// This is the fatal path for a caller that forgot to `resize` first. Use
    /// `try_set` to get the violation back as an error instead.
    pub fn set(&mut self, offset: u64, size: u64, val: &[u8]) {
        if let Err(e) = self.try_set(offset, size, val) {
            panic!("{}", e)
        }
    }

    /// Write up to `size` bytes of `val` at `offset`.
    ///
    /// Only `size` is checked against the store length, not `offset + size`.
    /// Bytes that would land past the end of the store are dropped. The
    /// recorded length at `offset` is `val.len()`, independent of `size`.
    /// A zero sized write records length 0 and advances the logical length
    /// by one.
    pub fn try_set(&mut self, offset: u64, size: u64, val: &[u8]) -> Result<(), Error> {
        let len = self.store.len();
        if size > len as u64 {
            error!("mem.set size={} exceeds mem size={}", size, len);
            return Err(Error::MemoryEmpty { size, len });
        }
        trace!("mem.set offset={} size={} val.len={}", offset, size, val.len());

        if size > 0 {
            let start = cmp::min(offset, len as u64) as usize;
            let end = cmp::min(offset.saturating_add(size), len as u64) as usize;
            let n = cmp::min(end - start, val.len());
            self.store[start..start + n].copy_from_slice(&val[..n]);
            self.sizes.insert(offset, val.len());
            self.pos += size;
        } else {
            self.sizes.insert(offset, 0);
            self.pos += 1;
        }
        Ok(())
    }

    /// Write `val` at the current logical length and return that offset.
    pub fn set_bytes(&mut self, val: &[u8]) -> u64 {
        let offset = self.pos;
        self.set(offset, val.len() as u64, val);
        offset
    }

    pub fn try_set_bytes(&mut self, val: &[u8]) -> Result<u64, Error> {
        let offset = self.pos;
        self.try_set(offset, val.len() as u64, val)?;
        Ok(offset)
    }

    /// Treat `offset` as a signed 32 bit value. A negative offset counts back
    /// from the end of the store, wrapping like 32 bit arithmetic.
    pub fn normalize_offset(&self, offset: u32) -> u32 {
        if (offset as i32) < 0 {
            (self.store.len() as i32).wrapping_add(offset as i32) as u32
        } else {
            offset
        }
    }

    /// Copy of the value written at `offset`.
    ///
    /// `offset` is truncated to 32 bits and normalized by `normalize_offset`.
    /// Returns `None` if nothing (or nothing but a zero sized write) was
    /// recorded there, or if the recorded range is out of the store.
    pub fn get(&self, offset: u64) -> Option<Vec<u8>> {
        self.get_ptr(offset).map(|e| e.to_vec())
    }

    /// Same lookup as `get`, borrowing the store instead of copying.
    ///
    /// The slice points into the store as it is now. A later `resize` may move
    /// the store, so do not keep offsets into the returned slice around.
    pub fn get_ptr(&self, offset: u64) -> Option<&[u8]> {
        let offset = u64::from(self.normalize_offset(offset as u32));
        let size = match self.sizes.get(&offset) {
            Some(&s) if s > 0 => s,
            _ => return None,
        };
        let start = offset as usize;
        let end = start.checked_add(size)?;
        if end > self.store.len() {
            return None;
        }
        Some(&self.store[start..end])
    }

    /// Length recorded by the latest write at exactly `offset`.
    pub fn written_len(&self, offset: u64) -> Option<usize> {
        self.sizes.get(&offset).cloned()
    }

    /// Logical length.
    pub fn len(&self) -> u64 {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Physical size of the store in bytes.
    pub fn mem_size(&self) -> usize {
        self.store.len()
    }

    pub fn data(&self) -> &[u8] {
        &self.store
    }

    /// Print a hex dump of the store to stdout.
    pub fn print(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.dump_to(&mut handle) {
            debug!("mem.print failed: {}", e);
        }
    }

    pub fn dump_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "### mem {} bytes ###", self.store.len())?;
        if self.store.is_empty() {
            writeln!(w, "-- empty --")?;
        } else {
            for (i, row) in self.store.chunks(DUMP_ROW_BYTES).enumerate() {
                writeln!(w, "{:03}: {}", i, common::hex_spaced(row))?;
            }
        }
        writeln!(w, "####################")
    }
}
