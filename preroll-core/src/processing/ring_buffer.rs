use crate::models::error::CaptureError;

/// Fixed-capacity circular byte window holding the pre-roll.
///
/// Not synchronized on its own. `CaptureState` owns it behind its lock.
///
/// Overflow behavior: when an append would exceed capacity, a block the size
/// of the incoming chunk is dropped from the front (or everything, if fewer
/// bytes are held). With a constant chunk size this is a sliding window of
/// whole chunks.
#[derive(Debug)]
pub struct RingBuffer {
    buffer: Vec<u8>,
    read_index: usize,
    write_index: usize,
    available: usize,
    capacity: usize,
    evicted: u64,
}

impl RingBuffer {
    /// # Panics
    ///
    /// Panics if `capacity` is zero. `CaptureConfiguration::validate`
    /// rejects that before a ring is built.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "ring capacity must be positive");
        Self {
            buffer: vec![0; capacity],
            read_index: 0,
            write_index: 0,
            available: 0,
            capacity,
            evicted: 0,
        }
    }

    /// Append a chunk, evicting from the front if it would not fit.
    ///
    /// Chunks larger than the capacity are rejected whole.
    pub fn append(&mut self, chunk: &[u8]) -> Result<usize, CaptureError> {
        if chunk.is_empty() {
            return Ok(0);
        }
        if chunk.len() > self.capacity {
            return Err(CaptureError::OversizedChunk {
                len: chunk.len(),
                capacity: self.capacity,
            });
        }

        if self.available + chunk.len() > self.capacity {
            let dropped = chunk.len().min(self.available);
            self.read_index = (self.read_index + dropped) % self.capacity;
            self.available -= dropped;
            self.evicted += dropped as u64;
            log::trace!("ring evicted {} bytes", dropped);
        }

        // Copy in at most two runs around the wrap point.
        let first = chunk.len().min(self.capacity - self.write_index);
        self.buffer[self.write_index..self.write_index + first].copy_from_slice(&chunk[..first]);
        self.buffer[..chunk.len() - first].copy_from_slice(&chunk[first..]);
        self.write_index = (self.write_index + chunk.len()) % self.capacity;
        self.available += chunk.len();

        Ok(chunk.len())
    }

    /// Take everything held, oldest first, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.available);
        let first = self.available.min(self.capacity - self.read_index);
        out.extend_from_slice(&self.buffer[self.read_index..self.read_index + first]);
        out.extend_from_slice(&self.buffer[..self.available - first]);

        self.read_index = 0;
        self.write_index = 0;
        self.available = 0;
        out
    }

    /// Number of bytes currently held.
    pub fn len(&self) -> usize {
        self.available
    }

    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total bytes dropped by eviction since construction.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_then_drain() {
        let mut ring = RingBuffer::new(10);
        assert_eq!(ring.append(b"abc").unwrap(), 3);

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.drain(), b"abc".to_vec());
        assert!(ring.is_empty());
    }

    #[test]
    fn eviction_drops_chunk_sized_block() {
        let mut ring = RingBuffer::new(10);
        ring.append(b"AAAAA").unwrap();
        ring.append(b"BBBBBBB").unwrap(); // 12 > 10, all five A's go

        assert_eq!(ring.drain(), b"BBBBBBB".to_vec());
    }

    #[test]
    fn eviction_is_not_minimal() {
        let mut ring = RingBuffer::new(10);
        ring.append(b"0123456789").unwrap();
        ring.append(b"ab").unwrap();
        ring.append(b"cdef").unwrap(); // 10 + 4 > 10, drops "2345"

        assert_eq!(ring.len(), 10);
        assert_eq!(ring.drain(), b"6789abcdef".to_vec());

        let mut ring = RingBuffer::new(10);
        ring.append(b"012345").unwrap();
        ring.append(b"abcde").unwrap(); // 11 > 10, drops five, keeps "5"

        assert_eq!(ring.drain(), b"5abcde".to_vec());
    }

    #[test]
    fn constant_chunks_form_sliding_window() {
        let mut ring = RingBuffer::new(8);
        for chunk in [b"aa", b"bb", b"cc", b"dd", b"ee", b"ff", b"gg"] {
            ring.append(chunk).unwrap();
            assert!(ring.len() <= ring.capacity());
        }

        assert_eq!(ring.drain(), b"ddeeffgg".to_vec());
    }

    #[test]
    fn wraparound_preserves_order() {
        let mut ring = RingBuffer::new(6);
        ring.append(b"abc").unwrap();
        ring.append(b"def").unwrap();
        ring.append(b"ghi").unwrap(); // read_index moves past the wrap
        ring.append(b"jk").unwrap();

        assert_eq!(ring.len(), 6);
        assert_eq!(ring.drain(), b"fghijk".to_vec());
    }

    #[test]
    fn oversized_chunk_rejected_whole() {
        let mut ring = RingBuffer::new(4);
        ring.append(b"xy").unwrap();

        let err = ring.append(b"12345").unwrap_err();
        assert!(matches!(
            err,
            CaptureError::OversizedChunk { len: 5, capacity: 4 }
        ));
        assert_eq!(ring.drain(), b"xy".to_vec());
    }

    #[test]
    fn chunk_equal_to_capacity_replaces_contents() {
        let mut ring = RingBuffer::new(4);
        ring.append(b"ab").unwrap();
        ring.append(b"wxyz").unwrap();

        assert_eq!(ring.drain(), b"wxyz".to_vec());
        assert_eq!(ring.evicted(), 2);
    }

    #[test]
    fn empty_operations() {
        let mut ring = RingBuffer::new(4);
        assert_eq!(ring.append(&[]).unwrap(), 0);
        assert!(ring.is_empty());

        assert!(ring.drain().is_empty());
        ring.append(b"q").unwrap();
        assert_eq!(ring.drain(), b"q".to_vec());
        assert!(ring.drain().is_empty());
    }

    #[test]
    fn drain_keeps_capacity() {
        let mut ring = RingBuffer::new(3);
        ring.append(b"abc").unwrap();
        ring.drain();

        assert_eq!(ring.capacity(), 3);
        ring.append(b"de").unwrap();
        ring.append(b"f").unwrap();
        assert_eq!(ring.drain(), b"def".to_vec());
    }
}
