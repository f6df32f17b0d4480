use std::io::{ErrorKind, Read};

use crate::models::error::CaptureError;

/// Reads fixed-size samples from a byte stream.
///
/// Every read must fill a whole sample. Running out part way, or before the
/// first byte, is an error.
pub struct SampleReader<R> {
    inner: R,
    buf: Vec<u8>,
}

impl<R: Read> SampleReader<R> {
    pub fn new(inner: R, sample_size: usize) -> Self {
        Self {
            inner,
            buf: vec![0; sample_size],
        }
    }

    /// Block until the next full sample is available.
    pub fn read_sample(&mut self) -> Result<&[u8], CaptureError> {
        let expected = self.buf.len();
        let mut filled = 0;
        while filled < expected {
            match self.inner.read(&mut self.buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(CaptureError::SourceRead(e)),
            }
        }

        match filled {
            0 if expected > 0 => Err(CaptureError::EndOfStream),
            got if got < expected => Err(CaptureError::ShortRead { expected, got }),
            _ => Ok(self.buf.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Hands out at most `step` bytes per read.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        step: usize,
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.step.min(buf.len()).min(self.data.len() - self.pos);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn reads_whole_samples() {
        let mut reader = SampleReader::new(Cursor::new(b"aabbcc".to_vec()), 2);
        assert_eq!(reader.read_sample().unwrap(), b"aa");
        assert_eq!(reader.read_sample().unwrap(), b"bb");
        assert_eq!(reader.read_sample().unwrap(), b"cc");
        assert!(matches!(reader.read_sample(), Err(CaptureError::EndOfStream)));
    }

    #[test]
    fn assembles_samples_across_partial_reads() {
        let source = Trickle {
            data: b"abcdefgh".to_vec(),
            pos: 0,
            step: 3,
        };
        let mut reader = SampleReader::new(source, 4);
        assert_eq!(reader.read_sample().unwrap(), b"abcd");
        assert_eq!(reader.read_sample().unwrap(), b"efgh");
    }

    #[test]
    fn trailing_partial_sample_is_short_read() {
        let mut reader = SampleReader::new(Cursor::new(b"abcde".to_vec()), 4);
        reader.read_sample().unwrap();
        let err = reader.read_sample().unwrap_err();
        assert!(matches!(err, CaptureError::ShortRead { expected: 4, got: 1 }));
    }

    #[test]
    fn io_error_is_source_read() {
        let mut reader = SampleReader::new(Broken, 4);
        assert!(matches!(reader.read_sample(), Err(CaptureError::SourceRead(_))));
    }
}
