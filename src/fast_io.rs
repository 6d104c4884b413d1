use std::fmt;
use std::io::{BufReader, BufWriter, Read, Stdout};
use std::str::{self, FromStr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnexpectedEof,
    Malformed { token: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnexpectedEof => write!(f, "no available tokens left"),
            Error::Malformed { token } => write!(f, "malformed token {:?}", token),
        }
    }
}

impl std::error::Error for Error {}

pub trait InputStream {
    /// Next whitespace-delimited token, or `None` once the input is exhausted.
    fn token(&mut self) -> Option<&[u8]>;

    fn value<T: FromStr>(&mut self) -> Result<T, Error> {
        let token = self.token().ok_or(Error::UnexpectedEof)?;
        str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<T>().ok())
            .ok_or_else(|| Error::Malformed {
                token: String::from_utf8_lossy(token).into_owned(),
            })
    }
}

// cheap whitespace check, treats every control byte as a separator
#[inline]
fn is_whitespace(c: u8) -> bool {
    c <= b' '
}

impl InputStream for &[u8] {
    fn token(&mut self) -> Option<&[u8]> {
        let idx = self.iter().position(|&c| !is_whitespace(c))?;
        *self = &self[idx..];
        let idx = self
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.len());
        let (token, rest) = self.split_at(idx);
        *self = rest;
        Some(token)
    }
}

/// Whole input read up front; tokens are slices into the owned buffer.
pub struct InputAtOnce {
    buf: Box<[u8]>,
    cursor: usize,
}

impl InputAtOnce {
    pub fn new(buf: Box<[u8]>) -> Self {
        Self { buf, cursor: 0 }
    }

    fn take(&mut self, n: usize) -> &[u8] {
        let n = n.min(self.buf.len() - self.cursor);
        let slice = &self.buf[self.cursor..self.cursor + n];
        self.cursor += n;
        slice
    }
}

impl InputStream for InputAtOnce {
    fn token(&mut self) -> Option<&[u8]> {
        let skip = self.buf[self.cursor..]
            .iter()
            .position(|&c| !is_whitespace(c))?;
        self.cursor += skip;
        let len = self.buf[self.cursor..]
            .iter()
            .position(|&c| is_whitespace(c))
            .unwrap_or(self.buf.len() - self.cursor);
        Some(self.take(len))
    }
}

pub fn stdin_at_once() -> std::io::Result<InputAtOnce> {
    let mut reader = BufReader::new(std::io::stdin().lock());
    let mut buf: Vec<u8> = vec![];
    reader.read_to_end(&mut buf)?;
    Ok(InputAtOnce::new(buf.into_boxed_slice()))
}

pub fn stdout_buf() -> BufWriter<Stdout> {
    BufWriter::new(std::io::stdout())
}
