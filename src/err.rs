use std::error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    // A write was issued with a size larger than the whole store. The caller
    // is expected to resize memory before every write.
    MemoryEmpty { size: u64, len: usize },
    Hex(hex::FromHexError),
    Json(serde_json::Error),
    IO(io::Error),
    Str(String),
}

impl error::Error for Error {}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MemoryEmpty { .. } => write!(f, "invalid memory: memory empty"),
            Error::Hex(e) => write!(f, "{:?}", e),
            Error::Json(e) => write!(f, "{}", e),
            Error::IO(e) => write!(f, "{:?}", e),
            Error::Str(e) => write!(f, "{:?}", e),
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(error: hex::FromHexError) -> Self {
        Error::Hex(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IO(error)
    }
}
