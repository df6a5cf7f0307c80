//! Binary persistence for datasets.
//!
//! Layout: `[i32 length][i32 value] * length`, host-native byte order, no
//! header, magic, version or checksum. Files are therefore not portable
//! across machines with different endianness.
//!
//! The reader does not trust the length prefix: a file holding fewer values
//! than declared, or bytes beyond them, is rejected.

use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{NativeEndian, ReadBytesExt, WriteBytesExt};
use log::debug;
use thiserror::Error;

use crate::model::Dataset;

/// Cap on the up-front allocation made from an untrusted length prefix.
const MAX_PREALLOC: usize = 1 << 16;

/// Which side of the round trip failed to open the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    Read,
    Write,
}

impl fmt::Display for OpenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenMode::Read => f.write_str("read"),
            OpenMode::Write => f.write_str("write"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unable to open binary file to {mode}: {}: {source}", path.display())]
    Open {
        path: PathBuf,
        mode: OpenMode,
        #[source]
        source: io::Error,
    },
    #[error("Binary file is too short to hold a length prefix")]
    MissingHeader,
    #[error("Binary file declares a negative length ({0})")]
    NegativeLength(i32),
    #[error("Binary file declares {expected} values but only {found} could be read")]
    Truncated { expected: usize, found: usize },
    #[error("Binary file has unexpected bytes after its {declared} declared values")]
    TrailingBytes { declared: usize },
    #[error("Dataset of {0} values does not fit a 4-byte length prefix")]
    TooLarge(usize),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Serialize `dataset` into `writer`.
pub fn encode<W: Write>(dataset: &Dataset, mut writer: W) -> CodecResult<()> {
    let length = i32::try_from(dataset.len()).map_err(|_| CodecError::TooLarge(dataset.len()))?;
    writer.write_i32::<NativeEndian>(length)?;
    for &value in dataset.values() {
        writer.write_i32::<NativeEndian>(value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Deserialize a dataset from `reader`, validating the declared length.
pub fn decode<R: Read>(mut reader: R) -> CodecResult<Dataset> {
    let declared = match reader.read_i32::<NativeEndian>() {
        Ok(n) => n,
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Err(CodecError::MissingHeader),
        Err(e) => return Err(e.into()),
    };
    let expected = usize::try_from(declared).map_err(|_| CodecError::NegativeLength(declared))?;

    let mut values = Vec::with_capacity(expected.min(MAX_PREALLOC));
    for found in 0..expected {
        match reader.read_i32::<NativeEndian>() {
            Ok(v) => values.push(v),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                return Err(CodecError::Truncated { expected, found });
            }
            Err(e) => return Err(e.into()),
        }
    }

    let mut probe = [0u8; 1];
    if reader.read(&mut probe)? != 0 {
        return Err(CodecError::TrailingBytes { declared: expected });
    }

    Ok(Dataset::new(values))
}

/// Create (or truncate) `path` and write `dataset` to it.
pub fn write(dataset: &Dataset, path: &Path) -> CodecResult<()> {
    let file = File::create(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        mode: OpenMode::Write,
        source,
    })?;
    encode(dataset, BufWriter::new(file))?;
    debug!("Wrote {} values to {}", dataset.len(), path.display());
    Ok(())
}

/// Read a dataset previously written by [`write`].
pub fn read(path: &Path) -> CodecResult<Dataset> {
    let file = File::open(path).map_err(|source| CodecError::Open {
        path: path.to_path_buf(),
        mode: OpenMode::Read,
        source,
    })?;
    let dataset = decode(BufReader::new(file))?;
    debug!("Read {} values from {}", dataset.len(), path.display());
    Ok(dataset)
}
