// Imports
use std::io::{Read, Write};

/// The version of the binary stream format.
///
/// Selects the width of integer fields, floating point fields are always written as 64-bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StreamVersion {
    /// Integers are written as 16-bit.
    Legacy,
    /// Integers are written as 32-bit.
    #[default]
    Current,
}

/// Errors from reading or writing the binary stream format.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// The underlying reader or writer failed.
    #[error("stream i/o failed")]
    Io(#[from] std::io::Error),
    /// The value can't be represented with the integer width of the stream version.
    #[error("value {value} does not fit into the integer width of stream version {version:?}")]
    OutOfRange {
        /// The value that was attempted to be written.
        value: i32,
        /// The stream version.
        version: StreamVersion,
    },
}

/// Types that can be written to and read from the binary stream format.
///
/// All fields are big-endian, in the field order of the type.
pub trait StreamSerialize: Sized {
    /// Write to the stream.
    fn write_to<W: Write>(&self, writer: &mut W, version: StreamVersion)
        -> Result<(), StreamError>;
    /// Read from the stream.
    fn read_from<R: Read>(reader: &mut R, version: StreamVersion) -> Result<Self, StreamError>;

    /// Write into a new byte buffer.
    fn to_stream_bytes(&self, version: StreamVersion) -> Result<Vec<u8>, StreamError> {
        let mut bytes = Vec::new();
        self.write_to(&mut bytes, version)?;
        Ok(bytes)
    }
}

pub(crate) fn write_int<W: Write>(
    writer: &mut W,
    value: i32,
    version: StreamVersion,
) -> Result<(), StreamError> {
    match version {
        StreamVersion::Legacy => {
            let value = i16::try_from(value).map_err(|_| {
                tracing::debug!("Integer {value} out of range for legacy stream version");
                StreamError::OutOfRange { value, version }
            })?;
            writer.write_all(&value.to_be_bytes())?;
        }
        StreamVersion::Current => writer.write_all(&value.to_be_bytes())?,
    }
    Ok(())
}

pub(crate) fn read_int<R: Read>(reader: &mut R, version: StreamVersion) -> Result<i32, StreamError> {
    match version {
        StreamVersion::Legacy => {
            let mut buf = [0; 2];
            reader.read_exact(&mut buf)?;
            Ok(i32::from(i16::from_be_bytes(buf)))
        }
        StreamVersion::Current => {
            let mut buf = [0; 4];
            reader.read_exact(&mut buf)?;
            Ok(i32::from_be_bytes(buf))
        }
    }
}

pub(crate) fn write_f64<W: Write>(writer: &mut W, value: f64) -> Result<(), StreamError> {
    writer.write_all(&value.to_be_bytes())?;
    Ok(())
}

pub(crate) fn read_f64<R: Read>(reader: &mut R) -> Result<f64, StreamError> {
    let mut buf = [0; 8];
    reader.read_exact(&mut buf)?;
    Ok(f64::from_be_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_widths() {
        let mut legacy = Vec::new();
        write_int(&mut legacy, -2, StreamVersion::Legacy).unwrap();
        assert_eq!(legacy, vec![0xff, 0xfe]);

        let mut current = Vec::new();
        write_int(&mut current, 70_000, StreamVersion::Current).unwrap();
        assert_eq!(current, vec![0x00, 0x01, 0x11, 0x70]);

        assert_eq!(
            read_int(&mut legacy.as_slice(), StreamVersion::Legacy).unwrap(),
            -2
        );
        assert_eq!(
            read_int(&mut current.as_slice(), StreamVersion::Current).unwrap(),
            70_000
        );
    }

    #[test]
    fn legacy_out_of_range() {
        let mut buf = Vec::new();
        let res = write_int(&mut buf, 70_000, StreamVersion::Legacy);
        assert!(matches!(
            res,
            Err(StreamError::OutOfRange { value: 70_000, .. })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn truncated_input() {
        let bytes = [0x00, 0x01];
        let res = read_int(&mut bytes.as_slice(), StreamVersion::Current);
        assert!(matches!(res, Err(StreamError::Io(_))));
        assert!(read_f64(&mut bytes.as_slice()).is_err());
    }
}
