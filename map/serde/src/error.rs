use std::{error::Error, fmt};

/// The error returned when a value cannot be read back from a bit stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerdeErr {
    /// The stream ended before the value was complete.
    UnexpectedEnd,
    /// A string payload was not valid UTF-8.
    InvalidUtf8,
    /// A `char` payload was not a valid Unicode scalar value.
    InvalidChar,
    /// The bits were read but describe a value the target type rejects.
    InvalidValue(&'static str),
}

impl fmt::Display for SerdeErr {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            SerdeErr::UnexpectedEnd => write!(f, "Deserialize error: unexpected end of stream"),
            SerdeErr::InvalidUtf8 => write!(f, "Deserialize error: invalid utf-8 in string"),
            SerdeErr::InvalidChar => write!(f, "Deserialize error: invalid char"),
            SerdeErr::InvalidValue(msg) => write!(f, "Deserialize error: {}", msg),
        }
    }
}

impl Error for SerdeErr {}
