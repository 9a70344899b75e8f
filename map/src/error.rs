use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The key is already present; the map was left untouched.
    DuplicateKey,
    KeyNotFound,
    /// The map changed after the cursor was created.
    ConcurrentModification,
    /// A destination buffer has no room for the copy.
    OutOfRange {
        offset: usize,
        required: usize,
        available: usize,
    },
    InvalidArgument(&'static str),
    /// A mutating call was made through a read-only view.
    Unsupported(&'static str),
    /// A dynamically typed key or value was not of the map's declared type.
    TypeMismatch { expected: &'static str },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            MapError::DuplicateKey => {
                write!(f, "Indexed Map Error: an element with the same key already exists")
            }
            MapError::KeyNotFound => write!(f, "Indexed Map Error: key not found"),
            MapError::ConcurrentModification => write!(
                f,
                "Indexed Map Error: collection was modified; iteration may not continue"
            ),
            MapError::OutOfRange {
                offset,
                required,
                available,
            } => write!(
                f,
                "Indexed Map Error: destination has room for {} element(s) past offset {}, {} required",
                available, offset, required
            ),
            MapError::InvalidArgument(msg) => write!(f, "Indexed Map Error: {}", msg),
            MapError::Unsupported(msg) => write!(f, "Indexed Map Error: {}", msg),
            MapError::TypeMismatch { expected } => {
                write!(f, "Indexed Map Error: expected a value of type {}", expected)
            }
        }
    }
}

impl Error for MapError {}

/// Checks that `buffer_len` has room for `required` elements starting at `offset`.
pub(crate) fn check_room(buffer_len: usize, offset: usize, required: usize) -> Result<(), MapError> {
    let available = buffer_len.saturating_sub(offset);
    if offset > buffer_len || available < required {
        return Err(MapError::OutOfRange {
            offset,
            required,
            available,
        });
    }
    Ok(())
}
