//! Staging storage abstractions
//!
//! Provides a trait for the temporary byte objects the image pipeline
//! writes a download into before decoding. On the reference board this is
//! a file on the SPIFFS partition.

/// Errors from staging storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StagingError {
    /// Storage backend could not be mounted
    Unavailable,
    /// Object does not exist
    NotFound,
    /// Storage is full
    Full,
    /// Read or write failed
    Io,
}

/// Temporary object store
///
/// Objects are addressed by name. Implementations need not support more
/// than one object at a time.
pub trait StagingStore {
    /// Create (or truncate) the object `name`
    fn create(&mut self, name: &str) -> Result<(), StagingError>;

    /// Open an existing object for reading
    ///
    /// # Returns
    /// The object size in bytes.
    fn open(&mut self, name: &str) -> Result<usize, StagingError>;

    /// Append `data` to the object
    ///
    /// # Returns
    /// The number of bytes actually written. A short write means the
    /// store ran out of space.
    fn write(&mut self, name: &str, data: &[u8]) -> Result<usize, StagingError>;

    /// Read from the object starting at `offset` into `buf`
    ///
    /// # Returns
    /// The number of bytes read; `0` at end of object.
    fn read(&mut self, name: &str, offset: usize, buf: &mut [u8]) -> Result<usize, StagingError>;

    /// Delete the object
    ///
    /// Removing an object that does not exist is not an error.
    fn remove(&mut self, name: &str) -> Result<(), StagingError>;

    /// Check if the object exists
    fn exists(&mut self, name: &str) -> bool;
}
