//! Network stream abstractions
//!
//! A minimal blocking view of an HTTP GET: open a URL, learn the status and
//! declared body length, then drain the body chunk by chunk.

/// Errors from the network transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NetError {
    /// Link is down (no WiFi association, no route)
    NotConnected,
    /// Connection could not be established
    Connect,
    /// Read failed mid-stream
    Io,
}

/// Response head returned by [`NetworkSource::open`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Declared `Content-Length`, if the server sent one
    pub content_length: Option<u64>,
}

impl Response {
    /// HTTP 200 OK
    pub const OK: u16 = 200;

    /// Check if the status is a success status (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP body source
///
/// One request at a time. Implementations keep the connection open between
/// [`open`](NetworkSource::open) and [`close`](NetworkSource::close).
pub trait NetworkSource {
    /// Open a GET request to `url` and read the response head
    fn open(&mut self, url: &str) -> Result<Response, NetError>;

    /// Read whatever body bytes are currently available into `buf`
    ///
    /// Returns the number of bytes copied. `Ok(0)` means nothing is buffered
    /// right now; it does not mean end of stream (see
    /// [`is_connected`](NetworkSource::is_connected)).
    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, NetError>;

    /// Check if the peer still holds the connection open
    fn is_connected(&self) -> bool;

    /// Release the connection
    ///
    /// Safe to call more than once.
    fn close(&mut self);
}
