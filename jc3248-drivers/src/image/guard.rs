//! Scoped handles released on every exit path
//!
//! A [`Connection`] closes the network stream when dropped; a
//! [`StagedObject`] deletes its staging object when dropped. The pipeline
//! bails out with `?` freely and never leaks either.

use alloc::vec::Vec;

use jc3248_core::state::FailKind;
use jc3248_hal::{NetError, NetworkSource, Response, StagingError, StagingStore};

/// An open network stream
pub(crate) struct Connection<'a, N: NetworkSource> {
    net: &'a mut N,
}

impl<'a, N: NetworkSource> Connection<'a, N> {
    /// Open `url`; the stream is closed again if this fails
    pub(crate) fn open(net: &'a mut N, url: &str) -> Result<(Self, Response), NetError> {
        let mut conn = Self { net };
        let response = conn.net.open(url)?;
        Ok((conn, response))
    }

    pub(crate) fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, NetError> {
        self.net.read_chunk(buf)
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.net.is_connected()
    }
}

impl<N: NetworkSource> Drop for Connection<'_, N> {
    fn drop(&mut self) {
        self.net.close();
    }
}

/// A freshly created staging object
pub(crate) struct StagedObject<'a, F: StagingStore> {
    store: &'a mut F,
    name: &'a str,
}

impl<'a, F: StagingStore> StagedObject<'a, F> {
    /// Create (or truncate) `name`
    pub(crate) fn create(store: &'a mut F, name: &'a str) -> Result<Self, StagingError> {
        let mut staged = Self { store, name };
        staged.store.create(name)?;
        Ok(staged)
    }

    /// Append all of `data`; a short write means the store is full
    pub(crate) fn write_all(&mut self, data: &[u8]) -> Result<(), StagingError> {
        let written = self.store.write(self.name, data)?;
        if written < data.len() {
            return Err(StagingError::Full);
        }
        Ok(())
    }

    /// Read the whole object into a freshly allocated buffer
    pub(crate) fn read_all(&mut self) -> Result<Vec<u8>, FailKind> {
        let size = self.store.open(self.name).map_err(|_| FailKind::Staging)?;
        if size == 0 {
            return Err(FailKind::Staging);
        }

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| FailKind::OutOfMemory)?;
        bytes.resize(size, 0);

        let mut filled = 0;
        while filled < size {
            let n = self
                .store
                .read(self.name, filled, &mut bytes[filled..])
                .map_err(|_| FailKind::Staging)?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled != size {
            return Err(FailKind::Staging);
        }
        Ok(bytes)
    }
}

impl<F: StagingStore> Drop for StagedObject<'_, F> {
    fn drop(&mut self) {
        let _ = self.store.remove(self.name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MemoryStore, ScriptedNetwork};

    #[test]
    fn test_connection_closes_on_drop() {
        let mut net = ScriptedNetwork::ok(&[b"abc"]);
        {
            let (_conn, response) = Connection::open(&mut net, "http://x/a.jpg").unwrap();
            assert_eq!(response.status, 200);
        }
        assert_eq!(net.closed, 1);
    }

    #[test]
    fn test_connection_closes_when_open_fails() {
        let mut net = ScriptedNetwork::ok(&[]);
        net.open_error = Some(NetError::NotConnected);
        assert!(Connection::open(&mut net, "http://x").is_err());
        assert_eq!(net.closed, 1);
    }

    #[test]
    fn test_staged_object_round_trip_and_cleanup() {
        let mut store = MemoryStore::default();
        {
            let mut staged = StagedObject::create(&mut store, "/temp.jpg").unwrap();
            staged.write_all(b"hello ").unwrap();
            staged.write_all(b"world").unwrap();
            assert_eq!(staged.read_all().unwrap(), b"hello world");
        }
        assert!(!store.exists("/temp.jpg"));
        assert_eq!(store.removed, 1);
    }

    #[test]
    fn test_short_write_is_full() {
        let mut store = MemoryStore::with_capacity(4);
        let mut staged = StagedObject::create(&mut store, "/temp.jpg").unwrap();
        assert_eq!(staged.write_all(b"too long"), Err(StagingError::Full));
    }

    #[test]
    fn test_empty_object_is_staging_failure() {
        let mut store = MemoryStore::default();
        let mut staged = StagedObject::create(&mut store, "/temp.jpg").unwrap();
        assert_eq!(staged.read_all(), Err(FailKind::Staging));
    }
}
