//! In-memory capabilities for unit tests

use alloc::string::String;
use alloc::vec::Vec;
use core::cell::Cell;

use jc3248_core::traits::{BlockImageDecoder, BlockSource, DecodeError, PixelBlock};
use jc3248_core::{CancelToken, PhysicalPoint, PhysicalRect, Rgb565};
use jc3248_display::{DisplayError, FrameBufferSink, Rotation};
use jc3248_hal::{Clock, NetError, NetworkSource, Response, StagingError, StagingStore};

/// Network that replays a fixed response
pub struct ScriptedNetwork {
    pub status: u16,
    pub content_length: Option<u64>,
    pub chunks: Vec<Vec<u8>>,
    /// Stay connected (serving nothing) once the chunks run out
    pub hang: bool,
    pub open_error: Option<NetError>,
    pub opened: u32,
    pub closed: u32,
    pub largest_request: usize,
    pub reads: u32,
    /// Trip the token once this many reads have been served
    pub cancel_after: Option<(u32, &'static CancelToken)>,
    next: usize,
    offset: usize,
}

impl ScriptedNetwork {
    /// 200 OK with `Content-Length` equal to the sum of `chunks`
    pub fn ok(chunks: &[&[u8]]) -> Self {
        let total: usize = chunks.iter().map(|c| c.len()).sum();
        Self {
            status: 200,
            content_length: Some(total as u64),
            chunks: chunks.iter().map(|c| c.to_vec()).collect(),
            hang: false,
            open_error: None,
            opened: 0,
            closed: 0,
            largest_request: 0,
            reads: 0,
            cancel_after: None,
            next: 0,
            offset: 0,
        }
    }

    pub fn status(status: u16) -> Self {
        let mut net = Self::ok(&[]);
        net.status = status;
        net
    }

    fn drained(&self) -> bool {
        self.next >= self.chunks.len()
    }
}

impl NetworkSource for ScriptedNetwork {
    fn open(&mut self, _url: &str) -> Result<Response, NetError> {
        self.opened += 1;
        if let Some(e) = self.open_error {
            return Err(e);
        }
        Ok(Response {
            status: self.status,
            content_length: self.content_length,
        })
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> Result<usize, NetError> {
        self.largest_request = self.largest_request.max(buf.len());
        self.reads += 1;
        if let Some((after, token)) = self.cancel_after {
            if self.reads >= after {
                token.cancel();
            }
        }
        let Some(chunk) = self.chunks.get(self.next) else {
            return Ok(0);
        };
        let rest = &chunk[self.offset..];
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        self.offset += n;
        if self.offset == chunk.len() {
            self.next += 1;
            self.offset = 0;
        }
        Ok(n)
    }

    fn is_connected(&self) -> bool {
        self.hang || !self.drained()
    }

    fn close(&mut self) {
        self.closed += 1;
    }
}

/// Single-object store backed by a `Vec`
#[derive(Default)]
pub struct MemoryStore {
    pub object: Option<(String, Vec<u8>)>,
    pub capacity: Option<usize>,
    pub fail_create: bool,
    pub created: u32,
    pub removed: u32,
}

impl MemoryStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    fn data(&mut self, name: &str) -> Result<&mut Vec<u8>, StagingError> {
        match &mut self.object {
            Some((n, data)) if n.as_str() == name => Ok(data),
            _ => Err(StagingError::NotFound),
        }
    }
}

impl StagingStore for MemoryStore {
    fn create(&mut self, name: &str) -> Result<(), StagingError> {
        if self.fail_create {
            return Err(StagingError::Unavailable);
        }
        self.created += 1;
        self.object = Some((String::from(name), Vec::new()));
        Ok(())
    }

    fn open(&mut self, name: &str) -> Result<usize, StagingError> {
        Ok(self.data(name)?.len())
    }

    fn write(&mut self, name: &str, data: &[u8]) -> Result<usize, StagingError> {
        let capacity = self.capacity.unwrap_or(usize::MAX);
        let object = self.data(name)?;
        let n = data.len().min(capacity.saturating_sub(object.len()));
        object.extend_from_slice(&data[..n]);
        Ok(n)
    }

    fn read(&mut self, name: &str, offset: usize, buf: &mut [u8]) -> Result<usize, StagingError> {
        let object = self.data(name)?;
        let rest = object.get(offset..).unwrap_or(&[]);
        let n = rest.len().min(buf.len());
        buf[..n].copy_from_slice(&rest[..n]);
        Ok(n)
    }

    fn remove(&mut self, name: &str) -> Result<(), StagingError> {
        if self.exists(name) {
            self.object = None;
            self.removed += 1;
        }
        Ok(())
    }

    fn exists(&mut self, name: &str) -> bool {
        matches!(&self.object, Some((n, _)) if n.as_str() == name)
    }
}

/// Clock that only moves when the pipeline waits
#[derive(Default)]
pub struct ManualClock {
    pub now: Cell<u64>,
    pub waits: u32,
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits += 1;
        self.now.set(self.now.get() + u64::from(ms.max(1)));
    }
}

/// One block as the decoder will emit it
pub struct ScriptedBlock {
    pub block_x: u16,
    pub block_y: u16,
    pub width: u16,
    pub height: u16,
    pub pixels: Vec<Rgb565>,
}

impl ScriptedBlock {
    pub fn solid(block_x: u16, block_y: u16, width: u16, height: u16, color: Rgb565) -> Self {
        Self {
            block_x,
            block_y,
            width,
            height,
            pixels: alloc::vec![color; usize::from(width) * usize::from(height)],
        }
    }
}

/// Decoder that ignores its input and replays blocks
pub struct ScriptedDecoder {
    pub width: u16,
    pub height: u16,
    pub block_size: (u16, u16),
    pub blocks: Vec<ScriptedBlock>,
    pub error: Option<DecodeError>,
    pub calls: u32,
    pub input_len: usize,
    pub released: Cell<u32>,
    /// Trip the token when the block at this index is handed out
    pub cancel_at: Option<(usize, &'static CancelToken)>,
}

impl ScriptedDecoder {
    pub fn new(width: u16, height: u16, blocks: Vec<ScriptedBlock>) -> Self {
        Self {
            width,
            height,
            block_size: (8, 8),
            blocks,
            error: None,
            calls: 0,
            input_len: 0,
            released: Cell::new(0),
            cancel_at: None,
        }
    }

    pub fn failing(error: DecodeError) -> Self {
        let mut decoder = Self::new(0, 0, Vec::new());
        decoder.error = Some(error);
        decoder
    }
}

pub struct ScriptedSource<'a> {
    decoder: &'a ScriptedDecoder,
    next: usize,
}

impl BlockSource for ScriptedSource<'_> {
    fn width(&self) -> u16 {
        self.decoder.width
    }

    fn height(&self) -> u16 {
        self.decoder.height
    }

    fn block_size(&self) -> (u16, u16) {
        self.decoder.block_size
    }

    fn next_block(&mut self) -> Result<Option<PixelBlock<'_>>, DecodeError> {
        let Some(block) = self.decoder.blocks.get(self.next) else {
            return Ok(None);
        };
        if let Some((index, token)) = self.decoder.cancel_at {
            if index == self.next {
                token.cancel();
            }
        }
        self.next += 1;
        Ok(Some(PixelBlock {
            block_x: block.block_x,
            block_y: block.block_y,
            width: block.width,
            height: block.height,
            pixels: &block.pixels,
        }))
    }
}

impl Drop for ScriptedSource<'_> {
    fn drop(&mut self) {
        let released = &self.decoder.released;
        released.set(released.get() + 1);
    }
}

impl BlockImageDecoder for ScriptedDecoder {
    type Source<'a> = ScriptedSource<'a>;

    fn decode<'a>(&'a mut self, data: &'a [u8]) -> Result<ScriptedSource<'a>, DecodeError> {
        self.calls += 1;
        self.input_len = data.len();
        if let Some(e) = self.error {
            return Err(e);
        }
        Ok(ScriptedSource {
            decoder: self,
            next: 0,
        })
    }
}

/// Sink recording fills and pixels
#[derive(Default)]
pub struct RecordingSink {
    pub fills: Vec<(PhysicalRect, Rgb565)>,
    pub pixels: Vec<(PhysicalPoint, Rgb565)>,
    pub outlines: Vec<PhysicalRect>,
    pub flushes: u32,
    pub fail: bool,
}

impl RecordingSink {
    fn check(&self) -> Result<(), DisplayError> {
        if self.fail {
            Err(DisplayError::Communication)
        } else {
            Ok(())
        }
    }
}

impl FrameBufferSink for RecordingSink {
    fn fill_rect(&mut self, rect: PhysicalRect, color: Rgb565) -> Result<(), DisplayError> {
        self.check()?;
        self.fills.push((rect, color));
        Ok(())
    }

    fn draw_rect(&mut self, rect: PhysicalRect, _: Rgb565) -> Result<(), DisplayError> {
        self.check()?;
        self.outlines.push(rect);
        Ok(())
    }

    fn draw_pixel(&mut self, point: PhysicalPoint, color: Rgb565) -> Result<(), DisplayError> {
        self.check()?;
        self.pixels.push((point, color));
        Ok(())
    }

    fn draw_line(&mut self, _: PhysicalPoint, _: PhysicalPoint, _: Rgb565) -> Result<(), DisplayError> {
        self.check()
    }

    fn draw_triangle(
        &mut self,
        _: PhysicalPoint,
        _: PhysicalPoint,
        _: PhysicalPoint,
        _: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check()
    }

    fn fill_triangle(
        &mut self,
        _: PhysicalPoint,
        _: PhysicalPoint,
        _: PhysicalPoint,
        _: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check()
    }

    fn draw_circle(&mut self, _: PhysicalPoint, _: u32, _: Rgb565) -> Result<(), DisplayError> {
        self.check()
    }

    fn fill_circle(&mut self, _: PhysicalPoint, _: u32, _: Rgb565) -> Result<(), DisplayError> {
        self.check()
    }

    fn draw_ellipse(
        &mut self,
        _: PhysicalPoint,
        _: u32,
        _: u32,
        _: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check()
    }

    fn fill_ellipse(
        &mut self,
        _: PhysicalPoint,
        _: u32,
        _: u32,
        _: Rgb565,
    ) -> Result<(), DisplayError> {
        self.check()
    }

    fn set_rotation(&mut self, _: Rotation) -> Result<(), DisplayError> {
        self.check()
    }

    fn rotation(&self) -> Rotation {
        Rotation::Portrait
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.flushes += 1;
        Ok(())
    }
}

impl ScriptedNetwork {
    /// Serve the same chunks again
    pub fn rewind(&mut self) {
        self.next = 0;
        self.offset = 0;
    }
}
