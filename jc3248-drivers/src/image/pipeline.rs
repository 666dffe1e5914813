//! Image stream pipeline
//!
//! ```text
//! URL ──► NetworkSource ──chunks──► StagingStore ──bytes──► BlockImageDecoder
//!              │                         │                        │
//!         progress bar              removed on exit           PixelBlocks
//!              ▼                                                  ▼
//!        LandscapeCanvas ◄──────── map_point per pixel ◄──── blit in order
//! ```
//!
//! One call runs the fetch state machine from `Idle` to `Done` or
//! `Failed(kind)`. On failure the destination region is overwritten with
//! the matching placeholder tile.

use jc3248_core::color::BLACK;
use jc3248_core::config::{FetchConfig, MAX_CHUNK_SIZE};
use jc3248_core::state::{FailKind, FetchEvent, ImageFetchState, Stage};
use jc3248_core::traits::{BlockImageDecoder, BlockSource, DecodeError, PixelBlock};
use jc3248_core::{CancelToken, Error, LogicalRect};
use jc3248_display::{DisplayError, FrameBufferSink, LandscapeCanvas, Placeholder, ProgressBar};
use jc3248_hal::{Clock, NetworkSource, StagingStore};

use super::guard::{Connection, StagedObject};

/// Summary of a successfully painted image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImageReport {
    /// Decoded width in pixels
    pub width: u16,
    /// Decoded height in pixels
    pub height: u16,
    /// Blocks blitted
    pub blocks: u32,
    /// Body bytes downloaded
    pub bytes: u64,
}

/// Why a pipeline run did not produce an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ImageError {
    /// A stage failed; its placeholder was painted
    Failed(FailKind),
    /// The framebuffer sink failed
    Display(DisplayError),
}

impl ImageError {
    /// Terminal failure recorded in the state machine
    pub fn fail_kind(&self) -> FailKind {
        match self {
            ImageError::Failed(kind) => *kind,
            ImageError::Display(_) => FailKind::Display,
        }
    }
}

impl From<FailKind> for ImageError {
    fn from(kind: FailKind) -> Self {
        ImageError::Failed(kind)
    }
}

impl From<DisplayError> for ImageError {
    fn from(e: DisplayError) -> Self {
        ImageError::Display(e)
    }
}

impl From<ImageError> for Error {
    fn from(e: ImageError) -> Self {
        match e {
            ImageError::Failed(kind) => kind.into(),
            ImageError::Display(e) => e.into(),
        }
    }
}

fn decode_failure(e: DecodeError) -> FailKind {
    match e {
        DecodeError::OutOfMemory => FailKind::OutOfMemory,
        other => FailKind::Decode(other),
    }
}

/// Fetch-stage-decode-blit orchestrator
///
/// Owns its capabilities; the canvas is borrowed per call so it can be
/// shared with other painters.
pub struct ImagePipeline<N, F, D, C> {
    net: N,
    store: F,
    decoder: D,
    clock: C,
    config: FetchConfig,
    state: ImageFetchState,
}

impl<N, F, D, C> ImagePipeline<N, F, D, C>
where
    N: NetworkSource,
    F: StagingStore,
    D: BlockImageDecoder,
    C: Clock,
{
    pub fn new(net: N, store: F, decoder: D, clock: C, config: FetchConfig) -> Self {
        Self {
            net,
            store,
            decoder,
            clock,
            config,
            state: ImageFetchState::new(),
        }
    }

    /// Stage and byte counters of the last (or current) run
    pub fn state(&self) -> &ImageFetchState {
        &self.state
    }

    pub fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Give the capabilities back
    pub fn release(self) -> (N, F, D, C) {
        (self.net, self.store, self.decoder, self.clock)
    }

    /// Fetch `url` and paint it into `dest`
    ///
    /// Blocks until the image is painted or a placeholder has replaced it.
    /// `cancel` is checked between chunks and between blocks.
    pub fn load<S: FrameBufferSink>(
        &mut self,
        canvas: &mut LandscapeCanvas<S>,
        url: &str,
        dest: LogicalRect,
        cancel: &CancelToken,
    ) -> Result<ImageReport, ImageError> {
        self.state.apply(FetchEvent::Reset);
        self.state.apply(FetchEvent::Start);

        #[cfg(feature = "defmt")]
        defmt::info!("Loading image: {=str}", url);

        let outcome = match Self::paint_loading(canvas, dest) {
            Ok(()) => self.run(canvas, url, dest, cancel),
            Err(e) => Err(e.into()),
        };

        match outcome {
            Ok(report) => {
                self.state.apply(FetchEvent::BlitComplete);
                #[cfg(feature = "defmt")]
                defmt::info!("Image rendered: {} blocks", report.blocks);
                Ok(report)
            }
            Err(err) => {
                let kind = err.fail_kind();
                self.state.apply(FetchEvent::Fail(kind));
                #[cfg(feature = "defmt")]
                defmt::warn!("Image load failed: {}", kind);

                if let Some(placeholder) = Placeholder::for_failure(kind) {
                    placeholder.paint(canvas, dest)?;
                    canvas.flush()?;
                }
                Err(err)
            }
        }
    }

    fn paint_loading<S: FrameBufferSink>(
        canvas: &mut LandscapeCanvas<S>,
        dest: LogicalRect,
    ) -> Result<(), DisplayError> {
        Placeholder::Loading.paint(canvas, dest)?;
        canvas.flush()
    }

    fn run<S: FrameBufferSink>(
        &mut self,
        canvas: &mut LandscapeCanvas<S>,
        url: &str,
        dest: LogicalRect,
        cancel: &CancelToken,
    ) -> Result<ImageReport, ImageError> {
        if cancel.is_cancelled() {
            return Err(FailKind::Cancelled.into());
        }

        // Connecting
        let (mut conn, response) =
            Connection::open(&mut self.net, url).map_err(|_| FailKind::Network)?;
        if !response.is_success() {
            #[cfg(feature = "defmt")]
            defmt::warn!("HTTP GET failed, status {}", response.status);
            return Err(FailKind::Http(response.status).into());
        }
        let expected = match response.content_length {
            Some(len) if len > 0 => len,
            _ => return Err(FailKind::EmptyBody.into()),
        };
        self.state.apply(FetchEvent::ResponseOk);
        self.state.begin_download(expected);

        #[cfg(feature = "defmt")]
        defmt::info!("Image size: {} bytes", expected);

        // Downloading
        let mut staged = StagedObject::create(&mut self.store, self.config.staging_path.as_str())
            .map_err(|_| FailKind::Staging)?;

        let bar = ProgressBar::within(dest);
        bar.clear(canvas)?;
        bar.begin(canvas)?;
        canvas.flush()?;

        let chunk_len = self.config.chunk_size.clamp(1, MAX_CHUNK_SIZE);
        let mut chunk = [0u8; MAX_CHUNK_SIZE];
        let started = self.clock.now_ms();
        let budget = u64::from(self.config.timeout_ms);
        let mut timed_out = false;
        #[cfg(feature = "defmt")]
        let mut logged = 0u8;

        while !self.state.is_complete() {
            if cancel.is_cancelled() {
                return Err(FailKind::Cancelled.into());
            }
            if self.clock.elapsed_since(started) >= budget {
                timed_out = true;
                break;
            }

            // Never ask for more than the server still owes
            let want = (chunk_len as u64).min(self.state.remaining()) as usize;
            let read = match conn.read_chunk(&mut chunk[..want]) {
                Ok(n) => n.min(want),
                Err(_) => break,
            };
            if read == 0 {
                if !conn.is_connected() {
                    break;
                }
                self.clock.delay_ms(self.config.idle_delay_ms);
                continue;
            }

            staged
                .write_all(&chunk[..read])
                .map_err(|_| FailKind::Staging)?;
            self.state.record_chunk(read);
            bar.update(canvas, &self.state)?;
            canvas.flush()?;

            #[cfg(feature = "defmt")]
            {
                let percent = self.state.percent();
                if percent >= logged.saturating_add(20) || (percent == 100 && logged < 100) {
                    logged = percent;
                    defmt::debug!("Download progress: {}%", percent);
                }
            }
        }

        bar.clear(canvas)?;
        drop(conn);

        if !self.state.is_complete() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Download incomplete: {} of {} bytes",
                self.state.bytes_read(),
                expected
            );
            return Err(FailKind::IncompleteTransfer { timed_out }.into());
        }
        self.state.apply(FetchEvent::DownloadComplete);

        // Decoding
        let bytes = staged.read_all()?;
        drop(staged);
        if cancel.is_cancelled() {
            return Err(FailKind::Cancelled.into());
        }

        let mut source = self.decoder.decode(&bytes).map_err(decode_failure)?;
        let (width, height) = (source.width(), source.height());
        let block_size = source.block_size();
        self.state.apply(FetchEvent::DecoderReady);

        #[cfg(feature = "defmt")]
        defmt::info!("Image dimensions: {}x{}", width, height);

        // Blitting
        canvas.fill_rect(dest, BLACK)?;
        let mut blocks = 0u32;
        while let Some(block) = source.next_block().map_err(decode_failure)? {
            if cancel.is_cancelled() {
                return Err(FailKind::Cancelled.into());
            }
            blit_block(canvas, dest, &block, block_size)?;
            blocks += 1;
        }
        drop(source);
        canvas.flush()?;

        Ok(ImageReport {
            width,
            height,
            blocks,
            bytes: expected,
        })
    }
}

/// Write one block's pixels at `dest` plus the block offset
///
/// Pixels that land off the panel are dropped by the canvas.
fn blit_block<S: FrameBufferSink>(
    canvas: &mut LandscapeCanvas<S>,
    dest: LogicalRect,
    block: &PixelBlock<'_>,
    (block_w, block_h): (u16, u16),
) -> Result<(), DisplayError> {
    let origin = dest.origin().offset(
        i32::from(block.block_x) * i32::from(block_w),
        i32::from(block.block_y) * i32::from(block_h),
    );
    let stride = usize::from(block.width);

    for row in 0..block.height {
        for col in 0..block.width {
            let Some(color) = block
                .pixels
                .get(usize::from(row) * stride + usize::from(col))
            else {
                return Ok(());
            };
            let point = origin.offset(i32::from(col), i32::from(row));
            canvas.draw_pixel(point, *color)?;
        }
    }
    Ok(())
}
