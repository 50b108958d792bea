//! Viewer session: one loaded byte source and the transforms applied to it.
//!
//! The session keeps the decoded original grid next to the rendered one. Every
//! state change re-renders from the original, so the displayed grid is always
//! `render(original, state)` and never the product of a chain of renders.
//!
//! # Example
//!
//! ```ignore
//! use rawpix_core::{ViewerConfig, ViewerSession};
//!
//! let mut session = ViewerSession::new(ViewerConfig::default());
//! session.load(std::fs::read("capture.data")?)?;
//! session.rotate_right()?;
//! session.toggle_flip_horizontal()?;
//! let png = session.export_png()?;
//! ```

use log::{debug, info};
use thiserror::Error;

use crate::config::ViewerConfig;
use crate::decode::{decode_raw_rgba, DecodeError, PixelGrid};
use crate::encode::{encode_png, EncodeError};
use crate::state::TransformState;
use crate::transform::{render_state, Quadrant, TransformError};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Requested resolution is zero or above the configured maximum.
    #[error("Resolution {width}x{height} out of range (1 to {max} per side)")]
    DimensionsOutOfRange { width: u32, height: u32, max: u32 },

    /// An operation needs a loaded source and there is none.
    #[error("No source loaded")]
    NothingLoaded,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// A loaded source together with its decoded and rendered grids.
#[derive(Debug, Clone)]
struct Loaded {
    bytes: Vec<u8>,
    original: PixelGrid,
    rendered: PixelGrid,
}

/// State for one viewer: resolution, transform state and the current source.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    config: ViewerConfig,
    width: u32,
    height: u32,
    state: TransformState,
    loaded: Option<Loaded>,
}

impl ViewerSession {
    /// Create a session at the configured default resolution with nothing loaded.
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            width: config.default_width,
            height: config.default_height,
            state: TransformState::default(),
            loaded: None,
        }
    }

    /// Load a new byte source.
    ///
    /// The transform state is reset, the bytes are decoded at the current
    /// resolution and the result is rendered. On error the previous source
    /// stays loaded.
    pub fn load(&mut self, bytes: Vec<u8>) -> Result<&PixelGrid, SessionError> {
        let original = decode_raw_rgba(&bytes, self.width, self.height)?;
        let state = TransformState::default();
        let rendered = render_state(&original, &state)?;

        info!(
            "loaded {} bytes as {}x{}",
            bytes.len(),
            self.width,
            self.height
        );

        self.state = state;
        let loaded = self.loaded.insert(Loaded {
            bytes,
            original,
            rendered,
        });
        Ok(&loaded.rendered)
    }

    /// Change the decode resolution.
    ///
    /// A loaded source is decoded again at the new size and re-rendered with
    /// the current transform state. On error nothing changes.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> Result<(), SessionError> {
        if !self.config.accepts(width, height) {
            return Err(SessionError::DimensionsOutOfRange {
                width,
                height,
                max: self.config.max_dimension,
            });
        }

        if let Some(loaded) = &mut self.loaded {
            let original = decode_raw_rgba(&loaded.bytes, width, height)?;
            loaded.rendered = render_state(&original, &self.state)?;
            loaded.original = original;
        }

        debug!("resolution set to {}x{}", width, height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Rotate one quarter turn towards negative angles and re-render.
    pub fn rotate_left(&mut self) -> Result<(), SessionError> {
        self.apply(TransformState::rotate_left)
    }

    /// Rotate one quarter turn towards positive angles and re-render.
    pub fn rotate_right(&mut self) -> Result<(), SessionError> {
        self.apply(TransformState::rotate_right)
    }

    /// Toggle the vertical flip and re-render.
    pub fn toggle_flip_vertical(&mut self) -> Result<(), SessionError> {
        self.apply(TransformState::toggle_flip_vertical)
    }

    /// Toggle the horizontal flip and re-render.
    pub fn toggle_flip_horizontal(&mut self) -> Result<(), SessionError> {
        self.apply(TransformState::toggle_flip_horizontal)
    }

    /// Replace the whole transform state and re-render.
    pub fn set_state(&mut self, state: TransformState) -> Result<(), SessionError> {
        self.apply(|s| *s = state)
    }

    // Mutate a copy of the state, render it, and only commit both on success.
    fn apply(&mut self, mutate: impl FnOnce(&mut TransformState)) -> Result<(), SessionError> {
        let mut next = self.state;
        mutate(&mut next);

        // Checked even with nothing loaded so a bad angle never gets stored
        Quadrant::from_degrees(next.angle)?;
        if let Some(loaded) = &mut self.loaded {
            loaded.rendered = render_state(&loaded.original, &next)?;
        }
        self.state = next;
        Ok(())
    }

    /// The rendered grid, if a source is loaded.
    pub fn current(&self) -> Option<&PixelGrid> {
        self.loaded.as_ref().map(|l| &l.rendered)
    }

    /// The decoded grid before any transform, if a source is loaded.
    pub fn original(&self) -> Option<&PixelGrid> {
        self.loaded.as_ref().map(|l| &l.original)
    }

    /// Encode the rendered grid as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, SessionError> {
        let grid = self.current().ok_or(SessionError::NothingLoaded)?;
        Ok(encode_png(grid)?)
    }

    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Current decode resolution as `(width, height)`.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }
}

impl Default for ViewerSession {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}
