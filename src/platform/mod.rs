//! Platform abstraction layer.
//!
//! The command reference itself never touches a window. Frontends that show
//! results in a resizable window implement [`WindowHandle`] and call
//! [`fit_window_to_content`] after rendering.

use crate::config::AppearanceConfig;
use crate::core::Platform;
use crate::error::{TldrError, TldrResult};

/// Window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Capability a frontend grants for resizing its window.
pub trait WindowHandle {
    /// Current window size.
    fn size(&self) -> WindowSize;

    /// Resize the window.
    fn resize(&mut self, size: WindowSize) -> TldrResult<()>;
}

/// Resize `window` so its height follows the rendered content.
///
/// The height is clamped between `min_height` and `max_height_ratio` of the
/// screen height; the width is left alone. Returns the new size, or `None`
/// when the window already had it and no resize was issued.
pub fn fit_window_to_content(
    window: &mut dyn WindowHandle,
    content_height: u32,
    screen_height: u32,
    appearance: &AppearanceConfig,
) -> TldrResult<Option<WindowSize>> {
    if screen_height == 0 {
        return Err(TldrError::Window("screen height is zero".to_string()));
    }

    let max_height = ((screen_height as f64) * appearance.max_height_ratio).floor() as u32;
    // A tiny screen wins over the configured minimum
    let max_height = max_height.max(1);
    let min_height = appearance.min_height.min(max_height);
    let height = content_height.clamp(min_height, max_height);

    let current = window.size();
    if current.height == height {
        return Ok(None);
    }

    let target = WindowSize::new(current.width, height);
    window.resize(target)?;
    tracing::debug!(width = target.width, height = target.height, "resized window");
    Ok(Some(target))
}

/// Platform tag of the running OS, if it is one the dataset knows about.
pub fn current() -> Option<Platform> {
    if cfg!(target_os = "linux") {
        Some(Platform::Linux)
    } else if cfg!(target_os = "macos") {
        Some(Platform::Mac)
    } else if cfg!(target_os = "windows") {
        Some(Platform::Windows)
    } else {
        None
    }
}

/// In-memory window that records every resize.
///
/// Used by the terminal frontend, which has no real window, and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingWindow {
    size: WindowSize,
    pub resizes: Vec<WindowSize>,
}

impl RecordingWindow {
    pub fn new(size: WindowSize) -> Self {
        Self {
            size,
            resizes: Vec::new(),
        }
    }
}

impl WindowHandle for RecordingWindow {
    fn size(&self) -> WindowSize {
        self.size
    }

    fn resize(&mut self, size: WindowSize) -> TldrResult<()> {
        self.size = size;
        self.resizes.push(size);
        Ok(())
    }
}
