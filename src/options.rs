//! Preview options

use crate::error::OptionsError;
use crate::types::Viewport;

pub const DEFAULT_VIEWPORT_FRACTION: f64 = 0.7;

/// Options controlling how previews are sized and probed
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewOptions {
    /// Share of the viewport an image may occupy in either dimension
    pub viewport_fraction: f64,
    /// Whether images of one document are probed on the rayon pool
    pub parallel: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            viewport_fraction: DEFAULT_VIEWPORT_FRACTION,
            parallel: true,
        }
    }
}

impl PreviewOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the viewport fraction
    pub fn with_fraction(mut self, fraction: f64) -> Self {
        self.viewport_fraction = fraction;
        self
    }

    /// Disables parallel probing
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let f = self.viewport_fraction;
        if !f.is_finite() || f <= 0.0 || f > 1.0 {
            return Err(OptionsError::InvalidFraction(f));
        }
        Ok(())
    }
}

pub fn validate_viewport(viewport: &Viewport) -> Result<(), OptionsError> {
    let Viewport { width, height } = *viewport;
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(OptionsError::InvalidViewport { width, height });
    }
    Ok(())
}
