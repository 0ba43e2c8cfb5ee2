//! Image-file map written by the document compiler.
//!
//! The map is a JSON object keyed by document path. Each entry lists the
//! images referenced by that document together with the text range the
//! reference occupies:
//!
//! ```json
//! { "/notes/index.scim": [ { "start": 120, "end": 141, "file": "/notes/cat.png" } ] }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rayon::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::{MapError, OptionsError};
use crate::layout::fit_to_viewport;
use crate::options::{PreviewOptions, validate_viewport};
use crate::sniffer::probe;
use crate::types::{ImageRef, Preview, Viewport};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ImageFileMap {
    documents: HashMap<String, Vec<ImageRef>>,
}

impl ImageFileMap {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, MapError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn refs_for(&self, document: &str) -> &[ImageRef] {
        self.documents
            .get(document)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Probes every image referenced by `document` and sizes it for
    /// `viewport`. Images whose size cannot be determined are skipped.
    pub fn previews(
        &self,
        document: &str,
        viewport: Viewport,
        options: &PreviewOptions,
    ) -> Result<Vec<Preview>, OptionsError> {
        options.validate()?;
        validate_viewport(&viewport)?;

        let refs = self.refs_for(document);
        let fraction = options.viewport_fraction;

        let previews: Vec<Preview> = if options.parallel {
            refs.par_iter()
                .filter_map(|r| preview_for(r, viewport, fraction))
                .collect()
        } else {
            refs.iter()
                .filter_map(|r| preview_for(r, viewport, fraction))
                .collect()
        };

        info!(
            document,
            referenced = refs.len(),
            placed = previews.len(),
            "built image previews"
        );

        Ok(previews)
    }
}

fn preview_for(image: &ImageRef, viewport: Viewport, fraction: f64) -> Option<Preview> {
    match probe(&image.file) {
        Ok(info) => Some(Preview {
            start: image.start,
            end: image.end,
            file: image.file.clone(),
            info,
            size: fit_to_viewport(info.width, info.height, viewport, fraction),
        }),
        Err(e) => {
            warn!(file = %image.file.display(), error = %e, "could not get image size");
            None
        }
    }
}
