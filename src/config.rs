use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    catalog::{fixture::storefront_catalog, model::Catalog, model::CategoryId},
    foundation::{
        core::Canvas,
        error::{StoreError, StoreResult},
    },
    render::preview::{MAX_CANVAS_DIM, PreviewSettings},
    studio::compose::LogoLimits,
};

/// Storefront configuration document. Every field has a default, so `{}` is valid.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Category a freshly mounted catalog page starts on.
    pub default_category: CategoryId,
    /// JSON catalog replacing the built-in one. Relative paths resolve against
    /// the config file's directory when loaded with [`StorefrontConfig::from_path`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    /// Preview renderer settings.
    pub preview: PreviewConfig,
}

/// Preview output and logo sizing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Output width in pixels.
    pub canvas_width: u32,
    /// Output height in pixels.
    pub canvas_height: u32,
    /// Logo height cap in reference pixels.
    pub logo_max_height_px: u32,
    /// Garment height `logo_max_height_px` is measured against.
    pub reference_garment_height_px: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        let limits = LogoLimits::default();
        let settings = PreviewSettings::default();
        Self {
            canvas_width: settings.canvas.width,
            canvas_height: settings.canvas.height,
            logo_max_height_px: limits.max_height_px,
            reference_garment_height_px: limits.reference_garment_height_px,
        }
    }
}

impl StorefrontConfig {
    /// Parse and validate a JSON config.
    pub fn from_reader<R: Read>(r: R) -> StoreResult<Self> {
        let config: Self = serde_json::from_reader(r)
            .map_err(|e| StoreError::serde(format!("parse config JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        let f =
            File::open(path).with_context(|| format!("open config JSON '{}'", path.display()))?;
        let mut config = Self::from_reader(BufReader::new(f))?;
        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent())
            && catalog.is_relative()
        {
            *catalog = dir.join(&*catalog);
        }
        Ok(config)
    }

    /// Reject settings the renderer cannot use.
    pub fn validate(&self) -> StoreResult<()> {
        let p = &self.preview;
        if p.canvas_width == 0 || p.canvas_height == 0 {
            return Err(StoreError::validation(
                "preview.canvas_width/canvas_height must be > 0",
            ));
        }
        if p.canvas_width > MAX_CANVAS_DIM || p.canvas_height > MAX_CANVAS_DIM {
            return Err(StoreError::validation(format!(
                "preview canvas {}x{} exceeds {MAX_CANVAS_DIM}x{MAX_CANVAS_DIM}",
                p.canvas_width, p.canvas_height
            )));
        }
        if p.logo_max_height_px == 0 || p.reference_garment_height_px == 0 {
            return Err(StoreError::validation(
                "preview.logo_max_height_px/reference_garment_height_px must be > 0",
            ));
        }
        Ok(())
    }

    /// Logo height cap for the composition step.
    pub fn logo_limits(&self) -> LogoLimits {
        LogoLimits {
            max_height_px: self.preview.logo_max_height_px,
            reference_garment_height_px: self.preview.reference_garment_height_px,
        }
    }

    /// Renderer settings.
    pub fn preview_settings(&self) -> PreviewSettings {
        PreviewSettings {
            canvas: Canvas {
                width: self.preview.canvas_width,
                height: self.preview.canvas_height,
            },
        }
    }

    /// The configured catalog, or the built-in one.
    pub fn load_catalog(&self) -> StoreResult<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_path(path),
            None => Ok(storefront_catalog()),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
