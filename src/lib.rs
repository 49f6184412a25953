//! Storefront core for the basic color apparel shop.
//!
//! The crate holds the pieces of the shop that carry real behavior:
//!
//! - Browse a [`Catalog`] through a [`FilterSelection`] (color + category) and keep
//!   per-card swatch choices in a [`CatalogPage`]
//! - Collect purchases in a [`Cart`]
//! - Ingest a customer logo ([`LogoIngestor`]), compose it onto a garment
//!   ([`compose_preview`]) and rasterize the mockup ([`render_preview`])
//! - Gate the admin area behind an [`AdminGate`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod access;
mod cart;
mod catalog;
mod config;
mod foundation;
mod render;
mod studio;

pub use crate::foundation::core::{Canvas, Currency, Point, Price, Rect, Rgb8, Rgba8Premul, Size};
pub use crate::foundation::error::{StoreError, StoreResult};

pub use crate::access::gate::{
    ADMIN_ROLE, AdminAccess, AdminGate, AuthStatus, StaticGate, resolve_admin_access,
};
pub use crate::cart::lines::{Cart, CartLine, LineId};
pub use crate::catalog::filter::{
    FilterSelection, SlideDirection, visible_products, visible_products_by_id,
};
pub use crate::catalog::fixture::{storefront_catalog, storefront_products};
pub use crate::catalog::model::{Catalog, CategoryId, ColorId, Product, ProductId};
pub use crate::catalog::page::CatalogPage;
pub use crate::catalog::swatch::{CardSwatches, shows_swatch_controls};
pub use crate::config::{PreviewConfig, StorefrontConfig};
pub use crate::render::composite::{
    PremulRgba8, blit_over, fill_rect_over, over, stroke_rect_over,
};
pub use crate::render::preview::{
    MAX_CANVAS_DIM, PreviewFrame, PreviewSettings, garment_box, render_preview,
};
pub use crate::studio::compose::{
    GarmentLayer, LogoLayer, LogoLimits, MarkLayer, PlaceholderLayer, RenderDescription,
    compose_preview, compose_preview_with, effective_width_fraction,
};
pub use crate::studio::ingest::{
    IncomingFile, IngestTicket, LogoIngestor, decode_logo, ingest_now, is_image_mime, mime_for_path,
};
pub use crate::studio::model::{
    GarmentColor, LogoImage, LogoScale, Placement, UploadSession, clamp_scale,
};
