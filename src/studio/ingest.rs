use std::{
    path::Path,
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
};

use crate::{
    foundation::error::{StoreError, StoreResult},
    studio::model::{LogoImage, UploadSession},
};

const SVG_MIME: &str = "image/svg+xml";
const MAX_SVG_DIM: f32 = 2048.0;

/// A file picked or dropped onto the upload zone.
#[derive(Clone, Debug)]
pub struct IncomingFile {
    /// Original file name, for logs.
    pub name: String,
    /// Declared MIME type.
    pub mime: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl IncomingFile {
    /// Read a file from disk, guessing its MIME type from the extension.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> StoreResult<Self> {
        use anyhow::Context as _;

        let bytes =
            std::fs::read(path).with_context(|| format!("read logo file '{}'", path.display()))?;
        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            mime: mime_for_path(path).to_owned(),
            bytes,
        })
    }
}

/// Only `image/*` uploads are considered.
pub fn is_image_mime(mime: &str) -> bool {
    mime_essence(mime)
        .to_ascii_lowercase()
        .starts_with("image/")
}

/// `type/subtype` with any `; param=value` suffix dropped.
fn mime_essence(mime: &str) -> &str {
    mime.split(';').next().unwrap_or_default().trim()
}

/// MIME type guessed from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let is_svg = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        return SVG_MIME;
    }
    image::ImageFormat::from_path(path)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream")
}

/// Decode an uploaded image into a premultiplied logo bitmap.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_logo(bytes: &[u8], mime: &str) -> StoreResult<LogoImage> {
    if mime_essence(mime).eq_ignore_ascii_case(SVG_MIME) {
        return rasterize_svg(bytes);
    }

    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| StoreError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(LogoImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn rasterize_svg(bytes: &[u8]) -> StoreResult<LogoImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| StoreError::decode(format!("parse svg tree: {e}")))?;

    let size = tree.size();
    let (w, h) = (size.width(), size.height());
    if !w.is_finite() || !h.is_finite() || w <= 0.0 || h <= 0.0 {
        return Err(StoreError::decode("svg has invalid width/height"));
    }
    let fit = (MAX_SVG_DIM / w.max(h)).min(1.0);
    let width = ((w * fit).ceil() as u32).max(1);
    let height = ((h * fit).ceil() as u32).max(1);

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| StoreError::decode("failed to allocate svg pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(width as f32 / w, height as f32 / h);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    Ok(LogoImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.data().to_vec()),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Handle for one accepted upload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IngestTicket(u64);

type Completion = (IngestTicket, StoreResult<LogoImage>);

/// Background logo decoder feeding an [`UploadSession`].
///
/// Decodes run on the rayon pool. Only the newest submission may land in the
/// session: completions for older tickets are dropped whatever order they
/// finish in. Failed decodes leave the session untouched.
pub struct LogoIngestor {
    next: u64,
    latest: Option<IngestTicket>,
    latest_resolved: bool,
    in_flight: usize,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Default for LogoIngestor {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoIngestor {
    /// Idle ingestor.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            next: 0,
            latest: None,
            latest_resolved: true,
            in_flight: 0,
            tx,
            rx,
        }
    }

    /// Start decoding `file`. Non-image MIME types are ignored.
    pub fn submit(&mut self, file: IncomingFile) -> Option<IngestTicket> {
        if !is_image_mime(&file.mime) {
            tracing::debug!(name = %file.name, mime = %file.mime, "ignoring non-image upload");
            return None;
        }

        let ticket = IngestTicket(self.next);
        self.next += 1;
        self.latest = Some(ticket);
        self.latest_resolved = false;
        self.in_flight += 1;

        let tx = self.tx.clone();
        rayon::spawn(move || {
            let result = decode_logo(&file.bytes, &file.mime);
            // The ingestor may already be gone; nothing to deliver to then.
            let _ = tx.send((ticket, result));
        });
        Some(ticket)
    }

    /// `true` while the newest submission has not resolved yet.
    pub fn is_pending(&self) -> bool {
        !self.latest_resolved
    }

    /// Number of decodes still running, stale ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply finished decodes without blocking. Returns `true` if the logo changed.
    pub fn poll(&mut self, session: &mut UploadSession) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            changed |= self.apply(done, session);
        }
        changed
    }

    /// Block until the newest submission resolves. Returns `true` if the logo changed.
    pub fn wait(&mut self, session: &mut UploadSession) -> bool {
        let mut changed = false;
        while !self.latest_resolved {
            match self.rx.recv() {
                Ok(done) => changed |= self.apply(done, session),
                Err(_) => break,
            }
        }
        changed
    }

    fn apply(&mut self, (ticket, result): Completion, session: &mut UploadSession) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if Some(ticket) != self.latest {
            tracing::debug!(?ticket, "dropping superseded logo decode");
            return false;
        }
        self.latest_resolved = true;
        match result {
            Ok(logo) => {
                tracing::debug!(
                    ?ticket,
                    width = logo.width,
                    height = logo.height,
                    "logo ingested"
                );
                session.logo = Some(logo);
                true
            }
            Err(err) => {
                tracing::warn!(?ticket, %err, "logo decode failed, keeping previous logo");
                false
            }
        }
    }
}

/// Decode `file` on the calling thread and store it in `session`.
///
/// Same acceptance rules as [`LogoIngestor::submit`]. Returns `true` if the logo changed.
pub fn ingest_now(file: &IncomingFile, session: &mut UploadSession) -> bool {
    if !is_image_mime(&file.mime) {
        tracing::debug!(name = %file.name, mime = %file.mime, "ignoring non-image upload");
        return false;
    }
    match decode_logo(&file.bytes, &file.mime) {
        Ok(logo) => {
            session.logo = Some(logo);
            true
        }
        Err(err) => {
            tracing::warn!(name = %file.name, %err, "logo decode failed");
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/studio/ingest.rs"]
mod tests;
