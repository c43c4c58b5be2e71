//! # PDF Sink
//!
//! [`DrawingSink`] backed by `pdf-writer`.
//!
//! ## Document structure
//!
//! | Object | Notes |
//! |--------|-------|
//! | Catalog → Pages | page tree written at `finalize` |
//! | Type0 font `MSung-Light` | `UniCNS-UCS2-H`, not embedded |
//! | Image XObjects | one per distinct logo key, shared by all pages |
//! | Page + content stream | written at `end_page`, Flate-compressed |
//!
//! Text uses the standard Adobe CNS1 font so readers substitute a local
//! Traditional Chinese face. Printable ASCII widths are pinned to 500 so
//! the wrapper in [`super::text`] measures exactly what is drawn.

use std::io::Write;

use flate2::Compression;
use flate2::write::ZlibEncoder;
use pdf_writer::types::{CidFontType, FontFlags, SystemInfo};
use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect as PdfRect, Ref, Str};

use super::geometry::{page_height, page_width};
use super::render::{DrawingSink, Rect, TextBlock};
use super::text::{encode_ucs2, wrap};
use crate::error::{LabelError, Result};
use crate::logos::{LogoImage, LogoPixels};

const FONT_NAME: &[u8] = b"F1";
const BASE_FONT: &[u8] = b"MSung-Light";
const CMAP: &[u8] = b"UniCNS-UCS2-H";

/// Fraction of the font size above the baseline.
const ASCENT: f32 = 0.88;

/// An image XObject already written to the document.
struct EmbeddedImage {
    key: String,
    name: String,
    id: Ref,
}

/// The page currently being drawn.
struct OpenPage {
    id: Ref,
    content: Content,
}

/// Builds a PDF document page by page.
pub struct PdfSink {
    pdf: Pdf,
    next_id: i32,
    page_tree_id: Ref,
    font_id: Ref,
    pages: Vec<Ref>,
    images: Vec<EmbeddedImage>,
    current: Option<OpenPage>,
    /// First error hit while drawing, reported by `finalize`.
    error: Option<LabelError>,
}

impl Default for PdfSink {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSink {
    pub fn new() -> Self {
        let mut sink = Self {
            pdf: Pdf::new(),
            next_id: 1,
            page_tree_id: Ref::new(1),
            font_id: Ref::new(1),
            pages: Vec::new(),
            images: Vec::new(),
            current: None,
            error: None,
        };

        let catalog_id = sink.alloc();
        sink.page_tree_id = sink.alloc();
        sink.pdf.catalog(catalog_id).pages(sink.page_tree_id);
        sink.font_id = sink.write_font();
        sink
    }

    /// Pages closed so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn alloc(&mut self) -> Ref {
        let id = Ref::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn write_font(&mut self) -> Ref {
        let font_id = self.alloc();
        let cid_id = self.alloc();
        let descriptor_id = self.alloc();

        self.pdf
            .type0_font(font_id)
            .base_font(Name(BASE_FONT))
            .encoding_predefined(Name(CMAP))
            .descendant_font(cid_id);

        let mut cid = self.pdf.cid_font(cid_id);
        cid.subtype(CidFontType::Type0);
        cid.base_font(Name(BASE_FONT));
        cid.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"CNS1"),
            supplement: 3,
        });
        cid.font_descriptor(descriptor_id);
        cid.default_width(1000.0);
        // CIDs 1..=95 are printable ASCII under UniCNS-UCS2-H.
        cid.widths().consecutive(1, std::iter::repeat_n(500.0, 95));
        cid.finish();

        self.pdf
            .font_descriptor(descriptor_id)
            .name(Name(BASE_FONT))
            .flags(FontFlags::SYMBOLIC)
            .bbox(PdfRect::new(-160.0, -249.0, 1015.0, 888.0))
            .italic_angle(0.0)
            .ascent(880.0)
            .descent(-120.0)
            .cap_height(880.0)
            .stem_v(93.0);

        font_id
    }

    /// Name of the XObject for `image`, embedding it on first use.
    fn image_name(&mut self, image: &LogoImage) -> Result<String> {
        if let Some(existing) = self.images.iter().find(|e| e.key == image.key) {
            return Ok(existing.name.clone());
        }

        let (data, bits, rgb) = match &image.pixels {
            // PDF gray: 0 is black, so invert the 1 = black raster.
            LogoPixels::Mono(bits) => (bits.iter().map(|b| !b).collect::<Vec<_>>(), 1, false),
            LogoPixels::Rgb(bytes) => (bytes.clone(), 8, true),
        };
        let compressed = deflate(&data)?;

        let id = self.alloc();
        let name = format!("Im{}", self.images.len() + 1);
        let mut xobject = self.pdf.image_xobject(id, &compressed);
        xobject.filter(Filter::FlateDecode);
        xobject.width(image.width as i32);
        xobject.height(image.height as i32);
        if rgb {
            xobject.color_space().device_rgb();
        } else {
            xobject.color_space().device_gray();
        }
        xobject.bits_per_component(bits);
        xobject.finish();

        self.images.push(EmbeddedImage {
            key: image.key.clone(),
            name: name.clone(),
            id,
        });
        Ok(name)
    }

    /// Content stream of the open page, opening one if needed.
    fn content(&mut self) -> &mut Content {
        let page = match self.current.take() {
            Some(page) => page,
            None => OpenPage {
                id: self.alloc(),
                content: Content::new(),
            },
        };
        &mut self.current.insert(page).content
    }

    fn record_error(&mut self, err: LabelError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

impl DrawingSink for PdfSink {
    fn draw_rect(&mut self, rect: Rect, line_width: f32) {
        let content = self.content();
        content.save_state();
        content.set_line_width(line_width);
        content.rect(rect.x, rect.y, rect.width, rect.height);
        content.stroke();
        content.restore_state();
    }

    fn draw_image(&mut self, image: &LogoImage, rect: Rect) {
        let name = match self.image_name(image) {
            Ok(name) => name,
            Err(err) => {
                self.record_error(err);
                return;
            }
        };
        let content = self.content();
        content.save_state();
        content.transform([rect.width, 0.0, 0.0, rect.height, rect.x, rect.y]);
        content.x_object(Name(name.as_bytes()));
        content.restore_state();
    }

    fn draw_wrapped_text(&mut self, x: f32, top: f32, max_width: f32, text: &TextBlock) -> f32 {
        let lines: Vec<String> = text
            .lines
            .iter()
            .flat_map(|line| wrap(line, max_width, text.font_size))
            .collect();

        let content = self.content();
        content.begin_text();
        content.set_font(Name(FONT_NAME), text.font_size);
        let mut baseline = top - text.font_size * ASCENT;
        for line in &lines {
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, baseline]);
            content.show(Str(&encode_ucs2(line)));
            baseline -= text.leading;
        }
        content.end_text();

        lines.len() as f32 * text.leading
    }

    fn begin_page(&mut self) {
        if self.current.is_some() {
            self.end_page();
        }
        let id = self.alloc();
        self.current = Some(OpenPage {
            id,
            content: Content::new(),
        });
    }

    fn end_page(&mut self) {
        let Some(page) = self.current.take() else {
            return;
        };

        let stream = match deflate(&page.content.finish()) {
            Ok(stream) => stream,
            Err(err) => {
                self.record_error(err);
                return;
            }
        };
        let content_id = self.alloc();
        self.pdf
            .stream(content_id, &stream)
            .filter(Filter::FlateDecode);

        let mut pdf_page = self.pdf.page(page.id);
        pdf_page.media_box(PdfRect::new(0.0, 0.0, page_width(), page_height()));
        pdf_page.parent(self.page_tree_id);
        pdf_page.contents(content_id);
        {
            let mut resources = pdf_page.resources();
            resources.fonts().pair(Name(FONT_NAME), self.font_id);
            let mut x_objects = resources.x_objects();
            for image in &self.images {
                x_objects.pair(Name(image.name.as_bytes()), image.id);
            }
        }
        pdf_page.finish();

        self.pages.push(page.id);
    }

    fn finalize(mut self) -> Result<Vec<u8>> {
        self.end_page();
        if let Some(err) = self.error {
            return Err(err);
        }

        let count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(count);
        Ok(self.pdf.finish())
    }
}

/// Zlib-compress a stream body for `FlateDecode`.
fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).map_err(compression_error)?;
    encoder.finish().map_err(compression_error)
}

fn compression_error(err: std::io::Error) -> LabelError {
    LabelError::Document(format!("stream compression failed: {}", err))
}
