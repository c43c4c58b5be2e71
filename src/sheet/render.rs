//! # Label Renderer
//!
//! Draws one card into its grid cell:
//!
//! ```text
//! ┌─────────────────────────────────────┐  ─┬─ top padding (4mm)
//! │           ┌─────────────┐           │   │
//! │           │    logo     │  50mm wide │   │
//! │           └─────────────┘           │  ─┴─ gap (3mm)
//! │   作品名稱: title                    │
//! │   　　作者: author                   │
//! │   　　尺寸: H cm x W cm              │
//! │   創作媒材: medium                   │
//! │   　　日期: YYYY/MM/DD               │
//! └─────────────────────────────────────┘
//!   ├8mm┤                       ├8mm┤
//! ```
//!
//! Text is never clipped. When the wrapped block runs past the bottom of the
//! card it is still drawn in full and the overflow is logged.

use tracing::warn;

use super::geometry::{card_height, card_width, mm};
use super::layout::Placement;
use crate::catalog::CardRecord;
use crate::error::Result;
use crate::logos::LogoImage;

/// Field labels, padded with ideographic spaces to four cells so the
/// colons line up.
pub const LABEL_TITLE: &str = "作品名稱";
pub const LABEL_AUTHOR: &str = "\u{3000}\u{3000}作者";
pub const LABEL_SIZE: &str = "\u{3000}\u{3000}尺寸";
pub const LABEL_MEDIUM: &str = "創作媒材";
pub const LABEL_DATE: &str = "\u{3000}\u{3000}日期";

/// A rectangle in page coordinates (bottom-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A block of text set in one font size and leading.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    /// Logical lines; each may wrap further.
    pub lines: Vec<String>,
    pub font_size: f32,
    /// Baseline-to-baseline distance.
    pub leading: f32,
}

/// Drawing primitives the renderer and composer need from a document backend.
pub trait DrawingSink {
    /// Stroke a rectangle outline.
    fn draw_rect(&mut self, rect: Rect, line_width: f32);

    /// Draw `image` scaled into `rect`.
    fn draw_image(&mut self, image: &LogoImage, rect: Rect);

    /// Draw `text` word-wrapped at `max_width`, its first line's top at
    /// `top`. Returns the height consumed.
    fn draw_wrapped_text(&mut self, x: f32, top: f32, max_width: f32, text: &TextBlock) -> f32;

    /// Start a new page. Drawing calls go to it until `end_page`.
    fn begin_page(&mut self);

    /// Close the current page.
    fn end_page(&mut self);

    /// Finish the document and return its bytes.
    fn finalize(self) -> Result<Vec<u8>>
    where
        Self: Sized;
}

/// Card styling. All lengths in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub border_width: f32,
    pub logo_width: f32,
    pub top_padding: f32,
    pub side_padding: f32,
    pub logo_gap: f32,
    pub font_size: f32,
    pub leading: f32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            border_width: 0.25,
            logo_width: mm(50.0),
            top_padding: mm(4.0),
            side_padding: mm(8.0),
            logo_gap: mm(3.0),
            font_size: 10.0,
            leading: 14.0,
        }
    }
}

impl LabelStyle {
    /// Width available to text inside the side padding.
    pub fn text_width(&self) -> f32 {
        card_width() - 2.0 * self.side_padding
    }

    /// Logo height at `logo_width`, preserving the image's aspect ratio.
    pub fn logo_height(&self, logo: &LogoImage) -> f32 {
        self.logo_width * logo.aspect_ratio()
    }
}

/// The five labeled lines for a card.
pub fn card_lines(card: &CardRecord) -> Vec<String> {
    let fields = &card.fields;
    vec![
        format!("{}: {}", LABEL_TITLE, fields.title),
        format!("{}: {}", LABEL_AUTHOR, fields.author),
        format!("{}: {}", LABEL_SIZE, fields.size_line()),
        format!("{}: {}", LABEL_MEDIUM, fields.medium),
        format!("{}: {}", LABEL_DATE, fields.date),
    ]
}

/// Draw `card` at `placement`.
pub fn render<S: DrawingSink>(
    card: &CardRecord,
    placement: &Placement,
    logo: &LogoImage,
    style: &LabelStyle,
    sink: &mut S,
) {
    let card_top = placement.top();

    sink.draw_rect(
        Rect {
            x: placement.x,
            y: placement.y,
            width: card_width(),
            height: card_height(),
        },
        style.border_width,
    );

    let logo_height = style.logo_height(logo);
    let logo_rect = Rect {
        x: placement.x + (card_width() - style.logo_width) / 2.0,
        y: card_top - style.top_padding - logo_height,
        width: style.logo_width,
        height: logo_height,
    };
    sink.draw_image(logo, logo_rect);

    let text_top = logo_rect.y - style.logo_gap;
    let block = TextBlock {
        lines: card_lines(card),
        font_size: style.font_size,
        leading: style.leading,
    };
    let used = sink.draw_wrapped_text(
        placement.x + style.side_padding,
        text_top,
        style.text_width(),
        &block,
    );

    let available = text_top - placement.y;
    if used > available {
        warn!(
            id = %card.id,
            overflow_pt = used - available,
            "card text overflows its box"
        );
    }
}
