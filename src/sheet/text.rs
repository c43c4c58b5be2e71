//! # Text Metrics and Wrapping
//!
//! Card text is set in a CJK CID font whose printable ASCII glyphs are
//! forced to half an em and every other glyph to a full em, so measuring a
//! string needs no font file.
//!
//! ## Wrapping rules
//!
//! - Wide (non-ASCII) characters may break anywhere
//! - ASCII words break at spaces
//! - A word wider than the line is split by character
//! - `\n` forces a break

/// Advance width of a character, in em.
pub fn char_width(c: char) -> f32 {
    if is_narrow(c) { 0.5 } else { 1.0 }
}

/// Printable ASCII is set at half width.
fn is_narrow(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Width of `text` at `font_size`, in points.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width).sum::<f32>() * font_size
}

/// A unit the wrapper places as a whole.
#[derive(Debug, PartialEq)]
enum Token<'a> {
    Word(&'a str),
    Space,
}

/// Split a paragraph into words, spaces, and single wide characters.
fn tokenize(paragraph: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in paragraph.char_indices() {
        if c == ' ' || !is_narrow(c) {
            if let Some(start) = word_start.take() {
                tokens.push(Token::Word(&paragraph[start..i]));
            }
            if c == ' ' {
                tokens.push(Token::Space);
            } else {
                tokens.push(Token::Word(&paragraph[i..i + c.len_utf8()]));
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(Token::Word(&paragraph[start..]));
    }

    tokens
}

/// Greedy line filling of a single paragraph.
fn wrap_paragraph(paragraph: &str, max_width: f32, font_size: f32, lines: &mut Vec<String>) {
    let mut line = String::new();
    let mut width = 0.0f32;
    let space = char_width(' ') * font_size;

    for token in tokenize(paragraph) {
        match token {
            Token::Space => {
                if !line.is_empty() {
                    line.push(' ');
                    width += space;
                }
            }
            Token::Word(word) => {
                let word_width = text_width(word, font_size);
                if width + word_width <= max_width {
                    line.push_str(word);
                    width += word_width;
                    continue;
                }

                if !line.is_empty() {
                    lines.push(line.trim_end().to_string());
                    line.clear();
                    width = 0.0;
                }

                if word_width <= max_width {
                    line.push_str(word);
                    width = word_width;
                } else {
                    // Hard-split a word that cannot fit on any line.
                    for c in word.chars() {
                        let w = char_width(c) * font_size;
                        if width + w > max_width && !line.is_empty() {
                            lines.push(std::mem::take(&mut line));
                            width = 0.0;
                        }
                        line.push(c);
                        width += w;
                    }
                }
            }
        }
    }

    lines.push(line.trim_end().to_string());
}

/// Wrap `text` into lines no wider than `max_width` points.
///
/// Always returns at least one line per paragraph, possibly empty.
pub fn wrap(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, max_width, font_size, &mut lines);
    }
    lines
}

/// Encode text as big-endian UCS-2 for the `UniCNS-UCS2-H` CMap.
///
/// Characters outside the Basic Multilingual Plane become `?`.
pub fn encode_ucs2(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for c in text.chars() {
        let code = u16::try_from(c as u32).unwrap_or(b'?' as u16);
        out.extend_from_slice(&code.to_be_bytes());
    }
    out
}
