//! Transform-operation builder
//!
//! Maps the CMS's abstract image options (crop rectangle, target size, upsample
//! flag) to the ordered list of transform operations the CDN's URL-based
//! transformation API expects. The CDN applies operations left to right, so a
//! crop always precedes a resize.

use serde::{Deserialize, Serialize};

/// Abstract image options as passed in by the CMS.
///
/// Dimension strings use the `"{width}x{height}"` form. None of the fields are
/// validated here; malformed numeric text degrades to `0` rather than failing
/// (see [`build_transformations`]).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TransformOptions {
    /// Target size, `"{width}x{height}"`
    pub size: Option<String>,
    /// Whether to crop to the rectangle given by `crop_from`/`crop_size`
    #[serde(default)]
    pub crop: bool,
    /// Top-left offset of the crop rectangle in pixels, `"{x}x{y}"`
    pub crop_from: Option<String>,
    /// Crop rectangle dimensions in pixels, `"{w}x{h}"`
    pub crop_size: Option<String>,
    /// Allow enlarging beyond the source dimensions. Only consulted when
    /// `crop` is false.
    #[serde(default)]
    pub upsample: bool,
    /// Scheme of the generated URL. Consumed by the URL-assembly step, not by
    /// the transformation builder.
    pub secure: Option<bool>,
}

/// Resize behavior understood by the CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CropMode {
    /// Scale to exactly fill the target size, cropping excess
    Fill,
    /// Scale to fit within the target size, enlarging if necessary
    Fit,
    /// Like fit, but never enlarge beyond the source dimensions
    Limit,
}

impl CropMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CropMode::Fill => "fill",
            CropMode::Fit => "fit",
            CropMode::Limit => "limit",
        }
    }
}

/// Crop to a pixel rectangle, addressed by its center point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropOp {
    pub crop: &'static str,
    pub gravity: &'static str,
    pub x: i64,
    pub y: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Scale to a target size with the given [`CropMode`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResizeOp {
    pub crop: CropMode,
    pub size: String,
}

/// One step in the ordered transform pipeline sent to the CDN
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransformOp {
    Crop(CropOp),
    Resize(ResizeOp),
}

/// Build the ordered transform list for the given options.
///
/// Pure function, no I/O. Returns at most two operations: an optional crop
/// followed by an optional resize. Missing or malformed inputs never fail;
/// they simply drop the affected operation or degrade its coordinates to `0`.
pub fn build_transformations(options: &TransformOptions) -> Vec<TransformOp> {
    let mut ops = Vec::with_capacity(2);
    if let Some(crop) = crop_transformation(options) {
        ops.push(TransformOp::Crop(crop));
    }
    if let Some(resize) = resize_transformation(options) {
        ops.push(TransformOp::Resize(resize));
    }
    ops
}

/// Crop operation, present iff `crop` is set and `crop_from` is non-blank.
///
/// The CDN addresses crops by center point, so the top-left offset is shifted
/// by half the rectangle size and rounded (half away from zero).
fn crop_transformation(options: &TransformOptions) -> Option<CropOp> {
    if !options.crop {
        return None;
    }
    let crop_from = options
        .crop_from
        .as_deref()
        .filter(|s| !s.trim().is_empty())?;

    let (x_from, y_from) = split_offset(crop_from);
    let (size_x, size_y) = split_dimensions(options.crop_size.as_deref().unwrap_or(""));

    Some(CropOp {
        crop: "crop",
        gravity: "xy_center",
        x: (x_from as f64 + size_x / 2.0).round() as i64,
        y: (y_from as f64 + size_y / 2.0).round() as i64,
        size: options.crop_size.clone(),
    })
}

fn resize_transformation(options: &TransformOptions) -> Option<ResizeOp> {
    let size = options.size.as_ref()?;
    Some(ResizeOp {
        crop: crop_mode(options),
        size: size.clone(),
    })
}

fn crop_mode(options: &TransformOptions) -> CropMode {
    if options.crop {
        CropMode::Fill
    } else if options.upsample {
        CropMode::Fit
    } else {
        CropMode::Limit
    }
}

/// Split a `"{x}x{y}"` offset string into integer halves.
///
/// A missing separator leaves the second half at `0`.
fn split_offset(s: &str) -> (i64, i64) {
    match s.split_once('x') {
        Some((a, b)) => (lenient_int(a), lenient_int(b)),
        None => (lenient_int(s), 0),
    }
}

/// Split a `"{w}x{h}"` dimension string into float halves for the halving math.
fn split_dimensions(s: &str) -> (f64, f64) {
    match s.split_once('x') {
        Some((a, b)) => (lenient_float(a), lenient_float(b)),
        None => (lenient_float(s), 0.0),
    }
}

/// Parse the leading integer of a string, `0` when there is none.
fn lenient_int(s: &str) -> i64 {
    let t = s.trim();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = rest
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit())
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);
    let value: i64 = rest[..end].parse().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}

/// Parse the leading decimal number of a string, `0.0` when there is none.
fn lenient_float(s: &str) -> f64 {
    let t = s.trim();
    let (negative, rest) = match t.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let bytes = rest.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac = end + 1;
        while frac < bytes.len() && bytes[frac].is_ascii_digit() {
            frac += 1;
        }
        if frac > end + 1 {
            end = frac;
        }
    }
    let value: f64 = rest[..end].parse().unwrap_or(0.0);
    if negative {
        -value
    } else {
        value
    }
}
