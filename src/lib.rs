//! # bmpascii
//!
//! Uncompressed BMP decoding and ASCII-art rendering.
//!
//! Reads the classic Windows BMP subset: BITMAPINFOHEADER (40-byte)
//! files, 24-bit BGR or 32-bit BGRA, uncompressed, bottom-up row order.
//! Decoding loads the raw padded scanlines once; pixel queries are then
//! random access and return owned copies in the file's native BGR(A)
//! byte order.
//!
//! ## Supported
//!
//! - 24-bit and 32-bit uncompressed (BI_RGB) BMP files
//! - Bottom-up storage with 4-byte row alignment
//! - Opt-in decode resource limits
//!
//! ## Non-Goals
//!
//! - RLE or bitfields compression
//! - Palette-indexed (1/4/8-bit) images
//! - Top-down (negative height) bitmaps
//! - Writing BMP files
//!
//! ## Usage
//!
//! ```no_run
//! use bmpascii::{AsciiRenderer, BmpImage};
//!
//! let image = BmpImage::open("logo.bmp")?;
//! println!("{}x{} {}-bit", image.width(), image.height(), image.bit_count());
//!
//! let pixel = image.pixel(0, 0)?;
//! println!("top-left B+G+R sum: {}", pixel.luminance());
//!
//! let mut out = Vec::new();
//! AsciiRenderer::new().render(&image, &mut out)?;
//! # Ok::<(), bmpascii::BmpError>(())
//! ```

#![forbid(unsafe_code)]

mod decode;
mod error;
mod header;
mod limits;
mod pixel;
pub mod render;

pub use decode::BmpImage;
pub use error::{BmpError, ErrorKind};
pub use header::{FileHeader, InfoHeader};
pub use limits::Limits;
pub use pixel::{Pixel, PixelLayout};
pub use render::AsciiRenderer;
