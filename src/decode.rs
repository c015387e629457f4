//! BMP decoding: header parsing, payload load, and pixel queries.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use log::trace;

use crate::error::BmpError;
use crate::header::{self, FILE_HEADER_LEN, FileHeader, INFO_HEADER_LEN, InfoHeader};
use crate::limits::Limits;
use crate::pixel::{Pixel, PixelLayout};

/// A decoded BMP image.
///
/// Construction decodes the whole file in one step: both headers are
/// parsed and validated, and the raw padded scanlines are loaded into an
/// owned buffer. The file handle is scoped to the constructor and closed
/// before it returns; the decoded value is immutable and answers
/// random-access pixel queries for its lifetime. Opening the same or
/// another path again simply constructs a new value.
#[derive(Clone, Debug)]
pub struct BmpImage {
    file_header: FileHeader,
    info: InfoHeader,
    layout: PixelLayout,
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<u8>,
}

impl BmpImage {
    /// Open and decode a BMP file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, BmpError> {
        Self::open_with_limits(path, None)
    }

    /// Open and decode a BMP file, enforcing `limits` before the pixel
    /// buffer is allocated.
    pub fn open_with_limits<P: AsRef<Path>>(
        path: P,
        limits: Option<&Limits>,
    ) -> Result<Self, BmpError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), limits)
    }

    /// Decode a BMP image already held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        Self::from_bytes_with_limits(data, None)
    }

    /// Decode in-memory bytes, enforcing `limits` before allocation.
    pub fn from_bytes_with_limits(data: &[u8], limits: Option<&Limits>) -> Result<Self, BmpError> {
        Self::from_reader(io::Cursor::new(data), limits)
    }

    fn from_reader<R: Read + Seek>(mut reader: R, limits: Option<&Limits>) -> Result<Self, BmpError> {
        let mut raw_file = [0u8; FILE_HEADER_LEN];
        read_exact_or_eof(&mut reader, &mut raw_file)?;
        let file_header = FileHeader::parse(&raw_file)?;

        // The 40-byte info header sits immediately before the pixel
        // data, so its position follows from the pixel data offset.
        let info_pos = file_header
            .pixel_data_offset
            .checked_sub(INFO_HEADER_LEN as u32)
            .ok_or_else(|| {
                BmpError::InvalidHeader(format!(
                    "pixel data offset {} leaves no room for an info header",
                    file_header.pixel_data_offset
                ))
            })?;
        reader.seek(SeekFrom::Start(u64::from(info_pos)))?;

        let mut raw_info = [0u8; INFO_HEADER_LEN];
        read_exact_or_eof(&mut reader, &mut raw_info)?;
        let info = InfoHeader::parse(&raw_info);
        info.validate()?;

        // validate() guarantees positive dimensions and a 24/32 depth.
        let width = info.width as u32;
        let height = info.height as u32;
        let layout = PixelLayout::from_bit_count(info.bit_count)
            .ok_or(BmpError::UnsupportedDepth(info.bit_count))?;

        let stride = header::row_stride(width, info.bit_count)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        let needed = stride
            .checked_mul(height as usize)
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;

        if let Some(limits) = limits {
            limits.check(width, height)?;
            limits.check_memory(needed)?;
        }

        trace!(
            "decoding {width}x{height} {}-bit BMP, stride {stride}, pixel data at offset {}",
            info.bit_count, file_header.pixel_data_offset
        );

        // The cursor now sits exactly at the pixel data offset. Scanlines
        // are kept as stored, padding included; bytes past the buffer are
        // ignored, a short payload is an error.
        let mut data = vec![0u8; needed];
        let actual = read_until_full(&mut reader, &mut data)?;
        if actual < needed {
            return Err(BmpError::TruncatedPixelData { needed, actual });
        }

        Ok(Self {
            file_header,
            info,
            layout,
            width,
            height,
            stride,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Bits per pixel: 24 or 32.
    pub fn bit_count(&self) -> u16 {
        self.info.bit_count
    }

    /// Pixel layout of the stored scanlines.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Bytes per stored scanline, padding included.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The parsed 14-byte file header.
    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    /// The parsed 40-byte info header.
    pub fn info_header(&self) -> &InfoHeader {
        &self.info
    }

    /// Copy out the pixel at column `x`, row `y`.
    ///
    /// `y = 0` is the topmost visual row. Scanlines are stored bottom to
    /// top, so the accessor flips the row index before computing the byte
    /// offset. Coordinates outside the image fail with
    /// [`BmpError::OutOfBounds`].
    pub fn pixel(&self, x: u32, y: u32) -> Result<Pixel, BmpError> {
        if x >= self.width || y >= self.height {
            return Err(BmpError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let row = (self.height - 1 - y) as usize;
        let offset = row * self.stride + x as usize * self.layout.bytes_per_pixel();
        let pixel = match self.layout {
            PixelLayout::Bgr8 => Pixel::Bgr([
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2],
            ]),
            PixelLayout::Bgra8 => Pixel::Bgra([
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2],
                self.data[offset + 3],
            ]),
        };
        Ok(pixel)
    }
}

/// Read exactly `buf.len()` bytes, mapping a short read to
/// [`BmpError::UnexpectedEof`] rather than surfacing the raw i/o error.
fn read_exact_or_eof<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), BmpError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => BmpError::UnexpectedEof,
        _ => BmpError::Io(e),
    })
}

/// Fill `buf` from `reader`, returning how many bytes arrived before EOF.
fn read_until_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, BmpError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(BmpError::Io(e)),
        }
    }
    Ok(filled)
}
