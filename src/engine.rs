/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The contract between a decode session and its engine
//!
//! The engine is the component that understands camera RAW formats,
//! demosaics and color processes them. The session only ever drives it
//! through the small surface in [`RawEngine`], so a binding to a native
//! library and a scripted test double are interchangeable.

use std::path::Path;

use crate::bit_depth::BitDepth;
use crate::options::ProcessOptions;

/// A status code reported by an engine stage.
///
/// Engines report stage outcomes numerically. Zero is reserved for
/// success, every other value identifies an engine specific failure
/// which [`RawEngine::describe`] can turn into text.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EngineStatus {
    code: i32
}

impl EngineStatus {
    /// The success status shared by every engine.
    pub const SUCCESS: EngineStatus = EngineStatus::new(0);

    /// Wrap a raw engine status code.
    pub const fn new(code: i32) -> EngineStatus {
        EngineStatus { code }
    }

    /// The raw numeric code.
    pub const fn code(self) -> i32 {
        self.code
    }

    /// Whether this status signals a successful stage.
    pub const fn is_success(self) -> bool {
        self.code == 0
    }
}

/// The kind of memory image an engine produced.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ImageKind {
    /// An uncompressed interleaved pixel buffer.
    Bitmap,
    /// A JPEG byte stream, e.g. an embedded preview passed through
    /// unchanged.
    Jpeg
}

/// One fully processed image extracted from an engine.
///
/// The image owns its pixel bytes, dropping it releases the engine
/// allocation. Samples are interleaved per pixel and kept in the byte
/// order the engine produced, which for 16 bit images is native order.
pub struct MemImage {
    kind:     ImageKind,
    width:    u16,
    height:   u16,
    depth:    BitDepth,
    channels: u8,
    data:     Vec<u8>
}

impl MemImage {
    /// Create an image from engine reported metadata and its pixel bytes.
    pub fn new(
        kind: ImageKind, width: u16, height: u16, depth: BitDepth, channels: u8, data: Vec<u8>
    ) -> MemImage {
        MemImage {
            kind,
            width,
            height,
            depth,
            channels,
            data
        }
    }

    /// The kind of image the engine produced.
    pub const fn kind(&self) -> ImageKind {
        self.kind
    }

    /// Image width in pixels.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Image height in pixels.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The sample depth of the pixel data.
    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Number of interleaved channels per pixel.
    pub const fn channels(&self) -> u8 {
        self.channels
    }

    /// Total size of the pixel data in bytes.
    ///
    /// This is the authoritative length a copy-out buffer has to match.
    pub fn data_size(&self) -> u32 {
        self.data.len() as u32
    }

    /// The interleaved pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// An external RAW decoding engine.
///
/// One engine instance backs one [`RawSession`](crate::RawSession) and is
/// driven through its stages strictly in order: [`configure`](Self::configure),
/// [`open`](Self::open), [`unpack`](Self::unpack), [`process`](Self::process),
/// [`make_mem_image`](Self::make_mem_image). A stage is never retried, a
/// failed stage ends the decode.
///
/// Implementations are expected to be blocking and are free to hold open
/// file handles and unpacked sensor buffers between calls.
pub trait RawEngine {
    /// Apply the processing parameters for the next decode.
    fn configure(&mut self, options: &ProcessOptions);

    /// Open the RAW file at `path` and read its metadata.
    fn open(&mut self, path: &Path) -> EngineStatus;

    /// Decode the sensor data of the currently open file.
    fn unpack(&mut self) -> EngineStatus;

    /// Demosaic, white balance and color process the unpacked data.
    fn process(&mut self) -> EngineStatus;

    /// Build the final interleaved memory image.
    ///
    /// Returns the image, or `None` when the engine could not produce
    /// one, together with the status of the attempt.
    fn make_mem_image(&mut self) -> (Option<MemImage>, EngineStatus);

    /// Human readable description of a status code, used for error
    /// payloads.
    fn describe(&self, status: EngineStatus) -> String;
}

#[cfg(test)]
mod tests {
    use crate::bit_depth::BitDepth;
    use crate::engine::{EngineStatus, ImageKind, MemImage};

    #[test]
    fn status_codes_roundtrip() {
        assert!(EngineStatus::SUCCESS.is_success());
        assert_eq!(EngineStatus::SUCCESS.code(), 0);

        let failure = EngineStatus::new(-100_007);
        assert!(!failure.is_success());
        assert_eq!(failure.code(), -100_007);
    }

    #[test]
    fn mem_image_reports_its_byte_size() {
        let image = MemImage::new(
            ImageKind::Bitmap,
            2,
            2,
            BitDepth::Sixteen,
            3,
            vec![0; 2 * 2 * 3 * 2]
        );

        assert_eq!(image.data_size(), 24);
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 2);
        assert_eq!(image.depth(), BitDepth::Sixteen);
        assert_eq!(image.channels(), 3);
        assert_eq!(image.kind(), ImageKind::Bitmap);
    }
}
