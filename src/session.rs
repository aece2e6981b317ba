/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The RAW decode session
//!
//! A [`RawSession`] owns one engine and at most one decoded image. It
//! runs the fixed decode pipeline, open the file, unpack the sensor
//! data, color process it, extract the final bitmap, and then hands the
//! pixels out through exact-size copies at the image's depth.

use std::path::Path;

use log::{trace, warn};

use crate::bit_depth::BitDepth;
use crate::engine::{ImageKind, MemImage, RawEngine};
use crate::errors::RawDecodeErrors;
use crate::options::ProcessOptions;

/// A decode session over an external RAW engine.
///
/// The session is a strict state machine. A successful
/// [`decode`](Self::decode) stores exactly one image whose metadata and
/// pixels can then be queried; a failure at any stage leaves the session
/// without an image, indistinguishable from a freshly constructed one,
/// and safe to retry with the same or another path.
///
/// A session is not meant to be shared: it holds one mutable engine and
/// one image, there is no internal locking, and decoding in parallel
/// means one session per file.
pub struct RawSession<E: RawEngine> {
    engine:  E,
    options: ProcessOptions,
    image:   Option<MemImage>
}

impl<E: RawEngine> RawSession<E> {
    /// Create a session with no decoded image.
    ///
    /// No I/O happens here, the first work is done by
    /// [`decode`](Self::decode).
    pub fn new(engine: E) -> RawSession<E> {
        RawSession {
            engine,
            options: ProcessOptions::new_linear(),
            image: None
        }
    }

    /// Decode the RAW file at `path` into a memory image.
    ///
    /// The engine is configured with the linear 16 bit policy and then
    /// driven through its stages in order, failing on the first stage
    /// that reports an error. A stage is never retried and no alternate
    /// settings are attempted.
    ///
    /// The image of a previous decode, if any, is released before the
    /// engine touches the new file, so a failed call never leaves stale
    /// pixels queryable.
    pub fn decode<P: AsRef<Path>>(&mut self, path: P) -> Result<(), RawDecodeErrors> {
        let path = path.as_ref();

        // Release the previous image up front, a decode that errors out
        // below must not leave the last file's pixels behind.
        self.image = None;

        self.engine.configure(&self.options);

        let status = self.engine.open(path);
        if !status.is_success() {
            return Err(RawDecodeErrors::OpenFailed(
                path.display().to_string(),
                self.engine.describe(status)
            ));
        }
        trace!("Opened {}", path.display());

        let status = self.engine.unpack();
        if !status.is_success() {
            return Err(RawDecodeErrors::UnpackFailed(self.engine.describe(status)));
        }
        trace!("Unpacked sensor data");

        let status = self.engine.process();
        if !status.is_success() {
            return Err(RawDecodeErrors::ProcessFailed(self.engine.describe(status)));
        }
        trace!("Color processed sensor data");

        let (image, status) = self.engine.make_mem_image();

        let image = match image {
            Some(image) => image,
            None => {
                if status.is_success() {
                    // Engines that fail extraction also report a failure
                    // status, so this combination should be unreachable.
                    warn!("Engine produced no image but reported a success status");
                }
                return Err(RawDecodeErrors::ExtractFailed(self.engine.describe(status)));
            }
        };

        if image.kind() != ImageKind::Bitmap {
            return Err(RawDecodeErrors::NotABitmap(image.kind()));
        }

        if image.channels() != 3 {
            return Err(RawDecodeErrors::UnsupportedChannelCount(image.channels()));
        }

        trace!("Image width: {}", image.width());
        trace!("Image height: {}", image.height());
        trace!("Bit depth: {:?}", image.depth());
        trace!("Data size: {}", image.data_size());

        self.image = Some(image);

        Ok(())
    }

    fn current(&self) -> Result<&MemImage, RawDecodeErrors> {
        self.image.as_ref().ok_or(RawDecodeErrors::NoImageLoaded)
    }

    /// Width in pixels of the decoded image.
    pub fn width(&self) -> Result<u16, RawDecodeErrors> {
        Ok(self.current()?.width())
    }

    /// Height in pixels of the decoded image.
    pub fn height(&self) -> Result<u16, RawDecodeErrors> {
        Ok(self.current()?.height())
    }

    /// Sample depth of the decoded image.
    ///
    /// The depth decides which copy-out is legal,
    /// [`copy_into_u8`](Self::copy_into_u8) for
    /// [`BitDepth::Eight`] and [`copy_into_u16`](Self::copy_into_u16)
    /// for [`BitDepth::Sixteen`].
    pub fn depth(&self) -> Result<BitDepth, RawDecodeErrors> {
        Ok(self.current()?.depth())
    }

    /// Size in bytes of the decoded pixel data.
    ///
    /// This is the exact byte length a copy-out buffer has to span, no
    /// partial copies or truncation are performed.
    pub fn data_size(&self) -> Result<u32, RawDecodeErrors> {
        Ok(self.current()?.data_size())
    }

    /// Copy the pixels of an 8 bit image into `buffer`.
    ///
    /// `buffer` must be exactly [`data_size`](Self::data_size) bytes
    /// long. The copy is byte for byte and leaves the session's image in
    /// place, so it can be copied from again.
    pub fn copy_into_u8(&self, buffer: &mut [u8]) -> Result<(), RawDecodeErrors> {
        let image = self.current()?;

        if image.depth() != BitDepth::Eight {
            return Err(RawDecodeErrors::WrongDepth(
                8,
                image.depth().bit_size() as u16
            ));
        }
        copy_image_bytes(image, buffer)
    }

    /// Copy the pixels of a 16 bit image into `buffer`.
    ///
    /// `buffer` must span exactly [`data_size`](Self::data_size) bytes,
    /// i.e. hold `data_size / 2` samples. The copy is a raw byte
    /// transfer, samples keep the byte order the engine produced them
    /// in, native order for a LibRaw-style engine.
    pub fn copy_into_u16(&self, buffer: &mut [u16]) -> Result<(), RawDecodeErrors> {
        let image = self.current()?;

        if image.depth() != BitDepth::Sixteen {
            return Err(RawDecodeErrors::WrongDepth(
                16,
                image.depth().bit_size() as u16
            ));
        }
        copy_image_bytes(image, bytemuck::cast_slice_mut(buffer))
    }

    /// Copy an 8 bit image into a newly allocated byte vector.
    pub fn to_vec_u8(&self) -> Result<Vec<u8>, RawDecodeErrors> {
        let mut buffer = vec![0_u8; self.data_size()? as usize];

        self.copy_into_u8(&mut buffer)?;
        Ok(buffer)
    }

    /// Copy a 16 bit image into a newly allocated vector of samples.
    pub fn to_vec_u16(&self) -> Result<Vec<u16>, RawDecodeErrors> {
        let mut buffer = vec![0_u16; self.data_size()? as usize / 2];

        self.copy_into_u16(&mut buffer)?;
        Ok(buffer)
    }
}

fn copy_image_bytes(image: &MemImage, buffer: &mut [u8]) -> Result<(), RawDecodeErrors> {
    let expected = image.data_size() as usize;

    if buffer.len() != expected {
        return Err(RawDecodeErrors::WrongBufferSize(expected, buffer.len()));
    }
    buffer.copy_from_slice(image.data());

    Ok(())
}
