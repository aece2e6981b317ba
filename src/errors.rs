/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding a RAW file or handing out its pixels

use std::fmt::{Debug, Formatter};

use crate::engine::ImageKind;

/// RawDecodeErrors that can occur during a decode session
///
/// Every stage failure carries the engine's own description of what went
/// wrong, shape and size failures carry the observed values, so a failed
/// decode can be diagnosed without rerunning it.
pub enum RawDecodeErrors {
    /// The engine could not open the file, carries the attempted path
    /// and the engine's reason
    OpenFailed(String, String),
    /// The engine could not decode the sensor data
    UnpackFailed(String),
    /// The engine could not demosaic or color process the sensor data
    ProcessFailed(String),
    /// The engine did not produce a memory image
    ExtractFailed(String),
    /// The extracted image is not an uncompressed bitmap
    NotABitmap(ImageKind),
    /// The extracted image does not have exactly three color channels
    UnsupportedChannelCount(u8),
    /// No decode has succeeded yet, there is no image to query
    NoImageLoaded,
    /// A copy-out was requested at a different depth than the image
    /// holds, `(requested bits, image bits)`
    WrongDepth(u16, u16),
    /// The caller's buffer does not span the image byte size exactly,
    /// `(expected bytes, found bytes)`
    WrongBufferSize(usize, usize)
}

impl Debug for RawDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenFailed(path, reason) => {
                writeln!(f, "Failed to open {path}: {reason}")
            }
            Self::UnpackFailed(reason) => {
                writeln!(f, "Failed to unpack RAW data: {reason}")
            }
            Self::ProcessFailed(reason) => {
                writeln!(f, "Failed to process image: {reason}")
            }
            Self::ExtractFailed(reason) => {
                writeln!(f, "Failed to create memory image: {reason}")
            }
            Self::NotABitmap(kind) => {
                writeln!(f, "Image is not a bitmap, the engine produced {kind:?}")
            }
            Self::UnsupportedChannelCount(channels) => {
                writeln!(
                    f,
                    "Unsupported channel count {channels}, expected 3 channel RGB"
                )
            }
            Self::NoImageLoaded => {
                writeln!(f, "No image loaded")
            }
            Self::WrongDepth(requested, found) => {
                writeln!(
                    f,
                    "Expected bit depth of {requested} but image depth is {found}"
                )
            }
            Self::WrongBufferSize(expected, found) => {
                writeln!(
                    f,
                    "Buffer size mismatch. Expected {expected} bytes, got {found} bytes"
                )
            }
        }
    }
}
