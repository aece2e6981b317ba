/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A decode session over an external camera RAW engine
//!
//! This crate turns a LibRaw-style decoding engine into a safe, strict
//! pipeline: open a file, unpack its sensor data, demosaic and color
//! process it, then extract one interleaved RGB bitmap whose pixels are
//! handed out through exact-size, depth-checked copies.
//!
//! The engine itself (demosaicing, white balance, color matrices) is not
//! implemented here; anything implementing [`RawEngine`] plugs in, which
//! also keeps every failure path testable without real camera files.
//!
//! Decoding always runs the same deterministic policy: 16 bit output
//! samples, linear gamma, camera white balance and color matrix, no
//! automatic brightening. See [`ProcessOptions::new_linear`].
//!
//! # Example
//! Decoding a file through an engine implementation:
//! ```no_run
//! use rawmill::{RawDecodeErrors, RawEngine, RawSession};
//!
//! fn decode_to_samples(engine: impl RawEngine) -> Result<Vec<u16>, RawDecodeErrors> {
//!     let mut session = RawSession::new(engine);
//!     session.decode("photo.arw")?;
//!
//!     let mut samples = vec![0_u16; session.data_size()? as usize / 2];
//!     session.copy_into_u16(&mut samples)?;
//!     Ok(samples)
//! }
//! ```
pub use bit_depth::BitDepth;
pub use engine::{EngineStatus, ImageKind, MemImage, RawEngine};
pub use errors::RawDecodeErrors;
pub use options::ProcessOptions;
pub use session::RawSession;

pub mod bit_depth;
pub mod engine;
pub mod errors;
pub mod options;
pub mod serde;
pub mod session;
