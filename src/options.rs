/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The decode policy handed to the engine
//!
//! Every decode runs with the same deterministic parameters, this module
//! names them in one place so the invariant is explicit and engines can
//! observe exactly what they were configured with.

use crate::bit_depth::BitDepth;

/// Processing parameters an engine is configured with before a decode.
///
/// The session always decodes with [`ProcessOptions::new_linear`], the
/// struct is not a set of per call knobs. Engines read the values through
/// the getters when [`configure`](crate::RawEngine::configure) is called.
#[derive(Debug, Copy, Clone)]
pub struct ProcessOptions {
    /// Requested sample depth of the output image
    ///
    /// - Value: `BitDepth::Sixteen`
    output_depth:       BitDepth,
    /// Gamma curve as `(power, toe slope)`
    ///
    /// - Value: `(1.0, 1.0)`, no tone curve
    gamma:              (f64, f64),
    /// Whether to apply the white balance the camera recorded
    ///
    /// - Value: `true`
    use_camera_wb:      bool,
    /// Whether to apply the camera's color matrix
    ///
    /// - Value: `true`
    use_camera_matrix:  bool,
    /// Whether the engine may brighten the image automatically
    ///
    /// - Value: `false`
    auto_bright:        bool,
    /// Portion of clipped highlights tolerated when the engine adjusts
    /// the white level
    ///
    /// - Value: `0.0`
    adjust_maximum_thr: f32
}

impl ProcessOptions {
    /// The fixed pipeline policy: 16 bit samples, linear gamma, camera
    /// white balance and color matrix, no automatic brightening and a
    /// zero saturation adjustment threshold.
    ///
    /// Decoding with one policy keeps repeated decodes of the same file
    /// byte identical.
    pub const fn new_linear() -> ProcessOptions {
        ProcessOptions {
            output_depth:       BitDepth::Sixteen,
            gamma:              (1.0, 1.0),
            use_camera_wb:      true,
            use_camera_matrix:  true,
            auto_bright:        false,
            adjust_maximum_thr: 0.0
        }
    }

    /// Requested output sample depth.
    pub const fn output_depth(&self) -> BitDepth {
        self.output_depth
    }

    /// Gamma curve as `(power, toe slope)`.
    pub const fn gamma(&self) -> (f64, f64) {
        self.gamma
    }

    /// True if the camera recorded white balance should be applied.
    pub const fn use_camera_wb(&self) -> bool {
        self.use_camera_wb
    }

    /// True if the camera color matrix should be applied.
    pub const fn use_camera_matrix(&self) -> bool {
        self.use_camera_matrix
    }

    /// True if the engine may adjust brightness automatically.
    pub const fn auto_bright(&self) -> bool {
        self.auto_bright
    }

    /// Threshold for deriving the white level from clipped highlights.
    pub const fn adjust_maximum_thr(&self) -> f32 {
        self.adjust_maximum_thr
    }
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self::new_linear()
    }
}

#[cfg(test)]
mod tests {
    use crate::bit_depth::BitDepth;
    use crate::options::ProcessOptions;

    #[test]
    fn default_is_the_linear_policy() {
        let options = ProcessOptions::default();

        assert_eq!(options.output_depth(), BitDepth::Sixteen);
        assert_eq!(options.gamma(), (1.0, 1.0));
        assert!(options.use_camera_wb());
        assert!(options.use_camera_matrix());
        assert!(!options.auto_bright());
        assert_eq!(options.adjust_maximum_thr(), 0.0);
    }
}
