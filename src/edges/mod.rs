//! Edge processing building blocks: image gradients and a Canny-style
//! detector.
//!
//! - Gradient computation (Sobel) returning `gx`, `gy` and an L1 magnitude.
//! - Canny: non-maximum suppression along the quantized gradient direction,
//!   double thresholding and hysteresis, producing a binary edge mask.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate).
//! - Keep the threshold scale compatible with the common Sobel-L1 convention
//!   so values like (50, 150) behave as expected.

pub mod canny;
pub mod grad;

pub use canny::canny;
pub use grad::{sobel_gradients, Grad};
