pub mod gray;
pub mod hsv;
pub mod io;
pub mod mask;
pub mod rgb;

pub use self::gray::{GrayImage, GrayView};
pub use self::hsv::{rgb_to_hsv, Hsv, HsvRange};
pub use self::mask::Mask;
pub use self::rgb::{RgbImage, RgbView};
