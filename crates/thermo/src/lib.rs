#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use thermo_image as image;

#[doc(inline)]
pub use thermo_imgproc as imgproc;
