//! Color types and conversions
//!
//! Three spaces, used in a fixed bottom-up order:
//!
//! - [`Rgb`]: 8-bit device color. Input and output of the crate.
//! - [`Xyz`]: CIE 1931 device-independent intermediate (D65/2°).
//! - [`Lab`]: perceptually-motivated space the CIEDE2000 metric runs in.
//!
//! # Example
//!
//! ```
//! use lab_match::{Lab, Rgb};
//!
//! // Device color in, Lab out; XYZ stays internal to the conversion.
//! let lab = Lab::from(Rgb::new(200, 10, 10));
//! assert!(lab.l > 0.0 && lab.l < 100.0);
//! ```

mod lab;
mod rgb;
mod xyz;

pub use lab::Lab;
pub use rgb::Rgb;
pub use xyz::Xyz;
