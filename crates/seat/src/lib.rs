//! Bus seat identifiers and the QR codes printed on the seats.

mod code;
pub use code::*;

mod error;
pub use error::*;

mod label;
pub use label::*;

mod range;
pub use range::*;
