pub mod api;
pub mod common;
pub mod contact;
pub mod image;

pub use api::*;
pub use common::*;
pub use contact::*;
pub use image::*;
