pub mod asset;
pub mod exif;
pub mod face;
pub mod preferences;
pub mod stack;
pub mod tag;
pub mod user;

pub use asset::*;
pub use exif::*;
pub use face::*;
pub use preferences::*;
pub use stack::*;
pub use tag::*;
pub use user::*;
