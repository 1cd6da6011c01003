pub mod utils;
pub mod long;
pub mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use long::Long;
pub use utils::ParseLongError;
pub use value::Value;
