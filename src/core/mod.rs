pub mod round;
pub use round::*;
pub mod exp2;
pub use exp2::*;
mod exp2_table;
pub mod base32z;
pub use base32z::*;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
