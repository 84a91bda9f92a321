pub mod config;
pub mod pad;
pub mod rand;

pub use config::{BlockSize, ConfigError, Filler, PadConfig, Variant};
pub use pad::{pad, pad_into, padding_len};
