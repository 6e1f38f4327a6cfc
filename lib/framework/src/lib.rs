#[macro_use]
pub mod exception;
pub mod asset;
#[cfg(feature = "firehose")]
pub mod firehose;
pub mod json;
pub mod log;
