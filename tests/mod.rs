pub mod policy;
pub mod signal;
pub mod types;

#[cfg(feature = "async")]
pub mod async_ext;
