// rfidrw-rs/rfidrw/src/device/mod.rs

//! Reader handle with a compile-time initialization state, a builder, and
//! (with the `async` feature) a tokio-facing wrapper.

#[cfg(feature = "async")]
pub mod asynchronous;
pub mod builder;
pub mod handle;

#[cfg(feature = "async")]
pub use asynchronous::AsyncDevice;
pub use builder::DeviceBuilder;
pub use handle::{Device, Initialized, Uninitialized};
