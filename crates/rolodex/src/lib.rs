#![doc = include_str!("../README.md")]

mod alloc;
mod client;
mod error;
mod service;
mod store;
mod time;

pub use crate::alloc::*;
pub use crate::client::*;
pub use crate::error::*;
pub use crate::service::*;
pub use crate::store::*;
pub use crate::time::*;
