#![cfg_attr(not(feature = "std"), no_std)]

pub mod config;
pub mod errors;
#[cfg(any(feature = "std", feature = "embassy"))]
pub mod fps;
pub mod host;
pub mod lights;
pub mod logging;
pub mod time;
