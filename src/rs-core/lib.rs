use wasm_bindgen::prelude::*;

pub mod bindings;
mod config;
pub mod controller;
pub mod host;
pub mod provider;
pub mod runtime;
pub mod session;
mod utils;
pub mod waiter;

pub use utils::logger::{Logger, LoggerLevel};
