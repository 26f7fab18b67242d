//! Connection acceptor

pub mod listener;

pub use listener::{run, serve};
