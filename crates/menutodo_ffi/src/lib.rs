//! FFI bridge crate exposing `menutodo_core` to the Flutter menu-bar shell.

pub mod api;
