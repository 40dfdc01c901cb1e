//! seedmap application: the commands behind the `seedmap` binary.

pub mod commands;
