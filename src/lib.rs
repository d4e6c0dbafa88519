//! Test fixture that keeps the emulator's steam_api library loaded in a live process

pub use emulator_library::EmulatorLibrary;
pub use error::{HostError, Result};
pub use host::{announce, host, idle_forever, LIBRARY_PATH};

pub mod emulator_library;
mod error;
pub mod host;
