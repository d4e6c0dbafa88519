//! Ownership of the dynamically loaded emulator library
//!
use std::path::Path;

use dlopen2::raw::Library;

use crate::error::{HostError, Result};

/// A successfully loaded library.
///
/// Only [`EmulatorLibrary::load`] creates one, so holding a value means the loader accepted the file.
/// Dropping it unloads the library; the host keeps it alive until the process is killed.
pub struct EmulatorLibrary {
    // never called through, only kept mapped
    _lib: Library,
    path: String,
}

impl EmulatorLibrary {

    /// Maps the library into the process with lazy symbol binding.
    ///
    /// The path is handed to the OS loader untouched; a relative one is resolved against the working directory.
    pub fn load(libname: &str) -> Result<Self> {
        log::debug!("Opening library: '{libname}'");
        // dlopen2 opens with RTLD_LAZY | RTLD_LOCAL on unix
        let lib = Library::open(libname)
            .map_err(|e| HostError::library_load(libname, e))?;
        log::debug!("Library mapped: '{libname}'");
        Ok(Self { _lib: lib, path: libname.to_string() })
    }

    pub fn path(&self) -> &Path {
        Path::new(&self.path)
    }
}

impl Drop for EmulatorLibrary {
    fn drop(&mut self) {
        log::trace!("unloading library '{}'", self.path);
    }
}
