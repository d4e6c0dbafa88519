//! The loader host: load the emulator library once, announce it, then stay alive until killed.

use std::convert::Infallible;
use std::io::Write;
use std::time::Duration;

use crate::emulator_library::EmulatorLibrary;
use crate::error::Result;

/// Where the emulator library is expected, relative to the working directory.
#[cfg(target_os = "macos")]
pub const LIBRARY_PATH: &str = "./libsteam_api.dylib";
#[cfg(windows)]
pub const LIBRARY_PATH: &str = ".\\steam_api.dll";
#[cfg(not(any(target_os = "macos", windows)))]
pub const LIBRARY_PATH: &str = "./libsteam_api.so";

pub const LOADED_MESSAGE: &str = "Goldberg Emulator library loaded successfully.";
pub const RUNNING_MESSAGE: &str = "Emulator host is running. Press Ctrl+C to stop.";

pub const IDLE_INTERVAL: Duration = Duration::from_secs(1);

/// Writes the two status lines of a successful load.
pub fn announce<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{LOADED_MESSAGE}")?;
    writeln!(out, "{RUNNING_MESSAGE}")?;
    out.flush()
}

/// Sleeps forever while keeping `library` mapped.
pub fn idle_forever(library: &EmulatorLibrary) -> ! {
    log::debug!("Idling with '{}' loaded", library.path().display());
    loop {
        std::thread::sleep(IDLE_INTERVAL);
        log::trace!("still alive");
    }
}

/// Loads `libname` and, on success, never returns.
///
/// There is exactly one load attempt: an `Err` means the library was never mapped,
/// otherwise the host owns it until the process is killed.
pub fn host(libname: &str) -> Result<Infallible> {
    let library = EmulatorLibrary::load(libname)?;
    if let Err(e) = announce(&mut std::io::stdout().lock()) {
        // the harness may have closed our stdout; keep the library alive regardless
        log::warn!("Cannot write status: {e}");
    }
    idle_forever(&library)
}

#[cfg(test)]
mod tests {
    use crate::HostError;
    use super::*;

    #[test]
    fn announce_writes_exactly_two_lines() {
        let mut out = Vec::new();
        announce(&mut out).unwrap();
        assert_eq!(
            "Goldberg Emulator library loaded successfully.\nEmulator host is running. Press Ctrl+C to stop.\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn host_returns_load_error() {
        let err = host("./no-such-dir/libsteam_api.so").err().expect("must fail");
        assert!(err.to_string().starts_with("Cannot open library: "));
        let HostError::LibraryLoad { path, .. } = err;
        assert_eq!("./no-such-dir/libsteam_api.so", path);
    }

    #[test]
    fn library_path_is_relative() {
        assert!(std::path::Path::new(LIBRARY_PATH).is_relative());
        assert!(LIBRARY_PATH.contains("steam_api"));
    }
}
