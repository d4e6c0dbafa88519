//! A dynamic library exposing a handful of `SteamAPI_*` entry points
//!
//! Drop the built `libsteam_api.so` (or `.dylib`, `steam_api.dll`) next to `emulator-host` to get a
//! live host process without the real emulator. The host never calls into it.
#![allow(non_snake_case)]

#[no_mangle]
pub extern "C" fn SteamAPI_Init() -> bool {
    true
}

#[no_mangle]
pub extern "C" fn SteamAPI_Shutdown() {}

#[no_mangle]
pub extern "C" fn SteamAPI_IsSteamRunning() -> bool {
    true
}
