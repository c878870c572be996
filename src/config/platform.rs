use crate::constants::{EMULATOR_BASE_URL, HOST_BASE_URL};

/// Runtime platform the client runs on. The backend is reachable under a
/// different loopback address from inside the Android emulator than from the
/// host machine, and that is the only distinction that matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    AndroidEmulator,
    Host,
}

impl Platform {
    /// Default backend base address for this platform.
    pub fn base_url(self) -> &'static str {
        match self {
            Platform::AndroidEmulator => EMULATOR_BASE_URL,
            Platform::Host => HOST_BASE_URL,
        }
    }

    /// Parse a platform name. Anything that is not an emulator spelling is
    /// treated as the host platform.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "android" | "android-emulator" | "emulator" => Platform::AndroidEmulator,
            _ => Platform::Host,
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::Host
    }
}
