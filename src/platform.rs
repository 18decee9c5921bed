//! Hardware and system information sources.
//!
//! The interpreter never talks to hardware directly. Boards implement
//! [`Platform`] and hand a reference to the [`Dispatcher`](crate::dispatch::Dispatcher);
//! tests substitute a fake.
//!
//! ```rust
//! use serialcmd::platform::{MacType, Platform};
//!
//! struct Board;
//!
//! impl Platform for Board {
//!     fn read_mac(&self, _kind: MacType) -> [u8; 6] {
//!         [0x24, 0x0A, 0xC4, 0x00, 0x00, 0x01]
//!     }
//!     fn uptime_seconds(&self) -> u64 {
//!         0
//!     }
//!     fn core_count(&self) -> u8 {
//!         1
//!     }
//!     fn free_heap_bytes(&self) -> u32 {
//!         0
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Which network interface's MAC address to report.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MacType {
    /// Wi-Fi station interface.
    #[default]
    Station,
    /// Wi-Fi soft access point interface.
    SoftAp,
    /// Bluetooth interface.
    Bluetooth,
    /// Wired Ethernet interface.
    Ethernet,
}

#[cfg(feature = "defmt")]
impl defmt::Format for MacType {
    fn format(&self, f: defmt::Formatter) {
        match self {
            MacType::Station => defmt::write!(f, "Station"),
            MacType::SoftAp => defmt::write!(f, "SoftAp"),
            MacType::Bluetooth => defmt::write!(f, "Bluetooth"),
            MacType::Ethernet => defmt::write!(f, "Ethernet"),
        }
    }
}

/// Device queries consumed by the command handlers.
pub trait Platform {
    /// Read the six raw bytes of the requested interface's MAC address.
    fn read_mac(&self, kind: MacType) -> [u8; 6];

    /// Seconds elapsed since boot.
    fn uptime_seconds(&self) -> u64;

    /// Number of CPU cores on the chip.
    fn core_count(&self) -> u8;

    /// Currently free heap memory in bytes.
    fn free_heap_bytes(&self) -> u32;
}
