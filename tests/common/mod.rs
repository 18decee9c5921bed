//! Fake platform shared by the integration tests

#![allow(dead_code)]

use serialcmd::platform::{MacType, Platform};

pub const STATION_MAC: [u8; 6] = [0x01, 0x02, 0xAB, 0xCD, 0xEF, 0x00];
pub const ETHERNET_MAC: [u8; 6] = [0x24, 0x0A, 0xC4, 0x12, 0x34, 0x56];

/// Platform with fixed readings
pub struct MockPlatform {
    pub uptime_seconds: u64,
    pub core_count: u8,
    pub free_heap_bytes: u32,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            uptime_seconds: 42,
            core_count: 2,
            free_heap_bytes: 262_144,
        }
    }
}

impl Platform for MockPlatform {
    fn read_mac(&self, kind: MacType) -> [u8; 6] {
        match kind {
            MacType::Ethernet => ETHERNET_MAC,
            _ => STATION_MAC,
        }
    }

    fn uptime_seconds(&self) -> u64 {
        self.uptime_seconds
    }

    fn core_count(&self) -> u8 {
        self.core_count
    }

    fn free_heap_bytes(&self) -> u32 {
        self.free_heap_bytes
    }
}
