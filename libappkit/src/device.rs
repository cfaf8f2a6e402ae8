//! Device metric predicates
//!
//! The host application queries the OS once and hands the numbers over as a
//! [`DeviceInfo`]; everything here is computed from that snapshot.

use serde::{Deserialize, Serialize};

use crate::types::Platform;

/// Logical heights (or widths, in landscape) of notched iPhone screens.
const NOTCHED_IPHONE_SIDES: [f64; 2] = [812.0, 896.0];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub platform: Platform,
    #[serde(default)]
    pub is_pad: bool,
    #[serde(default)]
    pub is_tv: bool,
    /// Visible application window
    pub window: Dimensions,
    /// Physical screen, including system bars
    pub screen: Dimensions,
}

impl DeviceInfo {
    pub fn is_ios(&self) -> bool {
        self.platform.is_ios()
    }

    pub fn is_android(&self) -> bool {
        self.platform.is_android()
    }

    /// iPhone X family: an iOS phone whose window has a notched-screen side.
    pub fn is_iphone_x(&self) -> bool {
        self.is_ios()
            && !self.is_pad
            && !self.is_tv
            && NOTCHED_IPHONE_SIDES
                .iter()
                .any(|&side| self.window.height == side || self.window.width == side)
    }

    /// Height taken by the Android on-screen navigation bar.
    pub fn android_bottom_navigation_bar_height(&self) -> f64 {
        (self.screen.height - self.window.height).max(0.0)
    }
}
