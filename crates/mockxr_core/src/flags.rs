//! Extension flags negotiated at runtime creation
//!
//! The runtime's optional behavior is fixed when it is constructed. Each
//! flag corresponds to one OpenXR extension the emulator knows how to fake;
//! everything downstream (interaction profiles, capability dispatch, view
//! configurations) keys off this set.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitset of extensions enabled for a runtime instance
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExtensionFlags(u64);

impl ExtensionFlags {
    pub const NONE: Self = Self(0);
    /// Test-driver hooks (scripted events, state forcing)
    pub const DRIVER: Self = Self(0x0000_0001);
    /// Headless rendering without a graphics device
    pub const NULL_GFX: Self = Self(0x0000_0002);
    /// `XR_EXT_conformance_automation`
    pub const CONFORMANCE_AUTOMATION: Self = Self(0x0000_0004);
    /// `XR_KHR_composition_layer_depth`
    pub const COMPOSITION_LAYER_DEPTH: Self = Self(0x0000_0008);
    /// `XR_KHR_vulkan_enable2`
    pub const VULKAN_GFX: Self = Self(0x0000_0010);
    /// `XR_KHR_D3D11_enable`
    pub const D3D11_GFX: Self = Self(0x0000_0020);
    /// `XR_VARJO_quad_views`
    pub const VARJO_QUAD_VIEWS: Self = Self(0x0000_0040);
    /// `XR_MSFT_secondary_view_configuration`
    pub const MSFT_SECONDARY_VIEW_CONFIGURATION: Self = Self(0x0000_0080);
    /// `XR_MSFT_first_person_observer`
    pub const MSFT_FIRST_PERSON_OBSERVER: Self = Self(0x0000_0100);
    /// `XR_EXT_eye_gaze_interaction`
    pub const EYE_GAZE_INTERACTION: Self = Self(0x0000_0200);
    /// `XR_MSFT_hand_interaction`
    pub const MSFT_HAND_INTERACTION: Self = Self(0x0000_0400);
    /// `XR_MSFT_third_person_observer` (vendor test extension)
    pub const MSFT_THIRD_PERSON_OBSERVER: Self = Self(0x0000_0800);

    /// Every graphics binding flavor
    pub const ALL_GFX: Self =
        Self(Self::NULL_GFX.0 | Self::VULKAN_GFX.0 | Self::D3D11_GFX.0);

    /// Negotiate flags from requested extension names.
    ///
    /// Unknown names are ignored rather than rejected, matching a runtime
    /// that simply does not advertise them.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = Self::NONE;
        for name in names {
            if let Some(flag) = Self::from_name(name) {
                flags |= flag;
            } else {
                log::debug!("ignoring unknown extension: {name}");
            }
        }
        flags
    }

    /// Map a single extension name to its flag
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "XR_EXT_conformance_automation" => Some(Self::CONFORMANCE_AUTOMATION),
            "XR_KHR_composition_layer_depth" => Some(Self::COMPOSITION_LAYER_DEPTH),
            "XR_KHR_vulkan_enable" | "XR_KHR_vulkan_enable2" => Some(Self::VULKAN_GFX),
            "XR_KHR_D3D11_enable" => Some(Self::D3D11_GFX),
            "XR_VARJO_quad_views" => Some(Self::VARJO_QUAD_VIEWS),
            "XR_MSFT_secondary_view_configuration" => {
                Some(Self::MSFT_SECONDARY_VIEW_CONFIGURATION)
            }
            "XR_MSFT_first_person_observer" => Some(Self::MSFT_FIRST_PERSON_OBSERVER),
            "XR_EXT_eye_gaze_interaction" => Some(Self::EYE_GAZE_INTERACTION),
            "XR_MSFT_hand_interaction" => Some(Self::MSFT_HAND_INTERACTION),
            "XR_MSFT_third_person_observer" => Some(Self::MSFT_THIRD_PERSON_OBSERVER),
            _ => None,
        }
    }

    /// Check whether every flag in `other` is set
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check whether at least one flag in `other` is set
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn bits(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }
}

impl BitOr for ExtensionFlags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for ExtensionFlags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ExtensionFlags {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for ExtensionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExtensionFlags({:#x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_known_and_unknown() {
        let flags = ExtensionFlags::from_names([
            "XR_EXT_conformance_automation",
            "XR_FAKE_not_a_real_extension",
            "XR_VARJO_quad_views",
        ]);
        assert!(flags.contains(ExtensionFlags::CONFORMANCE_AUTOMATION));
        assert!(flags.contains(ExtensionFlags::VARJO_QUAD_VIEWS));
        assert!(!flags.intersects(ExtensionFlags::ALL_GFX));
    }

    #[test]
    fn test_contains_requires_all() {
        let flags = ExtensionFlags::VULKAN_GFX | ExtensionFlags::EYE_GAZE_INTERACTION;
        assert!(flags.contains(ExtensionFlags::VULKAN_GFX));
        assert!(!flags.contains(ExtensionFlags::VULKAN_GFX | ExtensionFlags::D3D11_GFX));
        assert!(flags.intersects(ExtensionFlags::ALL_GFX));
    }
}
