//! Entry-point capability registry
//!
//! Dispatch by table instead of a string-compare cascade: the registry maps
//! every supported entry-point name to a capability tag at construction, and
//! resolution is a single lookup. Extension entry points are only present
//! when the extension was negotiated, so an unknown or un-negotiated name
//! fails the same way.

use mockxr_core::{ExtensionFlags, RuntimeError, RuntimeResult};
use std::collections::HashMap;

/// Which part of the runtime serves an entry point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    Core,
    ConformanceAutomation,
    VulkanGraphics,
    D3D11Graphics,
    TimeConversion,
    TestControl,
}

const CORE_FUNCTIONS: &[&str] = &[
    "xrGetInstanceProcAddr",
    "xrEnumerateInstanceExtensionProperties",
    "xrCreateInstance",
    "xrDestroyInstance",
    "xrGetInstanceProperties",
    "xrPollEvent",
    "xrResultToString",
    "xrStructureTypeToString",
    "xrGetSystem",
    "xrGetSystemProperties",
    "xrEnumerateEnvironmentBlendModes",
    "xrCreateSession",
    "xrDestroySession",
    "xrEnumerateReferenceSpaces",
    "xrCreateReferenceSpace",
    "xrGetReferenceSpaceBoundsRect",
    "xrCreateActionSpace",
    "xrLocateSpace",
    "xrDestroySpace",
    "xrEnumerateViewConfigurations",
    "xrGetViewConfigurationProperties",
    "xrEnumerateViewConfigurationViews",
    "xrEnumerateSwapchainFormats",
    "xrCreateSwapchain",
    "xrDestroySwapchain",
    "xrEnumerateSwapchainImages",
    "xrAcquireSwapchainImage",
    "xrWaitSwapchainImage",
    "xrReleaseSwapchainImage",
    "xrBeginSession",
    "xrEndSession",
    "xrRequestExitSession",
    "xrWaitFrame",
    "xrBeginFrame",
    "xrEndFrame",
    "xrLocateViews",
    "xrStringToPath",
    "xrPathToString",
    "xrCreateActionSet",
    "xrDestroyActionSet",
    "xrCreateAction",
    "xrDestroyAction",
    "xrSuggestInteractionProfileBindings",
    "xrAttachSessionActionSets",
    "xrGetCurrentInteractionProfile",
    "xrGetActionStateBoolean",
    "xrGetActionStateFloat",
    "xrGetActionStateVector2f",
    "xrGetActionStatePose",
    "xrSyncActions",
    "xrEnumerateBoundSourcesForAction",
    "xrGetInputSourceLocalizedName",
    "xrApplyHapticFeedback",
    "xrStopHapticFeedback",
];

const TIME_CONVERSION_FUNCTIONS: &[&str] = &[
    "xrConvertTimeToWin32PerformanceCounterKHR",
    "xrConvertWin32PerformanceCounterToTimeKHR",
    "xrConvertTimeToTimespecTimeKHR",
    "xrConvertTimespecTimeToTimeKHR",
];

const CONFORMANCE_FUNCTIONS: &[&str] = &[
    "xrSetInputDeviceActiveEXT",
    "xrSetInputDeviceStateBoolEXT",
    "xrSetInputDeviceStateFloatEXT",
    "xrSetInputDeviceStateVector2fEXT",
    "xrSetInputDeviceLocationEXT",
];

const VULKAN_FUNCTIONS: &[&str] = &[
    "xrGetVulkanInstanceExtensionsKHR",
    "xrGetVulkanDeviceExtensionsKHR",
    "xrGetVulkanGraphicsDeviceKHR",
    "xrGetVulkanGraphicsRequirementsKHR",
];

const D3D11_FUNCTIONS: &[&str] = &["xrGetD3D11GraphicsRequirementsKHR"];

const TEST_CONTROL_FUNCTIONS: &[&str] = &[
    "mockSetViewPose",
    "mockSetViewStateFlags",
    "mockSetReferenceSpacePose",
    "mockSetActionSpacePose",
    "mockSetReferenceSpaceBounds",
    "mockTransitionSessionState",
    "mockRequestExitSession",
    "mockCauseInstanceLoss",
    "mockGetEndFrameStats",
    "mockActivateSecondaryView",
    "mockRegisterScriptEventCallback",
    "mockGetSessionState",
];

/// Name-to-capability table for one runtime instance
pub struct CapabilityRegistry {
    entries: HashMap<&'static str, Capability>,
}

impl CapabilityRegistry {
    pub fn new(flags: ExtensionFlags) -> Self {
        let mut entries = HashMap::new();
        let mut add = |names: &[&'static str], capability: Capability| {
            for &name in names {
                entries.insert(name, capability);
            }
        };
        add(CORE_FUNCTIONS, Capability::Core);
        add(TIME_CONVERSION_FUNCTIONS, Capability::TimeConversion);
        add(TEST_CONTROL_FUNCTIONS, Capability::TestControl);
        if flags.contains(ExtensionFlags::CONFORMANCE_AUTOMATION) {
            add(CONFORMANCE_FUNCTIONS, Capability::ConformanceAutomation);
        }
        if flags.contains(ExtensionFlags::VULKAN_GFX) {
            add(VULKAN_FUNCTIONS, Capability::VulkanGraphics);
        }
        if flags.contains(ExtensionFlags::D3D11_GFX) {
            add(D3D11_FUNCTIONS, Capability::D3D11Graphics);
        }
        Self { entries }
    }

    /// Look an entry point up by name
    pub fn resolve(&self, name: &str) -> RuntimeResult<Capability> {
        self.entries
            .get(name)
            .copied()
            .ok_or(RuntimeError::FunctionUnsupported)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_always_resolves() {
        let registry = CapabilityRegistry::new(ExtensionFlags::NONE);
        assert_eq!(registry.resolve("xrSyncActions"), Ok(Capability::Core));
        assert_eq!(
            registry.resolve("mockGetSessionState"),
            Ok(Capability::TestControl)
        );
    }

    #[test]
    fn test_unknown_name_unsupported() {
        let registry = CapabilityRegistry::new(ExtensionFlags::NONE);
        assert_eq!(
            registry.resolve("xrPerfSettingsSetPerformanceLevelEXT"),
            Err(RuntimeError::FunctionUnsupported)
        );
    }

    #[test]
    fn test_extension_gating() {
        let without = CapabilityRegistry::new(ExtensionFlags::NONE);
        assert_eq!(
            without.resolve("xrSetInputDeviceActiveEXT"),
            Err(RuntimeError::FunctionUnsupported)
        );
        let with = CapabilityRegistry::new(ExtensionFlags::CONFORMANCE_AUTOMATION);
        assert_eq!(
            with.resolve("xrSetInputDeviceActiveEXT"),
            Ok(Capability::ConformanceAutomation)
        );

        let vulkan = CapabilityRegistry::new(ExtensionFlags::VULKAN_GFX);
        assert_eq!(
            vulkan.resolve("xrGetVulkanGraphicsRequirementsKHR"),
            Ok(Capability::VulkanGraphics)
        );
        assert_eq!(
            vulkan.resolve("xrGetD3D11GraphicsRequirementsKHR"),
            Err(RuntimeError::FunctionUnsupported)
        );
    }
}
