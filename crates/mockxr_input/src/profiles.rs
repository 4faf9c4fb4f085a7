//! Static interaction-profile catalog
//!
//! Every controller the emulator can impersonate, with the input sources it
//! exposes per user path. Profiles gated on an extension are only
//! instantiated when the runtime was created with that extension enabled.

use crate::state::ActionType;
use mockxr_core::ExtensionFlags;

/// One input source exposed by a profile
pub struct InputSourceDef {
    pub path: &'static str,
    pub ty: ActionType,
    pub localized_name: &'static str,
}

/// A controller profile definition
pub struct InteractionProfileDef {
    pub localized_name: &'static str,
    pub path: &'static str,
    pub required: ExtensionFlags,
    pub user_paths: &'static [&'static str],
    pub sources: &'static [InputSourceDef],
}

const fn src(path: &'static str, ty: ActionType, localized_name: &'static str) -> InputSourceDef {
    InputSourceDef {
        path,
        ty,
        localized_name,
    }
}

use ActionType::{Boolean, Float, Pose, Vector2, Vibration};

/// Every profile the emulator knows about
pub const INTERACTION_PROFILES: &[InteractionProfileDef] = &[
    InteractionProfileDef {
        localized_name: "Mock Controller",
        path: "/interaction_profiles/mockxr/mock_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/trigger/click", Boolean, "Button"),
            src("/user/hand/left/input/trigger/value", Float, "Trigger"),
            src("/user/hand/left/input/thumbstick/value", Vector2, "Thumbstick"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/trigger/click", Boolean, "Button"),
            src("/user/hand/right/input/trigger/value", Float, "Trigger"),
            src("/user/hand/right/input/thumbstick/value", Vector2, "Thumbstick"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "KHR Simple Controller",
        path: "/interaction_profiles/khr/simple_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/select/click", Boolean, "Select"),
            src("/user/hand/left/input/menu/click", Boolean, "Menu"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/select/click", Boolean, "Select"),
            src("/user/hand/right/input/menu/click", Boolean, "Menu"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Mixed Reality Controller",
        path: "/interaction_profiles/microsoft/motion_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/menu/click", Boolean, "Menu"),
            src("/user/hand/left/input/squeeze/click", Boolean, "Squeeze"),
            src("/user/hand/left/input/trigger/value", Float, "Trigger"),
            src("/user/hand/left/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/left/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/left/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/left/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/left/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/left/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/left/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/left/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/left/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/menu/click", Boolean, "Menu"),
            src("/user/hand/right/input/squeeze/click", Boolean, "Squeeze"),
            src("/user/hand/right/input/trigger/value", Float, "Trigger"),
            src("/user/hand/right/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/right/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/right/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/right/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/right/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/right/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/right/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/right/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/right/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Daydream Controller",
        path: "/interaction_profiles/google/daydream_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/select/click", Boolean, "Select"),
            src("/user/hand/left/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/left/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/left/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/left/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/left/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Pose"),
            src("/user/hand/right/input/select/click", Boolean, "Select"),
            src("/user/hand/right/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/right/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/right/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/right/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/right/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
        ],
    },
    InteractionProfileDef {
        localized_name: "HTC Vive Controller",
        path: "/interaction_profiles/htc/vive_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/menu/click", Boolean, "Menu"),
            src("/user/hand/left/input/system/click", Boolean, "System"),
            src("/user/hand/left/input/squeeze/click", Boolean, "Squeeze"),
            src("/user/hand/left/input/trigger/value", Float, "Trigger"),
            src("/user/hand/left/input/trigger/click", Boolean, "Trigger Click"),
            src("/user/hand/left/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/left/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/left/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/left/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/left/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/system/click", Boolean, "System"),
            src("/user/hand/right/input/menu/click", Boolean, "Menu"),
            src("/user/hand/right/input/squeeze/click", Boolean, "Squeeze"),
            src("/user/hand/right/input/trigger/value", Float, "Trigger"),
            src("/user/hand/right/input/trigger/click", Boolean, "Trigger Click"),
            src("/user/hand/right/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/right/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/right/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/right/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/right/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "HTC Vive Pro Controller",
        path: "/interaction_profiles/htc/vive_pro",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/head"],
        sources: &[
            src("/user/head/input/volume_up/click", Boolean, "Volume Up"),
            src("/user/head/input/volume_down/click", Boolean, "Volume Down"),
            src("/user/head/input/mute_mic/click", Boolean, "Mute Mic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "XBox Controller",
        path: "/interaction_profiles/microsoft/xbox_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/gamepad"],
        sources: &[
            src("/user/gamepad/input/menu/click", Boolean, "Menu"),
            src("/user/gamepad/input/view/click", Boolean, "View"),
            src("/user/gamepad/input/a/click", Boolean, "A"),
            src("/user/gamepad/input/b/click", Boolean, "B"),
            src("/user/gamepad/input/x/click", Boolean, "X"),
            src("/user/gamepad/input/y/click", Boolean, "Y"),
            src("/user/gamepad/input/dpad_down/click", Boolean, "D-pad Down"),
            src("/user/gamepad/input/dpad_right/click", Boolean, "D-pad Right"),
            src("/user/gamepad/input/dpad_up/click", Boolean, "D-pad Up"),
            src("/user/gamepad/input/dpad_left/click", Boolean, "D-pad Left"),
            src("/user/gamepad/input/shoulder_left/click", Boolean, "Left Shoulder"),
            src("/user/gamepad/input/shoulder_right/click", Boolean, "Right Shoulder"),
            src("/user/gamepad/input/thumbstick_left/click", Boolean, "Left Thumbstick Click"),
            src("/user/gamepad/input/thumbstick_right/click", Boolean, "Right Thumbstick Click"),
            src("/user/gamepad/input/trigger_left/value", Float, "Left Trigger"),
            src("/user/gamepad/input/trigger_right/value", Float, "Right Trigger"),
            src("/user/gamepad/input/thumbstick_left/x", Float, "Left Thumbstick X"),
            src("/user/gamepad/input/thumbstick_left/y", Float, "Left Thumbstick Y"),
            src("/user/gamepad/input/thumbstick_left", Vector2, "Left Thumbstick"),
            src("/user/gamepad/input/thumbstick_right/x", Float, "Right Thumbstick X"),
            src("/user/gamepad/input/thumbstick_right/y", Float, "Right Thumbstick Y"),
            src("/user/gamepad/input/thumbstick_right", Vector2, "Right Thumbstick"),
            src("/user/gamepad/output/haptic_left", Vibration, "Left Haptic"),
            src("/user/gamepad/output/haptic_right", Vibration, "Right Haptic"),
            src("/user/gamepad/output/haptic_left_trigger", Vibration, "Left Trigger Haptic"),
            src("/user/gamepad/output/haptic_right_trigger", Vibration, "Right Trigger Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Oculus Go Controller",
        path: "/interaction_profiles/oculus/go_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/trigger/click", Boolean, "Trigger"),
            src("/user/hand/left/input/back/click", Boolean, "Back"),
            src("/user/hand/left/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/left/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/left/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/left/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/left/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/input/trigger/click", Boolean, "Trigger"),
            src("/user/hand/right/input/back/click", Boolean, "Back"),
            src("/user/hand/right/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/right/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/right/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/right/input/trackpad/click", Boolean, "Trackpad Click"),
            src("/user/hand/right/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Pose"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Oculus Touch Controller",
        path: "/interaction_profiles/oculus/touch_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/x/click", Boolean, "X"),
            src("/user/hand/left/input/x/touch", Boolean, "X Touch"),
            src("/user/hand/left/input/y/click", Boolean, "Y"),
            src("/user/hand/left/input/y/touch", Boolean, "Y Touch"),
            src("/user/hand/left/input/menu/click", Boolean, "Menu"),
            src("/user/hand/left/input/squeeze/value", Float, "Grip"),
            src("/user/hand/left/input/trigger/value", Float, "Trigger"),
            src("/user/hand/left/input/trigger/touch", Boolean, "Touch"),
            src("/user/hand/left/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/left/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/left/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/left/input/thumbstick/touch", Boolean, "Thumbstick Touch"),
            src("/user/hand/left/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/a/click", Boolean, "A"),
            src("/user/hand/right/input/a/touch", Boolean, "A Touch"),
            src("/user/hand/right/input/b/click", Boolean, "B"),
            src("/user/hand/right/input/b/touch", Boolean, "B Touch"),
            src("/user/hand/right/input/system/click", Boolean, "System"),
            src("/user/hand/right/input/squeeze/value", Float, "Grip"),
            src("/user/hand/right/input/trigger/value", Float, "Trigger"),
            src("/user/hand/right/input/trigger/touch", Boolean, "Trigger Touch"),
            src("/user/hand/right/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/right/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/right/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/right/input/thumbstick/touch", Boolean, "Thumbstick Touch"),
            src("/user/hand/right/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Index Controller",
        path: "/interaction_profiles/valve/index_controller",
        required: ExtensionFlags::NONE,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/system/click", Boolean, "System"),
            src("/user/hand/left/input/system/touch", Boolean, "System Touch"),
            src("/user/hand/left/input/a/click", Boolean, "A"),
            src("/user/hand/left/input/a/touch", Boolean, "A Touch"),
            src("/user/hand/left/input/b/click", Boolean, "B"),
            src("/user/hand/left/input/b/touch", Boolean, "B Touch"),
            src("/user/hand/left/input/squeeze/value", Float, "Squeeze"),
            src("/user/hand/left/input/squeeze/force", Float, "Squeeze Force"),
            src("/user/hand/left/input/trigger/click", Boolean, "Trigger Click"),
            src("/user/hand/left/input/trigger/value", Float, "Trigger"),
            src("/user/hand/left/input/trigger/touch", Boolean, "Trigger Touch"),
            src("/user/hand/left/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/left/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/left/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/left/input/thumbstick/touch", Boolean, "Thumbstick Touch"),
            src("/user/hand/left/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/left/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/left/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/left/input/trackpad/force", Float, "Trackpad Force"),
            src("/user/hand/left/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/left/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/output/haptic", Vibration, "Haptic"),
            src("/user/hand/right/input/system/click", Boolean, "System"),
            src("/user/hand/right/input/system/touch", Boolean, "System Touch"),
            src("/user/hand/right/input/a/click", Boolean, "A"),
            src("/user/hand/right/input/a/touch", Boolean, "A Touch"),
            src("/user/hand/right/input/b/click", Boolean, "B"),
            src("/user/hand/right/input/b/touch", Boolean, "B Touch"),
            src("/user/hand/right/input/squeeze/value", Float, "Squeeze"),
            src("/user/hand/right/input/squeeze/force", Float, "Squeeze Force"),
            src("/user/hand/right/input/trigger/click", Boolean, "Trigger Click"),
            src("/user/hand/right/input/trigger/value", Float, "Trigger"),
            src("/user/hand/right/input/trigger/touch", Boolean, "Trigger Touch"),
            src("/user/hand/right/input/thumbstick/x", Float, "Thumbstick X"),
            src("/user/hand/right/input/thumbstick/y", Float, "Thumbstick Y"),
            src("/user/hand/right/input/thumbstick/click", Boolean, "Thumbstick Click"),
            src("/user/hand/right/input/thumbstick/touch", Boolean, "Thumbstick Touch"),
            src("/user/hand/right/input/thumbstick", Vector2, "Thumbstick"),
            src("/user/hand/right/input/trackpad/x", Float, "Trackpad X"),
            src("/user/hand/right/input/trackpad/y", Float, "Trackpad Y"),
            src("/user/hand/right/input/trackpad/force", Float, "Trackpad Force"),
            src("/user/hand/right/input/trackpad/touch", Boolean, "Trackpad Touch"),
            src("/user/hand/right/input/trackpad", Vector2, "Trackpad"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/output/haptic", Vibration, "Haptic"),
        ],
    },
    InteractionProfileDef {
        localized_name: "Eye Gaze",
        path: "/interaction_profiles/ext/eye_gaze_interaction",
        required: ExtensionFlags::EYE_GAZE_INTERACTION,
        user_paths: &["/user/eyes_ext"],
        sources: &[src("/user/eyes_ext/input/gaze_ext/pose", Pose, "Gaze")],
    },
    InteractionProfileDef {
        localized_name: "Hand",
        path: "/interaction_profiles/microsoft/hand_interaction",
        required: ExtensionFlags::MSFT_HAND_INTERACTION,
        user_paths: &["/user/hand/left", "/user/hand/right"],
        sources: &[
            src("/user/hand/left/input/select/value", Float, "Select"),
            src("/user/hand/left/input/squeeze/value", Float, "Squeeze"),
            src("/user/hand/left/input/aim/pose", Pose, "Aim"),
            src("/user/hand/left/input/grip/pose", Pose, "Grip"),
            src("/user/hand/right/input/select/value", Float, "Select"),
            src("/user/hand/right/input/squeeze/value", Float, "Squeeze"),
            src("/user/hand/right/input/aim/pose", Pose, "Aim"),
            src("/user/hand/right/input/grip/pose", Pose, "Grip"),
        ],
    },
];
