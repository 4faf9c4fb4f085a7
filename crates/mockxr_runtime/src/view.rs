//! View configurations
//!
//! The emulated device is a stereo headset with fixed optics. Quad views and
//! the Microsoft observer configurations are registered on top when their
//! extensions were negotiated. Secondary configurations start inactive and
//! are switched on through the test-control surface.

use mockxr_core::ExtensionFlags;
use mockxr_math::{Fov, Pose, Quat, Vec3};

/// The view configurations the emulator can report
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewConfigurationType {
    PrimaryStereo,
    PrimaryQuadVarjo,
    SecondaryMonoFirstPersonObserver,
    SecondaryMonoThirdPersonObserver,
}

impl ViewConfigurationType {
    #[inline]
    pub fn is_primary(self) -> bool {
        matches!(self, Self::PrimaryStereo | Self::PrimaryQuadVarjo)
    }
}

/// Validity and tracking bits of a located view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewStateFlags(u64);

impl ViewStateFlags {
    pub const NONE: Self = Self(0);
    pub const ORIENTATION_VALID: Self = Self(0x1);
    pub const POSITION_VALID: Self = Self(0x2);
    pub const ORIENTATION_TRACKED: Self = Self(0x4);
    pub const POSITION_TRACKED: Self = Self(0x8);
    pub const ALL: Self = Self(0xF);
    pub const TRACKED: Self = Self(0xC);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// This set with `other`'s bits removed
    #[inline]
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.0
    }
}

impl core::ops::BitOr for ViewStateFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// One eye's pose and frustum
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub pose: Pose,
    pub fov: Fov,
}

/// Swapchain sizing recommendation for one view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfigurationView {
    pub recommended_width: u32,
    pub max_width: u32,
    pub recommended_height: u32,
    pub max_height: u32,
    pub recommended_sample_count: u32,
    pub max_sample_count: u32,
}

/// How submitted layers are blended with the real world
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnvironmentBlendMode {
    Opaque,
    Additive,
}

/// Blend modes every configuration reports
pub const ENVIRONMENT_BLEND_MODES: &[EnvironmentBlendMode] =
    &[EnvironmentBlendMode::Opaque, EnvironmentBlendMode::Additive];

const RECOMMENDED_WIDTH: u32 = 1512;
const RECOMMENDED_HEIGHT: u32 = 1680;

#[allow(clippy::excessive_precision)]
const LEFT_EYE_FOV: Fov = Fov::new(-0.995535672, 0.811128199, 0.954059243, -0.954661012);
#[allow(clippy::excessive_precision)]
const RIGHT_EYE_FOV: Fov = Fov::new(-0.812360585, 0.995566666, 0.955580175, -0.953877985);

/// One registered view configuration and its live state
pub struct ViewConfiguration {
    pub ty: ViewConfigurationType,
    /// Primaries are enabled at construction; secondaries only once the
    /// session begins with them listed
    pub enabled: bool,
    /// Secondary configurations are inactive until the driver activates them
    pub active: bool,
    pub state_flags: ViewStateFlags,
    pub views: Vec<View>,
    pub dimensions: Vec<ViewConfigurationView>,
}

fn eye(x: f32, fov: Fov) -> View {
    View {
        pose: Pose::new(Quat::IDENTITY, Vec3::new(x, 0.0, 0.0)),
        fov,
    }
}

fn dimensions(width: u32, height: u32) -> ViewConfigurationView {
    ViewConfigurationView {
        recommended_width: width,
        max_width: width * 2,
        recommended_height: height,
        max_height: height * 2,
        recommended_sample_count: 1,
        max_sample_count: 1,
    }
}

fn fov_div(fov: Fov, divisor: f32) -> Fov {
    Fov::new(
        fov.angle_left / divisor,
        fov.angle_right / divisor,
        fov.angle_up / divisor,
        fov.angle_down / divisor,
    )
}

impl ViewConfiguration {
    fn stereo_views() -> Vec<View> {
        vec![eye(-0.011, LEFT_EYE_FOV), eye(0.011, RIGHT_EYE_FOV)]
    }

    fn stereo() -> Self {
        Self {
            ty: ViewConfigurationType::PrimaryStereo,
            enabled: true,
            active: true,
            state_flags: ViewStateFlags::ALL,
            views: Self::stereo_views(),
            dimensions: vec![
                dimensions(RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT),
                dimensions(RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT),
            ],
        }
    }

    /// Stereo plus two narrow focus views at a third of the size
    fn quad() -> Self {
        let mut views = Self::stereo_views();
        views.push(eye(-0.011, fov_div(LEFT_EYE_FOV, 3.0)));
        views.push(eye(0.011, fov_div(RIGHT_EYE_FOV, 3.0)));
        Self {
            ty: ViewConfigurationType::PrimaryQuadVarjo,
            enabled: true,
            active: true,
            state_flags: ViewStateFlags::ALL,
            views,
            dimensions: vec![
                dimensions(RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT),
                dimensions(RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT),
                dimensions(RECOMMENDED_WIDTH / 3, RECOMMENDED_HEIGHT / 3),
                dimensions(RECOMMENDED_WIDTH / 3, RECOMMENDED_HEIGHT / 3),
            ],
        }
    }

    fn observer(ty: ViewConfigurationType) -> Self {
        Self {
            ty,
            enabled: false,
            active: false,
            state_flags: ViewStateFlags::ALL,
            views: vec![View {
                pose: Pose::IDENTITY,
                fov: LEFT_EYE_FOV,
            }],
            dimensions: vec![dimensions(RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT)],
        }
    }
}

/// All view configurations registered for one runtime instance
pub struct ViewStore {
    configurations: Vec<ViewConfiguration>,
}

impl ViewStore {
    pub fn new(flags: ExtensionFlags) -> Self {
        let mut configurations = vec![ViewConfiguration::stereo()];
        if flags.contains(ExtensionFlags::VARJO_QUAD_VIEWS) {
            configurations.push(ViewConfiguration::quad());
        }
        if flags.contains(ExtensionFlags::MSFT_SECONDARY_VIEW_CONFIGURATION) {
            if flags.contains(ExtensionFlags::MSFT_FIRST_PERSON_OBSERVER) {
                configurations.push(ViewConfiguration::observer(
                    ViewConfigurationType::SecondaryMonoFirstPersonObserver,
                ));
            }
            if flags.contains(ExtensionFlags::MSFT_THIRD_PERSON_OBSERVER) {
                configurations.push(ViewConfiguration::observer(
                    ViewConfigurationType::SecondaryMonoThirdPersonObserver,
                ));
            }
        }
        Self { configurations }
    }

    pub fn get(&self, ty: ViewConfigurationType) -> Option<&ViewConfiguration> {
        self.configurations.iter().find(|config| config.ty == ty)
    }

    pub fn get_mut(&mut self, ty: ViewConfigurationType) -> Option<&mut ViewConfiguration> {
        self.configurations
            .iter_mut()
            .find(|config| config.ty == ty)
    }

    pub fn types(&self) -> Vec<ViewConfigurationType> {
        self.configurations.iter().map(|config| config.ty).collect()
    }

    /// Registered secondary configurations, in registration order
    pub fn secondary_types(&self) -> Vec<ViewConfigurationType> {
        self.configurations
            .iter()
            .filter(|config| !config.ty.is_primary())
            .map(|config| config.ty)
            .collect()
    }

    /// Return every secondary configuration to its pre-session state
    pub fn reset_secondaries(&mut self) {
        for config in &mut self.configurations {
            if !config.ty.is_primary() {
                config.enabled = false;
                config.active = false;
            }
        }
    }
}
