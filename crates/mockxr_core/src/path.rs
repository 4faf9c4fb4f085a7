//! Semantic path interning
//!
//! Paths such as `/user/hand/left/input/trigger/click` are interned into
//! [`Path`] handles. A path handle packs two 1-based table slots: the lower
//! half indexes a fixed table of top-level user paths, the upper half an
//! append-only table of component suffixes. Either half may be zero, so
//! `/user/hand/left` is a user-only handle and
//! `/interaction_profiles/khr/simple_controller` a component-only one.
//! Interning is idempotent: the same string always yields the same handle.

use crate::flags::ExtensionFlags;
use crate::handle::Handle;
use crate::result::{RuntimeError, RuntimeResult};

/// Marker type for path handles
pub enum PathTag {}

/// An interned semantic path
pub type Path = Handle<PathTag>;

/// The absent path
pub const NULL_PATH: Path = Path::null();

/// Paths must be strictly shorter than this, including the leading slash.
pub const MAX_PATH_LENGTH: usize = 256;

/// Top-level user paths always present in the interner
const DEFAULT_USER_PATHS: &[(&str, &str)] = &[
    ("/user/hand/left", "Left Hand"),
    ("/user/hand/right", "Right Hand"),
    ("/user/head", "Head"),
    ("/user/gamepad", "GamePad"),
];

/// User path added when eye gaze interaction is enabled
const EYES_USER_PATH: (&str, &str) = ("/user/eyes_ext", "Eyes");

struct UserPathEntry {
    text: &'static str,
    localized_name: &'static str,
}

/// Interner mapping path strings to handles and back
pub struct PathInterner {
    user_paths: Vec<UserPathEntry>,
    components: Vec<String>,
}

impl PathInterner {
    /// Create an interner whose user-path table matches the enabled
    /// extensions.
    pub fn new(flags: ExtensionFlags) -> Self {
        let mut user_paths: Vec<UserPathEntry> = DEFAULT_USER_PATHS
            .iter()
            .map(|&(text, localized_name)| UserPathEntry {
                text,
                localized_name,
            })
            .collect();
        if flags.contains(ExtensionFlags::EYE_GAZE_INTERACTION) {
            user_paths.push(UserPathEntry {
                text: EYES_USER_PATH.0,
                localized_name: EYES_USER_PATH.1,
            });
        }
        Self {
            user_paths,
            components: Vec::new(),
        }
    }

    /// Intern a path string.
    ///
    /// The string is validated against the path grammar first; nothing is
    /// interned on failure.
    pub fn string_to_path(&mut self, text: &str) -> RuntimeResult<Path> {
        validate_path_string(text)?;

        // Longest user-path prefix whose remainder is empty or a suffix path.
        let mut best: Option<(usize, &'static str)> = None;
        for (index, entry) in self.user_paths.iter().enumerate() {
            if !text.starts_with(entry.text) {
                continue;
            }
            let rest = &text[entry.text.len()..];
            if !rest.is_empty() && !rest.starts_with('/') {
                continue;
            }
            match best {
                Some((_, prev)) if prev.len() >= entry.text.len() => {}
                _ => best = Some((index, entry.text)),
            }
        }

        match best {
            Some((user_index, prefix)) => {
                let rest = &text[prefix.len()..];
                if rest.is_empty() {
                    Ok(Path::from_halves(user_index as u32 + 1, 0))
                } else {
                    let component_index = self.intern_component(rest);
                    Ok(Path::from_halves(
                        user_index as u32 + 1,
                        component_index as u32 + 1,
                    ))
                }
            }
            None => {
                let component_index = self.intern_component(text);
                Ok(Path::from_halves(0, component_index as u32 + 1))
            }
        }
    }

    /// Resolve a handle back to its string
    pub fn path_to_string(&self, path: Path) -> RuntimeResult<String> {
        if path.is_null() || !self.is_valid(path) {
            return Err(RuntimeError::PathInvalid);
        }
        let mut text = String::new();
        if path.lower() != 0 {
            text.push_str(self.user_paths[path.lower() as usize - 1].text);
        }
        if path.upper() != 0 {
            text.push_str(&self.components[path.upper() as usize - 1]);
        }
        Ok(text)
    }

    /// Append a suffix to an existing path and intern the result.
    pub fn append_path(&mut self, path: Path, suffix: &str) -> RuntimeResult<Path> {
        let mut text = self.path_to_string(path)?;
        text.push_str(suffix);
        self.string_to_path(&text)
    }

    /// Combine a user-only handle and a component-only handle.
    pub fn make_path(&self, user_path: Path, component_path: Path) -> RuntimeResult<Path> {
        if user_path.upper() != 0
            || component_path.lower() != 0
            || user_path.lower() as usize > self.user_paths.len()
            || component_path.upper() as usize > self.components.len()
        {
            return Err(RuntimeError::PathInvalid);
        }
        Ok(Path::from_halves(user_path.lower(), component_path.upper()))
    }

    /// Check that both halves reference live table slots
    pub fn is_valid(&self, path: Path) -> bool {
        !path.is_null()
            && path.lower() as usize <= self.user_paths.len()
            && path.upper() as usize <= self.components.len()
    }

    /// True for a handle naming a top-level user path and nothing below it
    #[inline]
    pub fn is_user_path(path: Path) -> bool {
        path.lower() != 0 && path.upper() == 0
    }

    /// The user-path half of a handle
    #[inline]
    pub fn user_path(path: Path) -> Path {
        path.lower_only()
    }

    /// The component half of a handle
    #[inline]
    pub fn component_path(path: Path) -> Path {
        path.upper_only()
    }

    /// Zero-based slot of a user path, used as a stable weak reference
    pub fn user_slot(path: Path) -> Option<usize> {
        if path.lower() == 0 {
            None
        } else {
            Some(path.lower() as usize - 1)
        }
    }

    /// Human-readable name of a top-level user path
    pub fn user_path_name(&self, path: Path) -> Option<&'static str> {
        let slot = Self::user_slot(path)?;
        self.user_paths.get(slot).map(|e| e.localized_name)
    }

    /// Handles for every top-level user path
    pub fn user_paths(&self) -> impl Iterator<Item = Path> + '_ {
        (0..self.user_paths.len()).map(|i| Path::from_halves(i as u32 + 1, 0))
    }

    pub fn user_path_count(&self) -> usize {
        self.user_paths.len()
    }

    fn intern_component(&mut self, text: &str) -> usize {
        match self.components.iter().position(|c| c == text) {
            Some(index) => index,
            None => {
                self.components.push(text.to_owned());
                self.components.len() - 1
            }
        }
    }
}

/// Validate a full path string against the path grammar.
///
/// Paths start with `/`, contain only lowercase letters, digits, `-`, `_`,
/// `.` and `/`, never end in a slash, and have no empty or all-period
/// segments.
pub fn validate_path_string(text: &str) -> RuntimeResult<()> {
    if text.len() >= MAX_PATH_LENGTH {
        return Err(RuntimeError::PathFormatInvalid);
    }
    let Some(rest) = text.strip_prefix('/') else {
        return Err(RuntimeError::PathFormatInvalid);
    };
    if rest.is_empty() {
        return Err(RuntimeError::PathFormatInvalid);
    }
    for segment in rest.split('/') {
        if segment.is_empty() {
            // Covers "//" and a trailing slash.
            return Err(RuntimeError::PathFormatInvalid);
        }
        if segment.bytes().all(|b| b == b'.') {
            return Err(RuntimeError::PathFormatInvalid);
        }
        validate_name_chars(segment)?;
    }
    Ok(())
}

/// Validate the character set of a single path segment or name
pub fn validate_name_chars(name: &str) -> RuntimeResult<()> {
    for b in name.bytes() {
        match b {
            b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {}
            _ => return Err(RuntimeError::PathFormatInvalid),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interner() -> PathInterner {
        PathInterner::new(ExtensionFlags::NONE)
    }

    #[test]
    fn test_round_trip() {
        let mut paths = interner();
        for text in [
            "/user/hand/left",
            "/user/hand/left/input/trigger/click",
            "/user/head",
            "/interaction_profiles/khr/simple_controller",
        ] {
            let handle = paths.string_to_path(text).unwrap();
            assert_eq!(paths.path_to_string(handle).unwrap(), text);
        }
    }

    #[test]
    fn test_interning_is_idempotent() {
        let mut paths = interner();
        let a = paths.string_to_path("/user/hand/right/input/select").unwrap();
        let b = paths.string_to_path("/user/hand/right/input/select").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_halves() {
        let mut paths = interner();
        let full = paths
            .string_to_path("/user/hand/left/input/trigger")
            .unwrap();
        let user = paths.string_to_path("/user/hand/left").unwrap();
        assert_eq!(PathInterner::user_path(full), user);
        assert!(PathInterner::is_user_path(user));
        assert!(!PathInterner::is_user_path(full));
        assert_eq!(
            paths.path_to_string(PathInterner::component_path(full)).unwrap(),
            "/input/trigger"
        );
    }

    #[test]
    fn test_make_path_combines_halves() {
        let mut paths = interner();
        let full = paths
            .string_to_path("/user/hand/left/input/trigger")
            .unwrap();
        let user = PathInterner::user_path(full);
        let component = PathInterner::component_path(full);
        assert_eq!(paths.make_path(user, component).unwrap(), full);
        // Swapped halves do not name valid inputs.
        assert_eq!(
            paths.make_path(component, user),
            Err(RuntimeError::PathInvalid)
        );
    }

    #[test]
    fn test_append_path() {
        let mut paths = interner();
        let base = paths.string_to_path("/user/hand/left/input/trigger").unwrap();
        let appended = paths.append_path(base, "/click").unwrap();
        assert_eq!(
            paths.path_to_string(appended).unwrap(),
            "/user/hand/left/input/trigger/click"
        );
    }

    #[test]
    fn test_grammar_rejections() {
        let mut paths = interner();
        for bad in [
            "no_leading_slash",
            "/UPPER/case",
            "/trailing/",
            "/double//slash",
            "/contains space",
            "/",
            "/ends/with/...",
            "/../relative",
        ] {
            assert_eq!(
                paths.string_to_path(bad),
                Err(RuntimeError::PathFormatInvalid),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_length_limit() {
        let mut paths = interner();
        let long = format!("/{}", "a".repeat(MAX_PATH_LENGTH));
        assert_eq!(
            paths.string_to_path(&long),
            Err(RuntimeError::PathFormatInvalid)
        );
        let fits = format!("/{}", "a".repeat(MAX_PATH_LENGTH - 2));
        assert!(paths.string_to_path(&fits).is_ok());
    }

    #[test]
    fn test_user_prefix_requires_segment_boundary() {
        let mut paths = interner();
        let folded = paths.string_to_path("/user/hand/leftovers").unwrap();
        assert_eq!(paths.path_to_string(folded).unwrap(), "/user/hand/leftovers");
        assert_eq!(folded.lower(), 0);
    }

    #[test]
    fn test_eye_gaze_user_path() {
        let mut paths = PathInterner::new(ExtensionFlags::EYE_GAZE_INTERACTION);
        let eyes = paths.string_to_path("/user/eyes_ext").unwrap();
        assert!(PathInterner::is_user_path(eyes));
        assert_eq!(paths.user_path_name(eyes), Some("Eyes"));
        assert_eq!(paths.user_path_count(), 5);
    }

    #[test]
    fn test_invalid_handle_to_string() {
        let paths = interner();
        assert_eq!(
            paths.path_to_string(Path::from_halves(42, 0)),
            Err(RuntimeError::PathInvalid)
        );
        assert_eq!(paths.path_to_string(NULL_PATH), Err(RuntimeError::PathInvalid));
    }
}
