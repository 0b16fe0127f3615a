//! Discrete spacing scale derived from the viewport width.

use serde::Serialize;

/// Width class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenClass {
    Compact,
    Regular,
    Wide,
}

impl ScreenClass {
    pub const COMPACT_MAX: f64 = 600.0;
    pub const REGULAR_MAX: f64 = 1024.0;

    pub fn from_width(width: f64) -> Self {
        if width < Self::COMPACT_MAX {
            ScreenClass::Compact
        } else if width < Self::REGULAR_MAX {
            ScreenClass::Regular
        } else {
            ScreenClass::Wide
        }
    }
}

/// Size tokens used for paddings, margins, gaps and radii, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingProfile {
    pub half: f32,
    pub one: f32,
    pub two: f32,
    pub three: f32,
    pub four: f32,
    pub five: f32,
    pub six: f32,
}

impl SpacingProfile {
    pub const COMPACT: SpacingProfile = SpacingProfile {
        half: 2.0,
        one: 4.0,
        two: 6.0,
        three: 12.0,
        four: 16.0,
        five: 24.0,
        six: 48.0,
    };

    pub const REGULAR: SpacingProfile = SpacingProfile {
        half: 2.0,
        one: 4.0,
        two: 8.0,
        three: 16.0,
        four: 24.0,
        five: 32.0,
        six: 64.0,
    };

    pub const WIDE: SpacingProfile = SpacingProfile {
        half: 4.0,
        one: 6.0,
        two: 12.0,
        three: 20.0,
        four: 32.0,
        five: 40.0,
        six: 80.0,
    };

    pub fn for_class(class: ScreenClass) -> Self {
        match class {
            ScreenClass::Compact => Self::COMPACT,
            ScreenClass::Regular => Self::REGULAR,
            ScreenClass::Wide => Self::WIDE,
        }
    }

    pub fn for_width(width: f64) -> Self {
        Self::for_class(ScreenClass::from_width(width))
    }
}

impl Default for SpacingProfile {
    fn default() -> Self {
        Self::REGULAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_boundaries() {
        assert_eq!(ScreenClass::from_width(0.0), ScreenClass::Compact);
        assert_eq!(ScreenClass::from_width(599.9), ScreenClass::Compact);
        assert_eq!(ScreenClass::from_width(600.0), ScreenClass::Regular);
        assert_eq!(ScreenClass::from_width(1023.0), ScreenClass::Regular);
        assert_eq!(ScreenClass::from_width(1024.0), ScreenClass::Wide);
    }

    #[test]
    fn test_scales_are_monotonic() {
        for profile in [
            SpacingProfile::COMPACT,
            SpacingProfile::REGULAR,
            SpacingProfile::WIDE,
        ] {
            let steps = [
                profile.half,
                profile.one,
                profile.two,
                profile.three,
                profile.four,
                profile.five,
                profile.six,
            ];
            assert!(steps.windows(2).all(|w| w[0] < w[1]), "{:?}", profile);
        }
        assert_eq!(SpacingProfile::for_width(800.0), SpacingProfile::REGULAR);
    }
}
