//! Contains the ANSI escape codes used to decorate console output.

use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering},
};

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turns the ANSI decoration of every [`Painted`] value on or off for the whole process.
pub fn set_colors_enabled(enabled: bool) { COLORS_ENABLED.store(enabled, Ordering::Relaxed); }

/// Checks whether [`Painted`] values currently emit ANSI escape codes.
#[must_use]
pub fn colors_enabled() -> bool { COLORS_ENABLED.load(Ordering::Relaxed) }

/// Represents a text style or a foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Paint {
    Bold,
    Underline,
    Red,
    Yellow,
    Cyan,
}

impl Paint {
    /// Gets the escape code that turns this paint on.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Bold => "\x1B[1m",
            Self::Underline => "\x1B[4m",
            Self::Red => "\x1B[31m",
            Self::Yellow => "\x1B[33m",
            Self::Cyan => "\x1B[36m",
        }
    }

    /// Applies the paint to the given displayable object.
    pub fn with<T>(self, display: T) -> Painted<T> {
        Painted {
            paint: self,
            display,
        }
    }
}

/// Is a struct implementing [`Display`] that represents a displayable object with a paint applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Painted<T> {
    /// The paint applied to the displayable object.
    pub paint: Paint,

    /// The displayable object.
    pub display: T,
}

impl<T: Display> Display for Painted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if colors_enabled() {
            write!(f, "{}{}\x1B[0m", self.paint.code(), self.display)
        } else {
            write!(f, "{}", self.display)
        }
    }
}
