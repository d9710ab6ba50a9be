//! Navbar and colour-theme toggles.
//!
//! Both are pure class-token swaps on fixed DOM nodes; the types here decide
//! which token replaces which, the wasm layer applies it.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// A `classList.replace(from, to)` to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSwap {
    pub from: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPanel {
    Open,
    #[default]
    Closed,
}

impl NavPanel {
    pub const OPEN_CLASS: &'static str = "right-0";
    pub const CLOSED_CLASS: &'static str = "right-[-100%]";

    pub fn class(self) -> &'static str {
        match self {
            NavPanel::Open => Self::OPEN_CLASS,
            NavPanel::Closed => Self::CLOSED_CLASS,
        }
    }

    /// Swap that moves the panel into `self`. Replacing a token that is not
    /// present is a no-op, so this is safe to apply from either state.
    pub fn swap(self) -> ClassSwap {
        let from = match self {
            NavPanel::Open => NavPanel::Closed,
            NavPanel::Closed => NavPanel::Open,
        };
        ClassSwap {
            from: from.class(),
            to: self.class(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Name used as both the `<body>` class and its `data-theme` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Theme named by a `data-theme` attribute; missing or unknown means dark.
    pub fn from_attr(attr: Option<&str>) -> Theme {
        attr.and_then(|a| a.parse().ok()).unwrap_or_default()
    }

    /// Swap from `self` to the toggled theme, and the new theme.
    pub fn toggle_swap(self) -> (ClassSwap, Theme) {
        let next = self.toggled();
        (
            ClassSwap {
                from: self.as_str(),
                to: next.as_str(),
            },
            next,
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(InputError::UnknownTheme(other.to_owned())),
        }
    }
}
