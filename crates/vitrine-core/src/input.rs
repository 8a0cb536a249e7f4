//! Host input normalized into typed events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;
use crate::geometry::Point;
use crate::gesture::TouchPhase;

/// Keys the viewer reacts to. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// Lenient mapping of DOM `KeyboardEvent.key` values.
    pub fn from_dom_key(key: &str) -> Self {
        key.parse().unwrap_or(Self::Other)
    }
}

impl FromStr for Key {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ArrowLeft" | "Left" => Ok(Self::ArrowLeft),
            "ArrowRight" | "Right" => Ok(Self::ArrowRight),
            "Escape" | "Esc" => Ok(Self::Escape),
            "Other" => Ok(Self::Other),
            _ => Err(ViewerError::UnknownKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = ViewerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArrowLeft => write!(f, "ArrowLeft"),
            Self::ArrowRight => write!(f, "ArrowRight"),
            Self::Escape => write!(f, "Escape"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Where keyboard focus was when a key arrived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFocus {
    #[default]
    Viewer,
    /// A text field elsewhere on the page. The viewer must not react.
    TextInput,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// One wheel tick. Negative is scroll up.
    Wheel { delta_y: f32 },
    /// Double-click or double-tap.
    DoubleClick,
    PointerDown { pos: Point },
    PointerMove { pos: Point },
    PointerUp,
    /// `touches` are the contact points remaining after the event.
    Touch {
        phase: TouchPhase,
        #[serde(default)]
        touches: Vec<Point>,
    },
    Key {
        key: Key,
        #[serde(default)]
        focus: KeyFocus,
    },
}

impl InputEvent {
    pub fn key(key: Key) -> Self {
        Self::Key {
            key,
            focus: KeyFocus::Viewer,
        }
    }
}
