use crate::model::menu::MenuDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Raises each dimension to at least the floor's.
    pub fn clamp_to(self, floor: WindowSize) -> Self {
        Self {
            width: self.width.max(floor.width),
            height: self.height.max(floor.height),
        }
    }

    pub fn fits_within(&self, other: &WindowSize) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Restored window placement. Dimensions are always positive.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    pub width: u32,
    pub height: u32,
    pub maximized: bool,
}

impl WindowState {
    pub fn size(&self) -> WindowSize {
        WindowSize::new(self.width, self.height)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartMode {
    Normal,
    Maximized,
}

impl fmt::Display for StartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartMode::Normal => write!(f, "normal"),
            StartMode::Maximized => write!(f, "maximized"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    pub min_width: u32,
    pub min_height: u32,
    pub start_mode: StartMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_normalized(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|channel| f32::from(channel) / 255.0)
    }
}

pub const BACKGROUND_COLOUR: Rgba = Rgba::new(27, 38, 54, 0);

/// Everything the host runtime needs to open the main window.
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfiguration {
    pub title: String,
    pub window: WindowOptions,
    pub frameless: bool,
    pub menu: MenuDescriptor,
    pub background: Rgba,
    pub start_hidden: bool,
    pub enable_default_context_menu: bool,
}
