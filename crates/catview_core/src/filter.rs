use std::fmt;

use crate::SENTINEL_TAG;

/// Font sizes accepted by the overlay text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontSize {
    Px15,
    Px20,
    #[default]
    Px25,
    Px30,
    Px40,
    Px50,
    Px60,
}

impl FontSize {
    pub const ALL: [FontSize; 7] = [
        FontSize::Px15,
        FontSize::Px20,
        FontSize::Px25,
        FontSize::Px30,
        FontSize::Px40,
        FontSize::Px50,
        FontSize::Px60,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Px15 => "15",
            FontSize::Px20 => "20",
            FontSize::Px25 => "25",
            FontSize::Px30 => "30",
            FontSize::Px40 => "40",
            FontSize::Px50 => "50",
            FontSize::Px60 => "60",
        }
    }

    /// Returns `None` for anything outside the accepted set.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|size| size.as_str() == raw)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Font colors accepted by the overlay text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontColor {
    #[default]
    White,
    Black,
    Red,
    Yellow,
    Green,
    Blue,
    Pink,
}

impl FontColor {
    pub const ALL: [FontColor; 7] = [
        FontColor::White,
        FontColor::Black,
        FontColor::Red,
        FontColor::Yellow,
        FontColor::Green,
        FontColor::Blue,
        FontColor::Pink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontColor::White => "white",
            FontColor::Black => "black",
            FontColor::Red => "red",
            FontColor::Yellow => "yellow",
            FontColor::Green => "green",
            FontColor::Blue => "blue",
            FontColor::Pink => "pink",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str().eq_ignore_ascii_case(raw))
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current choice of tag, overlay text and text styling.
///
/// An empty `overlay_text` means no overlay; `font_size` and `font_color`
/// are ignored in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub tag: Option<String>,
    pub overlay_text: String,
    pub font_size: Option<FontSize>,
    pub font_color: Option<FontColor>,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            tag: Some(SENTINEL_TAG.to_string()),
            overlay_text: String::new(),
            font_size: Some(FontSize::default()),
            font_color: Some(FontColor::default()),
        }
    }
}

impl FilterSelection {
    pub fn has_overlay(&self) -> bool {
        !self.overlay_text.is_empty()
    }
}
