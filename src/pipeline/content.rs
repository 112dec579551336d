//! Landing content and configuration.

use crate::effects::{IntroConfig, RevealConfig};
use crate::typewriter::{TypewriterConfig, WordList};
use crate::types::{Effects, Rgba};

/// A block of copy below the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: Vec<String>,
}

impl Section {
    pub fn new<I, S>(heading: impl Into<String>, body: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            heading: heading.into(),
            body: body.into_iter().map(Into::into).collect(),
        }
    }

    /// Rows: border, heading, blank, body, border.
    pub fn height(&self) -> u16 {
        self.body.len().min(u16::MAX as usize - 4) as u16 + 4
    }
}

/// A hero call-to-action. Activating it scrolls smoothly to its target
/// section, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub label: String,
    /// Index into [`LandingContent::sections`].
    pub target: Option<usize>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: None,
        }
    }

    pub fn linking_to(mut self, section: usize) -> Self {
        self.target = Some(section);
        self
    }
}

/// Everything the landing screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingContent {
    pub title: String,
    /// Labels rotated by the typewriter.
    pub words: WordList,
    pub buttons: Vec<Button>,
    pub sections: Vec<Section>,
}

impl Default for LandingContent {
    fn default() -> Self {
        Self {
            title: "Your product, spoken natively".to_string(),
            words: WordList::languages(),
            buttons: vec![
                Button::new("Get started").linking_to(2),
                Button::new("See features").linking_to(0),
            ],
            sections: vec![
                Section::new(
                    "Translate once",
                    [
                        "Upload your copy and review every language side by side.",
                        "Edits flow back to the source automatically.",
                    ],
                ),
                Section::new(
                    "Ship everywhere",
                    [
                        "Publish to web, mobile and docs from one place.",
                        "Every locale stays in sync with each release.",
                    ],
                ),
                Section::new(
                    "How it works",
                    [
                        "1. Connect your repository",
                        "2. Pick your languages",
                        "3. Merge the pull request",
                    ],
                ),
            ],
        }
    }
}

/// Colors used when composing a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub text: Rgba,
    pub muted: Rgba,
    pub accent: Rgba,
    pub light: Rgba,
    pub orb: Rgba,
    pub overlay: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::rgb(10, 12, 22),
            text: Rgba::rgb(235, 238, 245),
            muted: Rgba::rgb(140, 148, 170),
            accent: Rgba::rgb(122, 162, 247),
            light: Rgba::rgb(90, 110, 180),
            orb: Rgba::rgb(40, 30, 80),
            overlay: Rgba::rgb(4, 5, 10),
        }
    }
}

/// Landing screen settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingConfig {
    pub typewriter: TypewriterConfig,
    pub intro: IntroConfig,
    pub reveal: RevealConfig,
    pub effects: Effects,
    /// Caret blink rate; 0 keeps it solid.
    pub caret_fps: u8,
    pub palette: Palette,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            typewriter: TypewriterConfig::default(),
            intro: IntroConfig::default(),
            reveal: RevealConfig::default(),
            effects: Effects::default(),
            caret_fps: 2,
            palette: Palette::default(),
        }
    }
}
