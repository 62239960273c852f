use heapless::Vec;

use crate::color::Color;
use crate::scene::Scene;

/// Maximum number of entries in the preset playlist
pub const PRESET_COUNT: usize = 12;

/// How the sequencer blends into a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendStyle {
    /// Linear crossfade from the current scene
    #[default]
    Crossfade,
    /// Staggered flash to white, then resolve to the scene
    Flash,
}

/// Scene together with the style used to blend into it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaylistEntry {
    pub scene: Scene,
    pub blend: BlendStyle,
}

impl PlaylistEntry {
    pub const fn new(scene: Scene, blend: BlendStyle) -> Self {
        Self { scene, blend }
    }

    pub const fn crossfade(scene: Scene) -> Self {
        Self::new(scene, BlendStyle::Crossfade)
    }

    pub const fn flash(scene: Scene) -> Self {
        Self::new(scene, BlendStyle::Flash)
    }
}

/// Ordered list of scenes shown one after another
///
/// N is the maximum number of entries
#[derive(Debug, Clone, Default)]
pub struct Playlist<const N: usize> {
    entries: Vec<PlaylistEntry, N>,
    cursor: usize,
}

impl<const N: usize> Playlist<N> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
        }
    }

    /// Push an entry onto the playlist
    ///
    /// Returns the entry if the playlist is full
    pub fn push(&mut self, entry: PlaylistEntry) -> Result<(), PlaylistEntry> {
        self.entries.push(entry)
    }

    /// Get the next entry, starting over after the last one
    ///
    /// Returns None if the playlist is empty
    pub fn advance(&mut self) -> Option<PlaylistEntry> {
        let entry = *self.entries.get(self.cursor)?;
        self.cursor = (self.cursor + 1) % self.entries.len();
        Some(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PlaylistEntry] {
        &self.entries
    }
}

impl Playlist<PRESET_COUNT> {
    /// Playlist with the built-in scene catalogue
    pub fn presets() -> Self {
        Self {
            entries: preset_entries().into_iter().collect(),
            cursor: 0,
        }
    }
}

fn preset_entries() -> [PlaylistEntry; PRESET_COUNT] {
    [
        PlaylistEntry::crossfade(Scene::base_with_shift(0.0, 0.04)),
        PlaylistEntry::crossfade(Scene::base_with_two_shifts(0.55, 0.05, -0.03)),
        PlaylistEntry::flash(Scene::zebra(0.08, 0.5)),
        PlaylistEntry::crossfade(Scene::two_colors(0.33, 0.33, 0b1_0101)),
        PlaylistEntry::crossfade(Scene::single_color(Color::from_hue(0.66))),
        PlaylistEntry::flash(Scene::white(0.2, 0.2)),
        PlaylistEntry::crossfade(Scene::base_with_shift(0.75, -0.05)),
        PlaylistEntry::crossfade(Scene::two_colors(0.95, 0.12, 0b0_1110)),
        PlaylistEntry::flash(Scene::base_with_two_shifts(0.15, 0.2, 0.1)),
        PlaylistEntry::crossfade(Scene::zebra(0.6, 0.1)),
        PlaylistEntry::crossfade(Scene::single_color(Color::from_hue(0.05))),
        PlaylistEntry::flash(Scene::base_with_shift(0.3, 0.2)),
    ]
}
