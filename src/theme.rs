//! Light/dark theme preference, persisted in a small JSON file.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Key under which the preference is stored
pub const THEME_KEY: &str = "darkMode";

/// Preference file, relative to the working directory
pub const DEFAULT_PREFS_PATH: &str = "portfolio.prefs";

/// Durable string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// On-disk layout of the preference file: a flat JSON object of strings.
#[derive(Serialize, Deserialize, Default, Debug)]
#[serde(transparent)]
struct PrefsFile {
    entries: BTreeMap<String, String>,
}

/// Preferences kept as a JSON object in a single file. A missing file reads
/// as empty.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<PrefsFile> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PrefsFile::default()),
            Err(e) => return Err(e),
        };
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&self, prefs: &PrefsFile) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.load()?.entries.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        // An unreadable file is overwritten.
        let mut prefs = match self.load() {
            Ok(prefs) => prefs,
            Err(e) if is_malformed(&e) => {
                warn!("Replacing unreadable preference file {}: {e}", self.path.display());
                PrefsFile::default()
            }
            Err(e) => return Err(e),
        };
        prefs.entries.insert(key.to_string(), value.to_string());
        self.save(&prefs)
    }
}

fn is_malformed(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof
    )
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "memory store poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The current theme, backed by a [`KeyValueStore`].
#[derive(Resource)]
pub struct ThemeStore {
    dark: bool,
    store: Box<dyn KeyValueStore>,
}

impl ThemeStore {
    /// Read the saved preference. Anything but the exact string `"true"`,
    /// including a read error, means light mode.
    pub fn open(store: impl KeyValueStore + 'static) -> Self {
        let dark = match store.get(THEME_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!("Could not read theme preference: {e}");
                false
            }
        };
        Self {
            dark,
            store: Box::new(store),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Set and persist the preference. The in-memory value changes even if
    /// the write fails.
    pub fn set_dark(&mut self, dark: bool) -> io::Result<()> {
        self.dark = dark;
        self.store.set(THEME_KEY, if dark { "true" } else { "false" })
    }

    /// Flip the preference and persist it.
    pub fn toggle(&mut self) -> io::Result<bool> {
        self.set_dark(!self.dark)?;
        Ok(self.dark)
    }
}

/// Colors for the current theme.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub nav: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub tag: Color,
    pub overlay: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color::srgb(0.976, 0.980, 0.984),
        surface: Color::srgba(1.0, 1.0, 1.0, 0.92),
        nav: Color::srgba(1.0, 1.0, 1.0, 0.85),
        text: Color::srgb(0.067, 0.094, 0.153),
        muted: Color::srgb(0.294, 0.333, 0.388),
        accent: Color::srgb(0.388, 0.400, 0.945),
        on_accent: Color::WHITE,
        tag: Color::srgb(0.933, 0.949, 1.0),
        overlay: Color::srgba(0.0, 0.0, 0.0, 0.6),
    };

    pub const DARK: Palette = Palette {
        background: Color::srgb(0.059, 0.090, 0.165),
        surface: Color::srgba(0.118, 0.161, 0.231, 0.92),
        nav: Color::srgba(0.059, 0.090, 0.165, 0.85),
        text: Color::srgb(0.945, 0.961, 0.976),
        muted: Color::srgb(0.580, 0.639, 0.722),
        accent: Color::srgb(0.506, 0.549, 0.973),
        on_accent: Color::WHITE,
        tag: Color::srgb(0.192, 0.180, 0.506),
        overlay: Color::srgba(0.0, 0.0, 0.0, 0.75),
    };

    pub fn for_mode(dark: bool) -> Palette {
        if dark {
            Palette::DARK
        } else {
            Palette::LIGHT
        }
    }

    pub fn paint(&self, role: Themed) -> Color {
        match role {
            Themed::Heading => self.text,
            Themed::Body => self.muted,
            Themed::Accent => self.accent,
            Themed::OnAccent => self.on_accent,
            Themed::Surface => self.surface,
            Themed::NavBar => self.nav,
            Themed::AccentFill => self.accent,
            Themed::Tag => self.tag,
            Themed::Overlay => self.overlay,
        }
    }
}

/// Which palette entry an entity is painted with. Text roles set
/// `TextColor`, the rest set `BackgroundColor`.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Themed {
    Heading,
    Body,
    Accent,
    OnAccent,
    Surface,
    NavBar,
    AccentFill,
    Tag,
    Overlay,
}

impl Themed {
    fn is_text(self) -> bool {
        matches!(
            self,
            Themed::Heading | Themed::Body | Themed::Accent | Themed::OnAccent
        )
    }
}

/// The nav-bar button that flips the theme.
#[derive(Component)]
pub struct ThemeToggle;

/// Label inside [`ThemeToggle`].
#[derive(Component)]
pub struct ThemeToggleLabel;

pub fn toggle_label(dark: bool) -> &'static str {
    if dark {
        "Light"
    } else {
        "Dark"
    }
}

/// Plugin that loads the saved theme and keeps the page painted with it.
pub struct ThemePlugin;

impl Plugin for ThemePlugin {
    fn build(&self, app: &mut App) {
        let store = FileStore::new(DEFAULT_PREFS_PATH);
        let path = store.path().display().to_string();
        let theme = ThemeStore::open(store);
        let palette = Palette::for_mode(theme.is_dark());
        info!(
            "Theme loaded from {path}: {}",
            if theme.is_dark() { "dark" } else { "light" }
        );

        app.insert_resource(theme)
            .insert_resource(palette)
            .insert_resource(ClearColor(palette.background))
            .add_systems(Update, (toggle_theme, apply_palette).chain());
    }
}

/// Flip the theme from the nav-bar button or the `T` key.
pub fn toggle_theme(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ThemeToggle>)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut theme: ResMut<ThemeStore>,
    mut palette: ResMut<Palette>,
) {
    let clicked = buttons.iter().any(|i| *i == Interaction::Pressed);
    if !clicked && !keyboard.just_pressed(KeyCode::KeyT) {
        return;
    }

    if let Err(e) = theme.toggle() {
        warn!("Could not save theme preference: {e}");
    }
    info!(
        "Theme switched to {}",
        if theme.is_dark() { "dark" } else { "light" }
    );
    *palette = Palette::for_mode(theme.is_dark());
}

/// Repaint themed entities when the palette changes or new ones appear.
pub fn apply_palette(
    palette: Res<Palette>,
    mut clear: ResMut<ClearColor>,
    mut themed: Query<(
        Ref<Themed>,
        Option<&mut TextColor>,
        Option<&mut BackgroundColor>,
    )>,
    mut labels: Query<&mut Text, With<ThemeToggleLabel>>,
) {
    let repaint_all = palette.is_changed();
    if repaint_all {
        clear.0 = palette.background;
        let dark = *palette == Palette::DARK;
        for mut label in &mut labels {
            label.0 = toggle_label(dark).to_string();
        }
    }

    for (role, text, background) in &mut themed {
        if !repaint_all && !role.is_added() {
            continue;
        }
        let color = palette.paint(*role);
        if role.is_text() {
            if let Some(mut text) = text {
                text.0 = color;
            }
        } else if let Some(mut background) = background {
            background.0 = color;
        }
    }
}
