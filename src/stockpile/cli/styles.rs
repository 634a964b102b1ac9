//! Styles for the stockpile CLI.
//!
//! Templates only ever name a style by what the text *is* (a price, a low-stock
//! quantity, a warning). Which colors that means is decided here, once per
//! palette. Light and dark terminals get separate palettes; the active one
//! follows the persisted [`ThemeMode`].
//!
//! Unknown style names render with a `(!?)` prefix so typos in templates are
//! visible instead of silently unstyled.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use stockpile::theme::ThemeMode;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const HEADER: &str = "header";
    pub const INDEX: &str = "index";
    pub const NAME: &str = "name";
    pub const CATEGORY: &str = "category";
    pub const PRICE: &str = "price";
    pub const QUANTITY: &str = "quantity";
    pub const LOW_STOCK: &str = "low-stock";
    pub const VALUE: &str = "value";
    pub const ID: &str = "id";
    pub const MUTED: &str = "muted";
    pub const STAT_LABEL: &str = "stat-label";
    pub const STAT_VALUE: &str = "stat-value";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
}

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// A named set of console styles.
pub struct Palette {
    styles: HashMap<&'static str, Style>,
}

impl Palette {
    fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Styles `text`; with `use_color` off only the missing-style check applies.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static LIGHT: Lazy<Palette> = Lazy::new(build_light);
pub static DARK: Lazy<Palette> = Lazy::new(build_dark);

pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

fn build_light() -> Palette {
    let regular = Style::new().black();
    let muted = Style::new().color256(rgb_to_ansi256((115, 115, 115)));
    let accent = Style::new().color256(rgb_to_ansi256((0, 95, 175)));
    let alert = Style::new().color256(rgb_to_ansi256((186, 33, 45)));

    Palette::new()
        .add(names::HEADER, regular.clone().bold().underlined())
        .add(names::INDEX, accent.clone())
        .add(names::NAME, regular.clone())
        .add(names::CATEGORY, muted.clone())
        .add(names::PRICE, regular.clone())
        .add(names::QUANTITY, regular.clone())
        .add(names::LOW_STOCK, alert.clone().bold())
        .add(names::VALUE, accent.clone())
        .add(names::ID, muted.clone().dim())
        .add(names::MUTED, muted.clone())
        .add(names::STAT_LABEL, muted.clone())
        .add(names::STAT_VALUE, regular.bold())
        .add(names::ERROR, alert.bold())
        .add(names::WARNING, Style::new().color256(rgb_to_ansi256((175, 95, 0))).bold())
        .add(names::SUCCESS, Style::new().color256(rgb_to_ansi256((0, 128, 0))))
        .add(names::INFO, muted)
}

fn build_dark() -> Palette {
    let regular = Style::new().white();
    let muted = Style::new().color256(rgb_to_ansi256((170, 170, 170)));
    let accent = Style::new().color256(rgb_to_ansi256((95, 175, 255)));
    let alert = Style::new().color256(rgb_to_ansi256((255, 95, 95)));

    Palette::new()
        .add(names::HEADER, regular.clone().bold().underlined())
        .add(names::INDEX, accent.clone())
        .add(names::NAME, regular.clone())
        .add(names::CATEGORY, muted.clone())
        .add(names::PRICE, regular.clone())
        .add(names::QUANTITY, regular.clone())
        .add(names::LOW_STOCK, alert.clone().bold())
        .add(names::VALUE, accent.clone())
        .add(names::ID, muted.clone().dim())
        .add(names::MUTED, muted.clone())
        .add(names::STAT_LABEL, muted.clone())
        .add(names::STAT_VALUE, regular.bold())
        .add(names::ERROR, alert.bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
}

/// Nearest ANSI 256-color index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
