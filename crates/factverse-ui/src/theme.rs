//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Theme, Vec2, Visuals};

// Accent colors are shared by both palettes
pub const TEXT_ON_ACCENT: Color32 = Color32::WHITE;
pub const TEXT_ON_ACCENT_MUTED: Color32 = Color32::from_rgb(191, 219, 254);
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235);
pub const ACCENT_DARK: Color32 = Color32::from_rgb(29, 78, 216);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const BUBBLE_ROUNDING: CornerRadius = CornerRadius::same(8);
pub const CHIP_ROUNDING: CornerRadius = CornerRadius::same(12);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 10.0);

pub const CHAT_WINDOW_SIZE: Vec2 = Vec2::new(384.0, 512.0);
pub const CORNER_OFFSET: Vec2 = Vec2::new(-24.0, -24.0);

/// Surface and text colors that differ between light and dark mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg_page: Color32,
    pub bg_panel: Color32,
    pub bg_log: Color32,
    pub bg_chip: Color32,
    pub border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub disabled: Color32,
    pub error: Color32,
    pub error_bg: Color32,
    pub weather_card: Color32,
    pub weather_tile: Color32,
}

pub const LIGHT: Palette = Palette {
    bg_page: Color32::from_rgb(243, 244, 246),
    bg_panel: Color32::from_rgb(255, 255, 255),
    bg_log: Color32::from_rgb(249, 250, 251),
    bg_chip: Color32::from_rgb(229, 231, 235),
    border: Color32::from_rgb(229, 231, 235),
    text_primary: Color32::from_rgb(31, 41, 55),
    text_secondary: Color32::from_rgb(107, 114, 128),
    disabled: Color32::from_rgb(209, 213, 219),
    error: Color32::from_rgb(239, 68, 68),
    error_bg: Color32::from_rgb(254, 242, 242),
    weather_card: ACCENT,
    weather_tile: Color32::from_rgb(59, 130, 246),
};

pub const DARK: Palette = Palette {
    bg_page: Color32::from_rgb(17, 24, 39),
    bg_panel: Color32::from_rgb(31, 41, 55),
    bg_log: Color32::from_rgb(17, 24, 39),
    bg_chip: Color32::from_rgb(55, 65, 81),
    border: Color32::from_rgb(55, 65, 81),
    text_primary: Color32::from_rgb(243, 244, 246),
    text_secondary: Color32::from_rgb(156, 163, 175),
    disabled: Color32::from_rgb(75, 85, 99),
    error: Color32::from_rgb(248, 113, 113),
    error_bg: Color32::from_rgb(60, 32, 40),
    weather_card: ACCENT_DARK,
    weather_tile: Color32::from_rgb(30, 64, 175),
};

impl Palette {
    pub fn for_visuals(visuals: &Visuals) -> &'static Palette {
        if visuals.dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

/// Install the news-site style for both themes; egui follows the system
/// preference between them.
pub fn apply_theme(ctx: &egui::Context) {
    ctx.style_mut_of(Theme::Light, |style| {
        style.visuals = themed_visuals(Visuals::light(), &LIGHT);
        style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    });
    ctx.style_mut_of(Theme::Dark, |style| {
        style.visuals = themed_visuals(Visuals::dark(), &DARK);
        style.spacing.item_spacing = Vec2::new(8.0, 6.0);
    });
}

fn themed_visuals(mut visuals: Visuals, palette: &Palette) -> Visuals {
    visuals.panel_fill = palette.bg_page;
    visuals.window_fill = palette.bg_panel;
    visuals.window_stroke = Stroke::new(1.0, palette.border);
    visuals.extreme_bg_color = palette.bg_panel;

    visuals.widgets.inactive.bg_fill = palette.bg_chip;
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.hovered.bg_fill = palette.disabled;
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, palette.text_primary);
    visuals.widgets.active.bg_fill = ACCENT_DARK;
    visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_ON_ACCENT);

    visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);
    visuals
}
