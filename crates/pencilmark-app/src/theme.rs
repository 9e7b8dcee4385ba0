//! Color themes.
//!
//! Themes only affect rendering; the editor never sees them.

use eframe::egui::{Color32, Visuals};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Theme {
    Light,
    #[default]
    Dark,
    Grey,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Grey];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Grey => "Grey",
        }
    }

    /// Returns the egui visuals for panels, buttons and text fields.
    #[must_use]
    pub fn visuals(self) -> Visuals {
        let palette = self.palette();
        let mut visuals = match self {
            Self::Light | Self::Grey => Visuals::light(),
            Self::Dark => Visuals::dark(),
        };
        visuals.panel_fill = palette.background;
        visuals.window_fill = palette.background;
        visuals.override_text_color = Some(palette.text);
        visuals
    }

    /// Returns the grid palette for this theme.
    #[must_use]
    pub const fn palette(self) -> GridPalette {
        match self {
            Self::Light => GridPalette {
                background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
                text: Color32::from_rgb(0x22, 0x22, 0x22),
                cell_bg: Color32::WHITE,
                cell_bg_selected: Color32::from_rgb(0xbb, 0xde, 0xfb),
                border_thin: Color32::from_rgb(0x99, 0x99, 0x99),
                border_thick: Color32::from_rgb(0x22, 0x22, 0x22),
                text_center: Color32::from_rgb(0x66, 0x66, 0x00),
                text_locked: Color32::BLACK,
                text_pencil: Color32::from_rgb(0x44, 0x44, 0x44),
            },
            Self::Dark => GridPalette {
                background: Color32::from_rgb(0x22, 0x22, 0x22),
                text: Color32::from_rgb(0xf5, 0xf5, 0xf5),
                cell_bg: Color32::from_rgb(0x2e, 0x2e, 0x2e),
                cell_bg_selected: Color32::from_rgb(0x1e, 0x4a, 0x6e),
                border_thin: Color32::from_rgb(0x55, 0x55, 0x55),
                border_thick: Color32::from_rgb(0xcc, 0xcc, 0xcc),
                text_center: Color32::from_rgb(0xd8, 0xd8, 0x6a),
                text_locked: Color32::WHITE,
                text_pencil: Color32::from_rgb(0xaa, 0xaa, 0xaa),
            },
            Self::Grey => GridPalette {
                background: Color32::from_rgb(0x88, 0x88, 0x88),
                text: Color32::from_rgb(0x22, 0x22, 0x22),
                cell_bg: Color32::from_rgb(0xa8, 0xa8, 0xa8),
                cell_bg_selected: Color32::from_rgb(0xc8, 0xc8, 0x90),
                border_thin: Color32::from_rgb(0x66, 0x66, 0x66),
                border_thick: Color32::from_rgb(0x22, 0x22, 0x22),
                text_center: Color32::from_rgb(0x66, 0x66, 0x00),
                text_locked: Color32::BLACK,
                text_pencil: Color32::from_rgb(0x33, 0x33, 0x33),
            },
        }
    }
}

/// Colors used to paint the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPalette {
    pub background: Color32,
    pub text: Color32,
    pub cell_bg: Color32,
    pub cell_bg_selected: Color32,
    pub border_thin: Color32,
    pub border_thick: Color32,
    /// Center digits of unlocked cells.
    pub text_center: Color32,
    /// Center digits of locked cells.
    pub text_locked: Color32,
    pub text_pencil: Color32,
}
