// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the flipbook views.
//!
//! Values follow an 8px grid. Change ratios with care: the compile-time
//! checks at the bottom of this file guard the scale ordering.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Desk the book lies on.
    pub const BACKDROP: Color = Color::from_rgb(0.16, 0.17, 0.2);
    /// Paper tone for pages whose image is missing.
    pub const PAPER: Color = Color::from_rgb(0.96, 0.94, 0.9);

    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Toolbar and dialog surfaces.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Height reserved below the book for the toolbar.
    pub const TOOLBAR_HEIGHT: f32 = 52.0;

    pub const HELP_DIALOG_WIDTH: f32 = 440.0;
    pub const LOADING_WIDTH: f32 = 320.0;
    pub const PROGRESS_GIRTH: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Section headings in the help dialog.
    pub const TITLE_SM: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Page counter.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    /// Lift applied to the open page and to dialogs.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_STRONG > opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::TOOLBAR_HEIGHT > sizing::BUTTON_HEIGHT);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::LG > radius::SM);
};
