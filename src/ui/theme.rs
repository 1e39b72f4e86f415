//! UI theme for the overlay.

use bevy::prelude::*;
use bevy_feathers::dark_theme::create_dark_theme;
use bevy_feathers::palette;
use bevy_feathers::theme::UiTheme;
use bevy_feathers::tokens;

/// Feathers dark theme with the tokens the info panel is styled from.
pub fn solar_theme() -> UiTheme {
    // Feathers initializes `UiTheme` but does not populate it by default.
    let mut theme = UiTheme(create_dark_theme());
    theme.set_color(&tokens::TEXT_MAIN.to_string(), palette::ACCENT);
    theme.set_color(&tokens::TEXT_DIM.to_string(), palette::LIGHT_GRAY_1);
    theme.set_color(&tokens::WINDOW_BG.to_string(), Color::srgba(0.04, 0.08, 0.12, 0.9));
    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_tokens_are_populated() {
        let theme = solar_theme();
        assert_eq!(theme.color(&tokens::TEXT_MAIN), Color::from(palette::ACCENT));
        assert_eq!(
            theme.color(&tokens::TEXT_DIM),
            Color::from(palette::LIGHT_GRAY_1)
        );
        assert_eq!(
            theme.color(&tokens::WINDOW_BG),
            Color::srgba(0.04, 0.08, 0.12, 0.9)
        );
    }
}
