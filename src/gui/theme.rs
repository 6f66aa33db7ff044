//! Theme definitions for the preview widget

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// Placeholder backdrop behind the thumbnail, close to YouTube's player chrome
pub const SHADOW: Color = Color::from_rgb(0.071, 0.082, 0.098);
pub const SHADOW_70: Color = Color::from_rgba(0.071, 0.082, 0.098, 0.7);

pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.616, 0.639, 0.667);

/// Dark backdrop for the widget region (placeholder and surface area alike).
pub struct PlayerContainer;

impl container::StyleSheet for PlayerContainer {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(WHITE),
            background: Some(Background::Color(SHADOW)),
            ..Default::default()
        }
    }
}

/// The play affordance: translucent pill over the thumbnail.
pub struct PlayButton;

impl button::StyleSheet for PlayButton {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SHADOW_70)),
            text_color: WHITE,
            border: Border::with_radius(f32::MAX),
            ..Default::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(SHADOW)),
            ..self.active(style)
        }
    }
}
