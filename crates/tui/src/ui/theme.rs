use ratatui::style::Color;

/// Palette shared by every widget. Two variants, flipped at runtime by
/// the theme toggle.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub positive: Color,
    pub star: Color,
}

impl Theme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(8, 12, 16),
            panel: Color::Rgb(20, 26, 32),
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(129, 140, 248),
            border: Color::Rgb(60, 70, 80),
            error: Color::Rgb(220, 100, 100),
            positive: Color::Rgb(74, 222, 128),
            star: Color::Rgb(250, 204, 21),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(243, 244, 246),
            panel: Color::Rgb(255, 255, 255),
            text: Color::Rgb(55, 65, 81),
            dim: Color::Rgb(120, 128, 138),
            accent: Color::Rgb(79, 70, 229),
            border: Color::Rgb(190, 195, 203),
            error: Color::Rgb(185, 45, 45),
            positive: Color::Rgb(22, 130, 70),
            star: Color::Rgb(202, 138, 4),
        }
    }
}
