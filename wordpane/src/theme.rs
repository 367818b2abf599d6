use ratatui::style::Color;

/// Light/dark presentation mode. Read once from the terminal environment at
/// startup, afterwards owned by the search panel and flipped only by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub struct Palette {
    pub heading: Color,
    pub body: Color,
    pub accent: Color,
    pub error: Color,
}

impl ThemeMode {
    /// Reads the terminal background from `COLORFGBG`. Falls back to light
    /// when the variable is missing or unparsable.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| Self::from_colorfgbg(&value))
            .unwrap_or(ThemeMode::Light)
    }

    // COLORFGBG looks like "15;0" or "15;default;0"; the last field is the
    // background color number.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let background = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
        Some(match background {
            0..=6 | 8 => ThemeMode::Dark,
            _ => ThemeMode::Light,
        })
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☾",
            ThemeMode::Light => "☀",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => Palette {
                heading: Color::White,
                body: Color::Gray,
                accent: Color::LightBlue,
                error: Color::LightRed,
            },
            ThemeMode::Light => Palette {
                heading: Color::Black,
                body: Color::DarkGray,
                accent: Color::Blue,
                error: Color::Red,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("15;0", Some(ThemeMode::Dark))]
    #[case("0;15", Some(ThemeMode::Light))]
    #[case("12;default;0", Some(ThemeMode::Dark))]
    #[case("15;8", Some(ThemeMode::Dark))]
    #[case("0;7", Some(ThemeMode::Light))]
    #[case("", None)]
    #[case("garbage", None)]
    fn parses_colorfgbg(#[case] value: &str, #[case] expected: Option<ThemeMode>) {
        assert_eq!(ThemeMode::from_colorfgbg(value), expected);
    }

    #[rstest]
    #[case(ThemeMode::Dark)]
    #[case(ThemeMode::Light)]
    fn toggling_twice_returns_to_the_original_mode(#[case] mode: ThemeMode) {
        assert_eq!(mode.toggled().toggled(), mode);
        assert_ne!(mode.toggled(), mode);
    }

    #[test]
    fn icons_match_the_modes() {
        assert_eq!(ThemeMode::Dark.icon(), "☾");
        assert_eq!(ThemeMode::Light.icon(), "☀");
    }
}
