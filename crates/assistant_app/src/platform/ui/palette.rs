use assistant_core::StyleRoot;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub user: Color,
    pub bot: Color,
    pub error: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            user: Color::Blue,
            bot: Color::Black,
            error: Color::Red,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Black,
            text: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::LightCyan,
            user: Color::LightCyan,
            bot: Color::White,
            error: Color::LightRed,
        }
    }
}

/// Styling root of the terminal UI. Rendering reads the palette from here.
#[derive(Debug, Default)]
pub struct TerminalStyle {
    dark: bool,
}

impl TerminalStyle {
    pub fn palette(&self) -> Palette {
        if self.dark {
            Palette::dark()
        } else {
            Palette::light()
        }
    }
}

impl StyleRoot for TerminalStyle {
    fn is_dark(&self) -> bool {
        self.dark
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}
