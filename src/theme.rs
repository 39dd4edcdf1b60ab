use anstyle::{AnsiColor, Color, Style};

pub const ROOT: Style = Style::new().bold();
pub const COMMAND: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
pub const GROUP: Style = Style::new()
    .fg_color(Some(Color::Ansi(AnsiColor::Cyan)))
    .bold();
pub const GUIDE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightGreen)));
pub const PANEL: Style = Style::new();
