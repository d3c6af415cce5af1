use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

/// Named styles used by the components, e.g. `accent`, `error`, `muted`.
/// Config files spell styles as strings like `"bold yellow"` or
/// `"white on blue"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(name, raw)| (name, parse_style(&raw)))
            .collect();

        Ok(Styles(styles))
    }
}

pub fn parse_style(raw: &str) -> Style {
    let mut style = Style::default();
    let mut bg_next = false;
    for word in raw.split_whitespace() {
        match word.to_ascii_lowercase().as_str() {
            "on" => bg_next = true,
            "bold" => style = style.add_modifier(Modifier::BOLD),
            "italic" => style = style.add_modifier(Modifier::ITALIC),
            "underline" | "underlined" => style = style.add_modifier(Modifier::UNDERLINED),
            "dim" => style = style.add_modifier(Modifier::DIM),
            "reversed" => style = style.add_modifier(Modifier::REVERSED),
            other => {
                if let Some(color) = parse_color(other) {
                    style = if bg_next {
                        bg_next = false;
                        style.bg(color)
                    } else {
                        style.fg(color)
                    };
                }
            }
        }
    }
    style
}

fn parse_color(raw: &str) -> Option<Color> {
    if let Some(hex) = raw.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match raw {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        _ => raw.parse::<u8>().ok().map(Color::Indexed),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_plain_color() {
        assert_eq!(parse_style("red"), Style::default().fg(Color::Red));
    }

    #[test]
    fn test_parse_modifiers_and_background() {
        assert_eq!(
            parse_style("bold white on blue"),
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_parse_hex_and_indexed() {
        assert_eq!(
            parse_style("#ff8800"),
            Style::default().fg(Color::Rgb(255, 136, 0))
        );
        assert_eq!(parse_style("42"), Style::default().fg(Color::Indexed(42)));
    }

    #[test]
    fn test_unknown_words_are_ignored() {
        assert_eq!(parse_style("sparkly"), Style::default());
    }
}
