use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::action::Action;
use crate::components::{wrap_next, wrap_prev, Component};
use crate::config::Config;
use crate::content;
use crate::section::Section;
use crate::tui::Frame;

/// The Attractions section: cards for the nearby locations, each opening
/// into a detail view with its photo gallery.
pub struct Attractions {
    config: Config,
    active: bool,
    cursor: usize,
    open: bool,
}

impl Attractions {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            active: false,
            cursor: 0,
            open: false,
        }
    }

    fn location(&self) -> &'static content::NearbyLocation {
        &content::NEARBY_LOCATIONS[self.cursor]
    }

    fn draw_cards(&self, f: &mut Frame<'_>, area: Rect) {
        let accent = self.config.style("accent");
        let highlight = self.config.style("highlight");
        let muted = self.config.style("muted");

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(3), Constraint::Min(0)],
        )
        .split(area);

        let header = Paragraph::new(vec![
            Line::styled(content::NEARBY_HEADING, accent.add_modifier(Modifier::BOLD)),
            Line::raw(content::NEARBY_TAGLINE),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(header, layout[0]);

        let columns = Layout::new(
            Direction::Horizontal,
            content::NEARBY_LOCATIONS
                .iter()
                .map(|_| Constraint::Ratio(1, content::NEARBY_LOCATIONS.len() as u32)),
        )
        .split(layout[1]);

        for (i, (location, column)) in content::NEARBY_LOCATIONS
            .iter()
            .zip(columns.iter())
            .enumerate()
        {
            let selected = i == self.cursor;
            let block = Block::bordered()
                .border_style(if selected { highlight } else { muted })
                .title(Span::styled(
                    format!(" {} ", location.name),
                    if selected { highlight } else { accent },
                ));
            let mut lines = vec![
                Line::styled(location.distance, muted),
                Line::raw(location.description),
            ];
            if selected {
                lines.push(Line::styled("Enter to explore", muted));
            }
            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            f.render_widget(card, *column);
        }
    }

    fn draw_detail(&self, f: &mut Frame<'_>, area: Rect) {
        let accent = self.config.style("accent");
        let muted = self.config.style("muted");
        let location = self.location();

        let block = Block::bordered()
            .title(Span::styled(format!(" {} Gallery ", location.name), accent))
            .title_bottom(Line::styled(" Esc to close ", muted).right_aligned());
        let mut lines = vec![
            Line::styled(location.distance, muted),
            Line::raw(location.description),
            Line::raw(""),
        ];
        for photo in location.photos {
            lines.push(Line::raw(format!("- {photo}")));
        }
        let body = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}

impl Default for Attractions {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Attractions {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::GoToSection(section) => {
                self.active = section == Section::Attractions;
                if !self.active {
                    self.open = false;
                }
            }
            Action::Left if self.active && !self.open => {
                self.cursor = wrap_prev(self.cursor, content::NEARBY_LOCATIONS.len());
            }
            Action::Right if self.active && !self.open => {
                self.cursor = wrap_next(self.cursor, content::NEARBY_LOCATIONS.len());
            }
            Action::Activate if self.active => {
                self.open = true;
            }
            Action::Back if self.active => {
                self.open = false;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if self.open {
            self.draw_detail(f, area);
        } else {
            self.draw_cards(f, area);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn active_attractions() -> Attractions {
        let mut attractions = Attractions::new();
        attractions
            .update(Action::GoToSection(Section::Attractions))
            .unwrap();
        attractions
    }

    #[test]
    fn test_cursor_wraps_over_locations() {
        let mut attractions = active_attractions();
        attractions.update(Action::Left).unwrap();
        assert_eq!(attractions.cursor, content::NEARBY_LOCATIONS.len() - 1);
    }

    #[test]
    fn test_activate_opens_and_back_closes() {
        let mut attractions = active_attractions();
        attractions.update(Action::Activate).unwrap();
        assert!(attractions.open);
        // Cursor movement is parked while the detail view is open.
        attractions.update(Action::Right).unwrap();
        assert_eq!(attractions.cursor, 0);
        attractions.update(Action::Back).unwrap();
        assert!(!attractions.open);
    }
}
