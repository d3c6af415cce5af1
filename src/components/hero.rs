use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::action::Action;
use crate::components::{wrap_next, wrap_prev, Component};
use crate::config::Config;
use crate::content;
use crate::section::Section;
use crate::tui::Frame;

/// Seconds each hero slide stays up before auto-advancing.
const SLIDE_SECONDS: f64 = 5.0;

/// The Home section: a rotating hero banner over the welcome text and the
/// key feature cards.
pub struct Hero {
    config: Config,
    active: bool,
    current: usize,
    ticks: usize,
    ticks_per_advance: usize,
}

impl Hero {
    pub fn new(tick_rate: f64) -> Self {
        Self {
            config: Config::default(),
            active: true,
            current: 0,
            ticks: 0,
            ticks_per_advance: (tick_rate * SLIDE_SECONDS).round().max(1.0) as usize,
        }
    }

    fn advance(&mut self) {
        self.current = wrap_next(self.current, content::HERO_SLIDES.len());
        self.ticks = 0;
    }

    fn rewind(&mut self) {
        self.current = wrap_prev(self.current, content::HERO_SLIDES.len());
        self.ticks = 0;
    }
}

impl Component for Hero {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.ticks += 1;
                if self.ticks >= self.ticks_per_advance {
                    self.advance();
                }
            }
            Action::GoToSection(section) => {
                self.active = section == Section::Home;
            }
            Action::Left if self.active => self.rewind(),
            Action::Right if self.active => self.advance(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(7),
                Constraint::Length(4),
                Constraint::Min(0),
            ],
        )
        .split(area);

        let accent = self.config.style("accent");
        let muted = self.config.style("muted");

        let slide = content::HERO_SLIDES[self.current];
        let banner = Paragraph::new(vec![
            Line::styled(content::HERO_HEADLINE, accent.add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::raw(content::HERO_TAGLINE),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(Line::styled(format!(" {slide} "), muted))
                .title_bottom(
                    Line::styled(
                        format!(
                            " {} / {}  <- -> to browse ",
                            self.current + 1,
                            content::HERO_SLIDES.len()
                        ),
                        muted,
                    )
                    .right_aligned(),
                ),
        );
        f.render_widget(banner, layout[0]);

        let welcome = Paragraph::new(vec![
            Line::styled(content::WELCOME_HEADING, accent),
            Line::raw(content::WELCOME_TEXT),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(welcome, layout[1]);

        let columns = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        )
        .split(layout[2]);
        for (feature, column) in content::KEY_FEATURES.iter().zip(columns.iter()) {
            let card = Paragraph::new(feature.text)
                .wrap(Wrap { trim: true })
                .block(Block::bordered().title(Span::styled(feature.title, accent)));
            f.render_widget(card, *column);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_auto_advance_after_enough_ticks() {
        let mut hero = Hero::new(4.0);
        assert_eq!(hero.ticks_per_advance, 20);
        for _ in 0..19 {
            hero.update(Action::Tick).unwrap();
        }
        assert_eq!(hero.current, 0);
        hero.update(Action::Tick).unwrap();
        assert_eq!(hero.current, 1);
    }

    #[test]
    fn test_manual_navigation_wraps_and_resets_timer() {
        let mut hero = Hero::new(4.0);
        hero.update(Action::Tick).unwrap();
        hero.update(Action::Left).unwrap();
        assert_eq!(hero.current, content::HERO_SLIDES.len() - 1);
        assert_eq!(hero.ticks, 0);
        hero.update(Action::Right).unwrap();
        assert_eq!(hero.current, 0);
    }

    #[test]
    fn test_ignores_arrows_when_inactive() {
        let mut hero = Hero::new(4.0);
        hero.update(Action::GoToSection(Section::Pricing)).unwrap();
        hero.update(Action::Right).unwrap();
        assert_eq!(hero.current, 0);
    }
}
