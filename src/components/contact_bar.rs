use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::components::Component;
use crate::config::Config;
use crate::content;
use crate::links;
use crate::tui::Frame;

/// Persistent quick-contact bar pinned under every section: WhatsApp,
/// phone and a Gmail compose link.
pub struct ContactBar {
    config: Config,
}

impl ContactBar {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Default for ContactBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let accent = self.config.style("accent");
        let muted = self.config.style("muted");

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(1), Constraint::Length(1)],
        )
        .split(area);

        let contacts = Line::from(vec![
            Span::styled("WhatsApp ", accent),
            Span::raw(links::wa_me(content::CONTACT_WHATSAPP, None)),
            Span::raw("   "),
            Span::styled("Call ", accent),
            Span::raw(links::tel(content::CONTACT_PHONE)),
            Span::raw("   "),
            Span::styled("Email ", accent),
            Span::raw(links::gmail_compose(
                content::CONTACT_EMAIL,
                content::EMAIL_SUBJECT,
            )),
        ]);
        f.render_widget(Paragraph::new(contacts), layout[0]);

        let hints = Line::styled(
            "Tab/1-7 sections  <- -> browse  Enter open  Esc back  q quit",
            muted,
        );
        f.render_widget(Paragraph::new(hints), layout[1]);

        Ok(())
    }
}
