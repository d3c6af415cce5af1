use chrono::{Datelike, Local};
use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::components::Component;
use crate::config::Config;
use crate::content;
use crate::links;
use crate::tui::Frame;

/// The Contact section: address, contact links, site links and the legal
/// line. Link targets are spelled out for copying, since the terminal
/// cannot open them itself.
pub struct Footer {
    config: Config,
}

impl Footer {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Footer {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let accent = self.config.style("accent");
        let muted = self.config.style("muted");

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(2)],
        )
        .split(area);

        let columns = Layout::new(
            Direction::Horizontal,
            [
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ],
        )
        .split(layout[0]);

        let about = Paragraph::new(vec![
            Line::styled(
                content::HOMESTAY_NAME,
                accent.add_modifier(Modifier::BOLD),
            ),
            Line::raw(content::FOOTER_MISSION),
            Line::raw(""),
            Line::styled(format!("Reg. #: {}", content::REGISTRATION), muted),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::bordered());
        f.render_widget(about, columns[0]);

        let mut link_lines = Vec::new();
        for group in content::FOOTER_LINKS {
            link_lines.push(Line::styled(group.title, accent));
            for link in group.links {
                link_lines.push(Line::raw(format!("  {link}")));
            }
            link_lines.push(Line::raw(""));
        }
        link_lines.push(Line::styled("Find Us", accent));
        link_lines.push(Line::styled(content::MAP_EMBED_URL, muted));
        let site_links = Paragraph::new(link_lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered());
        f.render_widget(site_links, columns[1]);

        let contact = Paragraph::new(vec![
            Line::styled("Contact Us", accent),
            Line::raw(format!(
                "{}, {}",
                content::ADDRESS_LINE,
                content::CITY_STATE
            )),
            Line::raw(format!("{} - {}", content::COUNTRY, content::POSTAL_CODE)),
            Line::raw(""),
            Line::raw(format!("Call: {}", content::CONTACT_PHONE)),
            Line::styled(format!("  {}", links::tel(content::CONTACT_PHONE)), muted),
            Line::raw(format!("WhatsApp: {}", content::CONTACT_WHATSAPP)),
            Line::styled(
                format!("  {}", links::wa_me(content::CONTACT_WHATSAPP, None)),
                muted,
            ),
            Line::raw(format!("Email: {}", content::CONTACT_EMAIL)),
            Line::styled(format!("  {}", links::mailto(content::CONTACT_EMAIL)), muted),
            Line::raw(""),
            Line::styled(content::FACEBOOK_URL, muted),
            Line::styled(content::INSTAGRAM_URL, muted),
        ])
        .wrap(Wrap { trim: false })
        .block(Block::bordered());
        f.render_widget(contact, columns[2]);

        let year = Local::now().year();
        let copyright = Paragraph::new(Line::styled(
            format!(
                "(c) {} {}. All rights reserved.",
                year,
                content::HOMESTAY_NAME
            ),
            muted,
        ))
        .centered();
        f.render_widget(copyright, layout[1]);

        Ok(())
    }
}
