use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use thousands::Separable;

use crate::components::Component;
use crate::config::Config;
use crate::content;
use crate::tui::Frame;

/// The Pricing section: one card per stay option.
pub struct Pricing {
    config: Config,
}

impl Pricing {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Pricing {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let accent = self.config.style("accent");
        let highlight = self.config.style("highlight");
        let muted = self.config.style("muted");

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(3), Constraint::Min(0)],
        )
        .split(area);

        let header = Paragraph::new(vec![
            Line::styled(
                content::PRICING_HEADING,
                accent.add_modifier(Modifier::BOLD),
            ),
            Line::raw(content::PRICING_TAGLINE),
        ]);
        f.render_widget(header, layout[0]);

        let columns = Layout::new(
            Direction::Horizontal,
            content::PRICING_PLANS
                .iter()
                .map(|_| Constraint::Ratio(1, content::PRICING_PLANS.len() as u32)),
        )
        .split(layout[1]);

        for (plan, column) in content::PRICING_PLANS.iter().zip(columns.iter()) {
            let mut lines = vec![
                Line::styled(plan.subtitle, muted),
                Line::raw(""),
                Line::from(vec![
                    Span::styled(
                        format!("Rs. {}", plan.price_inr.separate_with_commas()),
                        accent.add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(" /night", muted),
                ]),
                Line::styled(format!("(${} / night)", plan.price_usd), muted),
                Line::raw(""),
                Line::raw(format!("Occupancy: {}", plan.occupancy)),
                Line::raw(""),
                Line::raw(plan.description),
                Line::raw(format!("Rooms Available: {}", plan.available_rooms)),
                Line::raw(content::BREAKFAST_INCLUDED),
            ];
            if plan.is_featured {
                lines.insert(0, Line::styled("* BEST VALUE *", highlight));
            }
            let block = Block::bordered().title(Span::styled(
                format!(" {} ", plan.kind),
                if plan.is_featured { highlight } else { accent },
            ));
            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            f.render_widget(card, *column);
        }

        Ok(())
    }
}
