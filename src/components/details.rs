use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::action::Action;
use crate::components::{wrap_next, wrap_prev, Component};
use crate::config::Config;
use crate::content::{self, ResearchTopic};
use crate::section::Section;
use crate::tui::Frame;

/// Tabs of the homestay details view.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum InfoTab {
    #[default]
    Overview,
    #[strum(serialize = "Location & Attractions")]
    Location,
    #[strum(serialize = "Meals & Dining")]
    Meals,
    #[strum(serialize = "Amenities & Services")]
    Facilities,
    #[strum(serialize = "Research & Exploration")]
    Research,
}

impl InfoTab {
    fn index(self) -> usize {
        InfoTab::iter().position(|t| t == self).unwrap_or(0)
    }

    fn at(index: usize) -> InfoTab {
        InfoTab::iter().nth(index).unwrap_or_default()
    }
}

/// The About section: the homestay details behind a tab bar, mirroring
/// the overview, location, meals, facilities and research views.
pub struct Details {
    config: Config,
    active: bool,
    tab: InfoTab,
}

impl Details {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            active: false,
            tab: InfoTab::default(),
        }
    }

    fn tab_count() -> usize {
        InfoTab::iter().count()
    }

    fn overview_lines(&self) -> Vec<Line<'static>> {
        let accent = self.config.style("accent");
        vec![
            Line::styled(content::WELCOME_HEADING, accent.add_modifier(Modifier::BOLD)),
            Line::raw(content::WELCOME_TEXT),
            Line::raw(""),
            Line::styled("Address", accent),
            Line::raw(content::LOCATION),
            Line::raw(""),
            Line::styled("Full Meals", accent),
            Line::raw(
                "Options for breakfast, lunch, and dinner, plus special Kashmiri Wazwan dishes.",
            ),
            Line::raw(""),
            Line::styled("Unique Focus", accent),
            Line::raw("Research opportunities in Forest Ecology and Ethnobiology."),
            Line::raw(""),
            Line::styled("Facilities", accent),
            Line::raw("Free WiFi, Parking, Outdoor Seating, and Trekking Gear."),
        ]
    }

    fn location_lines(&self) -> Vec<Line<'static>> {
        let accent = self.config.style("accent");
        let mut lines = vec![
            Line::styled("Location Details", accent.add_modifier(Modifier::BOLD)),
            Line::raw(format!("Homestay Address: {}", content::LOCATION)),
        ];
        for detail in content::LOCATION_DETAILS {
            lines.push(Line::raw(format!("{}: {}", detail.label, detail.value)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Nearby Attractions",
            accent.add_modifier(Modifier::BOLD),
        ));
        for attraction in content::ATTRACTIONS {
            lines.push(Line::raw(format!(
                "{}: {} from Orchard Homestay",
                attraction.name, attraction.distance
            )));
        }
        lines
    }

    fn meals_lines(&self) -> Vec<Line<'static>> {
        let accent = self.config.style("accent");
        let highlight = self.config.style("highlight");
        let mut lines = vec![Line::styled(
            "Meal Plans",
            accent.add_modifier(Modifier::BOLD),
        )];
        for meal in content::MEALS {
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", meal.kind)),
                Span::styled(meal.price, accent),
            ]));
            lines.push(Line::raw(format!("  {}", meal.details)));
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled("Specialty Dishes:", highlight));
        lines.push(Line::raw(content::SPECIAL_MEALS));
        lines
    }

    fn facilities_lines(&self) -> Vec<Line<'static>> {
        let accent = self.config.style("accent");
        let mut lines = vec![Line::styled(
            "Amenities and Services",
            accent.add_modifier(Modifier::BOLD),
        )];
        for item in content::FACILITIES {
            lines.push(Line::raw(format!("- {item}")));
        }
        lines
    }

    fn research_lines(&self) -> Vec<Line<'static>> {
        let accent = self.config.style("accent");
        let muted = self.config.style("muted");
        let mut lines = vec![
            Line::styled(
                "Research Opportunities",
                accent.add_modifier(Modifier::BOLD),
            ),
            Line::raw(content::RESEARCH_PITCH),
            Line::raw(format!("Owned by {}.", content::RESEARCH_OWNER)),
            Line::raw(""),
        ];
        for topic in content::RESEARCH_TOPICS {
            match topic {
                ResearchTopic::Link { field, url } => {
                    lines.push(Line::from(vec![
                        Span::styled(format!("[{field}]"), accent),
                        Span::styled(format!("  {url}"), muted),
                    ]));
                }
                ResearchTopic::Plain { field } => {
                    lines.push(Line::styled(format!("[{field}]"), muted));
                }
            }
        }
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            "Exploration Opportunities",
            accent.add_modifier(Modifier::BOLD),
        ));
        for exploration in content::EXPLORATIONS {
            lines.push(Line::raw(format!(
                "{}: {}",
                exploration.title, exploration.text
            )));
        }
        lines
    }
}

impl Default for Details {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Details {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::GoToSection(section) => {
                self.active = section == Section::About;
            }
            Action::Left if self.active => {
                self.tab = InfoTab::at(wrap_prev(self.tab.index(), Self::tab_count()));
            }
            Action::Right if self.active => {
                self.tab = InfoTab::at(wrap_next(self.tab.index(), Self::tab_count()));
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(2), Constraint::Min(0)],
        )
        .split(area);

        let tabs = Tabs::new(InfoTab::iter().map(|t| t.to_string()))
            .select(self.tab.index())
            .highlight_style(self.config.style("highlight"));
        f.render_widget(tabs, layout[0]);

        let lines = match self.tab {
            InfoTab::Overview => self.overview_lines(),
            InfoTab::Location => self.location_lines(),
            InfoTab::Meals => self.meals_lines(),
            InfoTab::Facilities => self.facilities_lines(),
            InfoTab::Research => self.research_lines(),
        };
        let body = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
            Block::bordered().title(format!(" ORCHARD HOMESTAY, {} ", content::LOCATION)),
        );
        f.render_widget(body, layout[1]);

        Ok(())
    }
}
