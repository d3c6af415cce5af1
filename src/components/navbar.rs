use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::action::Action;
use crate::components::Component;
use crate::config::Config;
use crate::section::Section;
use crate::tui::Frame;

/// Top navigation bar listing every section, with the active one
/// highlighted. Sections are numbered to match their jump keys.
pub struct Navbar {
    section: Section,
    config: Config,
}

impl Navbar {
    pub fn new() -> Self {
        Self {
            section: Section::default(),
            config: Config::default(),
        }
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Navbar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::GoToSection(section) = action {
            self.section = section;
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let titles: Vec<String> = Section::iter()
            .enumerate()
            .map(|(i, section)| format!("{} {}", i + 1, section))
            .collect();
        let tabs = Tabs::new(titles)
            .select(self.section.index())
            .highlight_style(self.config.style("highlight"))
            .divider("|");
        f.render_widget(tabs, area);
        Ok(())
    }
}
