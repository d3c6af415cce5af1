use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use crate::{
    action::Action,
    booking::{outcome_for, BookingRelay, HttpRelay, RelayEndpoint},
    components::{
        attractions::Attractions, booking::BookingForm, contact_bar::ContactBar, details::Details,
        footer::Footer, gallery::Gallery, hero::Hero, navbar::Navbar, pricing::Pricing, Component,
    },
    config::Config,
    mode::Mode,
    section::Section,
    tui,
};

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub components: Vec<Box<dyn Component>>,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub mode: Mode,
    pub section: Section,
    pub relay: Arc<dyn BookingRelay>,
    pub last_tick_key_events: Vec<KeyEvent>,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        // Drawing order: navbar, one component per section, then the
        // persistent contact bar.
        let components: Vec<Box<dyn Component>> = vec![
            Box::new(Navbar::new()),
            Box::new(Hero::new(tick_rate)),
            Box::new(Details::new()),
            Box::new(Pricing::new()),
            Box::new(Gallery::new()),
            Box::new(Attractions::new()),
            Box::new(BookingForm::new()),
            Box::new(Footer::new()),
            Box::new(ContactBar::new()),
        ];
        Ok(Self {
            tick_rate,
            frame_rate,
            components,
            should_quit: false,
            should_suspend: false,
            config,
            mode: Mode::Browse,
            section: Section::Home,
            relay: Arc::new(HttpRelay::new()),
            last_tick_key_events: Vec::new(),
        })
    }

    fn section_component(&self) -> usize {
        1 + self.section.index()
    }

    fn draw_frame(&mut self, f: &mut tui::Frame<'_>) -> Result<()> {
        let layout = ratatui::layout::Layout::new(
            ratatui::layout::Direction::Vertical,
            [
                ratatui::layout::Constraint::Length(1),
                ratatui::layout::Constraint::Min(0),
                ratatui::layout::Constraint::Length(2),
            ],
        )
        .split(f.area());

        let navbar = 0;
        let section = self.section_component();
        let contact_bar = self.components.len() - 1;
        self.components[navbar].draw(f, layout[0])?;
        self.components[section].draw(f, layout[1])?;
        self.components[contact_bar].draw(f, layout[2])?;
        Ok(())
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel();

        let mut tui = tui::Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for component in self.components.iter_mut() {
            component.register_action_handler(action_tx.clone())?;
        }

        for component in self.components.iter_mut() {
            component.register_config_handler(self.config.clone())?;
        }

        let size = tui.size()?;
        for component in self.components.iter_mut() {
            component.init(Rect::new(0, 0, size.width, size.height))?;
        }

        let endpoint = RelayEndpoint::new(self.config.relay_endpoint.clone());

        loop {
            if let Some(e) = tui.next().await {
                match e {
                    tui::Event::Quit => action_tx.send(Action::Quit)?,
                    tui::Event::Tick => action_tx.send(Action::Tick)?,
                    tui::Event::Render => action_tx.send(Action::Render)?,
                    tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                    tui::Event::Key(key) => {
                        action_tx.send(Action::Key(key))?;

                        if let Some(keymap) = self.config.keybindings.get(&self.mode) {
                            if let Some(action) = keymap.get(&vec![key]) {
                                log::info!("Got action: {action:?}");
                                action_tx.send(action.clone())?;
                            } else {
                                // If the key was not handled as a single key action,
                                // then consider it for multi-key combinations.
                                self.last_tick_key_events.push(key);

                                // Check for multi-key combinations
                                if let Some(action) = keymap.get(&self.last_tick_key_events) {
                                    log::info!("Got action: {action:?}");
                                    action_tx.send(action.clone())?;
                                }
                            }
                        };
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.handle_events(Some(e.clone()))? {
                        action_tx.send(action)?;
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match &action {
                    Action::Tick => {
                        self.last_tick_key_events.drain(..);
                    }
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::NextSection => {
                        action_tx.send(Action::GoToSection(self.section.next()))?;
                    }
                    Action::PrevSection => {
                        action_tx.send(Action::GoToSection(self.section.prev()))?;
                    }
                    Action::GoToSection(section) => {
                        self.section = *section;
                    }
                    Action::EnterForm => {
                        self.mode = Mode::Booking;
                    }
                    Action::LeaveForm => {
                        self.mode = Mode::Browse;
                    }
                    Action::SubmitBooking(payload) => {
                        let relay = Arc::clone(&self.relay);
                        let endpoint = endpoint.clone();
                        let payload = payload.clone();
                        let tx = action_tx.clone();
                        tokio::spawn(async move {
                            let result = relay.deliver(&endpoint, &payload).await;
                            let outcome = outcome_for(result);
                            if let Err(e) = tx.send(Action::BookingOutcome(outcome)) {
                                tracing::error!(error = %e, "failed to report booking outcome");
                            }
                        });
                    }
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, *w, *h))?;
                        tui.draw(|f| {
                            if let Err(e) = self.draw_frame(f) {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", e)))
                                    .unwrap();
                            }
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            if let Err(e) = self.draw_frame(f) {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", e)))
                                    .unwrap();
                            }
                        })?;
                    }
                    _ => {}
                }
                for component in self.components.iter_mut() {
                    if let Some(action) = component.update(action.clone())? {
                        action_tx.send(action)?
                    };
                }
            }
            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = tui::Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }
}
