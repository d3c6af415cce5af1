use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use crate::action::Action;
use crate::components::{wrap_next, wrap_prev, Component};
use crate::config::Config;
use crate::content;
use crate::section::Section;
use crate::tui::Frame;

/// The Gallery section: a cursor over the photo albums, and a slideshow
/// view once an album is opened.
pub struct Gallery {
    config: Config,
    active: bool,
    cursor: usize,
    /// Slide index within the open album, if one is open.
    open_slide: Option<usize>,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            active: false,
            cursor: 0,
            open_slide: None,
        }
    }

    fn album(&self) -> &'static content::Album {
        &content::ALBUMS[self.cursor]
    }

    fn draw_albums(&self, f: &mut Frame<'_>, area: Rect) {
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
                content::GALLERY_HEADING,
                accent.add_modifier(Modifier::BOLD),
            ),
            Line::raw(content::GALLERY_TAGLINE),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(header, layout[0]);

        let columns = Layout::new(
            Direction::Horizontal,
            content::ALBUMS
                .iter()
                .map(|_| Constraint::Ratio(1, content::ALBUMS.len() as u32)),
        )
        .split(layout[1]);

        for (i, (album, column)) in content::ALBUMS.iter().zip(columns.iter()).enumerate() {
            let selected = i == self.cursor;
            let block = Block::bordered()
                .border_style(if selected { highlight } else { muted })
                .title(Span::styled(
                    format!(" {} ", album.title),
                    if selected { highlight } else { accent },
                ));
            let mut lines = vec![
                Line::raw(album.description),
                Line::styled(format!("{} photos", album.photos.len()), muted),
            ];
            if selected {
                lines.push(Line::styled("Enter to open", muted));
            }
            let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
            f.render_widget(card, *column);
        }
    }

    fn draw_slideshow(&self, f: &mut Frame<'_>, area: Rect, slide: usize) {
        let accent = self.config.style("accent");
        let muted = self.config.style("muted");
        let album = self.album();

        let block = Block::bordered()
            .title(Span::styled(
                format!(" {} ({} / {}) ", album.title, slide + 1, album.photos.len()),
                accent,
            ))
            .title_bottom(Line::styled(" <- -> to browse, Esc to close ", muted).right_aligned());
        let body = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(album.photos[slide], accent.add_modifier(Modifier::BOLD)),
            Line::raw(""),
            Line::raw(album.description),
        ])
        .centered()
        .wrap(Wrap { trim: true })
        .block(block);
        f.render_widget(Clear, area);
        f.render_widget(body, area);
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Gallery {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::GoToSection(section) => {
                self.active = section == Section::Gallery;
                if !self.active {
                    self.open_slide = None;
                }
            }
            Action::Left if self.active => match self.open_slide {
                Some(slide) => {
                    self.open_slide = Some(wrap_prev(slide, self.album().photos.len()));
                }
                None => self.cursor = wrap_prev(self.cursor, content::ALBUMS.len()),
            },
            Action::Right if self.active => match self.open_slide {
                Some(slide) => {
                    self.open_slide = Some(wrap_next(slide, self.album().photos.len()));
                }
                None => self.cursor = wrap_next(self.cursor, content::ALBUMS.len()),
            },
            Action::Activate if self.active && self.open_slide.is_none() => {
                self.open_slide = Some(0);
            }
            Action::Back if self.active => {
                self.open_slide = None;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        match self.open_slide {
            Some(slide) => self.draw_slideshow(f, area, slide),
            None => self.draw_albums(f, area),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn active_gallery() -> Gallery {
        let mut gallery = Gallery::new();
        gallery
            .update(Action::GoToSection(Section::Gallery))
            .unwrap();
        gallery
    }

    #[test]
    fn test_cursor_wraps_over_albums() {
        let mut gallery = active_gallery();
        gallery.update(Action::Left).unwrap();
        assert_eq!(gallery.cursor, content::ALBUMS.len() - 1);
        gallery.update(Action::Right).unwrap();
        assert_eq!(gallery.cursor, 0);
    }

    #[test]
    fn test_activate_opens_album_and_back_closes() {
        let mut gallery = active_gallery();
        gallery.update(Action::Activate).unwrap();
        assert_eq!(gallery.open_slide, Some(0));
        gallery.update(Action::Back).unwrap();
        assert_eq!(gallery.open_slide, None);
    }

    #[test]
    fn test_slides_wrap_within_open_album() {
        let mut gallery = active_gallery();
        gallery.update(Action::Activate).unwrap();
        gallery.update(Action::Left).unwrap();
        let photos = content::ALBUMS[0].photos.len();
        assert_eq!(gallery.open_slide, Some(photos - 1));
        gallery.update(Action::Right).unwrap();
        assert_eq!(gallery.open_slide, Some(0));
    }

    #[test]
    fn test_leaving_section_closes_album() {
        let mut gallery = active_gallery();
        gallery.update(Action::Activate).unwrap();
        gallery.update(Action::GoToSection(Section::Home)).unwrap();
        assert_eq!(gallery.open_slide, None);
    }
}
