use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// One section of the site, shown one at a time. The navbar lists all of
/// them; jumping between sections is the terminal equivalent of the
/// original site's anchor links.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Section {
    #[default]
    Home,
    About,
    Pricing,
    Gallery,
    Attractions,
    Booking,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Section> {
        Section::iter().collect()
    }

    pub fn index(self) -> usize {
        Section::iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Section {
        let all = Section::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Section {
        let all = Section::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_next_wraps_around() {
        assert_eq!(Section::Home.next(), Section::About);
        assert_eq!(Section::Contact.next(), Section::Home);
    }

    #[test]
    fn test_prev_wraps_around() {
        assert_eq!(Section::About.prev(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Contact);
    }

    #[test]
    fn test_index_matches_declaration_order() {
        assert_eq!(Section::Home.index(), 0);
        assert_eq!(Section::Contact.index(), 6);
    }
}
