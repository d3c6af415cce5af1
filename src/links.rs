//! Deep link construction for the contact surfaces.
//!
//! The terminal cannot open a dialer or a browser itself, so these links are
//! rendered for the user to copy. They match what the contact bar and footer
//! point at: `tel:`, `mailto:`, a Gmail compose URL and `wa.me`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Everything `encodeURIComponent` escapes, so query parameters built here
/// round-trip through the same URLs the original links carried.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Strip a display phone number down to digits.
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Strip a display phone number down to digits plus a leading `+`.
pub fn dial_digits(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

pub fn tel(phone: &str) -> String {
    format!("tel:{}", dial_digits(phone))
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// A Gmail compose URL with a prefilled recipient and subject.
pub fn gmail_compose(email: &str, subject: &str) -> String {
    format!(
        "https://mail.google.com/mail/u/0/?view=cm&fs=1&to={}&su={}",
        email,
        encode_component(subject)
    )
}

/// A `wa.me` chat link. `wa.me` takes the number without the `+`.
pub fn wa_me(phone: &str, text: Option<&str>) -> String {
    let number = digits_only(phone);
    match text {
        Some(text) => format!("https://wa.me/{}?text={}", number, encode_component(text)),
        None => format!("https://wa.me/{number}"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_digits_only_strips_formatting() {
        assert_eq!(digits_only("+91 70063 79928"), "917006379928");
    }

    #[test]
    fn test_dial_digits_keeps_plus() {
        assert_eq!(dial_digits("+91 97971 52006"), "+919797152006");
    }

    #[test]
    fn test_tel_and_mailto() {
        assert_eq!(tel("+91 97971 52006"), "tel:+919797152006");
        assert_eq!(
            mailto("orchardhomestay17@gmail.com"),
            "mailto:orchardhomestay17@gmail.com"
        );
    }

    #[test]
    fn test_gmail_compose_encodes_subject() {
        let url = gmail_compose(
            "orchardhomestay17@gmail.com",
            "Booking Inquiry for The Orchard Homestay",
        );
        assert_eq!(
            url,
            "https://mail.google.com/mail/u/0/?view=cm&fs=1&to=orchardhomestay17@gmail.com&su=Booking%20Inquiry%20for%20The%20Orchard%20Homestay"
        );
    }

    #[test]
    fn test_wa_me_without_text() {
        assert_eq!(
            wa_me("+91 70063 79928", None),
            "https://wa.me/917006379928"
        );
    }

    #[test]
    fn test_wa_me_with_text() {
        let url = wa_me("+917006379928", Some("Hello! Is a room available?"));
        assert_eq!(
            url,
            "https://wa.me/917006379928?text=Hello!%20Is%20a%20room%20available%3F"
        );
    }
}
