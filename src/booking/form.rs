//! Booking request data and validation rules.

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Date format used in the form fields and the relay payload.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    /// International phone number: optional leading `+`, then 7 to 15 digits.
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?\d{7,15}$").unwrap();
}

/// The room options a guest can request.
#[derive(
    Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum RoomType {
    #[default]
    #[strum(serialize = "Single Room (Single Occupancy)")]
    Single,
    #[strum(serialize = "Double Room (Double Occupancy)")]
    Double,
    #[strum(serialize = "Family Room")]
    Family,
}

impl RoomType {
    /// Short label shown in the room selector.
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Single => "Single Room (1 person)",
            RoomType::Double => "Double Room (2 persons)",
            RoomType::Family => "Family Room (up to 4 persons)",
        }
    }

    pub fn next(self) -> RoomType {
        match self {
            RoomType::Single => RoomType::Double,
            RoomType::Double => RoomType::Family,
            RoomType::Family => RoomType::Single,
        }
    }

    pub fn prev(self) -> RoomType {
        match self {
            RoomType::Single => RoomType::Family,
            RoomType::Double => RoomType::Single,
            RoomType::Family => RoomType::Double,
        }
    }
}

/// A guest's booking request as entered in the form. Dates are kept as the
/// raw field text until validation parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: u8,
    pub room_type: RoomType,
    pub agree_policy: bool,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            guests: 1,
            room_type: RoomType::default(),
            agree_policy: false,
        }
    }
}

/// Per-field validity flags. All fields start out valid so an untouched
/// form shows no errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidationState {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
    pub dates: bool,
    pub guests: bool,
}

impl Default for ValidationState {
    fn default() -> Self {
        Self {
            name: true,
            email: true,
            phone: true,
            dates: true,
            guests: true,
        }
    }
}

impl ValidationState {
    pub fn all_valid(&self) -> bool {
        self.name && self.email && self.phone && self.dates && self.guests
    }
}

/// Normalize phone input as it is typed: keep digits, and a `+` only at
/// the start.
pub fn normalize_phone(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Today's date in the local timezone, the reference point for the
/// check-in rule.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Check every field of the request against `today`. Every rule runs, so
/// the form can mark all offending fields at once:
///
/// - name: more than 2 characters after trimming
/// - email: basic shape, no whitespace, one `@`, a dot in the domain
/// - phone: optional `+` then 7 to 15 digits
/// - guests: 1 to 4
/// - dates: both parse, check-out strictly after check-in, check-in not
///   in the past
pub fn validate(request: &BookingRequest, today: NaiveDate) -> ValidationState {
    let check_in = parse_date(&request.check_in);
    let check_out = parse_date(&request.check_out);

    ValidationState {
        name: request.name.trim().chars().count() > 2,
        email: EMAIL_REGEX.is_match(&request.email),
        phone: PHONE_REGEX.is_match(&request.phone),
        guests: request.guests > 0 && request.guests <= 4,
        dates: match (check_in, check_out) {
            (Some(check_in), Some(check_out)) => check_out > check_in && check_in >= today,
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn valid_request() -> BookingRequest {
        BookingRequest {
            name: "Asif Bhat".into(),
            email: "asif@example.com".into(),
            phone: "+919876543210".into(),
            check_in: "2026-09-10".into(),
            check_out: "2026-09-12".into(),
            guests: 2,
            room_type: RoomType::Double,
            agree_policy: true,
        }
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        let v = validate(&valid_request(), day("2026-09-01"));
        assert_eq!(v, ValidationState::default());
        assert!(v.all_valid());
    }

    #[rstest]
    #[case("", false)]
    #[case("Al", false)]
    #[case("  Al  ", false)]
    #[case("Ali", true)]
    fn test_name_needs_more_than_two_chars(#[case] name: &str, #[case] expected: bool) {
        let mut request = valid_request();
        request.name = name.into();
        assert_eq!(validate(&request, day("2026-09-01")).name, expected);
    }

    #[rstest]
    #[case("asif@example.com", true)]
    #[case("a@b.co", true)]
    #[case("no-at-sign.com", false)]
    #[case("spaces in@example.com", false)]
    #[case("missing@dot", false)]
    fn test_email_shape(#[case] email: &str, #[case] expected: bool) {
        let mut request = valid_request();
        request.email = email.into();
        assert_eq!(validate(&request, day("2026-09-01")).email, expected);
    }

    #[rstest]
    #[case("+919876543210", true)]
    #[case("9876543210", true)]
    #[case("1234567", true)]
    #[case("123456", false)]
    #[case("1234567890123456", false)]
    #[case("+91 98765 43210", false)]
    fn test_phone_shape(#[case] phone: &str, #[case] expected: bool) {
        let mut request = valid_request();
        request.phone = phone.into();
        assert_eq!(validate(&request, day("2026-09-01")).phone, expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(4, true)]
    #[case(5, false)]
    fn test_guest_count_range(#[case] guests: u8, #[case] expected: bool) {
        let mut request = valid_request();
        request.guests = guests;
        assert_eq!(validate(&request, day("2026-09-01")).guests, expected);
    }

    #[test]
    fn test_check_out_must_be_after_check_in() {
        let mut request = valid_request();
        request.check_out = request.check_in.clone();
        assert!(!validate(&request, day("2026-09-01")).dates);
    }

    #[test]
    fn test_check_in_today_is_allowed() {
        let request = valid_request();
        assert!(validate(&request, day("2026-09-10")).dates);
    }

    #[test]
    fn test_check_in_in_the_past_is_rejected() {
        let request = valid_request();
        assert!(!validate(&request, day("2026-09-11")).dates);
    }

    #[test]
    fn test_unparseable_dates_are_invalid() {
        let mut request = valid_request();
        request.check_in = "tomorrow".into();
        assert!(!validate(&request, day("2026-09-01")).dates);
    }

    #[test]
    fn test_all_rules_run_even_when_one_fails() {
        let mut request = valid_request();
        request.name = "x".into();
        request.email = "bad".into();
        request.guests = 9;
        let v = validate(&request, day("2026-09-01"));
        assert!(!v.name);
        assert!(!v.email);
        assert!(!v.guests);
        assert!(v.phone);
        assert!(v.dates);
    }

    #[rstest]
    #[case("+91 98765-43210", "+919876543210")]
    #[case("98+76", "9876")]
    #[case("++91", "+91")]
    #[case("abc", "")]
    fn test_normalize_phone(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_phone(raw), expected);
    }

    #[test]
    fn test_room_type_display_matches_payload_values() {
        assert_eq!(
            RoomType::Single.to_string(),
            "Single Room (Single Occupancy)"
        );
        assert_eq!(
            RoomType::Double.to_string(),
            "Double Room (Double Occupancy)"
        );
        assert_eq!(RoomType::Family.to_string(), "Family Room");
    }

    #[test]
    fn test_room_type_cycles() {
        assert_eq!(RoomType::Single.next(), RoomType::Double);
        assert_eq!(RoomType::Family.next(), RoomType::Single);
        assert_eq!(RoomType::Single.prev(), RoomType::Family);
    }
}
