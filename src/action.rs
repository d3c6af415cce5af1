use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::booking::{BookingPayload, SubmissionOutcome};
use crate::section::Section;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Key(KeyEvent),

    // Navigation
    GoToSection(Section),
    NextSection,
    PrevSection,

    // Context-dependent controls; the active section decides what they mean
    // (carousel slide, info tab, album cursor, modal slide).
    Left,
    Right,
    Activate,
    Back,

    // Booking form focus handover
    EnterForm,
    LeaveForm,

    // Booking workflow
    SubmitBooking(BookingPayload),
    BookingOutcome(SubmissionOutcome),
}
