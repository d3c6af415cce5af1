use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use strum::{EnumIter, IntoEnumIterator};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::booking::{
    normalize_phone, today, BookingPhase, BookingWorkflow, RelayEndpoint, SubmitDecision,
};
use crate::components::{wrap_next, wrap_prev, Component};
use crate::config::Config;
use crate::content;
use crate::editor::LineEditor;
use crate::section::Section;
use crate::tui::Frame;

/// The form fields in navigation order.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
enum Field {
    #[default]
    Name,
    Email,
    Phone,
    CheckIn,
    CheckOut,
    Guests,
    RoomType,
    Policy,
    Submit,
}

impl Field {
    fn index(self) -> usize {
        Field::iter().position(|f| f == self).unwrap_or(0)
    }

    fn at(index: usize) -> Field {
        Field::iter().nth(index).unwrap_or_default()
    }

    fn count() -> usize {
        Field::iter().count()
    }

    fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Phone => "Full Phone (e.g., +91XXXXXXXXXX)",
            Field::CheckIn => "Check-in Date (YYYY-MM-DD)",
            Field::CheckOut => "Check-out Date (YYYY-MM-DD)",
            Field::Guests => "Number of Guests",
            Field::RoomType => "Room Preference",
            Field::Policy => "Booking Policies",
            Field::Submit => "Send",
        }
    }
}

/// The Booking section: the request form on the left, the policies panel
/// on the right. Typing only reaches the fields after the form is focused
/// with Enter; Esc hands the keyboard back to navigation.
pub struct BookingForm {
    command_tx: Option<UnboundedSender<Action>>,
    config: Config,
    endpoint: RelayEndpoint,
    active: bool,
    focused: bool,
    field: Field,
    name: LineEditor,
    email: LineEditor,
    phone: LineEditor,
    check_in: LineEditor,
    check_out: LineEditor,
    guests: LineEditor,
    workflow: BookingWorkflow,
}

impl BookingForm {
    pub fn new() -> Self {
        Self {
            command_tx: None,
            config: Config::default(),
            endpoint: RelayEndpoint::default(),
            active: false,
            focused: false,
            field: Field::default(),
            name: LineEditor::new(),
            email: LineEditor::new(),
            phone: LineEditor::new(),
            check_in: LineEditor::new(),
            check_out: LineEditor::new(),
            guests: LineEditor::with_value("1"),
            workflow: BookingWorkflow::new(),
        }
    }

    fn editor_mut(&mut self, field: Field) -> Option<&mut LineEditor> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::CheckIn => Some(&mut self.check_in),
            Field::CheckOut => Some(&mut self.check_out),
            Field::Guests => Some(&mut self.guests),
            _ => None,
        }
    }

    fn next_field(&mut self) {
        self.field = Field::at(wrap_next(self.field.index(), Field::count()));
    }

    fn prev_field(&mut self) {
        self.field = Field::at(wrap_prev(self.field.index(), Field::count()));
    }

    /// Copy the editors into the workflow's request.
    fn sync_request(&mut self) {
        let request = &mut self.workflow.request;
        request.name = self.name.value().to_string();
        request.email = self.email.value().to_string();
        request.phone = self.phone.value().to_string();
        request.check_in = self.check_in.value().to_string();
        request.check_out = self.check_out.value().to_string();
        request.guests = self.guests.value().parse().unwrap_or(0);
        self.workflow.touch();
    }

    fn try_submit(&mut self) -> Option<Action> {
        self.sync_request();
        match self.workflow.begin_submit(today(), &self.endpoint) {
            SubmitDecision::Dispatch(payload) => Some(Action::SubmitBooking(payload)),
            _ => None,
        }
    }

    fn edit(&mut self, key: KeyEvent) {
        let field = self.field;
        let Some(editor) = self.editor_mut(field) else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => {
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    return;
                }
                if field == Field::Guests && !c.is_ascii_digit() {
                    return;
                }
                editor.insert(c);
                if field == Field::Phone {
                    let normalized = normalize_phone(editor.value());
                    editor.set_value(normalized);
                }
            }
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Delete => editor.delete(),
            KeyCode::Left => editor.move_left(),
            KeyCode::Right => editor.move_right(),
            KeyCode::Home => editor.move_home(),
            KeyCode::End => editor.move_end(),
            _ => return,
        }
        self.sync_request();
    }

    fn field_line(&self, field: Field, editor: &LineEditor) -> Line<'_> {
        let focused = self.focused && self.field == field;
        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            self.config.style("highlight")
        } else {
            self.config.style("muted")
        };
        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{}: ", field.label()), label_style),
            Span::raw(editor.value().to_string()),
        ];
        if focused {
            spans.push(Span::styled("_", self.config.style("highlight")));
        }
        Line::from(spans)
    }

    fn error_line(&self, text: &'static str) -> Line<'static> {
        Line::styled(format!("    {text}"), self.config.style("error"))
    }

    fn form_lines(&self) -> Vec<Line<'_>> {
        let highlight = self.config.style("highlight");
        let muted = self.config.style("muted");
        let validation = &self.workflow.validation;

        let mut lines = vec![self.field_line(Field::Name, &self.name)];
        if !validation.name {
            lines.push(self.error_line("Invalid Full Name."));
        }
        lines.push(self.field_line(Field::Email, &self.email));
        if !validation.email {
            lines.push(self.error_line("Invalid Email Address."));
        }
        lines.push(self.field_line(Field::Phone, &self.phone));
        if !validation.phone {
            lines.push(self.error_line(
                "Please enter the full international phone number (e.g., +91XXXXXXXXXX).",
            ));
        }
        lines.push(self.field_line(Field::CheckIn, &self.check_in));
        lines.push(self.field_line(Field::CheckOut, &self.check_out));
        if !validation.dates {
            lines.push(self.error_line(
                "Check-out must be after Check-in, and dates must be in the future.",
            ));
        }
        lines.push(self.field_line(Field::Guests, &self.guests));
        if !validation.guests {
            lines.push(self.error_line("Number of guests must be between 1 and 4."));
        }

        let room_focused = self.focused && self.field == Field::RoomType;
        lines.push(Line::from(vec![
            Span::styled(
                if room_focused { "> " } else { "  " },
                if room_focused { highlight } else { muted },
            ),
            Span::styled(
                format!("{}: ", Field::RoomType.label()),
                if room_focused { highlight } else { muted },
            ),
            Span::raw(self.workflow.request.room_type.label()),
            Span::styled(
                if room_focused { "  <- -> to change" } else { "" },
                muted,
            ),
        ]));

        let policy_focused = self.focused && self.field == Field::Policy;
        lines.push(Line::from(vec![
            Span::styled(
                if policy_focused { "> " } else { "  " },
                if policy_focused { highlight } else { muted },
            ),
            Span::raw(if self.workflow.request.agree_policy {
                "[x] "
            } else {
                "[ ] "
            }),
            Span::raw("I have read and agree to the booking policies."),
            Span::styled(
                if policy_focused { "  Space to toggle" } else { "" },
                muted,
            ),
        ]));
        lines.push(Line::raw(""));

        let submit_focused = self.focused && self.field == Field::Submit;
        let submit_text = if self.workflow.phase.is_submitting() {
            "Sending Request..."
        } else {
            "[ Send Booking Request ]"
        };
        lines.push(Line::styled(
            format!("  {submit_text}"),
            if submit_focused {
                highlight.add_modifier(Modifier::BOLD)
            } else {
                self.config.style("accent")
            },
        ));

        if let BookingPhase::Submitted(outcome) = &self.workflow.phase {
            let style = if outcome.is_success() {
                self.config.style("success")
            } else {
                self.config.style("error")
            };
            lines.push(Line::raw(""));
            lines.push(Line::styled(outcome.message().to_string(), style));
        }

        if !self.focused {
            lines.push(Line::raw(""));
            lines.push(Line::styled("Press Enter to fill in the form.", muted));
        }
        lines
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for BookingForm {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.command_tx = Some(tx);
        Ok(())
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.endpoint = RelayEndpoint::new(config.relay_endpoint.clone());
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.focused {
            return Ok(None);
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Enter => {
                if self.field == Field::Submit {
                    return Ok(self.try_submit());
                }
                self.next_field();
            }
            KeyCode::Char(' ') if self.field == Field::Policy => {
                self.workflow.request.agree_policy = !self.workflow.request.agree_policy;
                self.workflow.touch();
            }
            KeyCode::Left if self.field == Field::RoomType => {
                self.workflow.request.room_type = self.workflow.request.room_type.prev();
                self.workflow.touch();
            }
            KeyCode::Right if self.field == Field::RoomType => {
                self.workflow.request.room_type = self.workflow.request.room_type.next();
                self.workflow.touch();
            }
            _ => self.edit(key),
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::GoToSection(section) => {
                self.active = section == Section::Booking;
            }
            Action::Activate if self.active && !self.focused => {
                return Ok(Some(Action::EnterForm));
            }
            Action::EnterForm => {
                self.focused = true;
            }
            Action::LeaveForm => {
                self.focused = false;
            }
            Action::BookingOutcome(outcome) => {
                self.workflow.complete(outcome);
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let accent = self.config.style("accent");

        let layout = Layout::new(
            Direction::Vertical,
            [Constraint::Length(3), Constraint::Min(0)],
        )
        .split(area);

        let header = Paragraph::new(vec![
            Line::styled(
                content::BOOKING_HEADING,
                accent.add_modifier(Modifier::BOLD),
            ),
            Line::raw(content::BOOKING_TAGLINE),
        ])
        .wrap(Wrap { trim: true });
        f.render_widget(header, layout[0]);

        let columns = Layout::new(
            Direction::Horizontal,
            [Constraint::Ratio(3, 5), Constraint::Ratio(2, 5)],
        )
        .split(layout[1]);

        let form = Paragraph::new(self.form_lines())
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(" Your Details "));
        f.render_widget(form, columns[0]);

        let mut policy_lines = Vec::new();
        for policy in content::BOOKING_POLICIES {
            policy_lines.push(Line::raw(format!("* {policy}")));
        }
        let policies = Paragraph::new(policy_lines).wrap(Wrap { trim: true }).block(
            Block::bordered().title(Span::styled(" Booking Policies & Rules ", accent)),
        );
        f.render_widget(policies, columns[1]);

        Ok(())
    }
}
