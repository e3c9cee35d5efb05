//! Keyboard input: key parsing, key-to-event mapping and event dispatch.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::operator::Operator;
use super::state::{Calculator, Mode};

lazy_static! {
    /// A named key in angle brackets, or any single non-space character.
    static ref KEY_TOKEN: Regex = Regex::new(r"<([A-Za-z0-9]+)>|\S").unwrap();
}

/// A single key press as delivered by the terminal front end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
    /// A named key we don't know about.
    Unknown(String),
}

/// A pre-normalised calculator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalcEvent {
    /// `'0'..='9'` or `'.'`.
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    DeleteLast,
}

/// Split a key sequence such as `12+3<Enter>` into keys.
///
/// Whitespace between keys is ignored; named keys are case-insensitive.
pub fn parse_keys(input: &str) -> Vec<Key> {
    KEY_TOKEN
        .captures_iter(input)
        .filter_map(|caps| {
            if let Some(name) = caps.get(1) {
                return Some(match name.as_str().to_ascii_lowercase().as_str() {
                    "enter" | "return" => Key::Enter,
                    "backspace" | "bs" => Key::Backspace,
                    "escape" | "esc" => Key::Escape,
                    other => Key::Unknown(other.to_string()),
                });
            }
            caps.get(0)?.as_str().chars().next().map(Key::Char)
        })
        .collect()
}

/// Map a key to the event it triggers, if any.
pub fn event_for_key(key: &Key) -> Option<CalcEvent> {
    match key {
        Key::Char(c) if c.is_ascii_digit() || *c == '.' => Some(CalcEvent::Digit(*c)),
        Key::Char('=') | Key::Enter => Some(CalcEvent::Equals),
        Key::Char(c) => Operator::from_glyph(*c).map(CalcEvent::Operator),
        Key::Backspace => Some(CalcEvent::DeleteLast),
        Key::Escape => Some(CalcEvent::Clear),
        Key::Unknown(_) => None,
    }
}

impl Calculator {
    /// Run one event to completion.
    ///
    /// A second decimal point in the same operand is dropped. While showing
    /// an error only clear and delete are accepted.
    pub fn handle(&mut self, event: CalcEvent) {
        if self.mode() == Mode::Error
            && matches!(event, CalcEvent::Digit(_) | CalcEvent::Operator(_))
        {
            debug!(?event, "ignored in error state");
            return;
        }

        match event {
            CalcEvent::Digit(token) => {
                if token == '.' && self.current().contains('.') {
                    return;
                }
                self.append_digit_or_point(token);
            }
            CalcEvent::Operator(op) => self.choose_operator(op),
            CalcEvent::Equals => self.compute(),
            CalcEvent::Clear => self.clear(),
            CalcEvent::DeleteLast => self.delete_last_char(),
        }
    }

    /// Feed a key sequence, ignoring keys that map to no event.
    pub fn press_keys(&mut self, input: &str) {
        for key in parse_keys(input) {
            match event_for_key(&key) {
                Some(event) => self.handle(event),
                None => debug!(?key, "unmapped key"),
            }
        }
    }
}
