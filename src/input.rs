//! Player input, reduced to the three actions the game understands.

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Close the game (window close, Ctrl+C, `q`).
    Quit,
    /// Escape key.
    Cancel,
    /// Flap / confirm: Space, Up, Enter, `w` or a left click.
    Tap,
}

/// Source of input events, drained once per frame.
pub trait EventSource {
    /// Every event that arrived since the last call, oldest first. Never blocks.
    fn drain(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Map a terminal event to a game event. Key releases and repeats are ignored.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) => match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputEvent::Quit)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            KeyCode::Esc => Some(InputEvent::Cancel),
            KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter | KeyCode::Char('w') => {
                Some(InputEvent::Tap)
            }
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) => Some(InputEvent::Tap),
        _ => None,
    }
}

/// Live keyboard and mouse input from the terminal.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl CrosstermEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for CrosstermEvents {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::from_millis(0))? {
            if let Some(mapped) = map_event(&event::read()?) {
                events.push(mapped);
            }
        }
        Ok(events)
    }
}

/// Pre-recorded input, one batch per frame. Once the script runs out every
/// drain yields `Quit`, so a scripted run always terminates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` frames with no input.
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_with(Vec::new).take(count));
        self
    }

    /// Append one frame carrying `events`.
    pub fn then(mut self, events: Vec<InputEvent>) -> Self {
        self.frames.push_back(events);
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn drain(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self
            .frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }
}
