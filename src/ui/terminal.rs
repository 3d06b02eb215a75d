//! Presenting finished frames: the real terminal, or nowhere at all.

use super::canvas::Canvas;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Stdout};

const CONTROLS: &[(&str, &str)] = &[("[Space/Up/Click]", "Flap"), ("[Esc/Q]", "Quit")];

/// Where finished frames go.
pub trait Screen {
    fn present(&mut self, canvas: &Canvas) -> io::Result<()>;

    /// One-line message shown under the play area, if the screen has room.
    fn set_status(&mut self, _text: &str) {}
}

/// Full-screen terminal output. Restores the terminal when dropped.
pub struct TerminalScreen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    status: String,
}

impl TerminalScreen {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self {
            terminal,
            status: String::new(),
        })
    }
}

impl Screen for TerminalScreen {
    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let status = &self.status;
        self.terminal.draw(|frame| draw(frame, canvas, status))?;
        Ok(())
    }

    fn set_status(&mut self, text: &str) {
        text.clone_into(&mut self.status);
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let backend = self.terminal.backend_mut();
        let _ = backend.execute(DisableMouseCapture);
        let _ = backend.execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn draw(frame: &mut Frame, canvas: &Canvas, status: &str) {
    let block = Block::default()
        .title(" Skyward ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(frame.size());
    frame.render_widget(block, frame.size());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    if chunks[0].width < canvas.width() || chunks[0].height < canvas.height() {
        let needed = format!(
            "Terminal too small: need {}x{}",
            canvas.width() + 2,
            canvas.height() + 4
        );
        frame.render_widget(
            Paragraph::new(needed)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center),
            chunks[0],
        );
    } else {
        frame.render_widget(canvas, centered(chunks[0], canvas.width(), canvas.height()));
    }

    render_status_bar(frame, chunks[1], status);
}

/// A `width` x `height` rect centred in `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Status message on the first line, key hints on the second.
fn render_status_bar(frame: &mut Frame, area: Rect, status: &str) {
    if area.height < 1 {
        return;
    }
    let status_line = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(status_line, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let mut spans = Vec::new();
    for (i, (key, action)) in CONTROLS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Discards frames but remembers the last one. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct HeadlessScreen {
    pub frames: u64,
    pub last: Option<Canvas>,
    pub status: String,
}

impl HeadlessScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for HeadlessScreen {
    fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        self.frames += 1;
        match &mut self.last {
            Some(last) => last.clone_from(canvas),
            None => self.last = Some(canvas.clone()),
        }
        Ok(())
    }

    fn set_status(&mut self, text: &str) {
        text.clone_into(&mut self.status);
    }
}
