use std::cell::RefCell;
use std::io::Write;

use crossterm::style::{Color, Stylize};
use venv::domain::ports::{SetupEvent, SetupEventSink};

use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::{colors, icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Warning,
    Info,
    Step,
}

/// Formats single-line status messages with the theme's icons and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    pub color: bool,
    pub unicode: bool,
}

impl Printer {
    pub fn new(caps: TerminalCapabilities) -> Self {
        Self {
            color: caps.supports_color,
            unicode: caps.supports_unicode,
        }
    }

    #[cfg(test)]
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    pub fn format(&self, kind: MessageKind, text: &str) -> String {
        let (icon, color) = match kind {
            MessageKind::Success => (
                self.icon(icons::SUCCESS, icons_ascii::SUCCESS),
                colors::SUCCESS,
            ),
            MessageKind::Error => (self.icon(icons::ERROR, icons_ascii::ERROR), colors::ERROR),
            MessageKind::Warning => (
                self.icon(icons::WARNING, icons_ascii::WARNING),
                colors::WARNING,
            ),
            MessageKind::Info => (self.icon(icons::INFO, icons_ascii::INFO), colors::INFO),
            MessageKind::Step => (self.icon(icons::ARROW, icons_ascii::ARROW), colors::DIM),
        };

        format!("{} {}", self.paint(icon, color), text)
    }

    /// `label: value` with the label highlighted
    pub fn labelled(&self, label: &str, value: &str) -> String {
        format!("{}: {}", self.paint(label, colors::INFO), value)
    }

    fn icon(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color).bold())
        } else {
            text.to_string()
        }
    }
}

/// Renders setup events as lines on a writer (stdout in production)
pub struct ConsoleEventSink<W: Write> {
    printer: Printer,
    out: RefCell<W>,
}

impl<W: Write> ConsoleEventSink<W> {
    pub fn new(printer: Printer, out: W) -> Self {
        Self {
            printer,
            out: RefCell::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn render(&self, event: &SetupEvent) -> String {
        let p = &self.printer;
        match event {
            SetupEvent::EnvironmentPresent { dir } => p.format(
                MessageKind::Info,
                &format!(
                    "There is already a virtual environment in this directory: {:?}",
                    dir.display().to_string()
                ),
            ),
            SetupEvent::Detected { summary } => p.format(MessageKind::Info, summary),
            SetupEvent::StepStarted { command } => p.format(MessageKind::Step, command),
            SetupEvent::Warning { message } => p.format(MessageKind::Warning, message),
            SetupEvent::Aborted => p.format(MessageKind::Error, "Aborting!"),
            SetupEvent::Done => p.format(MessageKind::Success, "Done"),
        }
    }
}

impl<W: Write> SetupEventSink for ConsoleEventSink<W> {
    fn on_event(&self, event: SetupEvent) {
        let line = self.render(&event);
        let mut out = self.out.borrow_mut();
        // A closed stdout must not abort an in-progress install
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }
}
