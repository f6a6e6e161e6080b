use colored::Colorize;
use std::fmt;

/// Message categories used by the shell output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

fn build_label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

/// Plain-text form of a message, before colouring.
pub fn format_message(kind: MessageKind, message: impl fmt::Display) -> String {
    let text = message.to_string();
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        _ => format!("{} {}", build_label(kind), text),
    }
}

fn apply_style(kind: MessageKind, text: String) -> String {
    match kind {
        MessageKind::Info => text.normal().to_string(),
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => text.yellow().to_string(),
        MessageKind::Error => text.red().bold().to_string(),
        MessageKind::Section => text.cyan().bold().to_string(),
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let styled = apply_style(kind, format_message(kind, message));
    match kind {
        MessageKind::Error | MessageKind::Warning => eprintln!("{styled}"),
        _ => println!("{styled}"),
    }
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn section(message: impl fmt::Display) {
    emit(MessageKind::Section, message);
}
