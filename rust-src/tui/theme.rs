//! Colors and styles of the interactive dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::visualization::DeltaStyle;


pub struct Theme;


impl Theme {
    pub const AMBER: Color = Color::Rgb(245, 158, 11);
    pub const PINK: Color = Color::Rgb(236, 72, 153);
    pub const GREY: Color = Color::Rgb(156, 163, 175);
    pub const TRACK: Color = Color::Rgb(55, 65, 81);

    pub fn text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::GREY)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn value() -> Style {
        Style::default().fg(Self::AMBER).add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::TRACK)
    }

    pub fn accent() -> Style {
        Style::default().fg(Self::AMBER)
    }

    pub fn highlight() -> Style {
        Style::default().fg(Self::PINK)
    }

    pub fn active_tab() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn live() -> Style {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub fn gauge() -> Style {
        Style::default().fg(Self::AMBER).bg(Self::TRACK)
    }

    pub fn delta(style: DeltaStyle) -> Style {
        match style {
            DeltaStyle::Positive => Style::default().fg(Color::Green),
            DeltaStyle::Negative => Style::default().fg(Color::Red),
        }
    }
}
