//! Top-level menu.

use crate::solvers::Menu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    Divider,
    Resistors,
    Reactance,
    Transient,
    Power,
    ViewLog,
    Quit,
}

impl Menu for MainMenu {
    const ALL: &'static [Self] = &[
        Self::Divider,
        Self::Resistors,
        Self::Reactance,
        Self::Transient,
        Self::Power,
        Self::ViewLog,
        Self::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MainMenu::Divider => "Voltage divider (Vout)",
            MainMenu::Resistors => "Resistor tools (series / parallel-2)",
            MainMenu::Reactance => "AC reactance & resonance",
            MainMenu::Transient => "RC transient (tau / %charge / %discharge)",
            MainMenu::Power => "Power (P = V * I)",
            MainMenu::ViewLog => "View saved log",
            MainMenu::Quit => "Quit",
        }
    }
}
