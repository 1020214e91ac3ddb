use crate::store::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum ComposeFormAction {
    Input { ch: char },
    Backspace,
    FocusNext,
    FocusPrevious,
    Reset,
}

impl Action for ComposeFormAction {}
