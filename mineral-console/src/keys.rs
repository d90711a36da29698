//! Keybinding definitions for the console.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    Confirm,
    Back,
    OpenInSheet,
    OpenFlow,
    OpenLogistics,
    OpenDisputes,
    OpenEnquiries,
    EditItem,
    NextStep,
    PrevStep,
    FlagItem,
    VerifyItem,
    ForgotPassword,
    RequestAccess,
    Logout,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('l') => Some(Action::Logout),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Char('o') => Some(Action::OpenInSheet),
        KeyCode::Char('t') => Some(Action::OpenFlow),
        KeyCode::Char('l') => Some(Action::OpenLogistics),
        KeyCode::Char('d') => Some(Action::OpenDisputes),
        KeyCode::Char('n') => Some(Action::OpenEnquiries),
        KeyCode::Char('e') => Some(Action::EditItem),
        KeyCode::Char(']') => Some(Action::NextStep),
        KeyCode::Char('[') => Some(Action::PrevStep),
        KeyCode::Char('x') => Some(Action::FlagItem),
        KeyCode::Char('v') => Some(Action::VerifyItem),
        KeyCode::Char('f') => Some(Action::ForgotPassword),
        KeyCode::Char('r') => Some(Action::RequestAccess),
        KeyCode::Char(c) if c.is_ascii_digit() => {
            let idx = match c {
                '1' => 0,
                '2' => 1,
                '3' => 2,
                '4' => 3,
                '5' => 4,
                '6' => 5,
                '7' => 6,
                '8' => 7,
                '9' => 8,
                '0' => 9,
                _ => return None,
            };
            Some(Action::SwitchView(idx))
        }
        _ => None,
    }
}
