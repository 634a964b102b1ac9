use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::KeyValueStore;
use crate::theme::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Show,
    Toggle,
    Set(ThemeMode),
}

pub fn run<S: KeyValueStore + ?Sized>(
    store: &S,
    current: &mut ThemeMode,
    action: ThemeAction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let next = match action {
        ThemeAction::Show => {
            result.add_message(CmdMessage::info(format!("Theme: {}", current)));
            return Ok(result.with_theme(*current));
        }
        ThemeAction::Toggle => current.toggled(),
        ThemeAction::Set(mode) => mode,
    };

    *current = next;
    match next.save(store) {
        Ok(()) => result.add_message(CmdMessage::success(format!("Theme set to {}", next))),
        Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
        Err(e) => return Err(e),
    }
    Ok(result.with_theme(next))
}
