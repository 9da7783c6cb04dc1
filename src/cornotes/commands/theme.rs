use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Theme;
use crate::store::DataStore;

pub fn show<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_theme(store.load_theme()?))
}

pub fn set<S: DataStore>(store: &mut S, theme: Theme) -> Result<CmdResult> {
    store.save_theme(theme)?;
    Ok(CmdResult::default()
        .with_theme(theme)
        .with_message(CmdMessage::info(format!("Theme set to {}.", theme.as_str()))))
}

pub fn toggle<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let theme = store.load_theme()?.toggled();
    set(store, theme)
}
