use crate::commands::{CmdMessage, CmdResult};
use crate::config::Settings;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum SettingsAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: SettingsAction) -> Result<CmdResult> {
    match action {
        SettingsAction::ShowAll => {
            let settings = Settings::load(dir)?;
            Ok(CmdResult::default().with_settings(settings))
        }
        SettingsAction::ShowKey(key) => {
            let settings = Settings::load(dir)?;
            let mut result = CmdResult::default();
            match settings.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!("Unknown setting: {}", key))),
            }
            Ok(result)
        }
        SettingsAction::Set(key, value) => {
            let mut settings = Settings::load(dir)?;
            if let Err(e) = settings.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            settings.save(dir)?;
            let display_val = settings.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_settings(settings);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}
