use crate::commands::{CmdMessage, CmdResult};
use crate::config::CopasConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Shows or changes settings. Unknown keys and rejected values come back as error
/// messages; only I/O and a broken config file are `Err`.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = CopasConfig::load(config_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(value)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Set(key, value) => match config.set(&key, &value) {
            Ok(stored) => {
                config.save(config_dir)?;
                result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
                result = result.with_config(config);
            }
            Err(reason) => result.add_message(CmdMessage::error(reason)),
        },
    }

    Ok(result)
}
