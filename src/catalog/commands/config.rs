use crate::commands::{CatalogPaths, CmdMessage, CmdResult};
use crate::config::CatalogConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &CatalogPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir()?;
    match action {
        ConfigAction::ShowAll => {
            let config = CatalogConfig::load(&dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = CatalogConfig::load(&dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = CatalogConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(&dir)?;
            tracing::info!(key = %key, dir = %dir.display(), "config updated");

            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, display_val)));
            Ok(result)
        }
    }
}
