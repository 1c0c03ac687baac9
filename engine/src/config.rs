use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum FirstPlayer {
    Human,
    Bot,
}

/// Out-of-game settings owned by the front end, changed between games only.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub first_player: FirstPlayer,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            first_player: FirstPlayer::Human,
        }
    }
}

impl GameConfig {
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml_ng::to_string(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// Missing file falls back to defaults; a malformed file is an error.
    pub fn load(path: &str) -> Result<Self, String> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(format!("Failed to read config file {}: {}", path, e)),
        }
    }

    pub fn save(&self, path: &str) -> Result<(), String> {
        let content = self.to_yaml()?;
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config file {}: {}", path, e))
    }
}
