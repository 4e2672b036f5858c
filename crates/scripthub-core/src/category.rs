//! Script categories

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Skill or activity a script automates.
///
/// The set is closed: scripts outside it cannot be grouped by the UI, so
/// drafts carrying an unknown tag are rejected at validation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCategory {
    Combat,
    Fishing,
    Mining,
    Magic,
    Agility,
    Crafting,
    Cooking,
    Woodcutting,
    Smithing,
    Fletching,
    Herblore,
    Farming,
    Construction,
    Runecrafting,
    Thieving,
    Hunter,
    Firemaking,
    Minigames,
    Pvp,
    Banking,
    Utility,
}

impl ScriptCategory {
    /// Every category, in display order
    pub const ALL: [ScriptCategory; 21] = [
        Self::Combat,
        Self::Fishing,
        Self::Mining,
        Self::Magic,
        Self::Agility,
        Self::Crafting,
        Self::Cooking,
        Self::Woodcutting,
        Self::Smithing,
        Self::Fletching,
        Self::Herblore,
        Self::Farming,
        Self::Construction,
        Self::Runecrafting,
        Self::Thieving,
        Self::Hunter,
        Self::Firemaking,
        Self::Minigames,
        Self::Pvp,
        Self::Banking,
        Self::Utility,
    ];

    /// Stable tag as persisted and sent over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Combat => "combat",
            Self::Fishing => "fishing",
            Self::Mining => "mining",
            Self::Magic => "magic",
            Self::Agility => "agility",
            Self::Crafting => "crafting",
            Self::Cooking => "cooking",
            Self::Woodcutting => "woodcutting",
            Self::Smithing => "smithing",
            Self::Fletching => "fletching",
            Self::Herblore => "herblore",
            Self::Farming => "farming",
            Self::Construction => "construction",
            Self::Runecrafting => "runecrafting",
            Self::Thieving => "thieving",
            Self::Hunter => "hunter",
            Self::Firemaking => "firemaking",
            Self::Minigames => "minigames",
            Self::Pvp => "pvp",
            Self::Banking => "banking",
            Self::Utility => "utility",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pvp => "PvP",
            Self::Combat => "Combat",
            Self::Fishing => "Fishing",
            Self::Mining => "Mining",
            Self::Magic => "Magic",
            Self::Agility => "Agility",
            Self::Crafting => "Crafting",
            Self::Cooking => "Cooking",
            Self::Woodcutting => "Woodcutting",
            Self::Smithing => "Smithing",
            Self::Fletching => "Fletching",
            Self::Herblore => "Herblore",
            Self::Farming => "Farming",
            Self::Construction => "Construction",
            Self::Runecrafting => "Runecrafting",
            Self::Thieving => "Thieving",
            Self::Hunter => "Hunter",
            Self::Firemaking => "Firemaking",
            Self::Minigames => "Minigames",
            Self::Banking => "Banking",
            Self::Utility => "Utility",
        }
    }
}

impl std::fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScriptCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == tag)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("fishing".parse::<ScriptCategory>().unwrap(), ScriptCategory::Fishing);
        assert_eq!("PvP".parse::<ScriptCategory>().unwrap(), ScriptCategory::Pvp);
        assert_eq!(" Utility ".parse::<ScriptCategory>().unwrap(), ScriptCategory::Utility);
    }

    #[test]
    fn test_unknown_category() {
        assert!(matches!(
            "sailing".parse::<ScriptCategory>(),
            Err(Error::UnknownCategory(ref s)) if s == "sailing"
        ));
    }

    #[test]
    fn test_tags_round_trip() {
        for category in ScriptCategory::ALL {
            assert_eq!(category.as_str().parse::<ScriptCategory>().unwrap(), category);
        }
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&ScriptCategory::Runecrafting).unwrap();
        assert_eq!(json, "\"runecrafting\"");
    }
}
