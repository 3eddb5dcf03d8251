//! Material tags carried through brushes to the host simulation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SandbrushError};

/// Opaque material identifier consumed by the host simulation.
///
/// Tags never influence colour; a brush only passes its tag through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialTag {
    Air,
    Wall,
    Sand,
    Soil,
    Gravel,
    Rock,
    Metal,
    Water,
    Wood,
}

impl MaterialTag {
    /// All known tags, in declaration order.
    pub const ALL: [MaterialTag; 9] = [
        MaterialTag::Air,
        MaterialTag::Wall,
        MaterialTag::Sand,
        MaterialTag::Soil,
        MaterialTag::Gravel,
        MaterialTag::Rock,
        MaterialTag::Metal,
        MaterialTag::Water,
        MaterialTag::Wood,
    ];

    /// Lowercase name used in definition files.
    pub fn name(self) -> &'static str {
        match self {
            MaterialTag::Air => "air",
            MaterialTag::Wall => "wall",
            MaterialTag::Sand => "sand",
            MaterialTag::Soil => "soil",
            MaterialTag::Gravel => "gravel",
            MaterialTag::Rock => "rock",
            MaterialTag::Metal => "metal",
            MaterialTag::Water => "water",
            MaterialTag::Wood => "wood",
        }
    }
}

impl FromStr for MaterialTag {
    type Err = SandbrushError;

    /// Case-insensitive lookup; unknown names are a config error.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SandbrushError::Config {
                message: format!("Unknown material tag: {}", wanted),
                help: Some(format!(
                    "Known tags: {}",
                    Self::ALL.map(MaterialTag::name).join(", ")
                )),
            })
    }
}

impl fmt::Display for MaterialTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known() {
        assert_eq!("wall".parse::<MaterialTag>().unwrap(), MaterialTag::Wall);
        assert_eq!("WALL".parse::<MaterialTag>().unwrap(), MaterialTag::Wall);
        assert_eq!(" metal ".parse::<MaterialTag>().unwrap(), MaterialTag::Metal);
    }

    #[test]
    fn test_parse_unknown_is_config_error() {
        let err = "lava".parse::<MaterialTag>().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_name_round_trip() {
        for tag in MaterialTag::ALL {
            assert_eq!(tag.to_string().parse::<MaterialTag>().unwrap(), tag);
        }
    }
}
