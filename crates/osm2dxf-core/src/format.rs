//! Drawing format versions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// AutoCAD release whose DXF dialect the drawing is written in.
///
/// R14 is the oldest release with LWPOLYLINE entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DxfVersion {
    R14,
    R2000,
    R2004,
    R2007,
    R2010,
    R2013,
    R2018,
}

impl Default for DxfVersion {
    fn default() -> Self {
        Self::R2018
    }
}

impl fmt::Display for DxfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R14 => write!(f, "R14"),
            Self::R2000 => write!(f, "R2000"),
            Self::R2004 => write!(f, "R2004"),
            Self::R2007 => write!(f, "R2007"),
            Self::R2010 => write!(f, "R2010"),
            Self::R2013 => write!(f, "R2013"),
            Self::R2018 => write!(f, "R2018"),
        }
    }
}

impl FromStr for DxfVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "r14" => Ok(Self::R14),
            "r2000" => Ok(Self::R2000),
            "r2004" => Ok(Self::R2004),
            "r2007" => Ok(Self::R2007),
            "r2010" => Ok(Self::R2010),
            "r2013" => Ok(Self::R2013),
            "r2018" => Ok(Self::R2018),
            _ => Err(format!("Unknown DXF version: {}", s)),
        }
    }
}
