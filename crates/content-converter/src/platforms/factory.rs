use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use super::{note::NoteProvider, zenn::ZennProvider, PlatformConfig, PlatformProvider};
use crate::errors::{ConvertError, Result};

#[derive(EnumIter, EnumString, Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PlatformType {
    Zenn,
    Note,
}

impl PlatformType {
    /// Case-insensitive lookup that reports the offending name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::from_str(name)
            .map_err(|_| ConvertError::Configuration(format!("Unsupported platform type: {}", name)))
    }
}

pub fn get_platform(platform_type: PlatformType, config: PlatformConfig) -> Box<dyn PlatformProvider> {
    match platform_type {
        PlatformType::Zenn => Box::new(ZennProvider::new(config)),
        PlatformType::Note => Box::new(NoteProvider::new(config)),
    }
}

pub fn create_platform(name: &str, config: PlatformConfig) -> Result<Box<dyn PlatformProvider>> {
    Ok(get_platform(PlatformType::from_name(name)?, config))
}
