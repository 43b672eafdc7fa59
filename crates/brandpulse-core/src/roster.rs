use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrandRole {
    Owner,
    Competitor,
}

impl std::fmt::Display for BrandRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandRole::Owner => write!(f, "owner"),
            BrandRole::Competitor => write!(f, "competitor"),
        }
    }
}

/// One entry of the brand roster. Immutable; supplied by the roster file
/// or whatever external roster provider the caller uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntity {
    pub name: String,
    pub role: BrandRole,
}

/// The validated roster for one account: the owner brand plus every
/// competitor being tracked against it.
#[derive(Debug, Clone)]
pub struct Roster {
    pub owner: BrandEntity,
    pub competitors: Vec<BrandEntity>,
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    brands: Vec<BrandEntity>,
}

/// Load and validate the brand roster from a YAML file.
///
/// The file holds a flat `brands:` list; exactly one entry must carry the
/// `owner` role. Competitor order is preserved as written.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (empty names, duplicate names, zero or multiple owners).
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::RosterFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let roster_file: RosterFile =
        serde_yaml::from_str(&content).map_err(ConfigError::RosterFileParse)?;

    build_roster(roster_file.brands)
}

fn build_roster(brands: Vec<BrandEntity>) -> Result<Roster, ConfigError> {
    let mut seen_names = HashSet::new();
    for brand in &brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }
        if !seen_names.insert(brand.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand name: '{}'",
                brand.name
            )));
        }
    }

    let mut owner = None;
    let mut competitors = Vec::new();
    for brand in brands {
        match brand.role {
            BrandRole::Owner => {
                if owner.is_some() {
                    return Err(ConfigError::Validation(
                        "roster must have exactly one owner brand".to_string(),
                    ));
                }
                owner = Some(brand);
            }
            BrandRole::Competitor => competitors.push(brand),
        }
    }

    let owner = owner.ok_or_else(|| {
        ConfigError::Validation("roster must have exactly one owner brand".to_string())
    })?;

    Ok(Roster { owner, competitors })
}
