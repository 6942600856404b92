//! Descriptor handling for skeletons.
//! This module loads the `config.<ext>` descriptor found at the skeleton root
//! and turns it into the name, description and ordered parameter list that
//! drive a run.

use crate::error::{Error, Result};
use log::{debug, warn};
use serde::Deserialize;
use std::path::Path;

/// Supported descriptor file names, tried in order.
pub const CONFIG_FILES: [&str; 4] = ["config.xml", "config.json", "config.yml", "config.yaml"];

/// A single substitution point declared by the skeleton.
///
/// The identifier matches a `${name}` placeholder; the prompt is what the
/// user is asked when the value is collected.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    #[serde(default, alias = "description")]
    pub prompt: String,
}

/// Parsed skeleton descriptor.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SkeletonConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// XML form of the descriptor. Parameters are attributes on `<param>`
/// elements, which does not line up with the JSON/YAML field layout, so the
/// XML variant gets its own deserialization types.
#[derive(Debug, Default, Deserialize)]
struct XmlSkeletonConfig {
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    parameters: XmlParameters,
}

#[derive(Debug, Default, Deserialize)]
struct XmlParameters {
    #[serde(default, rename = "param")]
    params: Vec<XmlParam>,
}

#[derive(Debug, Deserialize)]
struct XmlParam {
    #[serde(default, rename = "@name")]
    name: String,
    #[serde(default, rename = "@description")]
    description: String,
}

impl From<XmlSkeletonConfig> for SkeletonConfig {
    fn from(xml: XmlSkeletonConfig) -> Self {
        SkeletonConfig {
            name: xml.name,
            description: xml.description,
            parameters: xml
                .parameters
                .params
                .into_iter()
                .map(|p| Parameter { name: p.name, prompt: p.description })
                .collect(),
        }
    }
}

/// Loads the descriptor from a skeleton root, trying each supported file name.
///
/// # Arguments
/// * `skeleton_root` - Directory containing the skeleton
///
/// # Returns
/// * `Result<SkeletonConfig>` - Parsed descriptor of the first found file
///
/// # Errors
/// * `Error::MissingDescriptorError` if none of the descriptor files exist
pub fn load_config<P: AsRef<Path>>(skeleton_root: P) -> Result<SkeletonConfig> {
    let skeleton_root = skeleton_root.as_ref();
    for file in CONFIG_FILES {
        let config_path = skeleton_root.join(file);
        if config_path.exists() {
            debug!("Loading descriptor from {}", config_path.display());
            let content = std::fs::read_to_string(&config_path).map_err(Error::IoError)?;
            return Ok(parse_config(&content, file));
        }
    }

    Err(Error::MissingDescriptorError {
        skeleton_root: skeleton_root.display().to_string(),
        tried: CONFIG_FILES.join(", "),
    })
}

/// Parses descriptor content according to the descriptor file name.
///
/// Malformed content is tolerated: a parse failure logs a warning and yields
/// a default (all-empty) configuration, so a broken descriptor never aborts
/// the run. Absent fields default to empty values.
pub fn parse_config(content: &str, file_name: &str) -> SkeletonConfig {
    let parsed: std::result::Result<SkeletonConfig, String> = if file_name.ends_with(".xml") {
        quick_xml::de::from_str::<XmlSkeletonConfig>(content)
            .map(SkeletonConfig::from)
            .map_err(|e| e.to_string())
    } else if file_name.ends_with(".json") {
        serde_json::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    };

    match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!("Malformed skeleton descriptor '{}': {}", file_name, e);
            SkeletonConfig::default()
        }
    }
}
