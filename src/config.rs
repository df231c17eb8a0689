// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HunterError, Result};
use crate::exporter::OutputFormat;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub model: ModelConfig,
    pub pipeline: PipelineConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub skip_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    pub tail_poll_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("IOC_HUNTER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| HunterError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HunterError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            model: ModelConfig {
                path: PathBuf::from("models/ioc_ner_model.json"),
            },
            pipeline: PipelineConfig {
                skip_patterns: vec![
                    "*.zip".to_string(),
                    "*.exe".to_string(),
                    "*.png".to_string(),
                    "*.jpg".to_string(),
                    ".git/*".to_string(),
                ],
                max_file_size_mb: 10,
                tail_poll_ms: 500,
            },
            output: OutputConfig {
                file: PathBuf::from("ioc_results.json"),
                format: OutputFormat::Json,
                pretty: true,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.model.path.as_os_str().is_empty() {
            return Err(HunterError::Config(
                "model.path must not be empty".to_string(),
            ));
        }

        if self.pipeline.max_file_size_mb == 0 {
            return Err(HunterError::Config(
                "max_file_size_mb must be greater than 0".to_string(),
            ));
        }

        if self.pipeline.tail_poll_ms == 0 {
            return Err(HunterError::Config(
                "tail_poll_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
