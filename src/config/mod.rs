pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pathway-etl")]
#[command(about = "Extracts the raw pathway table from a JS data file into TSV")]
pub struct CliConfig {
    /// JS file containing the array declaration
    #[arg(long, default_value = "pathways.js")]
    pub input_path: String,

    /// Where the TSV table is written
    #[arg(long, default_value = "pathway_id_category_subcategory.tsv")]
    pub output_path: String,

    /// Name of the const array to extract
    #[arg(long, default_value = "ALL_PATHWAYS_RAW")]
    pub array_name: String,

    /// Optional TOML job file; takes precedence over the path flags
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn array_name(&self) -> &str {
        &self.array_name
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_identifier("array_name", &self.array_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_the_original_constants() {
        let config = CliConfig::parse_from(["pathway-etl"]);
        assert_eq!(config.input_path(), "pathways.js");
        assert_eq!(config.output_path(), "pathway_id_category_subcategory.tsv");
        assert_eq!(config.array_name(), "ALL_PATHWAYS_RAW");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_array_name_fails_validation() {
        let config = CliConfig::parse_from(["pathway-etl", "--array-name", "not an ident"]);
        assert!(config.validate().is_err());
    }
}
