//! CLI argument merging with config

use crate::domain::{Config, ListingStyle};
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub ignore_file_name: Option<String>,
    pub home_ignore_file: Option<PathBuf>,
    pub use_home_ignore: Option<bool>,
    pub listing_style: Option<ListingStyle>,
    pub sort_entries: Option<bool>,
    pub signature_extensions: Option<Vec<String>>,
}

pub fn merge_cli_with_config(mut base_config: Config, cli: CliOverrides) -> Config {
    if let Some(ignore_file_name) = cli.ignore_file_name {
        base_config.ignore_file_name = ignore_file_name;
    }
    if let Some(home_ignore_file) = cli.home_ignore_file {
        base_config.home_ignore_file = Some(home_ignore_file);
    }
    if let Some(use_home_ignore) = cli.use_home_ignore {
        base_config.use_home_ignore = use_home_ignore;
    }
    if let Some(listing_style) = cli.listing_style {
        base_config.listing_style = listing_style;
    }
    if let Some(sort_entries) = cli.sort_entries {
        base_config.sort_entries = sort_entries;
    }
    if let Some(signature_extensions) = cli.signature_extensions {
        base_config.signature_extensions = signature_extensions;
    }

    base_config
}
