//! Command line definition

use clap::{Parser, Subcommand};
use shelters::{AreaSelection, ShelterQuery, ShelterTag};

#[derive(Debug, Parser)]
#[command(name = "directory", about = "Stray-animal shelter directory", version)]
pub struct Cli {
    /// Settings file (TOML); defaults to ./directory.toml when present
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// List shelters, optionally filtered by region and tags
    Shelters {
        #[arg(long)]
        city: Option<String>,
        #[arg(long, requires = "city")]
        district: Option<String>,
        /// remote, appointment, small, or private; repeatable
        #[arg(long = "tag", value_parser = parse_tag)]
        tags: Vec<ShelterTag>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one shelter with its contact links
    Shelter { id: String },
    /// Print the region catalog
    Regions,
}

impl Command {
    /// Build a catalog query from `shelters` arguments
    pub fn shelter_query(&self) -> Option<ShelterQuery> {
        let Command::Shelters {
            city,
            district,
            tags,
            page,
            limit,
        } = self
        else {
            return None;
        };

        let area = match (city, district) {
            (Some(city), Some(district)) => AreaSelection::city_district(city, district),
            (Some(city), None) => AreaSelection::whole_city(city),
            _ => AreaSelection::all(),
        };

        Some(ShelterQuery {
            area,
            tags: tags.clone(),
            page: *page,
            limit: *limit,
        })
    }
}

fn parse_tag(value: &str) -> Result<ShelterTag, String> {
    serde_json::from_value(serde_json::Value::String(value.to_ascii_lowercase()))
        .map_err(|_| format!("unknown tag '{value}'"))
}
