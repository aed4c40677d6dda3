use anyhow::Result;
use clap::Parser;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

mod cli;
mod settings;

use auth::SessionStore;
use auth::validation::{LoginForm, RegistrationForm};
use shelters::contact::{available_channels, contact_url};
use shelters::{AreaPicker, ShelterRepository, fixtures};

use crate::cli::{Cli, Command};
use crate::settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    // Initialize logging
    common::telemetry::init(&settings.log.level)?;

    info!("Starting shelter directory");

    match &cli.command {
        Command::Login { email, password } => {
            let credentials = LoginForm {
                email: email.clone(),
                password: password.clone(),
            }
            .validate()?;

            let store = SessionStore::with_seeded_directory(&settings.auth).await?;
            store.login(&credentials.email, &credentials.password).await?;
            print_session(&store)?;
        }
        Command::Register {
            email,
            password,
            confirm_password,
        } => {
            let credentials = RegistrationForm {
                email: email.clone(),
                password: password.clone(),
                confirm_password: confirm_password.clone(),
            }
            .validate(settings.auth.min_password_length)?;

            let store = SessionStore::with_seeded_directory(&settings.auth).await?;
            store
                .register(&credentials.email, &credentials.password)
                .await?;
            print_session(&store)?;
        }
        Command::Shelters { .. } => {
            let query = cli.command.shelter_query().unwrap_or_default();
            let catalog = Arc::new(fixtures::region_catalog()?);

            // Run the selection through the picker so unknown regions are rejected
            let mut picker = AreaPicker::new(catalog);
            match (query.area.city(), query.area.district()) {
                (Some(city), Some(district)) => {
                    picker.select_district(city, district)?;
                }
                (Some(city), None) => {
                    picker.select_city(city)?;
                }
                _ => {
                    picker.select_all();
                }
            }

            let repository = ShelterRepository::new(fixtures::shelters()?, &settings.catalog);
            let page = repository.list(&query).await?;
            print_json(&json!({
                "area": picker.label(),
                "page": page,
            }))?;
        }
        Command::Shelter { id } => {
            let repository = ShelterRepository::new(fixtures::shelters()?, &settings.catalog);
            let shelter = repository.get_by_id(id).await?;

            let links: serde_json::Map<String, serde_json::Value> =
                available_channels(&shelter.contact)
                    .into_iter()
                    .filter_map(|channel| {
                        let url = contact_url(&shelter.contact, channel)?;
                        let key = serde_json::to_value(channel).ok()?.as_str()?.to_string();
                        Some((key, json!(url)))
                    })
                    .collect();

            let tags: Vec<&str> = shelter.tags.iter().map(|tag| tag.label()).collect();
            print_json(&json!({
                "shelter": shelter,
                "tagLabels": tags,
                "contactLinks": links,
            }))?;
        }
        Command::Regions => {
            print_json(&fixtures::region_catalog()?)?;
        }
    }

    Ok(())
}

fn print_session<D: auth::CredentialDirectory>(store: &SessionStore<D>) -> Result<()> {
    print_json(&json!({
        "state": store.state(),
        "user": store.current_user(),
    }))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
