//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{load_settings, ClientSettings};
use crate::error::Result;
use crate::images::{extract_images, Image, ImagesClient};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.settings()?.images_client()?;
        debug!(endpoint = %client.endpoint(), "Using compute endpoint");

        match &self.cli.command {
            Commands::Get { id } => {
                let image = client.get(id).await?;
                self.print_image(&image)
            }
            Commands::List { all, max_pages } => self.list(&client, *all, *max_pages).await,
            Commands::Delete { id } => {
                client.delete(id).await?;
                self.print_line(&serde_json::json!({ "deleted": id }).to_string(), id);
                Ok(())
            }
            Commands::Find { name } => {
                let id = client.id_from_name(name).await?;
                self.print_line(&serde_json::json!({ "name": name, "id": id }).to_string(), &id);
                Ok(())
            }
        }
    }

    /// Resolve settings: file first, then flag overrides
    fn settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.cli.settings {
            Some(path) => load_settings(path)?,
            None => ClientSettings::default(),
        };

        if let Some(endpoint) = &self.cli.endpoint {
            settings.endpoint = Some(endpoint.clone());
        }
        if let Some(token) = &self.cli.token {
            settings.token = Some(token.clone());
        }

        Ok(settings)
    }

    /// List images page by page
    async fn list(&self, client: &ImagesClient, all: bool, max_pages: Option<u64>) -> Result<()> {
        let page_limit = match (all, max_pages) {
            (_, Some(n)) => Some(n),
            (true, None) => None,
            (false, None) => Some(1),
        };

        let mut pager = client.list()?;
        let mut printed = 0usize;

        while page_limit.map_or(true, |limit| pager.pages_fetched() < limit) {
            let Some(page) = pager.next_page().await? else {
                break;
            };
            for image in extract_images(&page)? {
                self.print_image(&image)?;
                printed += 1;
            }
        }

        debug!(
            images = printed,
            pages = pager.pages_fetched(),
            exhausted = pager.is_exhausted(),
            "List finished"
        );
        Ok(())
    }

    fn print_image(&self, image: &Image) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(image)?);
            }
            OutputFormat::Pretty => {
                println!(
                    "{:<38} {:<8} {:>4}% {}",
                    image.id, image.status, image.progress, image.name
                );
            }
        }
        Ok(())
    }

    fn print_line(&self, json: &str, pretty: &str) {
        match self.cli.format {
            OutputFormat::Json => println!("{json}"),
            OutputFormat::Pretty => println!("{pretty}"),
        }
    }
}
