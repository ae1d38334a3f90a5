use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use sqlproto_catalog::{CatalogProvider, MySqlCatalog};
use sqlproto_core::{build_schema, render};

/// sqlproto - generate a proto3 schema from a database catalog
#[derive(Parser)]
#[command(name = "sqlproto")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database kind (only "mysql" is supported)
    #[arg(long, default_value = "mysql")]
    db: String,

    /// Database host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Database port
    #[arg(long, default_value_t = 3306)]
    port: u16,

    /// Database user
    #[arg(long, default_value = "root")]
    user: String,

    /// Database password
    #[arg(long, default_value = "root")]
    password: String,

    /// Target schema (database) name; also used as the generated package name
    #[arg(long)]
    schema: String,

    /// Print the schema model as JSON instead of proto text
    #[arg(long)]
    json: bool,

    /// Enable verbose output on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let provider: Box<dyn CatalogProvider> = match cli.db.to_lowercase().as_str() {
        "mysql" => Box::new(MySqlCatalog::connect(
            &cli.host,
            cli.port,
            &cli.user,
            &cli.password,
            &cli.schema,
        )),
        other => {
            return Err(anyhow::anyhow!(
                "Unsupported database kind '{}'. Supported: mysql",
                other
            ));
        }
    };

    if cli.verbose {
        eprintln!(
            "{} {} at {}:{}...",
            "Connecting to".cyan(),
            provider.name(),
            cli.host,
            cli.port
        );
    }

    provider
        .test_connection()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    if cli.verbose {
        eprintln!("{}", "✓ Connection successful".green());
        eprintln!("{} {}...", "Reading catalog for schema".cyan(), cli.schema);
    }

    let columns = provider.fetch_columns(&cli.schema).await?;

    if cli.verbose {
        eprintln!("{} {} columns", "Fetched".cyan(), columns.len());
    }

    let schema = build_schema(&cli.schema, &columns)?;

    if cli.verbose {
        eprintln!(
            "Built {} messages, {} enums, {} imports",
            schema.messages.len(),
            schema.enums.len(),
            schema.imports.len()
        );
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&schema)?);
    } else {
        print!("{}", render(&schema));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
