//! Tile-service catalog CLI.
//!
//! Commands:
//! - `list` — parse a local catalog file and print its categories and
//!   services.
//! - `export` — write the descriptor pair (.tab + XML sidecar) for one
//!   service.
//! - `refresh` — fetch the remote catalog and replace the local copy,
//!   keeping the previous content at `<path>.BAK`.

mod refresh;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tms_catalog::{catalog_filename, locate_catalog, parse_catalog, CatalogDocument};
use tms_descriptor::{
    default_export_filename, write_descriptor, DescriptorOptions, TabEncoding,
};

/// Default host of the published catalog.
const DEFAULT_CATALOG_BASE_URL: &str =
    "https://raw.githubusercontent.com/kasim73/TileServices/main";

#[derive(Parser, Debug)]
#[command(name = "tms-export")]
#[command(about = "Browse tile-service catalogs and export tile-server descriptors")]
struct Args {
    /// Log filter (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List categories and services of a local catalog file
    List {
        /// Catalog JSON file, or a directory holding
        /// ListTileServices_<lang>.json
        catalog: PathBuf,

        /// Catalog language suffix used when a directory is given
        #[arg(long, default_value = "ru")]
        language: String,
    },

    /// Export one service as a .tab definition file plus XML sidecar
    Export {
        /// Catalog JSON file, or a directory holding
        /// ListTileServices_<lang>.json
        catalog: PathBuf,

        /// Catalog language suffix used when a directory is given
        #[arg(long, default_value = "ru")]
        language: String,

        /// Category name
        #[arg(long)]
        category: String,

        /// Service name within the category
        #[arg(long)]
        name: String,

        /// Target .tab path; defaults to "<name>_<category>.tab" in the
        /// current directory
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output charset variant
        #[arg(long, value_enum, default_value = "latin")]
        encoding: EncodingArg,

        /// Rewrite the first URL template token for legacy consumers
        #[arg(long)]
        legacy_rewrite: bool,
    },

    /// Fetch the remote catalog and replace the local copy
    Refresh {
        /// Local catalog path to replace
        path: PathBuf,

        /// Explicit catalog URL; overrides --base-url/--language
        #[arg(long)]
        url: Option<String>,

        /// Base URL of the published catalog
        #[arg(long, env = "TMS_CATALOG_BASE_URL", default_value = DEFAULT_CATALOG_BASE_URL)]
        base_url: String,

        /// Catalog language suffix
        #[arg(long, default_value = "ru")]
        language: String,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EncodingArg {
    Latin,
    Cyrillic,
}

impl From<EncodingArg> for TabEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin => TabEncoding::Latin,
            EncodingArg::Cyrillic => TabEncoding::Cyrillic,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    match args.command {
        Command::List { catalog, language } => list(&catalog, &language),
        Command::Export {
            catalog,
            language,
            category,
            name,
            output,
            encoding,
            legacy_rewrite,
        } => export(
            &catalog,
            &language,
            &category,
            &name,
            output,
            encoding,
            legacy_rewrite,
        ),
        Command::Refresh {
            path,
            url,
            base_url,
            language,
        } => {
            let url = url.unwrap_or_else(|| {
                format!("{}/{}", base_url, catalog_filename(&language))
            });
            refresh::refresh_catalog(&url, &path)
        }
    }
}

fn load_catalog(path: &Path, language: &str) -> Result<CatalogDocument> {
    let path = if path.is_dir() {
        locate_catalog(path, language)
    } else {
        path.to_path_buf()
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    parse_catalog(&text).with_context(|| format!("Failed to parse catalog {}", path.display()))
}

fn list(catalog: &Path, language: &str) -> Result<()> {
    let doc = load_catalog(catalog, language)?;
    for category in &doc.categories {
        println!("{}", category.name);
        for service in &category.services {
            println!(
                "  {:<24} {:<32} {} levels {}..{}",
                service.name,
                service.display_title(),
                service.addressing,
                service.min_level,
                service.max_level,
            );
        }
    }
    info!(
        categories = doc.categories.len(),
        services = doc.service_count(),
        "catalog listed"
    );
    Ok(())
}

fn export(
    catalog: &Path,
    language: &str,
    category: &str,
    name: &str,
    output: Option<PathBuf>,
    encoding: EncodingArg,
    legacy_rewrite: bool,
) -> Result<()> {
    let doc = load_catalog(catalog, language)?;
    let category = match doc.category(category) {
        Some(c) => c,
        None => bail!("Category not found: {}", category),
    };
    let record = match category.service(name) {
        Some(r) => r,
        None => bail!("Service not found in '{}': {}", category.name, name),
    };

    let target =
        output.unwrap_or_else(|| PathBuf::from(default_export_filename(record, &category.name)));
    let opts = DescriptorOptions {
        encoding: encoding.into(),
        legacy_rewrite,
    };

    let (tab_path, xml_path) = write_descriptor(&target, record, &opts)?;
    info!(
        service = %record.name,
        definition = %tab_path.display(),
        sidecar = %xml_path.display(),
        "descriptor exported"
    );
    Ok(())
}
