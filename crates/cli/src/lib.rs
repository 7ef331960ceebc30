mod error;
mod members;
mod method;
mod query;
mod schema;

pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use memberscope_api::{BindingFlags, FlagName, SearchFlags, TypeHandle};
use memberscope_core::{RegistryTypeSystem, TypeProvider};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "memberscope",
    version,
    about = "Reflection-style member lookup over a JSON type model",
    long_about = "Memberscope loads a description of types, their base types and declared members, \
                  and answers member, method, property, field and constructor lookups with \
                  visibility and hierarchy filters."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the members of a type, ancestors first
    Members {
        /// Path to the JSON type model
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Namespace-qualified type name
        #[arg(value_name = "TYPE")]
        type_name: String,
        /// Comma-separated search flags, e.g. public,instance,declared_only
        #[arg(short, long, value_delimiter = ',')]
        flags: Vec<String>,
        /// Only members with this name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Find a single method by name, or by signature when --args is given
    Method {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        #[arg(value_name = "TYPE")]
        type_name: String,
        #[arg(value_name = "NAME")]
        name: String,
        /// Comma-separated argument type names
        #[arg(short, long, value_delimiter = ',')]
        args: Option<Vec<String>>,
        /// Comma-separated search flags (default: public,static,instance)
        #[arg(short, long, value_delimiter = ',')]
        flags: Option<Vec<String>>,
    },
    /// Run a JSON query against a model
    Query {
        #[arg(value_name = "MODEL")]
        model: PathBuf,
        /// Query JSON string
        #[arg(value_name = "JSON_QUERY")]
        query: String,
    },
    /// Print the JSON schema of the type model and the query interface
    Schema,
}

pub fn run() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = memberscope_core::logging::init_logging("cli", true);

    let output = match cli.command {
        Commands::Members {
            model,
            type_name,
            flags,
            name,
        } => members::run(&model, &type_name, &flags, name.as_deref())?,
        Commands::Method {
            model,
            type_name,
            name,
            args,
            flags,
        } => method::run(&model, &type_name, &name, args.as_deref(), flags.as_deref())?,
        Commands::Query { model, query } => query::run(&model, &query)?,
        Commands::Schema => schema::run()?,
    };

    println!("{}", output);
    Ok(())
}

pub fn load_model(path: &Path) -> Result<RegistryTypeSystem> {
    let json = std::fs::read_to_string(path)?;
    let registry = RegistryTypeSystem::from_json(&json)?;
    tracing::info!("Loaded {} type(s) from {}", registry.len(), path.display());
    Ok(registry)
}

pub fn parse_flags<S: AsRef<str>>(flags: &[S]) -> Result<SearchFlags> {
    let bits = flags
        .iter()
        .map(|f| f.as_ref())
        .filter(|f| !f.trim().is_empty())
        .map(|f| FlagName::parse(f).ok_or_else(|| CliError::InvalidFlag(f.to_string())))
        .collect::<Result<BindingFlags>>()?;
    Ok(bits.into())
}

fn resolve_type(ts: &RegistryTypeSystem, name: &str) -> Result<TypeHandle> {
    ts.find_type(name)
        .ok_or_else(|| CliError::UnknownType(name.to_string()))
}
