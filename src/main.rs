use anyhow::Context;
use clap::error::ErrorKind;
use clap::{ArgGroup, Args, CommandFactory, Parser};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use cm_api_parser::document;
use cm_api_parser::render::render_json;
use cm_api_parser::select::{NamesOnly, Selection, Selector, select};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser, Debug)]
#[command(name = "cm-api-parser")]
#[command(version, about = "Cloudera Manager API export parser", long_about = None)]
#[command(group(ArgGroup::new("target").required(true).args(["cluster", "all", "clusters"])))]
struct Cli {
    /// JSON export to parse
    #[arg(short, long, env = "CM_API_FILE", value_name = "FILE")]
    file: PathBuf,

    /// Cluster to parse
    #[arg(short, long, value_name = "CLUSTER")]
    cluster: Option<String>,

    /// Print the whole deployment
    #[arg(short, long)]
    all: bool,

    /// Cluster service to parse
    #[arg(short, long, value_name = "SERVICE", conflicts_with = "parcel")]
    service: Option<String>,

    /// Parcel to parse
    #[arg(short, long, value_name = "PARCEL")]
    parcel: Option<String>,

    /// Service role type to parse
    #[arg(short, long, value_name = "ROLE", conflicts_with = "rolegroup")]
    role: Option<String>,

    /// Service role group to parse
    #[arg(short = 'g', long, value_name = "ROLEGROUP")]
    rolegroup: Option<String>,

    #[command(flatten)]
    names: NamesArgs,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct NamesArgs {
    /// Print only the names of the clusters
    #[arg(long)]
    clusters: bool,

    /// Print only the names of the services
    #[arg(long)]
    services: bool,

    /// Print only the names of the roles
    #[arg(long)]
    roles: bool,

    /// Print only the names of the role groups
    #[arg(long)]
    rolegroups: bool,

    /// Print only the names of the parcels
    #[arg(long)]
    parcels: bool,
}

impl NamesArgs {
    fn level(&self) -> Option<NamesOnly> {
        [
            (self.clusters, NamesOnly::Clusters),
            (self.services, NamesOnly::Services),
            (self.roles, NamesOnly::Roles),
            (self.rolegroups, NamesOnly::RoleGroups),
            (self.parcels, NamesOnly::Parcels),
        ]
        .into_iter()
        .find_map(|(set, level)| set.then_some(level))
    }
}

impl Cli {
    fn selector(&self) -> Selector {
        Selector {
            cluster: self.cluster.clone(),
            service: self.service.clone(),
            role: self.role.clone(),
            rolegroup: self.rolegroup.clone(),
            parcel: self.parcel.clone(),
            names: self.names.level(),
        }
    }
}

/// Log to stderr; stdout carries only the JSON result.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "cm_api_parser=debug"
    } else {
        "cm_api_parser=info"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let selector = cli.selector();
    if let Err(e) = selector.validate() {
        Cli::command().error(ErrorKind::ArgumentConflict, e).exit();
    }

    // Whole-document mode skips the schema and the selector entirely.
    if cli.all {
        info!("printing whole configuration of {}", cli.file.display());
        let raw = document::load_raw(&cli.file).context("cannot load deployment export")?;
        println!("{}", render_json(&raw)?);
        return Ok(());
    }

    let doc = document::load_document(&cli.file).context("cannot load deployment export")?;
    debug!(clusters = doc.clusters.len(), "loaded {}", cli.file.display());

    warn_ignored(&selector);
    narrate(&selector);

    let selection = select(&doc, &selector);
    if let Selection::NotFound(missing) = &selection {
        match &missing.name {
            Some(name) => warn!("{} \"{}\" not found", missing.level, name),
            None => warn!("no {} selected", missing.level),
        }
    }

    println!("{}", render_json(&selection)?);
    Ok(())
}

/// Role-level filters only apply below a selected service.
fn warn_ignored(selector: &Selector) {
    if selector.service.is_some() || selector.names == Some(NamesOnly::Clusters) {
        return;
    }
    if selector.role.is_some() || selector.names == Some(NamesOnly::Roles) {
        warn!("role filter ignored without --service");
    }
    if selector.rolegroup.is_some() || selector.names == Some(NamesOnly::RoleGroups) {
        warn!("role group filter ignored without --service");
    }
}

/// Progress line for the branch the engine is about to take.
fn narrate(selector: &Selector) {
    let cluster = selector.cluster.as_deref().unwrap_or_default();

    if selector.names == Some(NamesOnly::Clusters) {
        info!("printing cluster names...");
        return;
    }

    if let Some(service) = selector.service.as_deref() {
        if let Some(role) = &selector.role {
            info!("printing cluster \"{cluster}\" service \"{service}\" roles of type \"{role}\"...");
        } else if selector.names == Some(NamesOnly::Roles) {
            info!("printing cluster \"{cluster}\" service \"{service}\" role names...");
        } else if let Some(group) = &selector.rolegroup {
            info!("printing cluster \"{cluster}\" service \"{service}\" role group \"{group}\"...");
        } else if selector.names == Some(NamesOnly::RoleGroups) {
            info!("printing cluster \"{cluster}\" service \"{service}\" role group names...");
        } else {
            info!("printing cluster \"{cluster}\" service \"{service}\" configuration...");
        }
    } else if selector.names == Some(NamesOnly::Services) {
        info!("printing cluster \"{cluster}\" service names...");
    } else if let Some(parcel) = &selector.parcel {
        info!("printing cluster \"{cluster}\" parcel \"{parcel}\"...");
    } else if selector.names == Some(NamesOnly::Parcels) {
        info!("printing cluster \"{cluster}\" parcel names...");
    } else {
        info!("printing cluster \"{cluster}\" configuration...");
    }
}
