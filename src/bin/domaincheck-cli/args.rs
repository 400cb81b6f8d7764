use clap::{Parser, Subcommand};
use domaincheck_lib::{DomainOptions, IANA_ALIAS};

#[derive(Parser)]
#[command(name = "domaincheck-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// lit des domaines depuis stdin (un par ligne)
    #[arg(long)]
    pub stdin: bool,

    /// write report to file (JSON/NDJSON/CSV selon --format)
    #[arg(long)]
    pub out: Option<String>,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// longueur totale maximale (255 par défaut)
    #[arg(long)]
    pub max_length: Option<usize>,

    /// nombre minimal de sous-domaines (hors TLD)
    #[arg(long)]
    pub min_subdomains: Option<usize>,

    /// nombre maximal de sous-domaines (hors TLD)
    #[arg(long)]
    pub max_subdomains: Option<usize>,

    /// recharge la liste des TLD avant validation : chemin, file://, http(s)://
    /// ou `iana` (valeur par défaut si l'option est donnée sans argument)
    #[arg(long, num_args = 0..=1, default_missing_value = IANA_ALIAS)]
    pub tld_source: Option<String>,

    /// message affiché à la place de l'erreur pour les domaines invalides
    #[arg(long)]
    pub message: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    Validate {
        /// domaine à valider
        domain: String,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }

    pub fn options(&self) -> DomainOptions {
        DomainOptions {
            max_length: self.max_length,
            min_subdomains: self.min_subdomains,
            max_subdomains: self.max_subdomains,
        }
    }
}
