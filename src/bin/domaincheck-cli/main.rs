mod args;
mod output;

use anyhow::{Context, Result};
use domaincheck_lib::{Domain, DomainOptions, DomainReport, TldRegistry};

use std::io::{self, BufRead};

use args::{Cli, Commands};

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let options = cli.options();

    let registry = TldRegistry::new();
    if let Some(location) = cli.tld_source.as_deref() {
        registry
            .refresh(location)
            .with_context(|| format!("refresh TLD list from {location}"))?;
    }

    let inputs = if cli.stdin {
        read_domains(io::stdin().lock())?
    } else if let Some(Commands::Validate { domain }) = &cli.cmd {
        vec![domain.clone().into_bytes()]
    } else {
        Cli::clap_command().print_help()?;
        println!();
        return Ok(());
    };

    let rows: Vec<DomainReport> = inputs
        .into_iter()
        .map(|bytes| check(bytes, options, cli.message.as_deref(), &registry))
        .collect();

    output::write_reports(&rows, &cli)?;

    // codes de sortie : 0 OK, 2 invalids, 1 fatal
    let code = output::exit_code(&rows);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Une entrée par ligne, en octets bruts : l'UTF-8 invalide doit atteindre
/// le validateur.
fn read_domains<R: BufRead>(reader: R) -> Result<Vec<Vec<u8>>> {
    let mut domains = Vec::new();
    for line in reader.split(b'\n') {
        let mut bytes = line.context("read stdin")?;
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        domains.push(bytes);
    }
    Ok(domains)
}

fn check(
    bytes: Vec<u8>,
    options: DomainOptions,
    message: Option<&str>,
    registry: &TldRegistry,
) -> DomainReport {
    let mut domain = Domain::new(bytes).with_options(options);
    if let Some(message) = message {
        domain = domain.with_message(message);
    }
    domain.report(registry)
}

#[cfg(feature = "with-tracing")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
fn init_tracing() {}

#[cfg(test)]
mod tests {
    use super::*;
    use domaincheck_lib::DomainError;
    use std::io::Cursor;

    #[test]
    fn read_domains_keeps_raw_bytes_and_strips_cr() {
        let input = Cursor::new(b"example.com\r\nbad\xFF.com\n".to_vec());
        let domains = read_domains(input).expect("read succeeds");
        assert_eq!(domains, vec![b"example.com".to_vec(), b"bad\xFF.com".to_vec()]);
    }

    #[test]
    fn read_domains_without_trailing_newline() {
        let domains = read_domains(Cursor::new(b"a.com\nb.org".to_vec())).expect("read succeeds");
        assert_eq!(domains, vec![b"a.com".to_vec(), b"b.org".to_vec()]);
        assert!(read_domains(Cursor::new(Vec::new())).expect("empty input").is_empty());
    }

    #[test]
    fn stdin_rows_reach_the_validator() {
        let registry = TldRegistry::new();
        let input = Cursor::new(b"example.com\r\nbad\xFF.com\n".to_vec());
        let rows: Vec<DomainReport> = read_domains(input)
            .expect("read succeeds")
            .into_iter()
            .map(|bytes| check(bytes, DomainOptions::default(), None, &registry))
            .collect();

        assert!(rows[0].valid, "{:?}", rows[0]);
        assert_eq!(rows[1].error, Some(DomainError::InvalidEncoding));
        assert_eq!(output::exit_code(&rows), 2);
        assert_eq!(output::exit_code(&rows[..1]), 0);
    }

    #[test]
    fn custom_message_replaces_error_text() {
        let registry = TldRegistry::new();
        let row = check(
            b"example.zz".to_vec(),
            DomainOptions::default(),
            Some("domaine refusé"),
            &registry,
        );
        assert_eq!(row.message.as_deref(), Some("domaine refusé"));
        assert_eq!(row.error, Some(DomainError::Unknown));
    }
}
