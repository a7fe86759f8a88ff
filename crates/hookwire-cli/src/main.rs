// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `hookwire` — regenerates the node/VM protocol artifacts from the hook
//! signature registry.
//!
//! One subcommand per artifact writes to stdout or `--output`; `all`
//! refreshes the whole set into a directory. The registry is compiled in,
//! so the binary has no configuration surface beyond target selection.

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Parser, Subcommand};
use hookwire_core::codegen::{generate, Target};
use hookwire_core::registry::Registry;
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "hookwire",
    version,
    about = "Regenerates the node/VM hook protocol from its signature registry"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the request/response message types.
    Messages(OutputArgs),
    /// Generate the server-side repliers.
    Repliers(OutputArgs),
    /// Generate the reply-slot dispatch table.
    ReplySlots(OutputArgs),
    /// Generate the client-side gateway.
    Gateway(OutputArgs),
    /// Generate the message factory.
    Factory(OutputArgs),
    /// Generate every artifact into a directory.
    All {
        /// Directory receiving one file per artifact.
        out_dir: Utf8PathBuf,
    },
}

#[derive(Debug, Args)]
struct OutputArgs {
    /// File to write; stdout when omitted.
    #[arg(short, long)]
    output: Option<Utf8PathBuf>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(false)
                .build(),
        )
    }))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = Registry::builtin();
    match cli.command {
        Command::Messages(args) => emit(&registry, Target::Messages, args.output.as_deref()),
        Command::Repliers(args) => emit(&registry, Target::Repliers, args.output.as_deref()),
        Command::ReplySlots(args) => emit(&registry, Target::ReplySlots, args.output.as_deref()),
        Command::Gateway(args) => emit(&registry, Target::Gateway, args.output.as_deref()),
        Command::Factory(args) => emit(&registry, Target::Factory, args.output.as_deref()),
        Command::All { out_dir } => emit_all(&registry, &out_dir),
    }
}

fn emit(registry: &Registry, target: Target, output: Option<&Utf8Path>) -> Result<()> {
    let source = generate(registry, target).into_diagnostic()?;
    match output {
        Some(path) => {
            std::fs::write(path, source)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to write {path}"))?;
            info!(%path, "wrote artifact");
        }
        None => print!("{source}"),
    }
    Ok(())
}

fn emit_all(registry: &Registry, out_dir: &Utf8Path) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create {out_dir}"))?;
    for target in Target::ALL {
        let path = out_dir.join(target.file_name());
        emit(registry, target, Some(&path))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf8_temp_dir(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("temp dir is UTF-8")
    }

    #[test]
    fn emit_writes_the_requested_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = utf8_temp_dir(&dir).join("messages.rs");
        emit(&Registry::builtin(), Target::Messages, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("pub enum MessageKind {"));
        assert!(written.starts_with("// Copyright"));
    }

    #[test]
    fn emit_all_writes_one_file_per_target() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = utf8_temp_dir(&dir).join("generated");
        emit_all(&Registry::builtin(), &out_dir).unwrap();
        for target in Target::ALL {
            let path = out_dir.join(target.file_name());
            assert!(path.as_std_path().exists(), "{path} missing");
        }
    }

    #[test]
    fn subcommand_names_match_the_generated_markers() {
        let cli = Cli::try_parse_from(["hookwire", "reply-slots"]).unwrap();
        assert!(matches!(cli.command, Command::ReplySlots(_)));
        let cli = Cli::try_parse_from(["hookwire", "all", "out"]).unwrap();
        assert!(matches!(cli.command, Command::All { .. }));
    }
}
