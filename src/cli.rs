//! Minimal CLI: api document → (go structs | inventory | normalized trees)
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::error::Error;
use crate::naming::{DEFAULT_REQUEST_SUFFIX, DEFAULT_RESPONSE_SUFFIX, Suffixes};
use crate::pipeline::{self, Options};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// turn an exported api document into Go request/response struct declarations
#[derive(Parser, Debug)]
#[command(name = "yapi-structgen", version)]
pub struct CommandLineInterface {
    /// more log output on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// render struct declarations
    Generate(GenerateOut),
    /// print classifications and their apis
    List(ListOut),
    /// print the normalized body trees as JSON
    Tree(TreeOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// exported api document (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// only this classification (exact name)
    #[arg(short, long)]
    classification: Option<String>,

    /// only the api with this url path (exact match)
    #[arg(short, long)]
    path: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct NamingSettings {
    /// suffix for request declarations
    #[arg(long, default_value = DEFAULT_REQUEST_SUFFIX)]
    request_suffix: String,

    /// suffix for response declarations
    #[arg(long, default_value = DEFAULT_RESPONSE_SUFFIX)]
    response_suffix: String,

    /// keep going when two apis produce the same declaration name
    #[arg(long, default_value_t = false)]
    allow_duplicate_names: bool,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    naming: NamingSettings,

    /// output .go file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ListOut {
    #[command(flatten)]
    input_settings: InputSettings,
}

#[derive(clap::Parser, Debug)]
struct TreeOut {
    #[command(flatten)]
    input_settings: InputSettings,

    #[command(flatten)]
    naming: NamingSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self.input.as_ref() {
            Some(path) => {
                tracing::debug!("reading {}", path.display());
                std::fs::read(path)
                    .map_err(|source| Error::Io { path: path.clone(), source })
                    .context("failed to read input document")
            }
            None => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|source| Error::Io { path: PathBuf::from("<stdin>"), source })?;
                if buf.iter().all(u8::is_ascii_whitespace) {
                    return Err(Error::EmptyInput.into());
                }
                Ok(buf)
            }
        }
    }

    fn options(&self, naming: Option<&NamingSettings>) -> Options {
        let mut options = Options {
            classification: self.classification.clone(),
            path: self.path.clone(),
            ..Options::default()
        };
        if let Some(naming) = naming {
            options.suffixes = Suffixes {
                request: naming.request_suffix.clone(),
                response: naming.response_suffix.clone(),
            };
            options.reject_duplicate_names = !naming.allow_duplicate_names;
        }
        options
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let raw = target.input_settings.read()?;
                let options = target.input_settings.options(Some(&target.naming));
                let texts = pipeline::generate(&raw, &options)?;
                emit(target.out.as_deref(), &pipeline::join_output(&texts))
            }
            Command::List(target) => {
                let raw = target.input_settings.read()?;
                let kinds = pipeline::inventory(&raw, &target.input_settings.options(None))?;
                let mut listing = String::new();
                for kind in &kinds {
                    listing.push_str(&format!("{}\n", kind.name));
                    for api in &kind.apis {
                        listing.push_str(&format!("  {:<7} {}  {}\n", api.method, api.path, api.title));
                    }
                }
                emit(None, &listing)
            }
            Command::Tree(target) => {
                let raw = target.input_settings.read()?;
                let options = target.input_settings.options(Some(&target.naming));
                let trees = pipeline::trees(&raw, &options)?;
                let src = serde_json::to_string_pretty(&trees).context("failed to encode trees")?;
                emit(target.out.as_deref(), &format!("{src}\n"))
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Write the whole output to `out`, or stdout when `None`.
pub fn emit(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|source| Error::Io { path: parent.to_path_buf(), source })?;
    }
    std::fs::write(out, text).map_err(|source| Error::Io { path: out.to_path_buf(), source })?;
    tracing::info!("wrote {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_generate_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "yapi-structgen", "-vv", "generate", "-i", "api.json", "-c", "node", "-p", "/node/get",
            "--request-suffix", "Req", "--allow-duplicate-names",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        let Command::Generate(target) = &cli.cmd else { panic!("expected generate") };
        let options = target.input_settings.options(Some(&target.naming));
        assert_eq!(options.classification.as_deref(), Some("node"));
        assert_eq!(options.path.as_deref(), Some("/node/get"));
        assert_eq!(options.suffixes.request, "Req");
        assert_eq!(options.suffixes.response, DEFAULT_RESPONSE_SUFFIX);
        assert!(!options.reject_duplicate_names);
    }

    #[test]
    fn list_uses_default_naming() {
        let cli = CommandLineInterface::try_parse_from(["yapi-structgen", "list"]).unwrap();
        let Command::List(target) = &cli.cmd else { panic!("expected list") };
        let options = target.input_settings.options(None);
        assert!(options.classification.is_none());
        assert!(options.reject_duplicate_names);
    }

    #[test]
    fn emit_creates_parent_dirs_and_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out.go");
        emit(Some(out.as_path()), "a much longer first write\n").unwrap();
        emit(Some(out.as_path()), "short\n").unwrap();
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "short\n");
    }

    #[test]
    fn missing_input_file_is_an_io_error() {
        let settings = InputSettings {
            input: Some(PathBuf::from("/definitely/not/here.json")),
            classification: None,
            path: None,
        };
        let err = settings.read().unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Io { .. })), "{err:?}");
    }
}
