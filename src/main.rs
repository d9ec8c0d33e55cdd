mod config;

use pokechain::pokemon;
use pokechain::{Chain, Criteria, Dex, Generator, Pokemon, Type};

use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "dexchain")]
#[command(about = "Generates chains of Pokémon linked by shared types")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a chain
    Generate(GenerateArgs),
    /// Convert a dex file into RON, compressed if the output ends in `.gz`
    Convert(ConvertArgs),
    /// Look up Pokémon in a dex
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Dex file (.csv, .ron or .ron.gz). Defaults to the bundled dex.
    #[arg(long)]
    dex: Option<PathBuf>,

    /// Criteria file. Defaults to `criteria.ron` in the configuration directory.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    length: Option<usize>,

    /// Max occurrences of an exact typing (0 for unlimited)
    #[arg(long)]
    typing_limit: Option<u32>,

    /// Max occurrences of a single type (0 for unlimited)
    #[arg(long)]
    type_limit: Option<u32>,

    #[arg(long)]
    no_monotype: bool,

    #[arg(long)]
    seed: Option<u64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

impl GenerateArgs {
    fn criteria(&self, base: Criteria) -> Criteria {
        Criteria {
            length: self.length.unwrap_or(base.length),
            typing_limit: self.typing_limit.unwrap_or(base.typing_limit),
            type_limit: self.type_limit.unwrap_or(base.type_limit),
            allow_monotype: base.allow_monotype && !self.no_monotype,
            random_seed: self.seed.or(base.random_seed),
        }
    }
}

#[derive(Debug, Args)]
struct ConvertArgs {
    input: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("query").required(true).args(["name", "type_", "number"])))]
struct ShowArgs {
    #[arg(long)]
    dex: Option<PathBuf>,

    name: Option<String>,

    #[arg(long = "type")]
    type_: Option<Type>,

    #[arg(long)]
    number: Option<u32>,
}

/// The JSON shape of a generated chain.
#[derive(Debug, Serialize)]
struct Output<'a> {
    seq: &'a Chain<'a>,
}

fn main() -> Result<ExitCode, anywho::Error> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Generate(args) => generate(&args),
        Command::Convert(args) => convert(&args),
        Command::Show(args) => show(&args),
    }
}

fn generate(args: &GenerateArgs) -> Result<ExitCode, anywho::Error> {
    let criteria = match config::load(args.config.as_deref()) {
        Ok(base) => args.criteria(base),
        Err(error) => return fail(error, args.json),
    };

    log::info!(
        "Length = {}, typing limit = {}, type limit = {}, monotypes = {}, seed = {:?}",
        criteria.length,
        criteria.typing_limit,
        criteria.type_limit,
        criteria.allow_monotype,
        criteria.random_seed,
    );

    let dex = match load(args.dex.as_deref()) {
        Ok(dex) => dex,
        Err(error) => return fail(error.into(), args.json),
    };

    let result = Generator::new(&dex, criteria).and_then(|mut generator| generator.generate());

    let chain = match result {
        Ok(chain) => chain,
        Err(error) => return fail(error, args.json),
    };

    if args.json {
        println!("{}", serde_json::to_string(&Output { seq: &chain })?);
    } else {
        println!("{chain}");
    }

    Ok(ExitCode::SUCCESS)
}

fn convert(args: &ConvertArgs) -> Result<ExitCode, anywho::Error> {
    let dex = Dex::open(&args.input)?;

    if args.output.extension().is_some_and(|extension| extension == "gz") {
        dex.write_compressed(BufWriter::new(File::create(&args.output)?))?;
    } else {
        fs::write(&args.output, dex.to_ron()?)?;
    }

    log::info!("Wrote {} Pokémon to {}", dex.len(), args.output.display());

    Ok(ExitCode::SUCCESS)
}

fn show(args: &ShowArgs) -> Result<ExitCode, anywho::Error> {
    let dex = load(args.dex.as_deref())?;

    let matches: Vec<&Pokemon> = if let Some(name) = &args.name {
        dex.name(name).into_iter().collect()
    } else if let Some(type_) = args.type_ {
        dex.types([type_])
    } else if let Some(number) = args.number {
        dex.number([pokemon::Number(number)])
    } else {
        Vec::new()
    };

    if matches.is_empty() {
        println!("No Pokémon found");

        return Ok(ExitCode::FAILURE);
    }

    for pokemon in matches {
        println!("{} {:<12} {}", pokemon.number(), pokemon.name(), pokemon.typing());
    }

    Ok(ExitCode::SUCCESS)
}

fn load(path: Option<&Path>) -> Result<Dex, pokechain::core::Error> {
    match path {
        Some(path) => Dex::open(path),
        None => Dex::bundled(),
    }
}

fn fail(error: pokechain::Error, json: bool) -> Result<ExitCode, anywho::Error> {
    if !json {
        return Err(error.into());
    }

    println!("{}", serde_json::to_string(&error.report())?);

    Ok(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_override_configuration() {
        let cli = Cli::parse_from([
            "dexchain",
            "generate",
            "--length",
            "7",
            "--type-limit",
            "0",
            "--no-monotype",
            "--seed",
            "3",
        ]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };

        let base = Criteria {
            typing_limit: 2,
            ..Criteria::default()
        };

        assert_eq!(
            args.criteria(base),
            Criteria {
                length: 7,
                typing_limit: 2,
                type_limit: 0,
                allow_monotype: false,
                random_seed: Some(3),
            }
        );
    }

    #[test]
    fn show_needs_a_query() {
        assert!(Cli::try_parse_from(["dexchain", "show"]).is_err());
        assert!(Cli::try_parse_from(["dexchain", "show", "--type", "fire"]).is_ok());
        assert!(Cli::try_parse_from(["dexchain", "show", "--type", "sound"]).is_err());
    }

    #[test]
    fn json_output_wraps_names_in_seq() {
        let dex = Dex::bundled().unwrap();
        let chain = Generator::new(
            &dex,
            Criteria {
                length: 3,
                ..Criteria::default()
            }
            .seeded(11),
        )
        .unwrap()
        .generate()
        .unwrap();

        let output = serde_json::to_value(Output { seq: &chain }).unwrap();
        let names: Vec<_> = chain.names().into_iter().map(serde_json::Value::from).collect();

        assert_eq!(output, serde_json::json!({ "seq": names }));
        assert!(chain.names().iter().all(|name| *name == name.to_uppercase()));
    }

    #[test]
    fn malformed_configuration_is_reported_as_json() {
        let path = std::env::temp_dir().join(format!(
            "dexchain-generate-criteria-{}.ron",
            std::process::id()
        ));
        fs::write(&path, "(length: [])").unwrap();

        let cli = Cli::parse_from([
            "dexchain",
            "generate",
            "--json",
            "--config",
            path.to_str().unwrap(),
        ]);

        let Command::Generate(args) = cli.command else {
            panic!("expected generate command");
        };

        let json = generate(&args);
        let text = generate(&GenerateArgs {
            json: false,
            ..args
        });
        let _ = fs::remove_file(&path);

        assert!(json.is_ok());
        assert!(text.is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
