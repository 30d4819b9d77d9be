use anyhow::{Context, Result};
use std::{
    env,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};
use weftmark_config::Config;
use weftmark_engine::{Compiler, PermittedSchemes, SafeMode, State, read_source, write_output};

const USAGE: &str = "[--safe|--unsafe] [--config PATH] [-o OUT] [INPUT]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    /// `Some` when `--safe` or `--unsafe` overrides the config file.
    safe_mode: Option<bool>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    /// `None` reads stdin.
    input: Option<PathBuf>,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--safe" => parsed.safe_mode = Some(true),
            "--unsafe" => parsed.safe_mode = Some(false),
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-o" | "--output" => {
                let path = args.next().ok_or("-o needs a path")?;
                parsed.output = Some(PathBuf::from(path));
            }
            "-" if parsed.input.is_none() => {}
            flag if flag.starts_with('-') => return Err(format!("unknown flag: {flag}")),
            _ if parsed.input.is_some() => return Err(format!("unexpected argument: {arg}")),
            _ => parsed.input = Some(PathBuf::from(arg)),
        }
    }
    Ok(parsed)
}

/// State described by the config file.
fn config_state(config: &Config) -> State {
    let mut state = State::new().setting(SafeMode::new(config.safe_mode));
    if let Some(schemes) = &config.permitted_schemes {
        state = state.setting(PermittedSchemes::new(schemes.iter().cloned()));
    }
    state
}

/// Command-line settings, layered over the config file's.
fn build_state(config: &Config, safe_override: Option<bool>) -> State {
    let overrides = match safe_override {
        Some(safe) => State::new().setting(SafeMode::new(safe)),
        None => State::new(),
    };
    config_state(config).merged_with(&overrides)
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => {
            let path = Config::expand_path(path);
            log::info!("Config path: {}", path.display());
            Config::load_from_path(&path)?
                .with_context(|| format!("config file not found: {}", path.display()))?
        }
        None => {
            log::debug!("Config path: {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            read_source(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "weftmark".to_string());

    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program} {USAGE}");
            process::exit(2);
        }
    };

    let config = load_config(args.config.as_deref())?;
    let compiler = Compiler::new(build_state(&config, args.safe_mode));
    log::debug!("compiling with {:?}", compiler.state());

    let markdown = read_input(args.input.as_deref())?;
    let html = compiler.compile(&markdown);

    match &args.output {
        Some(path) => {
            let path = Config::expand_path(path);
            write_output(&path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}").context("failed to write stdout")?;
        }
    }
    Ok(())
}
