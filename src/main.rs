use anyhow::{anyhow, Context, Result};
use clap::{crate_version, App, AppSettings, Arg, ArgMatches, SubCommand};
use quire::SiteConfig;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path_arg = Arg::with_name("PATH")
        .help("Configuration file, or a directory to search upwards from")
        .default_value(".")
        .index(1);

    let matches = App::new("quire")
        .version(crate_version!())
        .about("Checks and prints static blog site configuration")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("check")
                .about("Loads and validates the configuration")
                .arg(path_arg.clone()),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Prints the normalized configuration")
                .arg(path_arg.clone())
                .arg(
                    Arg::with_name("key")
                        .long("key")
                        .short("k")
                        .takes_value(true)
                        .help("Only print this top-level key (e.g. postsPerPage)"),
                ),
        )
        .subcommand(
            SubCommand::with_name("links")
                .about("Prints the absolute URL of each menu entry")
                .arg(path_arg),
        )
        .get_matches();

    match matches.subcommand() {
        ("check", Some(m)) => {
            let config = load(m)?;
            println!("ok: {}", config.title());
            Ok(())
        }
        ("show", Some(m)) => show(&load(m)?, m.value_of("key")),
        ("links", Some(m)) => {
            let config = load(m)?;
            for (entry, url) in config.menu_urls()? {
                println!("{}\t{}", entry.label, url);
            }
            Ok(())
        }
        _ => Err(anyhow!("Unknown subcommand")),
    }
}

fn load(matches: &ArgMatches) -> Result<SiteConfig> {
    let path = Path::new(matches.value_of("PATH").unwrap_or("."));
    let config = match path.is_dir() {
        true => SiteConfig::from_directory(path),
        false => SiteConfig::from_file(path),
    };
    config.with_context(|| format!("Loading configuration from `{}`", path.display()))
}

fn show(config: &SiteConfig, key: Option<&str>) -> Result<()> {
    match key {
        None => println!("{}", config.to_yaml()?),
        Some(key) => {
            let value = serde_yaml::to_value(config)?;
            match value.get(key) {
                Some(field) => println!("{}", serde_yaml::to_string(field)?),
                None => return Err(anyhow!("No such configuration key: `{}`", key)),
            }
        }
    }
    Ok(())
}
