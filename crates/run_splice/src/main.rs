use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;

use run_splice::logging::init_tracing;
use run_splice::{run, AppConfig};
use splice_recipes::{BUILTIN_RECIPES, DEFAULT_RECIPE};

fn main() -> Result<()> {
    let matches = Command::new("run_splice")
        .version("0.1.0")
        .about("Cuts a marker-bounded region out of a file using a built-in recipe")
        .arg(
            Arg::new("recipe")
                .help("Name of the built-in recipe to run")
                .default_value(DEFAULT_RECIPE),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .help("List the built-in recipes and exit")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the spliced document instead of writing it")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("excised_output")
                .long("excised-output")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Also write the excised region to this path"),
        )
        .arg(
            Arg::new("allow_missing_markers")
                .long("allow-missing-markers")
                .help("Splice at the sentinel offset instead of failing when a marker is absent")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list") {
        for recipe in BUILTIN_RECIPES {
            println!("{}: {}", recipe.name, recipe.description);
            println!("    {} -> {}", recipe.source, recipe.target);
        }
        return Ok(());
    }

    let recipe_name = matches
        .get_one::<String>("recipe")
        .map(String::as_str)
        .unwrap_or(DEFAULT_RECIPE);
    let config = AppConfig::from_recipe_name(recipe_name)?
        .allow_missing_markers(matches.get_flag("allow_missing_markers"))
        .with_excised_target(matches.get_one::<PathBuf>("excised_output").cloned())
        .dry_run(matches.get_flag("dry_run"))
        .verbose(matches.get_flag("verbose"));
    init_tracing(config.verbose);

    let spliced = run(&config)?;

    if config.dry_run {
        print!("{}", spliced.output);
        return Ok(());
    }

    println!("--------------------------------------------------");
    println!("Recipe: {}", config.recipe.name);
    println!(
        "Spliced {} -> {}",
        config.source.display(),
        config.target.display()
    );
    println!("Excised {} bytes", spliced.excised.len());
    if let Some(excised_target) = &config.excised_target {
        println!("Excised region written to {}", excised_target.display());
    }
    println!("--------------------------------------------------");

    Ok(())
}
