//! skelgen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, skeleton loading and
//! materialization flow, and coordinates interactions between modules.

use log::debug;

use skelgen::{
    cli::{get_args, Args},
    config::load_config,
    error::{default_error_handler, Result},
    ignore::{parse_skelignore_file, IGNORE_FILE},
    loader::SkeletonSource,
    processor::Processor,
    prompt::{collect_values, DialoguerPrompter},
    skeleton::Skeleton,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Arguments
/// * `args` - Parsed command line arguments
///
/// # Returns
/// * `Result<()>` - Success or error status of the run
///
/// # Flow
/// 1. Classifies the input as a loose directory or a zip archive
/// 2. Extracts archives into a scratch directory
/// 3. Loads the skeleton descriptor
/// 4. Prompts for a value per declared parameter
/// 5. Materializes the tree under the output directory
/// 6. Reports placeholders that were never substituted
/// 7. Removes the scratch directory, when one was created
fn run(args: Args) -> Result<()> {
    let source = SkeletonSource::from_path(&args.skeleton)?;
    println!("Opening skeleton from {}", source);

    if args.dry_run {
        println!("This run will not have any effect (dry-run)!");
    }

    let loaded = source.load()?;
    let config = load_config(loaded.root())?;

    println!();
    println!("{}", config.name);
    println!("{}\n", config.description);
    println!("{} configurable parameter(s) defined:", config.parameters.len());
    for parameter in &config.parameters {
        debug!("  ${{{}}}: {}", parameter.name, parameter.prompt);
    }

    let prompter = DialoguerPrompter::new();
    let values = collect_values(&prompter, &config.parameters)?;

    let ignored = parse_skelignore_file(loaded.root().join(IGNORE_FILE))?;

    let mut skeleton = Skeleton::new(
        loaded.root().to_path_buf(),
        config,
        args.output_dir,
        args.flat,
        args.dry_run,
    );
    skeleton.values = values;

    let mut processor = Processor::new(&skeleton, &ignored);
    processor.materialize();

    let unresolved = processor.into_unresolved();
    if !unresolved.is_empty() {
        println!("\nWarning: the following variables were left unsubstituted:\n");
        for placeholder in &unresolved {
            println!("\t{}", placeholder);
        }
    }

    // The walk is complete at this point; the scratch directory is no
    // longer read from and can be removed.
    loaded.cleanup();

    Ok(())
}
