//! Command-line interface implementation for skelgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

const ABOUT: &str = "Generates directories, files and contents based on a 'skeleton' structure. \
All values in the form of ${x} are substituted, in directory/file names, but also in content \
of files. The values for these variables are requested on the standard input when a correct \
skeleton input is specified.";

/// Command-line arguments structure for skelgen.
#[derive(Parser, Debug)]
#[command(author, version, about = ABOUT, long_about = None)]
pub struct Args {
    /// Path to the skeleton directory or zip archive
    #[arg(value_name = "SKELETON")]
    pub skeleton: PathBuf,

    /// Directory where the generated structure will be created
    #[arg(short, long, value_name = "OUTPUT_DIR", default_value = "./__out")]
    pub output_dir: PathBuf,

    /// Initiate a dry run (i.e. do not create files/dirs)
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write directly into the output directory instead of a uniquely
    /// named per-run sub-directory
    #[arg(long)]
    pub flat: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if no skeleton input is specified
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                eprintln!("No skeleton specified.\n");
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
