use clap::{Parser, Subcommand};
use folio_carousel::{config, data, generate, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "folio-carousel")]
#[command(about = "Render a portfolio Work section: image carousel plus enlarged-image modal")]
#[command(long_about = "\
Render a portfolio Work section: image carousel plus enlarged-image modal

Banners come from a TOML data file with two index-aligned lists:

  title = \"Work\"                                  # optional
  thumbnails = [\"work/01.png\", \"work/02.png\"]     # shown in the carousel
  enlarged = [\"work/01-large.png\", \"work/02-large.png\"]   # shown in the modal
  captions = [\"Brand refresh\", \"*Annual* report\"]  # optional, Markdown

Both lists must be non-empty and the same length. Image references are
written into the page as-is.

A config.toml next to the data file (or in --config) overrides sizes and
colors. Run 'folio-carousel gen-config' to print a documented one.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the Work page into an output directory
    Build {
        /// Banner data file
        #[arg(long, default_value = "banners.toml")]
        data: PathBuf,
        /// Output directory
        #[arg(long, default_value = "dist")]
        output: PathBuf,
        /// Directory holding config.toml (defaults to the data file's directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate a banner data file and list its banners
    Check {
        /// Banner data file
        #[arg(long, default_value = "banners.toml")]
        data: PathBuf,
        /// Print the inventory as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            data: data_path,
            output: output_dir,
            config: config_dir,
        } => {
            println!("==> Rendering {}", data_path.display());
            let report = generate::generate(&data_path, config_dir.as_deref(), &output_dir)?;
            output::print_generate_output(&report);
        }
        Command::Check {
            data: data_path,
            json,
        } => {
            let work = data::load_banners(&data_path)?;
            if json {
                println!("{}", output::format_check_json(&work)?);
            } else {
                output::print_check_output(&work);
                println!("==> Banners are valid");
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
