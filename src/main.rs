use clap::{Parser, Subcommand};
use sitemap_gen::{config, generate, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitemap-gen")]
#[command(about = "Generate an XML sitemap from a PHP website's file tree")]
#[command(long_about = "\
Generate an XML sitemap from a PHP website's file tree

Every .php file under the site root becomes a <url> entry, unless its path
(without .php) appears in robots.txt or contains \"elms\".

  site/
  ├── robots.txt                 # Required; raw-text exclusion list
  ├── index.php                  # → <base_url>/            priority 1.00
  ├── about.php                  # → <base_url>/about       priority 0.75
  ├── lifts/
  │   ├── index.php              # → <base_url>/lifts/      priority 0.70
  │   └── stair.php              # → <base_url>/lifts/stair priority 0.80
  └── blog/
      └── 2020/post.php          # → old archive page       priority 0.30

Run with no arguments to write sitemap.xml for the current directory.
Run 'sitemap-gen gen-config' to generate a documented sitemap.toml.")]
#[command(version)]
struct Cli {
    /// Site root to scan (overrides site_root in the config file)
    #[arg(long, global = true)]
    site: Option<PathBuf>,

    /// Sitemap file to write (overrides output in the config file)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// URL prefixed to every location (overrides base_url in the config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the sitemap (default)
    Generate,
    /// List the pages that would be written, without writing anything
    Check {
        /// Print the entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a stock sitemap.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let overrides = config::ConfigOverrides {
        base_url: cli.base_url,
        site_root: cli.site,
        output: cli.output,
    };

    match cli.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let config = config::load_config(&cli.config, overrides)?;
            println!("==> Scanning {}", config.site_root.display());
            let report = generate::generate(&config, generate::current_year())?;
            output::print_generate_output(&report);
        }
        Command::Check { json } => {
            let config = config::load_config(&cli.config, overrides)?;
            let urls = generate::collect(&config, generate::current_year())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&urls)?);
            } else {
                println!("==> Checking {}", config.site_root.display());
                output::print_check_output(&urls);
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
