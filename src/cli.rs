use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::filter::FilterCriteria;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "freegames-cli",
    version,
    about = "Browse the free-to-play games catalog from the terminal"
)]
pub struct Cli {
    #[arg(long, global = true, value_enum, default_value_t = OutputFormatArg::Human)]
    pub format: OutputFormatArg,
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List catalog games matching the given filters
    List(ListArgs),
    /// Show the featured games
    Featured,
    /// List the genre and platform options present in the catalog
    Facets,
    /// Show details and links for one game
    Show(ShowArgs),
    /// Manage locally stored favorites
    Favorites(FavoritesCommand),
    /// Interactive shell over a single loaded catalog
    Browse,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive title search
    #[arg(long, default_value = "")]
    pub search: String,
    /// Exact genre, or "All"
    #[arg(long)]
    pub genre: Option<String>,
    /// Exact platform, or "All"
    #[arg(long)]
    pub platform: Option<String>,
    /// Only show favorites
    #[arg(long, default_value_t = false)]
    pub favorites: bool,
}

impl ListArgs {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.search.clone(),
            genre: self.genre.clone(),
            platform: self.platform.clone(),
            favorites_only: self.favorites,
        }
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: i64,
}

#[derive(Debug, Subcommand)]
pub enum FavoritesSubcommands {
    List,
    Toggle(ShowArgs),
}

#[derive(Debug, Args)]
pub struct FavoritesCommand {
    #[command(subcommand)]
    pub action: FavoritesSubcommands,
}

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    pub fn resolved_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            match self.format {
                OutputFormatArg::Human => OutputFormat::Human,
                OutputFormatArg::Json => OutputFormat::Json,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_flags_become_criteria() {
        let cli = Cli::parse_from([
            "freegames-cli",
            "list",
            "--search",
            "cod",
            "--genre",
            "Shooter",
            "--favorites",
        ]);
        let Commands::List(args) = cli.command else {
            panic!("expected list command");
        };
        let criteria = args.criteria();
        assert_eq!(criteria.query, "cod");
        assert_eq!(criteria.genre.as_deref(), Some("Shooter"));
        assert_eq!(criteria.platform, None);
        assert!(criteria.favorites_only);
    }

    #[test]
    fn json_flag_overrides_format() {
        let cli = Cli::parse_from(["freegames-cli", "featured", "--json"]);
        assert!(matches!(cli.resolved_format(), OutputFormat::Json));

        let cli = Cli::parse_from(["freegames-cli", "facets"]);
        assert!(matches!(cli.resolved_format(), OutputFormat::Human));
    }

    #[test]
    fn favorites_toggle_takes_id() {
        let cli = Cli::parse_from(["freegames-cli", "favorites", "toggle", "540"]);
        let Commands::Favorites(cmd) = cli.command else {
            panic!("expected favorites command");
        };
        assert!(matches!(cmd.action, FavoritesSubcommands::Toggle(ShowArgs { id: 540 })));
    }
}
