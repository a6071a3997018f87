mod browse;
mod catalog;
mod cli;
mod config;
mod error;
mod favorites;
mod filter;
mod freetogame;
mod models;
mod output;
mod session;
mod store;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::cli::{Cli, Commands, FavoritesSubcommands, ListArgs, OutputFormat, ShowArgs};
use crate::config::ApiConfig;
use crate::error::AppError;
use crate::filter::ALL;
use crate::models::{DataSource, Facets, Game, GameCard};
use crate::output::{print_error, print_success};
use crate::session::Session;
use crate::store::LocalStore;

#[derive(Debug, Serialize)]
struct ListData {
    criteria: filter::FilterCriteria,
    total: usize,
    items: Vec<GameCard>,
}

#[derive(Debug, Serialize)]
struct FeaturedData {
    items: Vec<Game>,
}

#[derive(Debug, Serialize)]
struct FacetsData {
    wildcard: &'static str,
    #[serde(flatten)]
    facets: Facets,
}

#[derive(Debug, Serialize)]
struct GameData {
    game: Game,
    favorite: bool,
}

#[derive(Debug, Serialize)]
struct FavoritesData {
    ids: Vec<i64>,
}

#[derive(Debug, Serialize)]
struct ToggleData {
    id: i64,
    favorite: bool,
    ids: Vec<i64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let format = cli.resolved_format();

    let result = run(cli, format).await;
    if let Err(err) = result {
        print_error(format, err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli, format: OutputFormat) -> Result<(), AppError> {
    let store = LocalStore::open()?;
    let mut session = Session::open(store)?;

    match cli.command {
        Commands::List(args) => {
            load_catalog(format, &mut session).await;
            handle_list(format, &mut session, args)
        }
        Commands::Featured => {
            load_catalog(format, &mut session).await;
            handle_featured(format, &session)
        }
        Commands::Facets => {
            load_catalog(format, &mut session).await;
            handle_facets(format, &session)
        }
        Commands::Show(args) => {
            load_catalog(format, &mut session).await;
            handle_show(format, &session, args)
        }
        Commands::Browse => {
            load_catalog(format, &mut session).await;
            browse::run(&mut session).await
        }
        Commands::Favorites(cmd) => match cmd.action {
            FavoritesSubcommands::List => handle_favorites_list(format, &session),
            FavoritesSubcommands::Toggle(args) => {
                handle_favorites_toggle(format, &mut session, args)
            }
        },
    }
}

/// Load failures, a missing API key included, are logged by the catalog
/// and leave it empty.
async fn load_catalog(format: OutputFormat, session: &mut Session) {
    if matches!(format, OutputFormat::Human) {
        eprintln!("Loading games...");
    }
    session.load(ApiConfig::from_env()).await;
}

fn handle_list(format: OutputFormat, session: &mut Session, args: ListArgs) -> Result<(), AppError> {
    session.set_criteria(args.criteria());

    let visible = session.visible();
    let data = ListData {
        criteria: session.criteria().clone(),
        total: session.catalog().games().len(),
        items: session.cards(&visible),
    };

    print_success(format, data, DataSource::FreeToGame, |d| {
        print_cards_human(&d.items, session.catalog())
    });
    Ok(())
}

fn handle_featured(format: OutputFormat, session: &Session) -> Result<(), AppError> {
    let data = FeaturedData {
        items: session.catalog().featured().to_vec(),
    };

    print_success(format, data, DataSource::FreeToGame, |d| {
        print_featured_human(&d.items)
    });
    Ok(())
}

fn handle_facets(format: OutputFormat, session: &Session) -> Result<(), AppError> {
    let data = FacetsData {
        wildcard: ALL,
        facets: session.catalog().facets(),
    };

    print_success(format, data, DataSource::FreeToGame, |d| {
        print_facets_human(&d.facets)
    });
    Ok(())
}

fn handle_show(format: OutputFormat, session: &Session, args: ShowArgs) -> Result<(), AppError> {
    let game = session
        .catalog()
        .find(args.id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("game {} not in catalog", args.id)))?;

    let data = GameData {
        favorite: session.is_favorite(game.id),
        game,
    };

    print_success(format, data, DataSource::FreeToGame, |d| {
        print_game_human(&d.game, d.favorite)
    });
    Ok(())
}

fn handle_favorites_list(format: OutputFormat, session: &Session) -> Result<(), AppError> {
    let data = FavoritesData {
        ids: session.favorites().ids().to_vec(),
    };

    print_success(format, data, DataSource::LocalDb, |d| {
        println!("favorites ({})", d.ids.len());
        for id in &d.ids {
            println!("{id}");
        }
    });
    Ok(())
}

fn handle_favorites_toggle(
    format: OutputFormat,
    session: &mut Session,
    args: ShowArgs,
) -> Result<(), AppError> {
    let favorite = session.toggle_favorite(args.id)?;
    let data = ToggleData {
        id: args.id,
        favorite,
        ids: session.favorites().ids().to_vec(),
    };

    print_success(format, data, DataSource::LocalDb, |d| {
        if d.favorite {
            println!("added {} to favorites ({} total)", d.id, d.ids.len());
        } else {
            println!("removed {} from favorites ({} total)", d.id, d.ids.len());
        }
    });
    Ok(())
}

fn print_cards_human(cards: &[GameCard], catalog: &Catalog) {
    if cards.is_empty() && catalog.is_empty() {
        println!("No game found!");
        return;
    }

    println!("games ({} of {})", cards.len(), catalog.games().len());
    for card in cards {
        let mark = if card.favorite { "*" } else { " " };
        println!("{mark} {}\t{}\t{}\t{}", card.id, card.title, card.genre, card.platform);
    }
}

fn print_featured_human(games: &[Game]) {
    println!("featured ({})", games.len());
    for (i, game) in games.iter().enumerate() {
        println!("[{}] {} ({})", i + 1, game.title, game.id);
        if !game.short_description.is_empty() {
            println!("    {}", game.short_description);
        }
    }
}

fn print_facets_human(facets: &Facets) {
    println!("genres ({})", facets.genres.len());
    println!("  {ALL}");
    for genre in &facets.genres {
        println!("  {genre}");
    }
    println!("platforms ({})", facets.platforms.len());
    println!("  {ALL}");
    for platform in &facets.platforms {
        println!("  {platform}");
    }
}

fn print_game_human(game: &Game, favorite: bool) {
    let star = if favorite { " *" } else { "" };
    println!("{} ({}){}", game.title, game.id, star);
    if !game.short_description.is_empty() {
        println!("{}", game.short_description);
    }
    println!("developer: {}", game.developer);
    println!("publisher: {}", game.publisher);
    println!("release date: {}", game.release_date);
    println!("genre: {}", game.genre);
    println!("platform: {}", game.platform);
    println!("profile: {}", game.freetogame_profile_url);
    println!("play: {}", game.game_url);
}
