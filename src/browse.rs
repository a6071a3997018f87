//! Line-oriented interactive shell over one session.
//!
//! Input is read a whole line at a time, so partial search text never
//! triggers a recompute and the last submitted query is always applied.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::error::AppError;
use crate::filter::ALL;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    Genre(Option<String>),
    Platform(Option<String>),
    FavoritesOnly,
    ToggleFavorite(i64),
    Show(i64),
    Featured,
    Facets,
    List,
    Reset,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellCommand, AppError> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    // Search text is kept verbatim after the single separator.
    let (word, raw) = match line.split_once(char::is_whitespace) {
        Some((word, raw)) => (word, raw),
        None => (line.trim_end(), ""),
    };
    let rest = raw.trim();

    let cmd = match word {
        "" | "list" | "ls" => ShellCommand::List,
        "search" | "s" => ShellCommand::Search(raw.to_string()),
        "genre" => ShellCommand::Genre(facet_arg(rest)),
        "platform" => ShellCommand::Platform(facet_arg(rest)),
        "favorites" => ShellCommand::FavoritesOnly,
        "fav" => ShellCommand::ToggleFavorite(id_arg(rest)?),
        "show" => ShellCommand::Show(id_arg(rest)?),
        "featured" => ShellCommand::Featured,
        "facets" => ShellCommand::Facets,
        "reset" => ShellCommand::Reset,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => {
            return Err(AppError::InvalidArgument(format!(
                "unknown command '{other}', try 'help'"
            )));
        }
    };
    Ok(cmd)
}

fn facet_arg(rest: &str) -> Option<String> {
    if rest.is_empty() || rest == ALL {
        None
    } else {
        Some(rest.to_string())
    }
}

fn id_arg(rest: &str) -> Result<i64, AppError> {
    rest.parse::<i64>()
        .map_err(|_| AppError::InvalidArgument(format!("invalid game id '{rest}'")))
}

const HELP: &str = "\
commands:
  list                      show games matching the current filters
  search <text>             filter by title (empty clears)
  genre <name|All>          filter by genre
  platform <name|All>       filter by platform
  favorites                 toggle favorites-only view
  fav <id>                  toggle a game as favorite
  show <id>                 game details and links
  featured                  featured games
  facets                    genre and platform options
  reset                     clear all filters
  quit";

pub async fn run(session: &mut Session) -> Result<(), AppError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    crate::print_cards_human(&session.cards(&session.visible()), session.catalog());

    loop {
        stdout.write_all(prompt(session).as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        if !apply(session, cmd) {
            break;
        }
    }

    Ok(())
}

fn prompt(session: &Session) -> String {
    let criteria = session.criteria();
    let mut parts = Vec::new();
    if !criteria.query.is_empty() {
        parts.push(format!("q={}", criteria.query));
    }
    if let Some(genre) = criteria.genre_filter() {
        parts.push(format!("genre={genre}"));
    }
    if let Some(platform) = criteria.platform_filter() {
        parts.push(format!("platform={platform}"));
    }
    if criteria.favorites_only {
        parts.push("favorites".to_string());
    }
    if parts.is_empty() {
        "freegames> ".to_string()
    } else {
        format!("freegames [{}]> ", parts.join(" "))
    }
}

/// Returns `false` when the shell should exit.
fn apply(session: &mut Session, cmd: ShellCommand) -> bool {
    let relist = match cmd {
        ShellCommand::Quit => return false,
        ShellCommand::Help => {
            println!("{HELP}");
            false
        }
        ShellCommand::Featured => {
            crate::print_featured_human(session.catalog().featured());
            false
        }
        ShellCommand::Facets => {
            crate::print_facets_human(&session.catalog().facets());
            false
        }
        ShellCommand::Show(id) => {
            match session.catalog().find(id) {
                Some(game) => crate::print_game_human(game, session.is_favorite(id)),
                None => eprintln!("game {id} is not in the catalog"),
            }
            false
        }
        ShellCommand::ToggleFavorite(id) => {
            match session.toggle_favorite(id) {
                Ok(true) => println!("added {id} to favorites"),
                Ok(false) => println!("removed {id} from favorites"),
                Err(err) => eprintln!("{err}"),
            }
            session.criteria().favorites_only
        }
        ShellCommand::List => true,
        ShellCommand::Search(query) => {
            session.set_query(query);
            true
        }
        ShellCommand::Genre(genre) => {
            session.set_genre(genre);
            true
        }
        ShellCommand::Platform(platform) => {
            session.set_platform(platform);
            true
        }
        ShellCommand::FavoritesOnly => {
            let next = !session.criteria().favorites_only;
            session.set_favorites_only(next);
            true
        }
        ShellCommand::Reset => {
            session.reset_criteria();
            true
        }
    };

    if relist {
        crate::print_cards_human(&session.cards(&session.visible()), session.catalog());
    }
    true
}
