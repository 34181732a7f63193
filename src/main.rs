//! Command-line shim around the reelscout core.
//!
//! Hosts the event-driven core in a one-shot CLI: each invocation builds the
//! application state, replays the events for the requested command, executes
//! the resulting actions (fetches run synchronously through the worker), and
//! prints the final state.

use reelscout::app::{handle_event, Action, AppState, Event, NoticeKind};
use reelscout::domain::{MovieDetails, ReelscoutError, Result};
use reelscout::infrastructure;
use reelscout::observability;
use reelscout::provider::TmdbClient;
use reelscout::query::SortKey;
use reelscout::storage::{JsonWatchlistStorage, Preferences, WatchlistStore};
use reelscout::worker::{FetchWorker, WorkerMessage};
use reelscout::Config;

const USAGE: &str = "\
Usage: reelscout <command> [options]

Commands:
  search <term>...                      Search movies by title
  discover [options]                    Browse movies with filters
      --genre <name>                    Filter by genre (repeatable)
      --from <year>                     Earliest release year
      --to <year>                       Latest release year
      --sort <key>                      popularity.desc | vote_average.desc |
                                        release_date.desc | release_date.asc
  details <id>                          Show full details for one movie
  watchlist [list]                      Show the saved watchlist
  watchlist add <id>                    Save a movie to the watchlist
  watchlist remove <id>                 Remove a movie from the watchlist
  watchlist clear                       Empty the watchlist
  theme [dark|light]                    Show or set the display theme

The TMDB API key is read from config.toml or the TMDB_API_KEY variable.";

/// The assembled application: core state plus its collaborators.
struct Cli {
    state: AppState,
    watchlist: WatchlistStore,
    worker: Option<FetchWorker>,
}

impl Cli {
    /// Builds the offline application: watchlist hydration, no provider.
    fn offline() -> Result<Self> {
        let storage = JsonWatchlistStorage::new(infrastructure::watchlist_file())?;
        Ok(Self {
            state: AppState::new(),
            watchlist: WatchlistStore::new(Box::new(storage)),
            worker: None,
        })
    }

    /// Builds the connected application and fetches the genre list once.
    ///
    /// A failed genre fetch degrades silently: genre names stay unresolvable
    /// but every other command works.
    fn connect(config: &Config) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or_else(|| {
            ReelscoutError::Config(
                "no TMDB API key; set api_key in config.toml or TMDB_API_KEY".to_string(),
            )
        })?;

        let mut client = TmdbClient::new(api_key);
        if let Some(base_url) = &config.base_url {
            client = client.with_base_url(base_url.clone());
        }
        if let Some(language) = &config.language {
            client = client.with_language(language.clone());
        }

        let mut cli = Self {
            worker: Some(FetchWorker::new(Box::new(client))),
            ..Self::offline()?
        };

        let response = cli
            .worker
            .as_ref()
            .map(|worker| worker.handle_message(WorkerMessage::FetchGenres));
        if let Some(response) = response {
            cli.dispatch(Event::WorkerResponse(response))?;
        }
        Ok(cli)
    }

    /// Runs one event through the core and executes the emitted actions.
    ///
    /// Worker posts execute synchronously and their responses feed straight
    /// back in as events, so by the time this returns the state is settled.
    fn dispatch(&mut self, event: Event) -> Result<()> {
        let (_, actions) = handle_event(&mut self.state, &mut self.watchlist, &event)?;
        for action in actions {
            match action {
                Action::PostToWorker(message) => {
                    let worker = self.worker.as_ref().ok_or_else(|| {
                        ReelscoutError::Config("this command requires network access".to_string())
                    })?;
                    let response = worker.handle_message(message);
                    self.dispatch(Event::WorkerResponse(response))?;
                }
                Action::Navigate(route) => {
                    tracing::debug!(?route, "navigation requested");
                }
                Action::Notify { kind, message } => match kind {
                    NoticeKind::Success => println!("+ {message}"),
                    NoticeKind::Error => println!("- {message}"),
                },
            }
        }
        Ok(())
    }

    fn print_listing(&self) {
        println!("{}", self.state.results_label());
        if let Some(error) = &self.state.error {
            println!("{error}");
            return;
        }
        let Some(movies) = &self.state.movies else {
            return;
        };
        if movies.is_empty() {
            println!("No movies found. Try adjusting your search or filters.");
            return;
        }
        for movie in movies {
            println!(
                "{:>8}  {:<40}  {}  {}",
                movie.id,
                movie.title,
                movie.release_label(),
                movie.rating_label()
            );
        }
    }
}

fn print_details(details: &MovieDetails) {
    println!("{} ({})", details.title, details.summary().release_label());
    let genres = details
        .genres
        .iter()
        .map(|genre| genre.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if !genres.is_empty() {
        println!("Genres: {genres}");
    }
    println!("Runtime: {}", details.runtime_label());
    println!("Rating: {}", details.summary().rating_label());
    if let Some(overview) = &details.overview {
        println!("\n{overview}");
    }
    if !details.cast.is_empty() {
        println!("\nCast:");
        for member in details.cast.iter().take(10) {
            println!("  {} as {}", member.name, member.character);
        }
    }
}

fn cmd_search(config: &Config, terms: &[String]) -> Result<()> {
    if terms.is_empty() {
        return Err(ReelscoutError::Config("search needs a term".to_string()));
    }
    let mut cli = Cli::connect(config)?;
    cli.dispatch(Event::SearchInput(terms.join(" ")))?;
    cli.print_listing();
    Ok(())
}

fn cmd_discover(config: &Config, args: &[String]) -> Result<()> {
    let mut cli = Cli::connect(config)?;

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let value = iter.next().ok_or_else(|| {
            ReelscoutError::Config(format!("{flag} needs a value"))
        })?;
        match flag.as_str() {
            "--genre" => match cli.state.find_genre(value).map(|genre| genre.id) {
                Some(genre_id) => cli.state.filters.toggle_genre(genre_id),
                None => eprintln!("unknown genre \"{value}\", ignoring"),
            },
            "--from" => cli.state.filters.start_year.clone_from(value),
            "--to" => cli.state.filters.end_year.clone_from(value),
            "--sort" => {
                cli.state.filters.sort_key = SortKey::from_param(value).ok_or_else(|| {
                    ReelscoutError::Config(format!("unknown sort key \"{value}\""))
                })?;
            }
            other => {
                return Err(ReelscoutError::Config(format!("unknown option {other}")));
            }
        }
    }

    cli.dispatch(Event::Retry)?;
    cli.print_listing();
    Ok(())
}

fn cmd_details(config: &Config, movie_id: u64) -> Result<()> {
    let mut cli = Cli::connect(config)?;
    cli.dispatch(Event::OpenMovie(movie_id))?;
    if let Some(error) = &cli.state.detail_error {
        println!("{error}");
    } else if let Some(details) = &cli.state.selected {
        print_details(details);
    }
    Ok(())
}

fn cmd_watchlist(config: &Config, args: &[String]) -> Result<()> {
    match args.first().map(String::as_str) {
        None | Some("list") => {
            let mut cli = Cli::offline()?;
            cli.dispatch(Event::OpenWatchlist)?;
            if cli.watchlist.is_empty() {
                println!("Your watchlist is empty.");
                return Ok(());
            }
            println!("Watchlist ({} movies)", cli.watchlist.len());
            for movie in cli.watchlist.entries() {
                println!(
                    "{:>8}  {:<40}  {}  {}",
                    movie.id,
                    movie.title,
                    movie.release_label(),
                    movie.rating_label()
                );
            }
            Ok(())
        }
        Some("add") => {
            let movie_id = parse_id(args.get(1))?;
            let mut cli = Cli::connect(config)?;
            cli.dispatch(Event::OpenMovie(movie_id))?;
            match cli.state.selected.take() {
                Some(details) => cli.dispatch(Event::ToggleWatchlist(details.summary())),
                None => Err(ReelscoutError::Provider(format!(
                    "movie {movie_id} could not be loaded"
                ))),
            }
        }
        Some("remove") => {
            let movie_id = parse_id(args.get(1))?;
            let mut cli = Cli::offline()?;
            cli.dispatch(Event::RemoveFromWatchlist(movie_id))
        }
        Some("clear") => {
            let mut cli = Cli::offline()?;
            cli.dispatch(Event::ClearWatchlist)
        }
        Some(other) => Err(ReelscoutError::Config(format!(
            "unknown watchlist command {other}"
        ))),
    }
}

fn cmd_theme(arg: Option<&String>) -> Result<()> {
    let path = infrastructure::preferences_file();
    let mut prefs = Preferences::load(&path);
    match arg.map(String::as_str) {
        None => {
            println!("Theme: {}", if prefs.dark_mode { "dark" } else { "light" });
            Ok(())
        }
        Some("dark") => {
            prefs.dark_mode = true;
            prefs.save(&path)?;
            println!("Theme set to dark");
            Ok(())
        }
        Some("light") => {
            prefs.dark_mode = false;
            prefs.save(&path)?;
            println!("Theme set to light");
            Ok(())
        }
        Some(other) => Err(ReelscoutError::Config(format!("unknown theme {other}"))),
    }
}

fn parse_id(arg: Option<&String>) -> Result<u64> {
    arg.ok_or_else(|| ReelscoutError::Config("expected a movie id".to_string()))?
        .parse()
        .map_err(|_| ReelscoutError::Config("movie id must be a number".to_string()))
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::load(&infrastructure::config_file())?;
    observability::init_tracing(&config);

    match args.first().map(String::as_str) {
        Some("search") => cmd_search(&config, &args[1..]),
        Some("discover") => cmd_discover(&config, &args[1..]),
        Some("details") => cmd_details(&config, parse_id(args.get(1))?),
        Some("watchlist") => cmd_watchlist(&config, &args[1..]),
        Some("theme") => cmd_theme(args.get(1)),
        _ => {
            println!("{USAGE}");
            Ok(())
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("reelscout: {error}");
        std::process::exit(1);
    }
}
