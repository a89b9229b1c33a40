use anyhow::Context;
use cinema_tickets::{
    display_available_seats, CatalogStore, Movie, Showtime, ShowtimeKey, StoreConfig,
};
use tracing::error;

const CONFIG_FILE: &str = "cinema.json";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match StoreConfig::load(CONFIG_FILE) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            println!("Что-то произошло!");
            return;
        }
    };

    let mut store = match CatalogStore::open(config.paths()) {
        Ok(store) => store,
        Err(e) => {
            error!("{}", e);
            println!("{}", e.user_message());
            std::process::exit(0);
        }
    };

    if let Err(e) = run(&mut store) {
        error!("{:#}", e);
        println!("Что-то произошло!");
    }
}

fn run(store: &mut CatalogStore) -> anyhow::Result<()> {
    let selected: ShowtimeKey = store
        .showtimes()
        .first()
        .map(Showtime::key)
        .context("no showtimes loaded")?;
    let selected_seat = "A1";

    let outcome = store.sell_ticket(&selected, selected_seat)?;
    println!("{}", outcome.message());

    let to_return = store
        .sold_tickets()
        .first()
        .cloned()
        .context("no sold tickets")?;
    let outcome = store.return_ticket(&to_return)?;
    println!("{}", outcome.message());

    let seats = store
        .available_seats(&selected)
        .context("selected showtime disappeared")?;
    println!("{}", display_available_seats(&selected, &seats));

    let outcome = store.edit_movie(Movie::new(1, "Новое название фильма", 120))?;
    println!("{}", outcome.movie_message());

    let edited = Showtime::new(1, "16:00").with_seats(["A2", "A3"]);
    let outcome = store.edit_showtime(edited)?;
    println!("{}", outcome.showtime_message());

    let outcome = store.mark_seats_taken(&selected, &["A4", "A5"])?;
    println!("{}", outcome.message());

    Ok(())
}
