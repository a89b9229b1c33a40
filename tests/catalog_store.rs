use std::collections::HashSet;
use std::fs;

use cinema_tickets::{
    CatalogPaths, CatalogStore, EditOutcome, Movie, ReturnOutcome, SaleOutcome, ShowtimeKey,
    Ticket,
};
use tempfile::TempDir;

fn seed(dir: &TempDir, movies: &str, showtimes: &str, tickets: &str) -> CatalogPaths {
    let paths = CatalogPaths::in_dir(dir.path());
    fs::write(&paths.movies, movies).unwrap();
    fs::write(&paths.showtimes, showtimes).unwrap();
    fs::write(&paths.sold_tickets, tickets).unwrap();
    paths
}

#[test]
fn sell_first_seat_updates_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let paths = seed(&temp_dir, "1,Inception,148\n", "1,16:00\n", "");
    let mut store = CatalogStore::open(paths.clone()).unwrap();
    let key = ShowtimeKey::new(1, "16:00");

    let outcome = store.sell_ticket(&key, "A1").unwrap();
    assert!(matches!(outcome, SaleOutcome::Sold(_)));

    assert_eq!(fs::read_to_string(&paths.showtimes).unwrap(), "1,16:00,A1\n");
    assert_eq!(fs::read_to_string(&paths.sold_tickets).unwrap(), "1,16:00,A1\n");

    let seats = store.available_seats(&key).unwrap();
    assert_eq!(seats.len(), 49);
    assert!(!seats.contains(&"A1".to_string()));
}

#[test]
fn rejected_sale_does_not_touch_files() {
    let temp_dir = TempDir::new().unwrap();
    let paths = seed(&temp_dir, "1,Inception,148\n", "1,16:00,B3\n", "1,16:00,B3\n");
    let mut store = CatalogStore::open(paths.clone()).unwrap();
    fs::write(&paths.showtimes, "sentinel").unwrap();
    fs::write(&paths.sold_tickets, "sentinel").unwrap();

    let outcome = store.sell_ticket(&ShowtimeKey::new(1, "16:00"), "B3").unwrap();
    assert_eq!(outcome, SaleOutcome::SeatTaken);
    assert_eq!(fs::read_to_string(&paths.showtimes).unwrap(), "sentinel");
    assert_eq!(fs::read_to_string(&paths.sold_tickets).unwrap(), "sentinel");
}

#[test]
fn sell_and_return_survive_reload() {
    let temp_dir = TempDir::new().unwrap();
    let paths = seed(&temp_dir, "1,Inception,148\n", "1,16:00\n1,19:00\n", "");
    let key = ShowtimeKey::new(1, "19:00");

    let mut store = CatalogStore::open(paths.clone()).unwrap();
    store.sell_ticket(&key, "C4").unwrap();
    store.sell_ticket(&key, "C5").unwrap();
    drop(store);

    let mut store = CatalogStore::open(paths.clone()).unwrap();
    assert_eq!(store.showtime(&key).unwrap().seats, vec!["C4", "C5"]);

    let ticket = Ticket::new(key.clone(), "C4");
    assert_eq!(store.return_ticket(&ticket).unwrap(), ReturnOutcome::Returned);
    assert_eq!(store.return_ticket(&ticket).unwrap(), ReturnOutcome::NotFound);
    drop(store);

    let store = CatalogStore::open(paths).unwrap();
    assert_eq!(store.showtime(&key).unwrap().seats, vec!["C5"]);
    assert_eq!(store.sold_tickets(), &[Ticket::new(key, "C5")]);
}

#[test]
fn every_file_round_trips() {
    let temp_dir = TempDir::new().unwrap();
    let movies = "1,Inception,148\n2,Heat,170\n";
    let showtimes = "2,20:00,E10,A1\n1,16:00\n1,16:00,D2\n";
    let tickets = "2,20:00,E10\n2,20:00,A1\n";
    let paths = seed(&temp_dir, movies, showtimes, tickets);

    let mut store = CatalogStore::open(paths.clone()).unwrap();
    let before = (
        store.movies().to_vec(),
        store.showtimes().to_vec(),
        store.sold_tickets().to_vec(),
    );

    // Net no-op mutations that still rewrite every file.
    store.mark_seats_taken(&ShowtimeKey::new(2, "20:00"), &["E10"]).unwrap();
    store.edit_movie(Movie::new(1, "Inception", 148)).unwrap();
    let key = ShowtimeKey::new(1, "16:00");
    store.sell_ticket(&key, "B2").unwrap();
    store.return_ticket(&Ticket::new(key, "B2")).unwrap();

    assert_eq!(fs::read_to_string(&paths.movies).unwrap(), movies);
    assert_eq!(fs::read_to_string(&paths.showtimes).unwrap(), showtimes);
    assert_eq!(fs::read_to_string(&paths.sold_tickets).unwrap(), tickets);

    let reloaded = CatalogStore::open(paths).unwrap();
    assert_eq!(reloaded.movies(), before.0.as_slice());
    assert_eq!(reloaded.showtimes(), before.1.as_slice());
    assert_eq!(reloaded.sold_tickets(), before.2.as_slice());
}

#[test]
fn available_seats_are_unique_grid_labels() {
    let temp_dir = TempDir::new().unwrap();
    let paths = seed(&temp_dir, "", "1,16:00,A1,B10,E5,X1\n", "");
    let store = CatalogStore::open(paths).unwrap();

    let seats = store.available_seats(&ShowtimeKey::new(1, "16:00")).unwrap();
    assert_eq!(seats.len(), 47);

    let unique: HashSet<&str> = seats.iter().map(String::as_str).collect();
    assert_eq!(unique.len(), seats.len());
    for seat in &seats {
        let (row, number) = seat.split_at(1);
        assert!(("A"..="E").contains(&row), "bad row in {seat}");
        let number: u32 = number.parse().unwrap();
        assert!((1..=10).contains(&number), "bad number in {seat}");
    }
    for taken in ["A1", "B10", "E5"] {
        assert!(!unique.contains(taken));
    }
}

#[test]
fn edit_showtime_by_key_keeps_other_records() {
    let temp_dir = TempDir::new().unwrap();
    let paths = seed(&temp_dir, "1,Inception,148\n", "1,16:00,A1\n1,20:00,B1\n", "");
    let mut store = CatalogStore::open(paths.clone()).unwrap();

    let edited = cinema_tickets::Showtime::new(1, "20:00").with_seats(["B1", "B2"]);
    assert_eq!(store.edit_showtime(edited).unwrap(), EditOutcome::Updated);
    assert_eq!(
        fs::read_to_string(&paths.showtimes).unwrap(),
        "1,16:00,A1\n1,20:00,B1,B2\n"
    );
}
