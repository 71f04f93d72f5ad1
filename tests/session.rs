use std::io::Cursor;
use std::path::{Path, PathBuf};

use frontdesk::engine::Engine;
use frontdesk::menu::Menu;
use frontdesk::model::{ReservationStatus, Room};
use frontdesk::payment::MockGateway;
use frontdesk::store::CsvStore;

// ── Test infrastructure ──────────────────────────────────────

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("frontdesk_int_tests").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room { id: 1, number: "101".into(), category: "Standard".into(), price: 60.0 },
        Room { id: 2, number: "201".into(), category: "Deluxe".into(), price: 100.0 },
        Room { id: 3, number: "301".into(), category: "Suite".into(), price: 150.0 },
    ]
}

/// Bring up a menu over `dir` the way the binary does: a store-backed
/// engine with the default gateway, seeding the inventory on first run.
fn open_menu(dir: &Path) -> Menu {
    let store = CsvStore::new(dir);
    let mut rooms = store.load_rooms().unwrap();
    if rooms.is_empty() {
        rooms = seed_rooms();
        store.save_rooms(&rooms).unwrap();
    }
    let reservations = store.load_reservations().unwrap();

    let mut engine = Engine::new(Box::new(MockGateway::default()));
    engine.load_rooms(rooms);
    engine.load_reservations(reservations);
    Menu::new(engine, store)
}

/// Feed one line per prompt to a fresh session and return everything it
/// printed.
fn run_session(dir: &Path, script: &[&str]) -> String {
    let mut input = Cursor::new(script.join("\n") + "\n");
    let mut out = Vec::new();
    open_menu(dir).run(&mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ── Tests ────────────────────────────────────────────────────

#[test]
fn booking_session_end_to_end() {
    let dir = test_dir("booking_session");
    let out = run_session(
        &dir,
        &[
            "1", "", // search, blank category
            "2", "1", "Alice", "2024-01-01", "2024-01-03", "4242", // book
            "5", // list
            "4", "1", // view
            "0",
        ],
    );

    assert!(out.contains("1 | Room 101 | Standard | $60"), "search output: {out}");
    assert!(out.contains("3 | Room 301 | Suite | $150"));
    assert!(out.contains("Reservation confirmed. ID=1"));
    assert!(out.contains("Total=$120"));
    assert!(out.contains("[1] Alice - 101 2024-01-01->2024-01-03 $120 PAID"));
    assert!(out.contains(
        "Reservation 1 Guest=Alice Room=101 (Standard) 2024-01-01->2024-01-03 $120 Status=PAID Ref=PAY-"
    ));

    let saved = CsvStore::new(&dir).load_reservations().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, 1);
    assert_eq!(saved[0].room_id, 1);
    assert_eq!(saved[0].guest, "Alice");
    assert_eq!(saved[0].total, 120.0);
    assert_eq!(saved[0].status, ReservationStatus::Paid);
    assert!(saved[0].payment_ref.starts_with("PAY-"));
}

#[test]
fn double_booking_rejected_in_session() {
    let dir = test_dir("double_booking");
    let out = run_session(
        &dir,
        &[
            "2", "1", "Alice", "2024-01-01", "2024-01-03", "4242",
            "2", "1", "Bob", "2024-01-02", "2024-01-04", "4242",
            "2", "1", "Carol", "2024-01-03", "2024-01-05", "4242", // shared boundary day
            "0",
        ],
    );

    assert_eq!(out.matches("Reservation confirmed.").count(), 1);
    assert_eq!(out.matches("Room not available!").count(), 2);

    let saved = CsvStore::new(&dir).load_reservations().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].guest, "Alice");
}

#[test]
fn declined_payment_persists_nothing() {
    let dir = test_dir("declined_payment");
    // Default gateway declines card numbers ending in an odd digit.
    let out = run_session(
        &dir,
        &["2", "1", "Alice", "2024-01-01", "2024-01-03", "4241", "0"],
    );

    assert!(out.contains("Payment failed!"));
    assert!(!out.contains("Reservation confirmed."));
    assert!(!dir.join("reservations.csv").exists());
}

#[test]
fn unknown_room_reported() {
    let dir = test_dir("unknown_room");
    let out = run_session(
        &dir,
        &["2", "42", "Alice", "2024-01-01", "2024-01-03", "4242", "0"],
    );
    assert!(out.contains("Room not found."));
    assert!(!dir.join("reservations.csv").exists());
}

#[test]
fn reversed_dates_reported() {
    let dir = test_dir("reversed_dates");
    let out = run_session(
        &dir,
        &["2", "1", "Alice", "2024-01-05", "2024-01-01", "4242", "0"],
    );
    assert!(out.contains("Invalid dates: check-out 2024-01-01 precedes check-in 2024-01-05."));
    assert!(!dir.join("reservations.csv").exists());
}

#[test]
fn state_survives_sessions() {
    let dir = test_dir("state_survives");

    run_session(
        &dir,
        &[
            "2", "1", "Alice", "2024-01-01", "2024-01-03", "4242",
            "2", "2", "Bob", "2024-02-01", "2024-02-03", "4242",
            "0",
        ],
    );

    let out_cancel = run_session(&dir, &["3", "1", "0"]);
    assert!(out_cancel.contains("Cancelled."));

    // The next session sees only Bob, and new ids continue past the
    // highest stored id rather than refilling the gap. Viewing Bob joins
    // his room from the reloaded inventory.
    let out_next = run_session(
        &dir,
        &["5", "2", "1", "Carol", "2024-01-01", "2024-01-02", "4242", "4", "2", "0"],
    );
    assert!(out_next.contains("[2] Bob - 201 2024-02-01->2024-02-03 $200 PAID"));
    assert!(!out_next.contains("Alice"));
    assert!(out_next.contains("Reservation confirmed. ID=3"));
    assert!(out_next.contains(
        "Reservation 2 Guest=Bob Room=201 (Deluxe) 2024-02-01->2024-02-03 $200 Status=PAID Ref=PAY-"
    ));

    let saved = CsvStore::new(&dir).load_reservations().unwrap();
    let ids: Vec<u32> = saved.iter().map(|r| r.id).collect();
    assert_eq!(ids, [2, 3]);
}

#[test]
fn stored_reservations_block_new_sessions() {
    let dir = test_dir("stored_blocks");
    run_session(&dir, &["2", "3", "Alice", "2024-05-01", "2024-05-10", "4242", "0"]);

    let out = run_session(
        &dir,
        &["2", "3", "Bob", "2024-05-09", "2024-05-12", "4242", "0"],
    );
    assert!(out.contains("Room not available!"));
}

#[test]
fn first_run_seeds_and_persists_inventory() {
    let dir = test_dir("first_run_seeding");
    run_session(&dir, &["0"]);

    let rooms = CsvStore::new(&dir).load_rooms().unwrap();
    assert_eq!(rooms.len(), 3);
    assert_eq!(rooms[0].number, "101");
    assert_eq!(rooms[2].price, 150.0);
}

#[test]
fn invalid_input_is_reported_and_session_continues() {
    let dir = test_dir("invalid_input");
    let out = run_session(
        &dir,
        &[
            "7", // no such option
            "2", "abc", // unparseable room id abandons the booking
            "2", "1", "Alice", "not-a-date", // unparseable date likewise
            "4", "1", // nothing was booked
            "0",
        ],
    );

    assert!(out.contains("Invalid choice."));
    assert!(out.contains("Invalid room id."));
    assert!(out.contains("Invalid date."));
    assert!(out.contains("Not found."));
    assert!(!dir.join("reservations.csv").exists());
}

#[test]
fn view_and_cancel_unknown_ids() {
    let dir = test_dir("unknown_ids");
    let out = run_session(&dir, &["4", "9", "3", "9", "0"]);
    assert_eq!(out.matches("Not found.").count(), 2);
}

#[test]
fn end_of_input_ends_session_cleanly() {
    let dir = test_dir("eof_mid_booking");
    let mut input = Cursor::new(String::from("2\n1\nAlice\n"));
    let mut out = Vec::new();
    open_menu(&dir).run(&mut input, &mut out).unwrap();
    assert!(!dir.join("reservations.csv").exists());
}

#[test]
fn category_search_filters_in_session() {
    let dir = test_dir("category_search");
    let out = run_session(&dir, &["1", "deluxe", "0"]);
    assert!(out.contains("2 | Room 201 | Deluxe | $100"));
    assert!(!out.contains("Room 101"));
    assert!(!out.contains("Room 301"));
}
