use std::io;
use std::path::Path;

use tracing::info;

use frontdesk::engine::Engine;
use frontdesk::menu::Menu;
use frontdesk::model::Room;
use frontdesk::payment::MockGateway;
use frontdesk::store::CsvStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let data_dir = std::env::var("FRONTDESK_DATA_DIR").unwrap_or_else(|_| "./data".into());
    std::fs::create_dir_all(&data_dir)?;

    let store = CsvStore::new(Path::new(&data_dir));
    let mut rooms = store.load_rooms()?;
    if rooms.is_empty() {
        rooms = seed_rooms();
        store.save_rooms(&rooms)?;
        info!("seeded {} default rooms", rooms.len());
    }
    let reservations = store.load_reservations()?;

    let mut engine = Engine::new(Box::new(MockGateway::default()));
    engine.load_rooms(rooms);
    engine.load_reservations(reservations);

    info!("frontdesk starting");
    info!("  data_dir: {data_dir}");
    info!("  rooms: {}", engine.rooms().len());
    info!("  reservations: {}", engine.reservations().len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(engine, store).run(&mut stdin.lock(), &mut stdout.lock())?;

    info!("frontdesk stopped");
    Ok(())
}

/// First-run inventory, written to the store so later sessions load it
/// from disk like any other state.
fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: 1,
            number: "101".into(),
            category: "Standard".into(),
            price: 60.0,
        },
        Room {
            id: 2,
            number: "201".into(),
            category: "Deluxe".into(),
            price: 100.0,
        },
        Room {
            id: 3,
            number: "301".into(),
            category: "Suite".into(),
            price: 150.0,
        },
    ]
}
