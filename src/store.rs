use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::*;

/// Flat-file store: one CSV line per record, whole-file rewrite on save.
///
/// Room:        `id,number,category,price`
/// Reservation: `id,roomId,guest,checkIn,checkOut,total,status,paymentRef`
///
/// Dates are ISO-8601 (`2024-01-03`). Fields are split on commas with no
/// quoting layer, so a value containing a comma is out of contract: it
/// comes back as `InvalidData` on the next load rather than as silently
/// shifted fields.
pub struct CsvStore {
    rooms_path: PathBuf,
    reservations_path: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            rooms_path: data_dir.join("rooms.csv"),
            reservations_path: data_dir.join("reservations.csv"),
        }
    }

    /// Load the room inventory. A missing file is the first-run condition
    /// and yields an empty list; a malformed line fails the whole load.
    pub fn load_rooms(&self) -> io::Result<Vec<Room>> {
        read_records(&self.rooms_path, decode_room)
    }

    pub fn save_rooms(&self, rooms: &[Room]) -> io::Result<()> {
        write_records(&self.rooms_path, rooms, encode_room)
    }

    pub fn load_reservations(&self) -> io::Result<Vec<Reservation>> {
        read_records(&self.reservations_path, decode_reservation)
    }

    pub fn save_reservations(&self, reservations: &[Reservation]) -> io::Result<()> {
        write_records(&self.reservations_path, reservations, encode_reservation)
    }
}

fn read_records<T>(path: &Path, decode: fn(&str) -> Result<T, String>) -> io::Result<Vec<T>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };
    let reader = BufReader::new(file);
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let record = decode(&line).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}:{}: {e}", path.display(), idx + 1),
            )
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Rewrite the whole file via temp file + fsync + atomic rename, so a crash
/// mid-save leaves the previous version intact.
fn write_records<T>(path: &Path, records: &[T], encode: fn(&T) -> String) -> io::Result<()> {
    let tmp_path = path.with_extension("csv.tmp");
    let file = File::create(&tmp_path)?;
    let mut writer = BufWriter::new(file);
    for record in records {
        writeln!(writer, "{}", encode(record))?;
    }
    writer.flush()?;
    writer.get_ref().sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ── Record codecs ────────────────────────────────────────────────

fn encode_room(room: &Room) -> String {
    format!("{},{},{},{}", room.id, room.number, room.category, room.price)
}

fn decode_room(line: &str) -> Result<Room, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 4 {
        return Err(format!("expected 4 fields, got {}", fields.len()));
    }
    Ok(Room {
        id: parse_field(fields[0], "id")?,
        number: fields[1].to_string(),
        category: fields[2].to_string(),
        price: parse_field(fields[3], "price")?,
    })
}

fn encode_reservation(r: &Reservation) -> String {
    format!(
        "{},{},{},{},{},{},{},{}",
        r.id,
        r.room_id,
        r.guest,
        r.stay.check_in,
        r.stay.check_out,
        r.total,
        r.status.as_str(),
        r.payment_ref
    )
}

fn decode_reservation(line: &str) -> Result<Reservation, String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 8 {
        return Err(format!("expected 8 fields, got {}", fields.len()));
    }
    Ok(Reservation {
        id: parse_field(fields[0], "id")?,
        room_id: parse_field(fields[1], "roomId")?,
        guest: fields[2].to_string(),
        stay: Stay::new(
            parse_field(fields[3], "checkIn")?,
            parse_field(fields[4], "checkOut")?,
        ),
        total: parse_field(fields[5], "total")?,
        status: ReservationStatus::parse(fields[6])
            .ok_or_else(|| format!("bad status: {:?}", fields[6]))?,
        payment_ref: fields[7].to_string(),
    })
}

fn parse_field<T: std::str::FromStr>(raw: &str, name: &str) -> Result<T, String> {
    raw.parse().map_err(|_| format!("bad {name}: {raw:?}"))
}
