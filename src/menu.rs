use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::engine::{Engine, EngineError};
use crate::model::Stay;
use crate::store::CsvStore;

const OPTIONS: &str = "\
1) Search rooms
2) Book room
3) Cancel reservation
4) View reservation
5) List reservations
0) Exit";

/// Line-oriented front end over the engine. Generic over its input and
/// output streams so whole sessions can be driven from tests.
pub struct Menu {
    engine: Engine,
    store: CsvStore,
    /// Engine revision the reservation file last reflected.
    saved_revision: u64,
}

impl Menu {
    /// The engine state was just loaded from the store, so its current
    /// revision counts as already saved.
    pub fn new(engine: Engine, store: CsvStore) -> Self {
        let saved_revision = engine.revision();
        Self {
            engine,
            store,
            saved_revision,
        }
    }

    /// Serve one session until the exit option or end of input. Only errors
    /// on the terminal streams themselves propagate; engine refusals and
    /// unparseable input are reported inline and the loop continues.
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        loop {
            writeln!(out)?;
            writeln!(out, "{OPTIONS}")?;
            let Some(choice) = prompt(input, out, "Choice: ")? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.search(input, out)?,
                "2" => self.book(input, out)?,
                "3" => self.cancel(input, out)?,
                "4" => self.view(input, out)?,
                "5" => self.list(out)?,
                "0" => {
                    self.sync(out)?;
                    return Ok(());
                }
                _ => writeln!(out, "Invalid choice.")?,
            }
            self.sync(out)?;
        }
    }

    fn search(&self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let Some(category) = prompt(input, out, "Category (blank=all): ")? else {
            return Ok(());
        };
        for room in self.engine.search(Some(category.trim())) {
            writeln!(
                out,
                "{} | Room {} | {} | ${}",
                room.id, room.number, room.category, room.price
            )?;
        }
        Ok(())
    }

    fn book(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let Some(room_id) = read_parsed(input, out, "Room ID: ", "Invalid room id.")? else {
            return Ok(());
        };
        let Some(guest) = prompt(input, out, "Guest name: ")? else {
            return Ok(());
        };
        let Some(check_in) = read_parsed(input, out, "Check-in (yyyy-mm-dd): ", "Invalid date.")?
        else {
            return Ok(());
        };
        let Some(check_out) = read_parsed(input, out, "Check-out (yyyy-mm-dd): ", "Invalid date.")?
        else {
            return Ok(());
        };
        let Some(card) = prompt(input, out, "Card number: ")? else {
            return Ok(());
        };

        let stay = Stay::new(check_in, check_out);
        match self.engine.book(room_id, guest.trim(), stay, card.trim()) {
            Ok(r) => {
                info!("booked reservation {} on room {}", r.id, r.room_id);
                writeln!(
                    out,
                    "Reservation confirmed. ID={} Ref={} Total=${}",
                    r.id, r.payment_ref, r.total
                )?;
            }
            Err(e) => writeln!(out, "{}", describe(&e))?,
        }
        Ok(())
    }

    fn cancel(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let Some(id) =
            read_parsed(input, out, "Reservation ID to cancel: ", "Invalid reservation id.")?
        else {
            return Ok(());
        };
        if self.engine.cancel(id) {
            info!("cancelled reservation {id}");
            writeln!(out, "Cancelled.")?;
        } else {
            writeln!(out, "Not found.")?;
        }
        Ok(())
    }

    fn view(&self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        let Some(id) = read_parsed(input, out, "Reservation ID: ", "Invalid reservation id.")?
        else {
            return Ok(());
        };
        let Some(r) = self.engine.find(id) else {
            writeln!(out, "Not found.")?;
            return Ok(());
        };
        // A dangling room id renders placeholders rather than failing.
        let room = self.engine.room(r.room_id);
        writeln!(
            out,
            "Reservation {} Guest={} Room={} ({}) {}->{} ${} Status={} Ref={}",
            r.id,
            r.guest,
            room.map_or("?", |rm| rm.number.as_str()),
            room.map_or("?", |rm| rm.category.as_str()),
            r.stay.check_in,
            r.stay.check_out,
            r.total,
            r.status.as_str(),
            r.payment_ref
        )?;
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> io::Result<()> {
        for r in self.engine.list() {
            let number = self
                .engine
                .room(r.room_id)
                .map_or("?", |rm| rm.number.as_str());
            writeln!(
                out,
                "[{}] {} - {} {}->{} ${} {}",
                r.id,
                r.guest,
                number,
                r.stay.check_in,
                r.stay.check_out,
                r.total,
                r.status.as_str()
            )?;
        }
        Ok(())
    }

    /// Rewrite the reservation file when the engine has committed anything
    /// since the last save. A failed save is reported and left pending: the
    /// revision stays unsaved, so the next pass retries with the full ledger.
    fn sync(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.engine.revision() == self.saved_revision {
            return Ok(());
        }
        match self.store.save_reservations(self.engine.reservations()) {
            Ok(()) => self.saved_revision = self.engine.revision(),
            Err(e) => {
                warn!("could not persist reservations: {e}");
                writeln!(out, "Warning: could not save reservations: {e}")?;
            }
        }
        Ok(())
    }
}

/// Prompt and read one line, trimmed of the trailing newline. `None` means
/// end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for any `FromStr` value. A line that fails to parse prints
/// `invalid_msg` and returns `None`, abandoning the current operation; the
/// main loop is the re-prompt.
fn read_parsed<T: std::str::FromStr>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    text: &str,
    invalid_msg: &str,
) -> io::Result<Option<T>> {
    let Some(line) = prompt(input, out, text)? else {
        return Ok(None);
    };
    match line.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            writeln!(out, "{invalid_msg}")?;
            Ok(None)
        }
    }
}

/// One human-readable line per engine refusal. These are normal outcomes,
/// not faults, so the wording stays short.
fn describe(e: &EngineError) -> String {
    match e {
        EngineError::RoomNotFound(_) => "Room not found.".to_string(),
        EngineError::Unavailable { .. } => "Room not available!".to_string(),
        EngineError::PaymentDeclined => "Payment failed!".to_string(),
        EngineError::IdsExhausted => "Reservation ids exhausted.".to_string(),
        EngineError::InvalidDateRange { .. } => format!("Invalid dates: {e}."),
    }
}
