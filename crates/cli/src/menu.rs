// Interactive Menu - console dialogue over the front desk
//
// Thin wrapper: read a number, dispatch to a FrontDesk operation, render
// the outcome. No queue logic lives here. Generic over BufRead/Write so
// whole sessions can be scripted in tests.

use std::io::{BufRead, Write};

use colored::Colorize;
use maitre_core::application::FrontDesk;
use maitre_core::AppError;

pub fn run<R: BufRead, W: Write>(
    desk: &mut FrontDesk,
    mut input: R,
    mut out: W,
) -> std::io::Result<()> {
    loop {
        write!(
            out,
            "\nRestaurant Table Reservation System:\n\
             1. Book a table\n\
             2. Cancel a table\n\
             3. Display number of free tables\n\
             4. Display total number of tables\n\
             5. Exit\n\
             Enter your choice: "
        )?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            // EOF on stdin, treat like exit
            break;
        };

        match line.trim().parse::<u32>() {
            Ok(1) => book(desk, &mut input, &mut out)?,
            Ok(2) => cancel(desk, &mut out)?,
            Ok(3) => writeln!(out, "Number of free tables: {}", desk.free_tables())?,
            Ok(4) => writeln!(out, "Total number of tables: {}", desk.total_tables())?,
            Ok(5) => {
                writeln!(out, "Exiting the program.")?;
                break;
            }
            _ => writeln!(out, "{}", "Invalid choice. Please try again.".red())?,
        }
    }
    Ok(())
}

fn book<R: BufRead, W: Write>(
    desk: &mut FrontDesk,
    input: &mut R,
    out: &mut W,
) -> std::io::Result<()> {
    // Short-circuit before prompting, matching the original dialogue
    if desk.is_full() {
        writeln!(
            out,
            "{}",
            "All tables are reserved. No free tables available.".red()
        )?;
        return Ok(());
    }

    write!(
        out,
        "Enter table number to book (1 to {}): ",
        desk.total_tables()
    )?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    let Ok(table) = line.trim().parse::<u32>() else {
        writeln!(out, "{}", "Invalid table number.".red())?;
        return Ok(());
    };

    match desk.book(table) {
        Ok(booked) => writeln!(
            out,
            "{}",
            format!("Table {booked} has been booked.").green()
        ),
        Err(AppError::InvalidTableNumber { .. }) => {
            writeln!(out, "{}", "Invalid table number.".red())
        }
        Err(e) => writeln!(out, "{}", e.to_string().red()),
    }
}

fn cancel<W: Write>(desk: &mut FrontDesk, out: &mut W) -> std::io::Result<()> {
    match desk.cancel() {
        Ok(table) => writeln!(
            out,
            "{}",
            format!("Table {table} reservation has been cancelled.").green()
        ),
        Err(_) => writeln!(out, "{}", "No reservations to cancel.".red()),
    }
}

/// Read one line, `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(tables: usize, script: &str) -> String {
        colored::control::set_override(false);
        let mut desk = FrontDesk::new(tables).unwrap();
        let mut out = Vec::new();
        run(&mut desk, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_book_then_exit() {
        let out = session(10, "1\n3\n5\n");
        assert!(out.contains("Table 3 has been booked."));
        assert!(out.contains("Exiting the program."));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let out = session(10, "9\nfoo\n5\n");
        assert_eq!(out.matches("Invalid choice. Please try again.").count(), 2);
    }

    #[test]
    fn test_out_of_range_table_number() {
        let out = session(10, "1\n11\n1\n0\n1\nabc\n5\n");
        assert_eq!(out.matches("Invalid table number.").count(), 3);
    }

    #[test]
    fn test_full_desk_short_circuits_prompt() {
        let out = session(2, "1\n1\n1\n2\n1\n3\n5\n");
        assert!(out.contains("All tables are reserved. No free tables available."));
        // The table-number prompt is only printed twice, for the two
        // bookings that actually went through
        assert_eq!(out.matches("Enter table number to book").count(), 2);
        assert!(out.contains("Number of free tables: 0"));
    }

    #[test]
    fn test_fifo_cancel_order() {
        let out = session(10, "1\n7\n1\n4\n2\n2\n2\n5\n");
        let first = out.find("Table 7 reservation has been cancelled.").unwrap();
        let second = out.find("Table 4 reservation has been cancelled.").unwrap();
        assert!(first < second);
        assert!(out.contains("No reservations to cancel."));
    }

    #[test]
    fn test_cancel_on_empty_desk() {
        let out = session(10, "2\n5\n");
        assert!(out.contains("No reservations to cancel."));
    }

    #[test]
    fn test_eof_acts_like_exit() {
        let out = session(10, "1\n4\n");
        assert!(out.contains("Table 4 has been booked."));
        assert!(!out.contains("Exiting the program."));
    }
}
