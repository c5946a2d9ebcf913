//! # Slotio CLI
//!
//! The terminal frontend for the booking wizard. This crate owns all
//! interaction: prompting over stdin, rendering the grouped slot list,
//! driving the [`Wizard`] state machine through
//! `form → slots → confirmation`, and the live one-second countdown to
//! session start. All decisions about slot availability and booking
//! outcomes belong to the backend; this layer only renders and reacts.

/// Booking submission and session-window resolution
pub mod flow;
/// Plain-text rendering of slots, prompts, and the confirmation card
pub mod render;

use std::io::Write as _;
use std::time::Duration;

use chrono::{DateTime, Local, Utc};
use eyre::{Result, eyre};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::interval;

use slotio_client::BookingApi;
use slotio_core::countdown::Countdown;
use slotio_core::models::UserDetails;
use slotio_core::wizard::{SlotsPhase, Step, Wizard};

type InputLines = Lines<BufReader<Stdin>>;

/// Run the booking wizard until the user finishes or quits.
pub async fn run_book(api: &dyn BookingApi) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut wizard = Wizard::new();

    loop {
        match wizard.step() {
            Step::Form => {
                let Some(details) = read_details(&mut lines).await? else {
                    return Ok(());
                };
                wizard.submit_details(details)?;
            }
            Step::Slots(SlotsPhase::Browsing) => {
                if !browse_slots(api, &mut wizard, &mut lines).await? {
                    return Ok(());
                }
            }
            Step::Slots(SlotsPhase::Confirming) => {
                let slot = wizard
                    .selected_slot()
                    .cloned()
                    .ok_or_else(|| eyre!("no slot selected"))?;
                println!("{}", render::confirm_prompt(&slot, &Local));
                if let Some(error) = wizard.error() {
                    println!("\n{error}");
                }
                match prompt(&mut lines, "\nConfirm and book? [y/n]: ").await? {
                    None => return Ok(()),
                    Some(answer) if answer.eq_ignore_ascii_case("y") => {
                        wizard.begin_booking()?;
                    }
                    Some(answer) if answer.eq_ignore_ascii_case("n") => {
                        wizard.cancel_selection()?;
                    }
                    Some(_) => println!("Please answer y or n."),
                }
            }
            Step::Slots(SlotsPhase::Booking) => {
                let user = wizard
                    .user_details()
                    .cloned()
                    .ok_or_else(|| eyre!("no user details"))?;
                let slot = wizard
                    .selected_slot()
                    .cloned()
                    .ok_or_else(|| eyre!("no slot selected"))?;
                println!("Booking...");
                match flow::complete_booking(api, &user, &slot).await {
                    Ok(data) => wizard.booking_succeeded(data)?,
                    Err(err) => wizard.booking_failed(&flow::categorize_error(&err))?,
                }
            }
            Step::Confirmation => {
                let user = wizard
                    .user_details()
                    .cloned()
                    .ok_or_else(|| eyre!("no user details"))?;
                let booking = wizard
                    .booking()
                    .cloned()
                    .ok_or_else(|| eyre!("no booking data"))?;
                println!("\n{}\n", render::confirmation_card(&user, &booking, &Local));
                run_countdown(&mut lines, booking.start_time).await?;
                match prompt(&mut lines, "\nBook another session? [y/n]: ").await? {
                    Some(answer) if answer.eq_ignore_ascii_case("y") => wizard.start_over(),
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Print the currently active session, if any.
pub async fn run_status(api: &dyn BookingApi) -> Result<()> {
    match api.get_active_session().await {
        Ok(Some(session)) => {
            println!("Active session for {}", session.user_email);
            println!(
                "  {} until {}",
                render::format_datetime(session.start_time, &Local),
                render::format_time(session.end_time, &Local)
            );
            match Countdown::until(session.end_time, Utc::now()) {
                Countdown::Started => println!("  The session has ended."),
                remaining => println!("  Time remaining: {remaining}"),
            }
        }
        Ok(None) => println!("No active session right now."),
        Err(err) => println!("{err}"),
    }
    Ok(())
}

async fn read_details(lines: &mut InputLines) -> Result<Option<UserDetails>> {
    println!("Book your session");
    println!("Enter your details to view available slots.\n");

    let name = loop {
        match prompt(lines, "Name: ").await? {
            None => return Ok(None),
            Some(value) if value.is_empty() => println!("Name is required."),
            Some(value) => break value,
        }
    };
    let email = loop {
        match prompt(lines, "Email: ").await? {
            None => return Ok(None),
            Some(value) if value.is_empty() => println!("Email is required."),
            Some(value) => break value,
        }
    };

    Ok(Some(UserDetails { name, email }))
}

/// Fetch and render the slot list until the user selects a slot (returns
/// true) or quits (returns false). A fetch failure or an empty list both
/// offer a refresh; only the former is an error.
async fn browse_slots(
    api: &dyn BookingApi,
    wizard: &mut Wizard,
    lines: &mut InputLines,
) -> Result<bool> {
    loop {
        let slots = match api.get_slots().await {
            Ok(slots) => slots,
            Err(err) => {
                println!("{err}");
                match prompt(lines, "[r]etry or [q]uit: ").await? {
                    None => return Ok(false),
                    Some(cmd) if cmd.eq_ignore_ascii_case("q") => return Ok(false),
                    Some(_) => continue,
                }
            }
        };

        if slots.is_empty() {
            println!("No available slots for today.");
            println!("Please check back later for new time slots.");
            match prompt(lines, "[r]efresh or [q]uit: ").await? {
                None => return Ok(false),
                Some(cmd) if cmd.eq_ignore_ascii_case("q") => return Ok(false),
                Some(_) => continue,
            }
        }

        let (board, ordered) = render::slot_board(&slots, Utc::now(), &Local);
        println!("{board}");

        let Some(input) = prompt(lines, "Slot number to book, [r]efresh, or [q]uit: ").await?
        else {
            return Ok(false);
        };
        match input.as_str() {
            "q" | "Q" => return Ok(false),
            "r" | "R" | "" => continue,
            number => match number.parse::<usize>() {
                Ok(n) if n >= 1 && n <= ordered.len() => {
                    // Status is re-derived here: a slot rendered as
                    // available can have started since.
                    match wizard.select_slot(ordered[n - 1].clone(), Utc::now()) {
                        Ok(()) => return Ok(true),
                        Err(err) => println!("{err}"),
                    }
                }
                _ => println!("Enter a slot number between 1 and {}.", ordered.len()),
            },
        }
    }
}

/// Tick once per second until the session starts or the user presses
/// Enter. The interval is scoped to this function, so it is torn down on
/// every exit path.
async fn run_countdown(lines: &mut InputLines, start: DateTime<Utc>) -> Result<()> {
    println!("Press Enter to skip the countdown.");
    let mut ticker = interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let countdown = Countdown::until(start, Utc::now());
                if countdown.is_started() {
                    println!("\r{countdown}                    ");
                    return Ok(());
                }
                print!("\rSession starts in {countdown}     ");
                std::io::stdout().flush()?;
            }
            line = lines.next_line() => {
                line?;
                println!();
                return Ok(());
            }
        }
    }
}

async fn prompt(lines: &mut InputLines, message: &str) -> Result<Option<String>> {
    print!("{message}");
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?.map(|line| line.trim().to_string()))
}
