use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::prelude::{
    AppError, Command, Console, Contact, ContactManager, LoadStatus, parse_store,
};

pub const WELCOME: &str = "Welcome to the Contact Management System!";
pub const FAREWELL: &str = "Thank you for using the Contact Management System. Goodbye!";
pub const MENU_PROMPT: &str = "You can 'Add', 'Delete', 'Search', or 'Q' to quit: ";

/// Whether the loop keeps going after a command.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Running,
    Quitting,
}

pub fn run_app() -> Result<(), AppError> {
    let (mut manager, status) = ContactManager::open(parse_store());

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    run_session(&mut manager, &status, &mut console)
}

/// Drives the prompt loop until `q` or end of input, then saves.
pub fn run_session<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    status: &LoadStatus,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if status.is_fallback() {
        console.say(status)?;
    }
    console.say(WELCOME)?;

    loop {
        console.say(format!("\nContact list size: {}", manager.len()))?;

        let Some(input) = console.prompt(MENU_PROMPT)? else {
            debug!("end of input at menu");
            break;
        };

        let flow = match input.parse::<Command>() {
            Ok(Command::Add) => add_contact(manager, console)?,
            Ok(Command::Delete) => delete_contact(manager, console)?,
            Ok(Command::Search) => search_contacts(manager, console)?,
            Ok(Command::Quit) => Flow::Quitting,
            Err(e) => {
                debug!(error = %e, "rejected command");
                console.say("Invalid command.")?;
                Flow::Running
            }
        };

        if flow == Flow::Quitting {
            break;
        }
    }

    manager.save()?;
    info!(count = manager.len(), "session finished");
    console.say(FAREWELL)?;
    Ok(())
}

fn add_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(name) = console.prompt("Name: ")? else {
        return Ok(Flow::Quitting);
    };

    let Some(age) = console.retry("Age: ", |input| {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation("Please enter a valid integer for age.".to_string()))
    })?
    else {
        return Ok(Flow::Quitting);
    };

    let Some(email) = console.prompt("Email: ")? else {
        return Ok(Flow::Quitting);
    };

    manager.add_contact(Contact::new(name, age, email));
    console.say("Contact added successfully!")?;
    Ok(Flow::Running)
}

fn delete_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    console.display_contacts(&manager.contact_list())?;
    if manager.is_empty() {
        return Ok(Flow::Running);
    }

    let total = manager.len();
    let Some(position) = console.retry("Enter the number of the contact to delete: ", |input| {
        let position = input
            .trim()
            .parse::<i64>()
            .map_err(|_| AppError::Validation("Please enter a valid integer.".to_string()))?;

        match usize::try_from(position) {
            Ok(position) if (1..=total).contains(&position) => Ok(position),
            _ => Err(AppError::Validation(
                "Invalid number, out of range.".to_string(),
            )),
        }
    })?
    else {
        return Ok(Flow::Quitting);
    };

    let deleted = manager.delete_contact(position)?;
    console.say(format!("Deleted contact: {}", deleted.name))?;
    Ok(Flow::Running)
}

fn search_contacts<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
) -> Result<Flow, AppError> {
    let Some(term) = console.prompt("Enter a name to search for: ")? else {
        return Ok(Flow::Quitting);
    };

    console.display_contacts(&manager.search(&term))?;
    Ok(Flow::Running)
}
