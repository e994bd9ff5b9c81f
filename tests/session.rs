use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

fn contact_book(path: &Path) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME"))?;
    cmd.env("CONTACTS_FILE", path).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn add_then_reload() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    // First run starts from a missing file
    contact_book(&path)?
        .write_stdin("add\nAlice Smith\nthirty\n30\nalice@example.com\nAdd\nBob Johnson\n25\nbob@example.com\nq\n")
        .assert()
        .success()
        .stdout(contains("not found. Starting with an empty contact list."))
        .stdout(contains("Please enter a valid integer for age."))
        .stdout(contains("Contact added successfully!"))
        .stdout(contains("Thank you for using the Contact Management System. Goodbye!"));

    let saved = fs::read_to_string(&path)?;
    assert!(saved.starts_with("{\n  \"contacts\": [\n    {\n      \"name\": \"Alice Smith\","));

    // Second run sees both contacts
    contact_book(&path)?
        .write_stdin("search\nSMITH\nq\n")
        .assert()
        .success()
        .stdout(contains("Contact list size: 2"))
        .stdout(contains("1. Alice Smith | Age: 30 | Email: alice@example.com"));

    Ok(())
}

#[test]
fn delete_persists() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    fs::write(
        &path,
        r#"{"contacts": [
            {"name": "Alice", "age": 30, "email": "alice@example.com"},
            {"name": "Bob", "age": 25, "email": "bob@example.com"},
            {"name": "Charlie", "age": 35, "email": "charlie@example.com"}
        ]}"#,
    )?;

    contact_book(&path)?
        .write_stdin("delete\nabc\n9\n2\nq\n")
        .assert()
        .success()
        .stdout(contains("2. Bob | Age: 25 | Email: bob@example.com"))
        .stdout(contains("Please enter a valid integer."))
        .stdout(contains("Invalid number, out of range."))
        .stdout(contains("Deleted contact: Bob"));

    let saved = fs::read_to_string(&path)?;
    assert!(saved.contains("Alice"));
    assert!(!saved.contains("Bob"));
    assert!(saved.find("Alice") < saved.find("Charlie"));

    Ok(())
}

#[test]
fn malformed_file_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");
    fs::write(&path, "{ this is not json")?;

    contact_book(&path)?
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("Error reading"))
        .stdout(contains("Starting with an empty contact list."))
        .stdout(contains("Contact list size: 0"));

    // Quitting rewrites the file in the expected shape
    assert_eq!(fs::read_to_string(&path)?, "{\n  \"contacts\": []\n}");

    Ok(())
}

#[test]
fn invalid_command_and_end_of_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("nested/contacts.json");

    // No `q`: running out of input quits and still saves
    contact_book(&path)?
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(contains("Invalid command."))
        .stdout(contains("Goodbye!"));

    assert!(path.exists());

    Ok(())
}

#[test]
fn undecodable_input_keeps_session_alive() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("contacts.json");

    let mut input = b"add\nBob\n25\nbob@example.com\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n', b'q', b'\n']);

    contact_book(&path)?
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Invalid command."))
        .stdout(contains("Goodbye!"));

    assert!(fs::read_to_string(&path)?.contains("\"name\": \"Bob\""));

    Ok(())
}
