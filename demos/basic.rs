//! Basic contact book walkthrough.
//!
//! Run with `cargo run --example basic`. Set `RUST_LOG=debug` to see the
//! library's tracing output.

use anyhow::Result;
use contact_book::{AddressBook, Record};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so the demo output stays clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Create a new address book
    let mut book = AddressBook::new();

    // Create a record for John
    let mut john_record = Record::new("John");
    john_record.add_phone("1234567890")?;
    john_record.add_phone("5555555555")?;

    // Add John's record to the address book
    book.add_record(john_record);

    // Create and add a new record for Jane
    let mut jane_record = Record::new("Jane");
    jane_record.add_phone("9876543210")?;
    book.add_record(jane_record);

    // Print all records in the book
    for (_name, record) in book.iter() {
        println!("{}", record);
    }

    // Find and edit a phone number for John
    let john = book.find_mut("John").expect("John was just added");
    john.edit_phone("1234567890", "1112223333");

    println!("{}", john); // Contact name: John, phones: 1112223333; 5555555555

    // Find a specific phone number in John's record
    let found_phone = john.find_phone("5555555555").expect("phone was just added");
    println!("{}: {}", john.name(), found_phone); // John: 5555555555

    // Delete Jane's record
    book.delete("Jane");

    Ok(())
}
