use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::OffsetDateTime;

use transfer_pricing_rs::initialize_db;

/// A utility for creating a test database for the transfer pricing API server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating sample transactions...");

    let today = OffsetDateTime::now_utc().date();
    let samples = [
        ("liability", 100.0, "Overnight borrowings", 5.0, "low", 0.5),
        ("liability", 300.0, "Retail term deposits", 10.0, "med", 2.0),
        ("liability", 250.0, "Subordinated notes", 7.5, "high", 5.0),
        ("asset", 500.0, "Commercial loan portfolio", 12.0, "med", 3.0),
    ];

    for (transaction_type, amount, description, interest_rate, risk, maturity) in samples {
        conn.execute(
            "INSERT INTO transactions (type, amount, description, interest_rate, risk, maturity, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            (
                transaction_type,
                amount,
                description,
                interest_rate,
                risk,
                maturity,
                today,
            ),
        )?;
    }

    println!("Success!");

    Ok(())
}
