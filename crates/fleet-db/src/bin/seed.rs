//! # Seed Data Generator
//!
//! Populates the database with stores, categories, renters and a vehicle
//! fleet for development.
//!
//! ## Usage
//! ```bash
//! # Generate 60 vehicles (default)
//! cargo run -p fleet-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p fleet-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p fleet-db --bin seed -- --db ./data/fleet.db
//! ```
//!
//! Each vehicle gets a unique plate, a model from its category, and a
//! deterministic pseudo-random daily rate derived from its index, so runs
//! are reproducible.

use chrono::Utc;
use std::env;

use fleet_core::Vehicle;
use fleet_db::{Database, DbConfig};

/// Store seeds: (name, address)
const STORES: &[(&str, &str)] = &[
    ("Downtown", "1 Main St"),
    ("Airport", "Terminal 2 Arrivals"),
    ("Harbor", "Pier 14"),
    ("Uptown", "88 North Ave"),
];

/// Category seeds with their model pools and base daily rate in cents.
const CATEGORIES: &[(&str, &[&str], i64)] = &[
    (
        "Economy",
        &["Corsa 1.2", "Polo 1.0", "Fiesta 1.1", "Clio 1.2", "i20 1.2"],
        5_900,
    ),
    (
        "Compact",
        &["Golf 1.5", "Focus 1.5", "Astra 1.4", "Civic 1.5", "Mazda3 2.0"],
        8_900,
    ),
    (
        "SUV",
        &["Tucson 1.6", "RAV4 2.0", "Tiguan 2.0", "CX-5 2.2", "Kuga 1.5"],
        14_900,
    ),
    (
        "Van",
        &["Transit Custom", "Vito 114", "Trafic dCi", "Transporter T6"],
        17_900,
    ),
];

/// Renter seeds.
const RENTERS: &[(&str, &str)] = &[
    ("Dana Reyes", "+1-555-0101"),
    ("Jun Park", "+1-555-0102"),
    ("Amara Okafor", "+1-555-0103"),
    ("Luca Moretti", "+1-555-0104"),
    ("Priya Nair", "+1-555-0105"),
    ("Tomas Eriksen", "+1-555-0106"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 60;
    let mut db_path = String::from("./fleet_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(60);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Fleet Rental Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of vehicles to generate (default: 60)");
                println!("  -d, --db <PATH>    Database file path (default: ./fleet_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Fleet Rental Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!("Vehicles: {}", count);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.vehicles().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} vehicles", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Lookup data first: stores, categories, renters
    let mut store_ids = Vec::new();
    for (name, address) in STORES {
        let store = db.stores().create(name, Some(address), None).await?;
        store_ids.push(store.id);
    }
    println!("✓ Created {} stores", store_ids.len());

    let mut category_ids = Vec::new();
    for (name, _, _) in CATEGORIES {
        let category = db.categories().create(name, None).await?;
        category_ids.push(category.id);
    }
    println!("✓ Created {} categories", category_ids.len());

    for (name, phone) in RENTERS {
        db.renters().create(name, Some(phone)).await?;
    }
    println!("✓ Created {} renters", RENTERS.len());

    // The fleet
    println!();
    println!("Generating vehicles...");

    let mut generated = 0;
    let start = std::time::Instant::now();

    'outer: loop {
        for (category_idx, (_, models, base_rate)) in CATEGORIES.iter().enumerate() {
            if generated >= count {
                break 'outer;
            }

            let seed = generated;
            let model = models[seed % models.len()];
            // Rate: category base + deterministic spread of up to $30/day
            let rate_cents = base_rate + ((seed * 37) % 30) as i64 * 100;
            let plate = format!("B-{:04}", 1000 + seed);
            let store_id = &store_ids[seed % store_ids.len()];

            let vehicle = Vehicle::register(
                &plate,
                Some(model.to_string()),
                &category_ids[category_idx],
                store_id,
                rate_cents,
                Utc::now(),
            )?;

            if let Err(e) = db.vehicles().insert(&vehicle).await {
                eprintln!("Failed to insert {}: {}", plate, e);
                continue;
            }

            generated += 1;

            if generated % 25 == 0 {
                println!("  Generated {} vehicles...", generated);
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} vehicles in {:?}", generated, elapsed);

    // Verify the availability search over the seeded data
    println!();
    println!("Verifying availability search...");
    let window_start = Utc::now() + chrono::Duration::hours(1);
    let window_end = window_start + chrono::Duration::days(2);
    let available = db
        .vehicles()
        .find_available(&store_ids[0], window_start, window_end)
        .await?;
    println!("  Store '{}': {} vehicles available", STORES[0].0, available.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
