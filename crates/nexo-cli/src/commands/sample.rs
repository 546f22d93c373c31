//! Sample plan generator

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use nexo_core::{Category, Currency, ItineraryItem, Tier, TripPlan};

/// A small realistic plan users can edit and re-evaluate
fn sample_plan() -> TripPlan {
    TripPlan {
        total_budget: 10_000.0,
        currency: Currency::Brl,
        items: vec![
            ItineraryItem {
                id: "flight-gru-lis".to_string(),
                name: "Flights São Paulo – Lisbon".to_string(),
                category: Category::Flight,
                cost: 3_200.0,
                tier: None,
            },
            ItineraryItem {
                id: "hotel-alfama".to_string(),
                name: "Hotel in Alfama, 5 nights".to_string(),
                category: Category::Hotel,
                cost: 2_400.0,
                tier: Some(Tier::Standard),
            },
            ItineraryItem {
                id: "sintra-tour".to_string(),
                name: "Sintra day trip".to_string(),
                category: Category::Activity,
                cost: 450.0,
                tier: Some(Tier::Standard),
            },
            ItineraryItem {
                id: "food".to_string(),
                name: "Meals".to_string(),
                category: Category::Food,
                cost: 900.0,
                tier: None,
            },
        ],
    }
}

pub fn cmd_sample(output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&sample_plan())?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Sample plan written to {}", path.display());
            println!();
            println!("Next steps:");
            println!("  1. Edit the plan: {}", path.display());
            println!("  2. Evaluate it: nexo evaluate --file {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
