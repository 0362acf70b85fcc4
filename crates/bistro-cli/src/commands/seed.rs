//! Demo data loader.
//!
//! Creates five restaurants open 11:30-14:00 and 18:30-22:00, ten
//! categories, menus and dishes, twenty pictures, a handful of customers
//! and ten bookings. Each booking is made by its customer and goes
//! through admission control like any other.

use chrono::{Days, Utc};
use clap::Args;
use tracing::info;
use uuid::Uuid;

use bistro_auth::password::PasswordHasher;
use bistro_core::error::AppError;
use bistro_database::repositories::{RestaurantRepository, UserRepository};
use bistro_entity::catalog::{FoodInput, MenuInput, PictureInput};
use bistro_entity::restaurant::CreateRestaurant;
use bistro_entity::user::{CreateUser, UserRole};
use bistro_service::RequestContext;
use bistro_service::booking::BookingRequest;

use super::Cli;
use crate::output;

const RESTAURANTS: usize = 5;
const CATEGORIES: usize = 10;
const MENUS: usize = 10;
const FOOD: usize = 10;
const PICTURES: usize = 20;
const BOOKINGS: usize = 10;

/// Password shared by every seeded customer.
const CUSTOMER_PASSWORD: &str = "password123";

const FIRST_NAMES: [&str; 8] = [
    "Camille", "Louis", "Léa", "Hugo", "Manon", "Jules", "Chloé", "Arthur",
];
const LAST_NAMES: [&str; 8] = [
    "Martin", "Bernard", "Dubois", "Thomas", "Robert", "Richard", "Petit", "Durand",
];

/// Booking times inside the seeded opening windows.
const SERVICE_HOURS: [&str; 5] = ["12:00", "13:00", "19:00", "20:00", "21:00"];

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Number of customer accounts
    #[arg(long, default_value_t = 8)]
    pub users: usize,

    /// Seed even if restaurants already exist
    #[arg(long)]
    pub force: bool,
}

/// Execute the seed command
pub async fn execute(args: &SeedArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let db = super::connect(&config).await?;

    let existing = RestaurantRepository::new(db.pool().clone()).count().await?;
    if existing > 0 && !args.force {
        let proceed = dialoguer::Confirm::new()
            .with_prompt(format!(
                "{existing} restaurants already exist. Add demo data anyway?"
            ))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
        if !proceed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let users = seed_users(&UserRepository::new(db.pool().clone()), args.users).await?;

    let state = bistro_api::build_state(config, db);
    let ctx = RequestContext::new(Uuid::nil(), UserRole::Admin, "seed@bistro.local");

    let mut restaurants = Vec::with_capacity(RESTAURANTS);
    for i in 1..=RESTAURANTS {
        let restaurant = state
            .restaurant_service
            .create(
                &ctx,
                CreateRestaurant {
                    name: format!("Restaurant {i}"),
                    description: Some(format!("Description du restaurant {i}")),
                    am_opening_time: vec!["11:30".to_string(), "14:00".to_string()],
                    pm_opening_time: vec!["18:30".to_string(), "22:00".to_string()],
                    max_guest: capacity_for(i),
                    owner_id: None,
                },
            )
            .await?;
        restaurants.push(restaurant.id);
    }
    output::print_success(&format!("{} restaurants", restaurants.len()));

    let mut categories = Vec::with_capacity(CATEGORIES);
    for i in 1..=CATEGORIES {
        let category = state
            .category_service
            .create(&ctx, format!("Catégorie {i}"))
            .await?;
        categories.push(category.id);
    }
    output::print_success(&format!("{} categories", categories.len()));

    for i in 1..=MENUS {
        let menu = state
            .menu_service
            .create(
                &ctx,
                MenuInput {
                    title: Some(format!("Menu #{i}")),
                    description: Some(format!("Description du menu #{i} avec des plats variés.")),
                    price_cents: Some(menu_price_cents(i)),
                    restaurant_id: Some(restaurants[i % restaurants.len()]),
                },
            )
            .await?;
        state
            .menu_service
            .add_category(&ctx, menu.id, categories[(i - 1) % categories.len()])
            .await?;
    }
    output::print_success(&format!("{MENUS} menus"));

    for i in 1..=FOOD {
        let food = state
            .food_service
            .create(
                &ctx,
                FoodInput {
                    title: Some(format!("Plat {i}")),
                    description: Some(format!(
                        "Une description savoureuse pour le plat numéro {i}."
                    )),
                    price_cents: Some(food_price_cents(i)),
                },
            )
            .await?;
        state
            .food_service
            .add_category(&ctx, food.id, categories[i % categories.len()])
            .await?;
    }
    output::print_success(&format!("{FOOD} dishes"));

    for i in 1..=PICTURES {
        state
            .picture_service
            .create(
                &ctx,
                PictureInput {
                    title: Some(format!("Article n°{i}")),
                    slug: Some(format!("article-{i}")),
                    restaurant_id: Some(restaurants[i % restaurants.len()]),
                },
            )
            .await?;
    }
    output::print_success(&format!("{PICTURES} pictures"));

    if users.is_empty() {
        output::print_warning("No customers seeded, skipping bookings");
    } else {
        let today = Utc::now().date_naive();
        for i in 0..BOOKINGS {
            let date = today
                .checked_add_days(Days::new((i % 10) as u64 + 1))
                .unwrap_or(today);
            let customer = RequestContext::new(users[i % users.len()], UserRole::User, "seed");
            state
                .booking_service
                .create(
                    &customer,
                    BookingRequest {
                        guest_number: Some((i % 6) as i64 + 1),
                        order_date: Some(date.format("%Y-%m-%d").to_string()),
                        order_hour: Some(SERVICE_HOURS[i % SERVICE_HOURS.len()].to_string()),
                        restaurant: Some(restaurants[i % restaurants.len()].to_string()),
                        allergy: (i % 2 == 0).then(|| "Arachides".to_string()),
                        user: None,
                    },
                )
                .await?;
        }
        output::print_success(&format!("{BOOKINGS} bookings"));
    }

    info!(
        restaurants = restaurants.len(),
        customers = users.len(),
        "Demo data seeded"
    );
    output::print_kv("Customer password", CUSTOMER_PASSWORD);
    state.db.close().await;
    Ok(())
}

async fn seed_users(repo: &UserRepository, count: usize) -> Result<Vec<Uuid>, AppError> {
    let hasher = PasswordHasher::new();
    let password_hash = hasher.hash_password(CUSTOMER_PASSWORD)?;
    let run = Utc::now().timestamp();

    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[(i * 3) % LAST_NAMES.len()];
        let user = repo
            .create(
                Uuid::new_v4(),
                &CreateUser {
                    email: format!(
                        "{}.{}.{run}@bistro.test",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                    password_hash: password_hash.clone(),
                    first_name: Some(first.to_string()),
                    last_name: Some(last.to_string()),
                    role: UserRole::User,
                },
            )
            .await?;
        ids.push(user.id);
    }
    output::print_success(&format!("{} customers", ids.len()));
    Ok(ids)
}

/// Spread capacities over 20..=100.
fn capacity_for(i: usize) -> i16 {
    (20 + (i * 37) % 81) as i16
}

fn menu_price_cents(i: usize) -> i32 {
    ((10 + (i * 7) % 41) * 100) as i32
}

fn food_price_cents(i: usize) -> i32 {
    ((8 + (i * 5) % 18) * 100 + 99) as i32
}
