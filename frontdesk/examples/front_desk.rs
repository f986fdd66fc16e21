//! Offline front-desk walkthrough against the in-memory source.
//!
//! Run with: cargo run -p frontdesk --example front_desk

use chrono::Utc;
use desk_client::InMemoryReservations;
use frontdesk::{FrontDesk, NewBooking, RoomCatalog, WalkIn, view};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,frontdesk=debug".into()),
        )
        .init();

    let desk = FrontDesk::new(
        Arc::new(InMemoryReservations::new()),
        RoomCatalog::standard(),
    );
    let today = Utc::now().date_naive();

    let booking = desk
        .book(
            NewBooking {
                guest_name: "Alice Moreau".to_string(),
                room_number: 204,
                contact_number: "+34600111222".to_string(),
                check_in: today,
                check_out: today + chrono::Duration::days(2),
            },
            today,
        )
        .await?;
    desk.check_in(booking.reservation_id).await?;

    desk.walk_in(WalkIn {
        guest_name: "Bob Stone".to_string(),
        room_number: 301,
        contact_number: "0612345678".to_string(),
    })
    .await?;

    let snapshot = desk.refresh(today).await?;

    println!(
        "Dashboard: {} in today, {} out today, {} in hotel, {} rooms occupied",
        snapshot.counters.checked_in_today,
        snapshot.counters.checked_out_today,
        snapshot.counters.total_in_hotel,
        snapshot.counters.distinct_rooms_occupied,
    );
    println!(
        "Rooms: {} available / {} occupied / {} maintenance of {}",
        snapshot.room_stats.available,
        snapshot.room_stats.occupied,
        snapshot.room_stats.maintenance,
        snapshot.room_stats.total,
    );

    for room in snapshot.rooms.iter().filter(|v| v.guest_name.is_some()) {
        println!(
            "  {} ({}) -> {}",
            room.room.number,
            room.room.room_type,
            room.guest_display()
        );
    }

    for guest in view::current_guests(&snapshot.reservations) {
        println!(
            "  guest list: {} in {} [{}]",
            guest.guest_name,
            guest.room_number,
            view::status_label(guest.status)
        );
    }

    Ok(())
}
