//! Storefront demo: login, browse the menu, place an order.
//!
//! Run a backend first (`cargo run -p savora-backend-mock`), then:
//!
//! ```text
//! SAVORA_URL=http://127.0.0.1:8080 cargo run -p savora-client --example storefront_demo
//! ```

use savora_client::format::{format_currency_decimal, format_datetime};
use savora_client::{Cart, ClientConfig, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let base_url =
        std::env::var("SAVORA_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
    let username = std::env::var("SAVORA_USER").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("SAVORA_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let mut client = ClientConfig::new(&base_url).build();
    let login = client.login(&username, &password).await?;

    let mut session = Session::new();
    session.set_login(&login, chrono::Utc::now());
    println!(
        "Logged in as {} ({}), {} unread notification(s)\n",
        login.user.name, login.user.role, login.notice_count
    );

    let menu = client.list_items().await?;
    println!("Menu ({} items):", menu.len());
    for item in &menu {
        println!(
            "  #{:<4} {:<24} {:>12}  {}",
            item.item_id,
            item.item_name,
            format_currency_decimal(item.price),
            if item.availability { "" } else { "(unavailable)" }
        );
    }

    let mut cart = Cart::new();
    for item in menu.into_iter().filter(|i| i.availability).take(2) {
        cart.add(item);
    }
    if cart.is_empty() {
        println!("\nNothing available to order.");
        return Ok(());
    }
    println!(
        "\nCart: {} line(s), total {}",
        cart.line_count(),
        format_currency_decimal(cart.total())
    );

    let link = client
        .checkout(&mut cart, login.user.user_id, "demo order")
        .await?;
    println!("Pay at: {}", link.checkout_url);

    println!("\nYour orders:");
    for order in client.list_my_orders().await? {
        println!(
            "  #{:<4} {}  {:<9} {}",
            order.order_id,
            format_datetime(order.order_date),
            order.status.label(),
            format_currency_decimal(order.total)
        );
    }

    Ok(())
}
