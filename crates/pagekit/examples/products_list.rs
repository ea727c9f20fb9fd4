//! Product listing host
//!
//! A console stand-in for a product list page:
//! - starts with no products while the catalogue "loads"
//! - receives a mock catalogue and renders it page by page
//! - drives next/back/jump through the navigator carried by each context
//!
//! Run with: cargo run -p pagekit --example products_list

use std::sync::Arc;
use std::time::Duration;

use pagekit::{Paginator, ViewContext, ViewUpdate};
use parking_lot::Mutex;

#[derive(Debug, Clone)]
struct Product {
    id: String,
    title: String,
    price_cents: u32,
}

#[derive(Debug, Clone, Copy)]
enum LoadDirection {
    Before,
    After,
}

fn mock_products() -> Vec<Product> {
    (1..=30)
        .map(|n| Product {
            id: format!("{n:08x}"),
            title: format!("Product {n}"),
            price_cents: 499 + n * 125,
        })
        .collect()
}

fn on_product_buy(id: &str) {
    tracing::info!(product = id, "buy clicked");
}

fn on_load(direction: LoadDirection) {
    tracing::info!(?direction, "load requested");
}

fn render(context: &ViewContext<Product>) {
    println!(
        "--- page {} of {} ({} products) ---",
        context.current_index() + 1,
        context.page_count(),
        context.source().len()
    );
    for product in context.current_page() {
        println!(
            "  {:<12} {:>8.2}  [{}]",
            product.title,
            f64::from(product.price_cents) / 100.0,
            product.id
        );
    }
    let controls: Vec<String> = context
        .page_indexes()
        .iter()
        .map(|&i| {
            if i == context.current_index() {
                format!("[{}]", i + 1)
            } else {
                format!(" {} ", i + 1)
            }
        })
        .collect();
    println!("  < {} >", controls.join(""));
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let paginator = Paginator::new();
    let last_context: Arc<Mutex<Option<ViewContext<Product>>>> = Arc::new(Mutex::new(None));

    let last_clone = last_context.clone();
    let _view = paginator.subscribe(move |update: &ViewUpdate<Product>| {
        match update {
            ViewUpdate::Render(context) => render(context),
            ViewUpdate::Clear => println!("--- (no products) ---"),
        }
        *last_clone.lock() = update.context().cloned();
    });

    // Nothing to show while loading.
    paginator.set_source(None);
    std::thread::sleep(Duration::from_millis(300));
    paginator.set_source(Some(mock_products().into()));

    let Some(context) = last_context.lock().clone() else {
        return;
    };
    let navigator = context.navigator();

    if let Some(product) = context.current_page().first() {
        on_product_buy(&product.id);
    }

    navigator.next();
    navigator.next(); // already on the last page
    on_load(LoadDirection::After);
    navigator.back();
    navigator.go_to_page(-3);
    on_load(LoadDirection::Before);
    navigator.go_to_page(7);

    paginator.clear_source();
}
