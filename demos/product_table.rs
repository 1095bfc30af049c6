//! Product screen walkthrough: search, dependent filters, sorting and paging
//!
//! Run with `RUST_LOG=catalog=debug cargo run --example product_table` to see
//! the collection and view logs.

use catalog::entities::seed;
use catalog::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_page(title: &str, page: &PaginatedResponse<Product>) {
    println!(
        "\n📋 {} (page {}/{}, {} matching)",
        title, page.pagination.page, page.pagination.total_pages, page.pagination.total
    );
    for product in &page.data {
        println!(
            "  #{:<3} {:<20} {:<12} {:<14} {:>8.0}",
            product.id.get(), product.name, product.category, product.sub_category, product.price
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🚀 Admin Catalog Product Table\n");

    let config = DashboardConfig::default_config();
    let screen = config.screen_for::<Product>()?;

    let service = InMemoryDataService::from_collection(Collection::with_records(
        screen.id_strategy,
        seed::products(),
    )?);
    let mut table = screen.table_state()?;

    // Search box: only the settled text reaches the table
    let debouncer: Debouncer<String> = screen.debouncer();
    let mut settled = debouncer.subscribe();
    for typed in ["t", "ta", "tab", "table"] {
        debouncer.push(typed.to_string());
    }
    settled.changed().await?;
    let term = settled.borrow().clone().unwrap_or_default();
    println!("🔎 Search settled on {:?}", term);

    table.set_search(term);
    println!("   suggestions: {:?}", table.suggestions(&service.list().await?));
    print_page("Search", &table.render(&service.list().await?));

    // Dependent filters
    table.set_search("");
    table.set_filter("category", "Electronics");
    println!(
        "\n🗂  Sub-categories for Electronics: {:?}",
        table
            .options(&service.list().await?, "sub_category")
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
    );
    table.set_filter("sub_category", "Laptops");
    print_page("Electronics / Laptops", &table.render(&service.list().await?));

    let cleared = table.set_filter("category", "Clothing");
    println!("\n♻️  Switching to Clothing cleared: {:?}", cleared);

    // Sorting
    table.set_sort(SortSpec::parse("price:desc,name:asc"));
    print_page("Clothing by price", &table.render(&service.list().await?));

    // CRUD through the service, then the view is recomputed
    let jacket = service
        .list()
        .await?
        .into_iter()
        .find(|p| p.name == "Leather Jacket")
        .ok_or_else(|| anyhow::anyhow!("seed data has no leather jacket"))?;
    let mut cheaper = jacket.clone();
    cheaper.price = 5900.0;
    cheaper.touch();
    service.update(jacket.id, cheaper).await?;
    print_page("After price update", &table.render(&service.list().await?));

    table.reset();
    table.set_sort(SortSpec::parse("created_at:desc"));
    print_page("Newest first", &table.render(&service.list().await?));

    println!("\n✅ Done");
    Ok(())
}
