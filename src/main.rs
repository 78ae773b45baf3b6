use anyhow::Result;
use clap::Parser;
use landscout::filters::{LandSearchFilters, SortBy, SortOrder};
use landscout::http_client;
use landscout::{Config, LandProperty, Scraper, SuumoLandScraper};

#[derive(Parser, Debug)]
#[command(name = "landscout")]
#[command(about = "Search Suumo for vacant land listings", long_about = None)]
struct Args {
    /// Region name, e.g. Tokyo, osaka
    #[arg(long)]
    prefecture: Option<String>,

    #[arg(long)]
    city: Option<String>,

    /// Minimum price in yen
    #[arg(long)]
    min_price: Option<u64>,

    /// Maximum price in yen
    #[arg(long)]
    max_price: Option<u64>,

    /// Minimum land area in m² (the site caps this at 150)
    #[arg(long)]
    min_area: Option<f64>,

    /// Maximum land area in m² (the site caps this at 150)
    #[arg(long)]
    max_area: Option<f64>,

    /// Maximum walk from the station in minutes
    #[arg(long)]
    max_walk_time: Option<u32>,

    #[arg(long, value_enum)]
    sort_by: Option<SortBy>,

    #[arg(long, value_enum)]
    sort_order: Option<SortOrder>,

    /// Results per page
    #[arg(long)]
    limit: Option<u32>,

    /// First page to fetch (1-indexed)
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Number of consecutive pages to fetch
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Print records as JSON instead of a text summary
    #[arg(long)]
    json: bool,

    /// Print the search URL and exit
    #[arg(long)]
    print_url: bool,

    /// Test URL fetching - fetch and print HTML from a URL
    #[arg(long)]
    test_url: Option<String>,

    /// Save HTML to file when using --test-url
    #[arg(long)]
    save_html: Option<String>,

    /// Write a starter data/config.yaml and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn filters(&self) -> LandSearchFilters {
        LandSearchFilters {
            prefecture: self.prefecture.clone(),
            city: self.city.clone(),
            min_price: self.min_price,
            max_price: self.max_price,
            min_area: self.min_area,
            max_area: self.max_area,
            max_walk_time: self.max_walk_time,
            sort_by: self.sort_by,
            sort_order: self.sort_order,
            page: None,
            limit: self.limit,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init_config {
        Config::create_default()?;
        eprintln!("Wrote {}", landscout::config::CONFIG_PATH);
        return Ok(());
    }

    // Load config first (before logging is initialized)
    let config = Config::load()?;

    init_logging(&config);

    if let Some(url) = args.test_url.as_deref() {
        return test_url_fetch(url, args.save_html.as_deref(), &config).await;
    }

    let filters = config.default_filters.clone().merged_with(args.filters());
    let scraper = SuumoLandScraper::from_config(&config)?;

    if args.print_url {
        println!("{}", scraper.search_url(&filters, args.page));
        return Ok(());
    }

    let properties = run_search(&scraper, &filters, args.page, args.pages, config.request_delay_ms).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
    } else {
        print_summaries(&properties);
    }

    Ok(())
}

fn init_logging(config: &Config) {
    // Use RUST_LOG env var if set, otherwise use config
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
        tracing::debug!("Logging level set from RUST_LOG environment variable");
        return;
    }

    let level = config.tracing_level.to_lowercase();
    let max_level = match level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => {
            eprintln!("Invalid tracing level '{}', using 'info'", level);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Logging level set to: {} (from {})", level, landscout::config::CONFIG_PATH);
}

/// Walk `pages` pages starting at `first_page`, stopping early at an empty page
async fn run_search(
    scraper: &dyn Scraper,
    filters: &LandSearchFilters,
    first_page: u32,
    pages: u32,
    request_delay_ms: u64,
) -> Vec<LandProperty> {
    let mut all = Vec::new();

    for offset in 0..pages.max(1) {
        let page = first_page.saturating_add(offset);
        if offset > 0 {
            // Be nice to the server - use configured delay
            tokio::time::sleep(tokio::time::Duration::from_millis(request_delay_ms)).await;
        }

        tracing::info!("Fetching page {} from {}", page, scraper.name());
        let mut properties = scraper.search(filters, page).await;
        tracing::info!("Found {} listings on page {}", properties.len(), page);

        if properties.is_empty() {
            break;
        }
        all.append(&mut properties);
    }

    all
}

fn print_summaries(properties: &[LandProperty]) {
    println!("Found {} listings", properties.len());
    println!("{}", "=".repeat(80));

    for (i, property) in properties.iter().enumerate() {
        println!("\nListing #{} ({})", i + 1, property.id);
        println!("{}", property.format_summary());
        println!("{}", "-".repeat(80));
    }

    if properties.is_empty() {
        println!("No listings found. This might mean:");
        println!("  - No listings match the search criteria");
        println!("  - The site structure has changed");
        println!("  - The request failed (run with RUST_LOG=debug for details)");
    }
}

/// Test URL fetching - downloads and prints HTML response
async fn test_url_fetch(url: &str, save_path: Option<&str>, config: &Config) -> Result<()> {
    println!("Testing URL fetch: {}", url);
    println!("{}", "=".repeat(80));
    println!("User-Agent: {}", config.user_agent);

    let client = http_client::create_http_client(&config.user_agent, config.timeout_secs)?;

    println!("Sending request...");
    let response = client.get(url).send().await?;

    println!("Status: {}", response.status());
    println!("\nResponse Headers:");
    for (name, value) in response.headers() {
        println!("  {}: {:?}", name, value);
    }

    println!("{}", "=".repeat(80));

    let body = response.text().await?;

    // Save to file if requested
    if let Some(path) = save_path {
        std::fs::write(path, &body)?;
        println!("HTML saved to: {}", path);
    } else {
        println!("Response body:");
        println!("{}", "=".repeat(80));
        println!("{}", body);
    }
    println!("{}", "=".repeat(80));

    println!("Total length: {} bytes", body.len());

    let listing_units = body.matches("property_unit\"").count();
    println!("Listing units found: {}", listing_units);

    Ok(())
}
