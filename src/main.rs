use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

use stories::api;
use stories::cli::{Cli, Commands};
use stories::config::Config;
use stories::domain::PageRequest;
use stories::errors::StoriesResult;
use stories::logging;
use stories::services::ListingService;
use stories::sources::HackerNewsSource;
use stories::storage::MemoryStoryCache;

type Service = ListingService<HackerNewsSource, MemoryStoryCache>;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[tokio::main]
async fn run() -> StoriesResult<()> {
    let cli = Cli::parse();

    logging::init();

    // Load configuration
    let config = Config::from_env()?;

    // Wire the pipeline
    let source = HackerNewsSource::new(&config.upstream_url)?;
    let cache = MemoryStoryCache::with_capacity(config.cache_ttl, config.cache_capacity);
    let service = ListingService::new(source, cache).with_concurrency(config.fetch_concurrency);

    match cli.command {
        Commands::Serve { bind } => cmd_serve(service, bind.unwrap_or(config.bind)).await,
        Commands::List {
            page_index,
            page_size,
            title,
            json,
        } => {
            let mut request = PageRequest::new(page_index, page_size);
            request.title = title;
            cmd_list(service, &request, json).await
        }
    }
}

async fn cmd_serve(service: Service, bind: SocketAddr) -> StoriesResult<()> {
    let app = api::router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(bind).await?;
    tracing::info!(addr = %listener.local_addr()?, "serving stories API");

    api::serve(listener, app).await
}

async fn cmd_list(service: Service, request: &PageRequest, json: bool) -> StoriesResult<()> {
    let data = service.list_stories(request).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    if data.stories.is_empty() {
        println!("No stories found ({} matching in total).", data.total_stories);
        return Ok(());
    }

    let page = request.validate()?;
    let first = page.offset() + 1;

    for (i, story) in data.stories.iter().enumerate() {
        println!("  {}. {}", first + i, story.title);
        println!("     {}", story.url);
    }
    println!();
    println!(
        "Showing {}-{} of {}",
        first,
        first + data.stories.len() - 1,
        data.total_stories
    );

    Ok(())
}
