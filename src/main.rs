use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use secrecy::ExposeSecret;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use aryma_agent::adapters::{
    ChatCompletionsConfig, ChatCompletionsProvider, FileContentRepository, HtmlTextExtractor,
    HttpPageFetcher,
};
use aryma_agent::application::{
    ChatSession, ConversationController, GeneratorSettings, ResponseGenerator, ScrapeSettings,
    ScrapeSiteHandler,
};
use aryma_agent::config::{AppConfig, LoggingConfig};
use aryma_agent::domain::content::ScrapedContent;
use aryma_agent::domain::conversation::CategoryResolver;
use aryma_agent::ports::{AIProvider, ContentRepository};

#[derive(Parser)]
#[command(name = "aryma-agent")]
#[command(about = "Answers questions about Aryma Labs offerings from its website", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Clone, Copy)]
enum Commands {
    /// Scrape the website and store the categorized content
    Scrape,
    /// Start an interactive conversation (default)
    Chat,
    /// Show statistics about the stored content
    Stats,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Scrape => scrape(&config).await,
        Commands::Chat => chat(&config).await,
        Commands::Stats => stats(&config).await,
    }
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }
}

async fn scrape(config: &AppConfig) -> anyhow::Result<()> {
    let fetcher = HttpPageFetcher::new(config.site.fetch_timeout(), config.site.user_agent.as_deref())?;
    let repository = FileContentRepository::new(&config.site.content_path);

    info!(url = %config.site.base_url, max_pages = config.site.max_pages, "starting scrape");
    let handler = ScrapeSiteHandler::new(
        Arc::new(fetcher),
        Arc::new(HtmlTextExtractor::new()),
        Arc::new(repository),
        ScrapeSettings::from_config(&config.site),
    );
    let result = handler.handle().await?;

    if result.used_fallback {
        println!("Website unreachable; stored built-in content instead.");
    }
    print_summary(&result.content);
    println!("Saved to {}", config.site.content_path.display());
    Ok(())
}

async fn stats(config: &AppConfig) -> anyhow::Result<()> {
    let repository = FileContentRepository::new(&config.site.content_path);
    match repository.load().await? {
        Some(content) => print_summary(&content),
        None => println!(
            "No scraped content at {}. Run `aryma-agent scrape` first.",
            config.site.content_path.display()
        ),
    }
    Ok(())
}

async fn chat(config: &AppConfig) -> anyhow::Result<()> {
    let store = FileContentRepository::new(&config.site.content_path)
        .load_store()
        .await;

    let settings = GeneratorSettings::from_config(&config.ai, &config.site.display_names);
    let generator = match config.ai.api_key.as_ref() {
        Some(key) if config.ai.has_api_key() => {
            let provider = ChatCompletionsProvider::new(
                ChatCompletionsConfig::new(key.expose_secret().clone())
                    .with_model(&config.ai.model)
                    .with_base_url(&config.ai.base_url)
                    .with_timeout(config.ai.timeout()),
            )?;
            ResponseGenerator::new(Some(Arc::new(provider) as Arc<dyn AIProvider>), settings)
        }
        _ => {
            info!("no API key configured, answering from templates");
            ResponseGenerator::without_provider(settings)
        }
    };

    let controller = ConversationController::new(
        Arc::new(store),
        CategoryResolver::with_policy(config.conversation.unresolved_policy),
        generator,
        &config.site.demo_url,
    );
    let mut session = ChatSession::new(Arc::new(controller));

    println!("Aryma Labs agent. Type /reset to start over, /quit to exit.\n");
    println!("Agent: {}\n", session.initial_question());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.trim() {
            "" => continue,
            "/quit" => break,
            "/reset" => {
                session.reset();
                println!("Agent: {}\n", session.initial_question());
            }
            input => {
                let reply = session.handle_turn(input).await;
                println!("Agent: {}\n", reply);
            }
        }
    }

    Ok(())
}

fn print_summary(content: &ScrapedContent) {
    let summary = content.summary();
    println!("Pages scraped: {}", summary.pages_scraped);
    println!("Links found:   {}", summary.links_found);
    println!("Sections:      {}", summary.section_count);
    for (topic, entries) in &content.categorized_content {
        println!("  {:<26} {} entries", topic.as_str(), entries.len());
    }
    if summary.populated_topics.is_empty() {
        println!("No topic has content yet.");
    }
}
