use anyhow::Context;
use clap::Parser;
use rocket_cart::core::messages::policy_for_locale;
use rocket_cart::core::{ConfigProvider, Notifier};
use rocket_cart::utils::{logger, validation::Validate};
use rocket_cart::{
    Cart, CartCommand, CartStore, CliConfig, ConsoleNotifier, ErrorCategory, HttpCatalog,
    KeyValueCartRepository, LocalStorage, TomlConfig, TracingNotifier, UpdateProductAmount,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let command = cli.command.clone();
    let exit_code = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?;
            run_with(&config, cli.json_logs, command).await?
        }
        None => run_with(&cli, cli.json_logs, command).await?,
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run_with<C: ConfigProvider + Validate>(
    config: &C,
    json_logs: bool,
    command: CartCommand,
) -> anyhow::Result<i32> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        return Ok(exit_code(e.category()));
    }

    if json_logs {
        run(config, TracingNotifier, command).await
    } else {
        run(config, ConsoleNotifier, command).await
    }
}

async fn run<C: ConfigProvider, N: Notifier>(
    config: &C,
    notifier: N,
    command: CartCommand,
) -> anyhow::Result<i32> {
    let catalog = HttpCatalog::new(
        config.api_endpoint(),
        Duration::from_secs(config.request_timeout_seconds()),
    )?;
    let storage = LocalStorage::new(config.storage_path().to_string());
    let repository = KeyValueCartRepository::with_key(storage, config.storage_key());

    let store = CartStore::init(catalog, repository, notifier)
        .await
        .context("Failed to load the stored cart")?
        .with_messages(policy_for_locale(config.locale())?);

    let result = match command {
        CartCommand::Show => Ok(()),
        CartCommand::Add { product_id } => store.add_product(product_id).await,
        CartCommand::Remove { product_id } => store.remove_product(product_id).await,
        CartCommand::Update { product_id, amount } => {
            store
                .update_product_amount(UpdateProductAmount { product_id, amount })
                .await
        }
    };

    print_cart(&store.cart().await);

    match result {
        Ok(()) => Ok(0),
        Err(e) => {
            tracing::info!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            Ok(exit_code(e.category()))
        }
    }
}

fn exit_code(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Configuration => 1,
        ErrorCategory::OutOfStock => 2,
        ErrorCategory::NotFound => 3,
        ErrorCategory::Network => 4,
        ErrorCategory::Persistence => 5,
    }
}

fn print_cart(cart: &Cart) {
    if cart.is_empty() {
        println!("🛒 Cart is empty");
        return;
    }

    println!(
        "🛒 Cart: {} product(s), {} item(s)",
        cart.len(),
        cart.total_items()
    );
    for product in cart {
        println!(
            "  #{:<6} {:<50} x{}",
            product.id,
            product.title().unwrap_or("-"),
            product.amount
        );
    }
}
