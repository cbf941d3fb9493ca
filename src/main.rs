use clap::Parser;
use farm_catalog::utils::{logger, validation::Validate};
use farm_catalog::{Catalog, Category, CliConfig, ConfigProvider, FileConfig, HttpCatalogSource, Role};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // --config 指定 TOML 檔案時改用檔案設定
    match cli.config.clone() {
        Some(path) => {
            let config = match FileConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };

            // 初始化日誌
            logger::init_cli_logger(cli.verbose || config.verbose());
            tracing::info!("Starting farm-catalog CLI");
            tracing::info!("📁 Loaded configuration from: {}", path);

            run(config).await
        }
        None => {
            logger::init_cli_logger(cli.verbose);
            tracing::info!("Starting farm-catalog CLI");

            run(cli).await
        }
    }
}

async fn run<C>(config: C) -> Result<(), Box<dyn std::error::Error>>
where
    C: ConfigProvider + Validate + std::fmt::Debug,
{
    tracing::debug!("Config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = Catalog::new(HttpCatalogSource::new(config));

    // 第一個查詢觸發載入;失敗時對使用者顯示錯誤狀態
    let items = match catalog.listings_with_owner().await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!("❌ Catalog load failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let growers = catalog.users_by_role(Role::Grower).await?;
    let hosts = catalog.users_by_role(Role::VerifiedHost).await?;
    let buyers = catalog.users_by_role(Role::Buyer).await?;
    let surplus = catalog
        .listings_by_category(Category::SurplusReduction)
        .await?;

    println!("✅ Catalog loaded: {} listings", items.len());
    println!(
        "👥 Users: {} growers, {} verified hosts, {} buyers",
        growers.len(),
        hosts.len(),
        buyers.len()
    );
    println!("♻️  Surplus-reduction offers: {}", surplus.len());
    println!();

    for item in &items {
        let badge = item.listing.ui_badge.as_deref().unwrap_or("");
        println!(
            "📦 {:<30} ${:>7.2}  MOQ {:>3}  by {} {}",
            item.listing.title, item.listing.price, item.listing.moq, item.owner.name, badge
        );
    }

    Ok(())
}
