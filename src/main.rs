use clap::Parser;
use internal_domain_sync::utils::{logger, validation::Validate};
use internal_domain_sync::{
    CliArgs, CsvFileSource, EnvConfig, HttpRegistry, Reconciler, RemoteListSource, SyncEngine,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.daemon {
        logger::init_daemon_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting internal-domain-sync");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 載入並驗證環境設定
    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration loading failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 組裝來源與註冊表
    let registry = HttpRegistry::new(
        &config.api_base,
        &config.org_id,
        config.api_key.clone(),
        config.api_secret.clone(),
    );
    tracing::debug!("Registry endpoint: {}", registry.endpoint());
    let mut reconciler = Reconciler::new(registry);

    if let Some(path) = &config.domain_csv {
        reconciler.add_source(Box::new(CsvFileSource::new(path.clone())));
    }
    if let Some(url) = &config.domain_url {
        reconciler.add_source(Box::new(RemoteListSource::new(url.clone())));
    }
    if !config.has_source() {
        tracing::warn!("⚠️ Neither DOMAIN_CSV nor DOMAIN_URL is set; the desired set is empty");
    }

    let engine = SyncEngine::new(reconciler);

    let result = if args.daemon {
        match config.daemon_interval() {
            Ok(interval) => {
                let shutdown = Box::pin(async {
                    let _ = tokio::signal::ctrl_c().await;
                });
                engine.run_daemon(interval, shutdown).await
            }
            Err(e) => Err(e),
        }
    } else {
        engine.run_once().await.map(|_| ())
    };

    match result {
        Ok(()) => {
            tracing::info!("✅ internal-domain-sync finished");
            println!("✅ Sync completed successfully");
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
