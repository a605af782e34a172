use clap::Parser;
use pathway_etl::config::toml_config::TomlConfig;
use pathway_etl::core::ConfigProvider;
use pathway_etl::utils::error::ErrorSeverity;
use pathway_etl::utils::{logger, validation::Validate};
use pathway_etl::{CliConfig, EtlEngine, LocalStorage, PathwayPipeline};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting pathway-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let exit_code = if let Some(path) = config.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        match TomlConfig::from_file(&path) {
            Ok(toml_config) => run_with(toml_config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                1
            }
        }
    } else {
        run_with(config)
    };

    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}

fn run_with<C: ConfigProvider + Validate>(config: C) -> i32 {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return 1;
    }

    let storage = LocalStorage::new(".".to_string());
    let pipeline = PathwayPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!("✅ Wrote {} rows to {}", summary.rows, summary.output_path);
            0
        }
        Err(e) => {
            tracing::error!(
                "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            }
        }
    }
}
