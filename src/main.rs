use clap::Parser;
use prefix_terms::utils::logger;
use prefix_terms::{CliConfig, CompletionEngine, OutputFormat, TermFile};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.format.as_deref() == Some("json") {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting prefix-terms CLI");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code().max(1));
        }
    };

    let source = TermFile::new(&settings.terms_path);
    let json = settings.format == OutputFormat::Json;
    let engine = CompletionEngine::new(source, settings);

    match engine.run() {
        Ok(report) => {
            print!("{}", report);
            if json {
                println!();
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code().max(1));
        }
    }
}
