use clap::Parser;
use small_demo::utils::{logger, validation::Validate};
use small_demo::{CliConfig, DemoEngine, DemoReport, TomlConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting small-demo CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading scenario from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(config) => {
                    if let Err(e) = config.validate() {
                        tracing::error!("❌ Configuration validation failed: {}", e);
                        eprintln!("❌ {}", e.user_friendly_message());
                        std::process::exit(1);
                    }
                    DemoEngine::new(config).run()
                }
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => DemoEngine::new(cli.clone()).run(),
    };

    match result {
        Ok(report) => {
            tracing::info!("✅ Demo run completed successfully!");
            print_report(&report, cli.json)?;
        }
        Err(e) => {
            tracing::error!("❌ Demo run failed: {} (Severity: {:?})", e, e.severity());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                small_demo::utils::error::ErrorSeverity::Low => 0,
                small_demo::utils::error::ErrorSeverity::Medium => 2,
                small_demo::utils::error::ErrorSeverity::High => 1,
                small_demo::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn print_report(report: &DemoReport, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        for line in report.render_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}
