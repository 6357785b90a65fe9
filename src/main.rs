use clap::Parser;
use course_ender::utils::{logger, validation::Validate};
use course_ender::{build_for_customer, CliConfig, EnderError, TomlConfig};

fn load_config(cli: &CliConfig) -> Result<TomlConfig, EnderError> {
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn fail(e: &EnderError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting course-ender");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    // 依客戶編號組裝選擇器與取消器；範例程式本身不會結束任何療程
    let (preset, _ender) = build_for_customer(&config, cli.customer_number);

    tracing::info!(
        "✅ Course ender ready for customer {} (preset: {}, logger: {})",
        cli.customer_number,
        preset,
        config.logger.as_str()
    );
}
