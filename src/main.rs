use clap::Parser;
use persian_words::utils::{logger, validation::Validate};
use persian_words::{
    exit_code, BatchConverter, CliConfig, ConvertError, PersianNumberConverter, RecordWriter,
    Settings, TomlConfig,
};
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // the logger depends on the config file, so errors up to here go straight to stderr
    let file_config = match cli.config.as_deref().map(TomlConfig::from_file).transpose() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Some(config) = &file_config {
        if let Err(e) = config.validate() {
            exit_with(&e);
        }
    }

    let settings = match Settings::resolve(&cli, file_config.as_ref()) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if settings.json_logs {
        logger::init_json_logger(settings.log_level.as_deref(), cli.verbose);
    } else {
        logger::init_cli_logger(settings.log_level.as_deref(), cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Effective settings: {:?}", settings);

    let inputs: Vec<String> = if cli.numbers.is_empty() {
        tracing::debug!("reading numbers from stdin");
        io::stdin().lock().lines().collect::<io::Result<_>>()?
    } else {
        cli.numbers.clone()
    };

    let batch = BatchConverter::with_options(PersianNumberConverter::new(), settings.batch);
    let outcome = match batch.run(&inputs) {
        Ok(outcome) => outcome,
        Err(e) => exit_with(&e),
    };

    let mut writer = RecordWriter::new(
        io::stdout().lock(),
        io::stderr().lock(),
        settings.format,
        settings.include_input,
    );
    if let Err(e) = writer.write_all(&outcome.records) {
        exit_with(&e);
    }
    drop(writer);

    let code = exit_code(&outcome);
    if code != 0 {
        tracing::info!(
            failed = outcome.summary.failed,
            total = outcome.summary.total,
            "some inputs could not be converted"
        );
        std::process::exit(code);
    }

    Ok(())
}

fn exit_with(e: &ConvertError) -> ! {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1));
}
