use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use colorcrc::checksum;
use colorcrc::models::{config::CONFIG_ENV, AppConfig, ColorBatch, OutputFormat};
use colorcrc::services::{self, CrcReport, VerifyReport};
use hsl_color::{ColorModel, Representation};

#[derive(Parser)]
#[command(name = "colorcrc")]
#[command(about = "RGB/HSL color conversion and CRC-8 checksums")]
struct Cli {
    /// Config file (YAML); defaults to $CONFIG_FILE
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the CRC-8 of some data
    Crc8 {
        /// Data to checksum
        data: String,

        /// Check byte to use instead of zero padding (decimal or 0x-hex)
        #[arg(short, long)]
        check: Option<String>,

        /// Treat DATA as hex digits instead of UTF-8 text
        #[arg(long)]
        hex: bool,
    },
    /// Verify data against a previously computed CRC-8
    Verify {
        /// Data to verify
        data: String,

        /// Expected CRC-8 (decimal or 0x-hex)
        crc: String,

        /// Treat DATA as hex digits instead of UTF-8 text
        #[arg(long)]
        hex: bool,
    },
    /// Convert an RGB color to HSL
    ToHsl {
        /// Either a hex color (e.g. "#404080") or three channels 0-255
        #[arg(num_args = 1..=3, required = true)]
        rgb: Vec<String>,
    },
    /// Convert an HSL color to RGB
    ToRgb {
        /// Hue in degrees
        #[arg(allow_negative_numbers = true)]
        hue: f64,

        /// Saturation 0.0-1.0
        saturation: f64,

        /// Lightness 0.0-1.0
        lightness: f64,
    },
    /// Convert a batch file (JSON or YAML) to another representation
    Convert {
        /// Batch file path
        file: PathBuf,

        /// Target representation: rgb or hsl
        #[arg(short, long)]
        to: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorcrc=warn,hsl_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let config_path = AppConfig::resolve_path(cli.config);
    let config =
        AppConfig::load_or_default(config_path.as_deref()).with_output_override(cli.format);

    match cli.command {
        Some(Commands::Crc8 { data, check, hex }) => run_crc8_command(&config, &data, check, hex),
        Some(Commands::Verify { data, crc, hex }) => run_verify_command(&config, &data, &crc, hex),
        Some(Commands::ToHsl { rgb }) => {
            let model = services::rgb_model(&rgb)?;
            print_colors(&config, &model.convert(Representation::Hsl))
        }
        Some(Commands::ToRgb {
            hue,
            saturation,
            lightness,
        }) => {
            let model = ColorModel::from_hsl(hue, saturation, lightness);
            print_colors(&config, &model.convert(Representation::Rgb))
        }
        Some(Commands::Convert { file, to }) => {
            let target: Representation = to.parse()?;
            let batch = services::convert_file(&file, target)?;
            println!("{}", services::render(&batch, &config)?);
            Ok(())
        }
        None => {
            run_status_command(&config, config_path);
            Ok(())
        }
    }
}

fn decode_data(config: &AppConfig, data: &str, hex: bool) -> anyhow::Result<Vec<u8>> {
    Ok(config.data_encoding(hex).decode(data)?)
}

fn run_crc8_command(
    config: &AppConfig,
    data: &str,
    check: Option<String>,
    hex: bool,
) -> anyhow::Result<()> {
    let bytes = decode_data(config, data, hex)?;
    let check = check.as_deref().map(services::parse_byte).transpose()?;

    let report = CrcReport::compute(&bytes, check);
    println!("{}", services::render(&report, config)?);
    Ok(())
}

fn run_verify_command(config: &AppConfig, data: &str, crc: &str, hex: bool) -> anyhow::Result<()> {
    let bytes = decode_data(config, data, hex)?;
    let check = services::parse_byte(crc)?;

    let report = VerifyReport::check(&bytes, check);
    println!("{}", services::render(&report, config)?);

    if !report.valid {
        std::process::exit(1);
    }
    Ok(())
}

fn print_colors(config: &AppConfig, model: &ColorModel) -> anyhow::Result<()> {
    let batch = ColorBatch::from_model(model);
    println!("{}", services::render(&batch, config)?);
    Ok(())
}

fn run_status_command(config: &AppConfig, config_path: Option<PathBuf>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("colorcrc v{VERSION}");
    println!("RGB/HSL color conversion and CRC-8 checksums\n");

    println!("Configuration:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("  output      = {:?}", config.output);
    println!("  precision   = {}", config.precision);
    println!("  encoding    = {:?}", config.encoding);

    println!("\nCRC-8:");
    println!("  polynomial  = 0x{:02X} (x^8 + x^7 + x^4 + x^3 + x + 1)", checksum::POLYNOMIAL);

    println!("\nRun 'colorcrc --help' for commands.");
}
