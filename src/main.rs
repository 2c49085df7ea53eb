use std::env;
use std::fs;
use std::process;

use vecgen::{logger, Config, GeminiClient, Pipeline, StyleResolver};

struct Args {
    prompt: String,
    style: String,
    reference: Option<String>,
    out: Option<String>,
}

fn parse_args() -> Option<Args> {
    let mut prompt = None;
    let mut style = "flat".to_string();
    let mut reference = None;
    let mut out = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => style = args.next()?,
            "--reference" => reference = Some(args.next()?),
            "--out" => out = Some(args.next()?),
            _ => prompt = Some(arg),
        }
    }

    Some(Args {
        prompt: prompt?,
        style,
        reference,
        out,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Debug),
    )?;

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let args = match parse_args() {
        Some(args) => args,
        None => {
            log::error!("Usage: vecgen <prompt> [--style <preset>] [--reference <file>] [--out <file>]");
            process::exit(2);
        }
    };

    log::info!("🔍 Checking environment...");
    match env::var("GOOGLE_API_KEY") {
        Ok(key) => {
            log::info!("✅ GOOGLE_API_KEY found in environment");
            log::debug!("API key starts with: {}...", &key[..5.min(key.len())]);
        }
        Err(_) => {
            log::warn!("⚠️  GOOGLE_API_KEY not set");
            log::error!("❌ Generation will fail without an API key");
        }
    }

    let config = Config::from_env();
    logger::log_config_info(&config);

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(config.gemini.clone()) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    let reference_bytes = match &args.reference {
        Some(path) => {
            log::info!("📎 Loading reference image: {}", path);
            Some(fs::read(path)?)
        }
        None => None,
    };

    let resolver = StyleResolver::new(config.style_assets.resolved_dir());
    let pipeline = Pipeline::new(client.image().clone(), resolver);

    log::info!("🎨 Generating vector illustration for: '{}'", args.prompt);

    let svg = match pipeline
        .run(&args.prompt, &args.style, reference_bytes.as_deref())
        .await
    {
        Ok(svg) => {
            log::info!("✅ Generation successful!");
            svg
        }
        Err(e) => {
            log::error!("❌ Generation failed: {}", e);
            return Err(e.into());
        }
    };

    let filename = args.out.unwrap_or_else(|| {
        format!("vecgen_{}.svg", chrono::Utc::now().timestamp())
    });

    fs::write(&filename, &svg)?;
    log::info!("💾 Vector document saved to: {}", filename);
    log::info!("📏 Output size: {} bytes", svg.len());

    Ok(())
}
