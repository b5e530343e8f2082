use clap::Parser;
use fortune_cookie::utils::{logger, validation::Validate};
use fortune_cookie::{FortuneRequest, FortuneService, RemoteFortuneClient, ServiceConfig};
use std::path::PathBuf;

/// 在命令列直接求一籤，不啟動伺服器
#[derive(Debug, Parser)]
#[command(name = "ask")]
#[command(about = "Ask the fortune cookie one question")]
struct AskArgs {
    #[arg(long, short)]
    question: String,

    #[arg(long, short)]
    mood: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    config: Option<PathBuf>,

    #[arg(long, help = "Skip the remote service and use the local bank")]
    offline: bool,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = AskArgs::parse();
    logger::init_cli_logger(args.verbose);

    let mut config = ServiceConfig::load(args.config.as_deref())?;
    config.validate()?;
    if args.offline {
        config.remote.api_key = None;
    }

    let service = FortuneService::new(RemoteFortuneClient::new(config.remote));
    let request = FortuneRequest {
        question: Some(args.question),
        mood: args.mood,
    };

    match service.tell(request).await {
        Ok(result) => {
            println!("{}", result.to_pretty_json()?);
            Ok(())
        }
        Err(e) if e.is_validation() => {
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}
