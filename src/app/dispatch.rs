use crate::app::backends::Backends;
use crate::cli::{Cli, Commands};
use crate::config::{Backend, Config};
use crate::error::EnjoError;
use crate::publish::TweetOptions;
use crate::simulator::ImageRequest;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Fold command-line overrides into `config`, then validate once.
pub fn resolve_config(cli: &Cli, mut config: Config) -> Result<Config> {
    if cli.stub {
        config.backend = Backend::Stub;
    }
    if let Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.gateway.host.clone_from(host);
        }
        if let Some(port) = port {
            config.gateway.port = *port;
        }
    }
    config.validate()?;
    Ok(config)
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    let config = Arc::new(resolve_config(&cli, config)?);

    if let Commands::Serve { .. } = cli.command {
        let host = config.gateway.host.clone();
        let port = config.gateway.port;
        if port == 0 {
            info!("Starting enjo gateway on {host} (random port)");
        } else {
            info!("Starting enjo gateway on {host}:{port}");
        }
        return crate::gateway::run_gateway(&host, port, Arc::clone(&config)).await;
    }

    let backends = Backends::from_config(&config)?;
    match cli.command {
        Commands::Serve { .. } => Ok(()),

        Commands::Rewrite { text, level } => {
            let result = backends.simulator.rewrite_and_explain(&text, level).await?;
            println!("{}", result.rewritten_text);
            println!();
            println!("--- explanation ---");
            println!("{}", result.explanation);
            Ok(())
        }

        Commands::Replies { text } => {
            let replies = backends.simulator.generate_replies(&text).await?;
            for reply in replies {
                println!("[{}] {}", reply.reply_type, reply.content);
            }
            Ok(())
        }

        Commands::Image {
            text,
            style,
            aspect_ratio,
            output,
        } => {
            let request = ImageRequest {
                text,
                style,
                aspect_ratio: Some(aspect_ratio),
            };
            let result = backends.simulator.generate_image(&request).await?;
            println!("prompt: {}", result.prompt_used);
            println!("generated at: {}", result.generated_at);
            match output {
                Some(path) => {
                    let bytes = crate::media::decode_data_url(&result.image_url)?;
                    tokio::fs::write(&path, &bytes)
                        .await
                        .with_context(|| format!("write image to {}", path.display()))?;
                    println!("wrote {} bytes to {}", bytes.len(), path.display());
                }
                None => println!("data URL: {} chars", result.image_url.len()),
            }
            Ok(())
        }

        Commands::Tweet {
            text,
            image,
            no_hashtag,
            no_disclaimer,
        } => {
            let poster = backends.poster.ok_or(EnjoError::PublishingDisabled)?;
            let options = TweetOptions {
                add_hashtag: !no_hashtag,
                add_disclaimer: !no_disclaimer,
            };
            let result = match image {
                Some(path) => {
                    let bytes = read_image(&path).await?;
                    poster.post_tweet_with_image(&text, &bytes, options).await?
                }
                None => poster.post_tweet(&text, options).await?,
            };
            println!("posted {}", result.url);
            Ok(())
        }
    }
}

async fn read_image(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("read image {}", path.display()))
}
