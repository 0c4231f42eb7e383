use crate::simulator::ImageStyle;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `enjo` - flame-war simulator for social media posts.
#[derive(Parser, Debug)]
#[command(name = "enjo")]
#[command(version)]
#[command(
    about = "Rewrite posts at a chosen controversy level, generate typical replies and images.",
    long_about = None
)]
pub struct Cli {
    /// Config file (default: ~/.enjo/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use deterministic in-process collaborators instead of Vertex AI
    #[arg(long, global = true)]
    pub stub: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Host to bind to (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (use 0 for random available port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Rewrite a post and explain why it provokes
    Rewrite {
        text: String,

        /// Controversy level (1-5)
        #[arg(short, long, default_value_t = 3)]
        level: i32,
    },

    /// Generate the four typical replies to a post
    Replies { text: String },

    /// Generate an image for a post
    Image {
        text: String,

        /// REALISTIC, ILLUSTRATION, MEME or DRAMATIC
        #[arg(long, value_parser = parse_style)]
        style: Option<ImageStyle>,

        /// 1:1, 3:4, 4:3, 9:16 or 16:9
        #[arg(long, default_value = "1:1")]
        aspect_ratio: String,

        /// Write the PNG here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Post to X (Twitter)
    Tweet {
        text: String,

        /// PNG or JPEG to attach
        #[arg(long)]
        image: Option<PathBuf>,

        #[arg(long)]
        no_hashtag: bool,

        #[arg(long)]
        no_disclaimer: bool,
    },
}

fn parse_style(value: &str) -> Result<ImageStyle, String> {
    match value.trim().to_ascii_uppercase().as_str() {
        "REALISTIC" => Ok(ImageStyle::Realistic),
        "ILLUSTRATION" => Ok(ImageStyle::Illustration),
        "MEME" => Ok(ImageStyle::Meme),
        "DRAMATIC" => Ok(ImageStyle::Dramatic),
        other => Err(format!(
            "unknown style '{other}' (expected REALISTIC, ILLUSTRATION, MEME or DRAMATIC)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn rewrite_defaults_to_level_three() {
        let cli = Cli::try_parse_from(["enjo", "rewrite", "今日はいい天気ですね"]).unwrap();
        match cli.command {
            Commands::Rewrite { text, level } => {
                assert_eq!(text, "今日はいい天気ですね");
                assert_eq!(level, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from(["enjo", "serve", "--port", "0", "--stub", "-v"]).unwrap();
        assert!(cli.stub);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Serve { port: Some(0), .. }));
    }

    #[test]
    fn style_is_case_insensitive() {
        let cli = Cli::try_parse_from(["enjo", "image", "炎上", "--style", "meme"]).unwrap();
        match cli.command {
            Commands::Image {
                style, aspect_ratio, ..
            } => {
                assert_eq!(style, Some(ImageStyle::Meme));
                assert_eq!(aspect_ratio, "1:1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn unknown_style_is_rejected() {
        assert!(Cli::try_parse_from(["enjo", "image", "x", "--style", "noir"]).is_err());
    }

    #[test]
    fn tweet_flags_parse() {
        let cli = Cli::try_parse_from(["enjo", "tweet", "hi", "--no-hashtag"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Tweet {
                no_hashtag: true,
                no_disclaimer: false,
                image: None,
                ..
            }
        ));
    }
}
