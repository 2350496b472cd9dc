use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use oss_attachments::{
    AppBuilder, AttachmentType, OptionsBackend, StorageBackend, UploadFile,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "oss-attachments")]
#[command(about = "Upload and delete attachments in Aliyun OSS", long_about = None)]
struct Cli {
    /// Storage backend type
    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value = "aliyun")]
    backend: Backend,

    /// JSON file holding the oss_ali_* options; environment variables are used when unset
    #[arg(long, env = "OSS_OPTIONS_FILE")]
    options_file: Option<PathBuf>,

    /// Prefix of the environment variables holding the options
    #[arg(long, env = "OSS_OPTIONS_PREFIX")]
    env_prefix: Option<String>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    Aliyun,
    Memory,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a local file
    Upload {
        /// File path to upload
        file: PathBuf,
        /// Content type; guessed from the file extension when omitted
        #[arg(short, long)]
        content_type: Option<String>,
        /// Fail instead of printing an empty result when the upload fails
        #[arg(long)]
        strict: bool,
    },

    /// Delete an object by key
    Delete {
        /// Object key
        key: String,
    },
}

impl Cli {
    fn to_app_builder(&self) -> AppBuilder {
        let storage_backend = match self.backend {
            Backend::Aliyun => StorageBackend::AliyunOss,
            Backend::Memory => StorageBackend::InMemory,
        };

        let options_backend = match &self.options_file {
            Some(path) => OptionsBackend::JsonFile { path: path.clone() },
            None => OptionsBackend::Environment {
                prefix: self.env_prefix.clone(),
            },
        };

        AppBuilder::new()
            .with_storage_backend(storage_backend)
            .with_options_backend(options_backend)
    }

    fn init_logging(&self) -> Result<()> {
        let env_filter = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter)))
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

/// Content type for common attachment extensions
fn guess_content_type(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let content_type = match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "ico" => "image/x-icon",
        "svg" => "image/svg+xml",
        "txt" | "md" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "application/javascript",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "mp4" => "video/mp4",
        "mp3" => "audio/mpeg",
        _ => "application/octet-stream",
    };
    Some(content_type.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    info!("Storage backend: {:?}", cli.backend);

    let services = cli
        .to_app_builder()
        .build()
        .context("Failed to build application")?;

    match &cli.command {
        Commands::Upload {
            file,
            content_type,
            strict,
        } => {
            let content_type = content_type.clone().or_else(|| guess_content_type(file));
            let upload = UploadFile::from_path(file, content_type)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let result = if *strict {
                services.aliyun_handler.try_upload(upload).await?
            } else {
                services
                    .file_handlers
                    .upload(upload, AttachmentType::AliOss)
                    .await?
            };

            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Delete { key } => {
            services
                .file_handlers
                .delete(key, AttachmentType::AliOss)
                .await?;
            println!("Deleted {}", key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "oss-attachments",
            "--backend",
            "memory",
            "--options-file",
            "/etc/halo/oss.json",
            "upload",
            "logo.png",
            "--strict",
        ]);

        assert_eq!(cli.backend, Backend::Memory);
        assert_eq!(cli.options_file, Some(PathBuf::from("/etc/halo/oss.json")));
        match cli.command {
            Commands::Upload { file, strict, .. } => {
                assert_eq!(file, PathBuf::from("logo.png"));
                assert!(strict);
            }
            _ => panic!("Expected upload command"),
        }
    }

    #[test]
    fn test_delete_parsing() {
        let cli = Cli::parse_from(["oss-attachments", "delete", "logo_1712345678901.png"]);
        match cli.command {
            Commands::Delete { key } => assert_eq!(key, "logo_1712345678901.png"),
            _ => panic!("Expected delete command"),
        }
    }

    #[test]
    fn test_guess_content_type() {
        assert_eq!(
            guess_content_type(Path::new("a/logo.PNG")),
            Some("image/png".to_string())
        );
        assert_eq!(
            guess_content_type(Path::new("notes.bin")),
            Some("application/octet-stream".to_string())
        );
        assert_eq!(guess_content_type(Path::new("Makefile")), None);
    }
}
