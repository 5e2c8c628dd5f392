use anyhow::bail;
use clap::Subcommand;
use serde_json::json;

use crate::auth::TokenSigner;
use crate::cli::{utils::output_success, OutputFormat};
use crate::config::AppConfig;

#[derive(Subcommand)]
pub enum TokenCommands {
    #[command(about = "Verify a session token with JWT_SECRET and show its identity")]
    Inspect {
        #[arg(help = "Token (cookie value or bearer credential)")]
        token: String,
    },
}

pub fn handle(cmd: TokenCommands, config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        TokenCommands::Inspect { token } => {
            let signer = TokenSigner::from_config(&config.security);
            if !signer.is_configured() {
                bail!("JWT_SECRET is not set");
            }

            let token = token.trim().trim_start_matches("Bearer ").trim();
            match signer.verify(token) {
                Some(identity) => output_success(
                    output_format,
                    "Token is valid",
                    Some(json!({ "role": identity.role, "email": identity.email })),
                ),
                None => output_success(
                    output_format,
                    "Token is invalid or expired (anonymous)",
                    Some(json!({ "anonymous": true })),
                ),
            }
        }
    }
}
