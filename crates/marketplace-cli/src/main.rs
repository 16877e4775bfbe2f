use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use marketplace_auth::{TokenVerifier, create_token_at};
use marketplace_config::JwtConfig;

#[derive(Parser)]
#[command(name = "marketplace-cli")]
#[command(about = "Marketplace CLI - local tools for the request gate", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign a token with JWT_SECRET and print it
    Mint {
        /// Subject id to embed in the token
        #[arg(short = 's', long)]
        subject: String,

        /// Role tag (e.g. "admin", "seller"); omit for end users
        #[arg(short = 'r', long)]
        role: Option<String>,

        /// Lifetime in seconds; defaults to JWT_ACCESS_EXPIRY. Negative values mint expired tokens
        #[arg(short = 'e', long, allow_hyphen_values = true)]
        expires_in: Option<i64>,
    },
    /// Verify a token with JWT_SECRET and print its claims
    Inspect {
        /// The raw token
        token: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let jwt_config = JwtConfig::from_env().context("cannot load signing secret")?;

    match cli.command {
        Commands::Mint {
            subject,
            role,
            expires_in,
        } => {
            let expires_in = expires_in.unwrap_or(jwt_config.access_token_expiry);
            let now = Utc::now().timestamp();
            let token = create_token_at(&subject, role.as_deref(), now, expires_in, &jwt_config)?;
            println!("{token}");
        }
        Commands::Inspect { token } => {
            let verifier = TokenVerifier::new(&jwt_config);
            match verifier.verify(&token) {
                Ok(claims) => {
                    println!("sub:  {}", claims.sub);
                    println!("role: {}", claims.role.as_deref().unwrap_or("-"));
                    println!("iat:  {}", claims.iat);
                    println!("exp:  {}", claims.exp);
                }
                Err(e) => {
                    eprintln!("rejected: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
