use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth bearer token scoped to user-library-read and playlist-modify-private.
    pub spotify_access_token: String,
    /// Credential for the optional text-generation refinement hook.
    /// Absence simply disables the hook.
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let spotify_access_token = env::var("SPOTIFY_ACCESS_TOKEN").map_err(|_| {
            AppError::Config(
                "SPOTIFY_ACCESS_TOKEN environment variable must be set. \
                Obtain one via the Spotify OAuth flow with scopes: \
                user-library-read playlist-modify-private"
                    .to_string(),
            )
        })?;

        Ok(Config {
            spotify_access_token,
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
        })
    }
}
