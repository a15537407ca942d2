use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt};

pub mod commands;
pub mod error;
pub mod executor;
pub mod extensions;
pub mod files;
pub mod item;
pub mod remote;
pub mod report;
pub mod resolver;
pub mod retry;
pub mod sanitize;
pub mod traversal;

#[cfg(test)]
mod testing;

pub use error::{Error, RemoteError, Result};
pub use traversal::{mirror, MirrorOptions};

pub const TOKEN_ENV: &str = "DRIVE_DUMP_TOKEN";
const TOKEN_FILE: &str = ".drive_dump_token";

pub fn token_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .ok_or_else(|| Error::Config("HOME is not set, cannot locate the token file".to_owned()))?;
    let mut path = PathBuf::from(home);
    path.push(TOKEN_FILE);
    Ok(path)
}

/// Access token for the Drive API: `explicit`, then `$DRIVE_DUMP_TOKEN`,
/// then the token file. Prompts and stores the answer when none is found.
pub async fn get_token(explicit: Option<&str>) -> Result<String> {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(token.to_owned());
    }
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            return Ok(token.trim().to_owned());
        }
    }

    let token_path = token_path()?;
    if let Ok(d) = tokio::fs::read(&token_path).await {
        let token = String::from_utf8_lossy(&d).trim().to_owned();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let mut stdout = tokio::io::stdout();
    stdout.write_all(b"Paste the access token here: ").await?;
    stdout.flush().await?;
    let mut buf = String::new();
    tokio::io::BufReader::new(tokio::io::stdin())
        .read_line(&mut buf)
        .await?;
    let token = buf.trim().to_owned();
    if token.is_empty() {
        return Err(Error::Config("no access token given".to_owned()));
    }
    tokio::fs::write(&token_path, token.as_bytes()).await?;
    Ok(token)
}
