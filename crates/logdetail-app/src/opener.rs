//! Opening field links in the system browser

use std::process::{Command, Stdio};

use logdetail_core::prelude::*;
use url::Url;

/// Normalise an href for the browser.
///
/// Links with an `http`/`https` scheme are returned unchanged; anything else
/// (`localhost:3210/x`, `tempo/trace/1`) is treated as a host path and
/// prefixed with `http://`.
pub fn normalize_href(href: &str) -> String {
    let href = href.trim();
    match Url::parse(href) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => href.to_string(),
        _ => format!("http://{}", href),
    }
}

/// Open `href` with `browser`, or the platform opener when it is empty.
///
/// The process is detached and never waited on. Returns the normalised URL.
pub fn open_link(href: &str, browser: &str) -> Result<String> {
    if href.trim().is_empty() {
        return Err(Error::link_open(href, "link is empty"));
    }

    let url = normalize_href(href);
    spawn_opener(&url, browser).map_err(|e| Error::link_open(&url, e.to_string()))?;
    info!("Opened link {}", url);
    Ok(url)
}

fn spawn_opener(url: &str, browser: &str) -> std::io::Result<()> {
    let mut command = if !browser.is_empty() {
        let mut command = Command::new(browser);
        command.arg(url);
        command
    } else {
        platform_command(url)
    };

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
