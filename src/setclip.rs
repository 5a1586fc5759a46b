//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{Context, Result, anyhow};
use arboard::Clipboard;
use log::{debug, warn};
use std::{env, process, thread, time::Duration};

pub const DAEMON_ENV: &str = "PWFORGE_CLIPBOARD_DAEMON";
pub const SECRET_ENV: &str = "PWFORGE_CLIPBOARD_SECRET";
pub const DELAY_ENV: &str = "PWFORGE_CLIPBOARD_DELAY";

/// Seconds before a copied secret is cleared.
pub const DEFAULT_CLEAR_SECONDS: u64 = 30;

/// Where a generated password can be handed off to.
pub trait ClipboardSink {
    fn copy_secret(&mut self, secret: &str) -> Result<()>;
}

/// 系统剪贴板，复制后由后台进程在延迟后清空
pub struct SystemClipboard {
    clear_after: u64,
}

impl SystemClipboard {
    pub fn new(clear_after: u64) -> Self {
        Self { clear_after }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy_secret(&mut self, secret: &str) -> Result<()> {
        let mut ctx = Clipboard::new().context("Failed to open clipboard")?;
        ctx.set_text(secret).context("Failed to write clipboard")?;
        if self.clear_after > 0 {
            spawn_daemon(secret, self.clear_after)?;
        }
        Ok(())
    }
}

fn spawn_daemon(secret: &str, delay: u64) -> Result<()> {
    let exe_path = env::current_exe().context("Failed to locate current executable")?;
    let mut cmd = process::Command::new(exe_path);
    cmd.env(DAEMON_ENV, "1")
       .env(SECRET_ENV, secret)
       .env(DELAY_ENV, delay.to_string())
       .stdin(process::Stdio::null())
       .stdout(process::Stdio::null())
       .stderr(process::Stdio::inherit());

    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        cmd.process_group(0);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        cmd.creation_flags(0x08000000); // CREATE_NO_WINDOW
    }

    cmd.spawn().context("Failed to start clipboard cleaner")?;
    debug!("clipboard cleaner scheduled in {}s", delay);
    Ok(())
}

/// True when this process was started as the clipboard cleaner.
pub fn is_daemon() -> bool {
    env::var_os(DAEMON_ENV).is_some()
}

/// Body of the cleaner process: wait, then clear only if the clipboard still
/// holds the secret. Failures are returned so the process exits non-zero.
pub fn run_daemon() -> Result<()> {
    let secret = env::var(SECRET_ENV).context("Missing clipboard secret")?;
    let delay: u64 = env::var(DELAY_ENV)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_CLEAR_SECONDS);
    thread::sleep(Duration::from_secs(delay));

    let mut ctx = Clipboard::new().map_err(|e| {
        warn!("clipboard cleaner could not open clipboard: {}", e);
        anyhow!("Clipboard cleaner could not open clipboard: {}", e)
    })?;
    clear_if_unchanged(&mut ctx, &secret)?;
    Ok(())
}

/// Text access the cleaner needs from a clipboard.
pub trait ClipboardText {
    fn read_text(&mut self) -> Result<String>;
    fn write_text(&mut self, text: &str) -> Result<()>;
}

impl ClipboardText for Clipboard {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.get_text()?)
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        Ok(self.set_text(text)?)
    }
}

/// 剪贴板内容未变时清空，返回是否清空
pub fn clear_if_unchanged<C: ClipboardText>(ctx: &mut C, secret: &str) -> Result<bool> {
    let current_content = ctx.read_text().unwrap_or_default();
    if current_content != secret {
        debug!("clipboard changed since copy, left untouched");
        return Ok(false);
    }
    ctx.write_text("").map_err(|e| {
        warn!("clipboard cleaner failed to clear clipboard: {:#}", e);
        e.context("Clipboard cleaner failed to clear clipboard")
    })?;
    debug!("clipboard cleared");
    Ok(true)
}
