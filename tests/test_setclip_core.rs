use anyhow::{Result, anyhow};
use log::Level;
use pwforge::configtool::AppConfig;
use pwforge::logging::init_logger;
use pwforge::setclip::*;
use std::env;

// 内存剪贴板
struct MemoryText {
    content: String,
    fail_write: bool,
}

impl ClipboardText for MemoryText {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.content.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.fail_write {
            return Err(anyhow!("clipboard is owned by another process"));
        }
        self.content = text.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 只在此文件内修改环境变量，避免与其他测试并发冲突
    #[test]
    fn test_daemon_mode_detection_and_missing_secret() {
        unsafe {
            env::remove_var(DAEMON_ENV);
            env::remove_var(SECRET_ENV);
        }
        assert!(!is_daemon());

        unsafe {
            env::set_var(DAEMON_ENV, "1");
        }
        assert!(is_daemon());
        // 没有密钥时守护进程直接报错退出，不会进入等待
        assert!(run_daemon().is_err());

        unsafe {
            env::remove_var(DAEMON_ENV);
        }
        assert!(!is_daemon());
    }

    #[test]
    fn test_clear_when_unchanged() {
        let mut ctx = MemoryText { content: "s3cret!".to_string(), fail_write: false };
        assert!(clear_if_unchanged(&mut ctx, "s3cret!").unwrap());
        assert_eq!(ctx.content, "");
    }

    #[test]
    fn test_leave_changed_clipboard_alone() {
        let mut ctx = MemoryText { content: "something else".to_string(), fail_write: false };
        assert!(!clear_if_unchanged(&mut ctx, "s3cret!").unwrap());
        assert_eq!(ctx.content, "something else");
    }

    #[test]
    fn test_clear_failure_is_reported() {
        let mut ctx = MemoryText { content: "s3cret!".to_string(), fail_write: true };
        let err = clear_if_unchanged(&mut ctx, "s3cret!").unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("failed to clear clipboard"));
        assert!(message.contains("owned by another process"));
        assert_eq!(ctx.content, "s3cret!");
    }

    #[test]
    fn test_cleaner_logger_shows_warnings() {
        // 清理进程与 CLI 共用同一套日志初始化，warn 级别必须可见
        let _ = init_logger(false);
        assert!(log::log_enabled!(target: "pwforge::setclip", Level::Warn));
        assert!(!init_logger(false));
    }

    #[test]
    fn test_default_clear_delay_shared_with_config() {
        assert_eq!(AppConfig::default().clipboard_clear_seconds, DEFAULT_CLEAR_SECONDS);
        assert_eq!(DEFAULT_CLEAR_SECONDS, 30);
    }
}
