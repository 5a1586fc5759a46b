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
// Logger setup

use log::LevelFilter;

/// 初始化日志：默认 warn，`verbose` 时本 crate 输出 debug。
///
/// Used by both the CLI and the clipboard cleaner process. Returns false when a
/// logger was already installed.
pub fn init_logger(verbose: bool) -> bool {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if verbose {
        builder.filter_module("pwforge", LevelFilter::Debug);
    }
    builder.format_timestamp_secs().try_init().is_ok()
}
