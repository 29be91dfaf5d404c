//! Console configuration

use std::path::PathBuf;

/// 控制台配置 - 管理面板的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | PANEL_API_URL | http://localhost:5000 | 后端 API 地址 |
/// | WORK_DIR | ./panel_data | 工作目录 (会话文件、导出的报表) |
/// | REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
#[derive(Debug, Clone)]
pub struct Config {
    /// 后端 API 地址
    pub api_url: String,
    /// 工作目录，存储会话令牌和导出的报表
    pub work_dir: String,
    /// 请求超时时间 (秒)
    pub request_timeout_secs: u64,
    /// 日志级别: trace | debug | info | warn | error
    pub log_level: String,
    /// 是否使用 JSON 格式日志
    pub log_json: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("PANEL_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".into()),
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./panel_data".into()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 会话令牌文件路径
    pub fn session_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(panel_client::session::SESSION_FILE_NAME)
    }

    /// 导出报表目录
    pub fn reports_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("reports")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
