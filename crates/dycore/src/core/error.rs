use thiserror::Error;

/// Centralized error type for the scraping pipeline
///
/// Every variant is fatal to the call that produced it; nothing is retried and
/// no partial record is returned. Fields that are merely absent from a page
/// are not errors and never show up here.
///
/// # Example
///
/// ```no_run
/// use dycore::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error ({}): {}", err.category(), err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// The input text contains no `v.douyin.com` short link
    #[error("No Douyin short link found in input")]
    LinkNotFound,

    /// The page was fetched but carries no statistics block
    #[error("No stats found in the response")]
    StatsNotFound,

    /// The page was fetched but carries no play address (galleries included)
    #[error("Video ID not found in page")]
    VideoIdNotFound,

    /// Network failure while fetching the page
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Short machine-friendly name, used in logs
    pub fn category(&self) -> &'static str {
        match self {
            AppError::LinkNotFound => "link_not_found",
            AppError::StatsNotFound => "stats_not_found",
            AppError::VideoIdNotFound => "video_id_not_found",
            AppError::Transport(_) => "transport",
            AppError::Config(_) => "config",
        }
    }

    /// Whether the page was fetched but lacked a required pattern
    pub fn is_page_error(&self) -> bool {
        matches!(self, AppError::StatsNotFound | AppError::VideoIdNotFound)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
