use std::borrow::Cow;

use rmcp::ErrorData;
use rmcp::model::ErrorCode;

pub(crate) fn mcp_err(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> ErrorData {
    ErrorData {
        code,
        message: message.into(),
        data: None,
    }
}

/// Runs a member query on the blocking pool; queries read the CSV file synchronously.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T, ErrorData>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task).await.map_err(|err| {
        mcp_err(
            ErrorCode::INTERNAL_ERROR,
            format!("member query task failed: {err}"),
        )
    })
}
