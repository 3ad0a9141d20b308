use crate::args::ProbeArgs;
use crate::domain::{ProbeConfig, StatusPolicy};
use crate::error::{AppError, AppResult, ValidationError};

pub(crate) fn to_probe_config(args: &ProbeArgs) -> AppResult<ProbeConfig> {
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;

    let config = ProbeConfig::new(
        url,
        args.requests_per_second,
        args.max_requests,
        args.timeout,
        args.user_agent.clone(),
        StatusPolicy::from_fail_flag(args.fail_on_error_status),
    )?;
    Ok(config)
}
