use super::*;
use crate::args::parsers::parse_bool_env;
use crate::error::{AppError, AppResult};
use std::time::Duration;

mod values;
