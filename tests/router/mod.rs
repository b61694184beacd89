//! End to end tests through the assembled router.
//!
//! These cover request extraction and error bodies that handler level tests cannot
//! reach, plus a full league flow across every resource.


use axum::http::{Method, StatusCode};
use football_test_utils::prelude::*;
use serde_json::json;

use crate::util::{read_json, send_empty, send_json, send_raw, TestContextExt};
