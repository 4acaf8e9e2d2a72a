/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T,SwathTrackError>;

#[derive(Error,Debug)]
pub enum SwathTrackError {

    #[error("parse error {0}")]
    ParseError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("CSV error {0}")]
    CsvError( #[from] csv::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("common error {0}")]
    CommonError( #[from] swath_common::errors::SwathCommonError),

    #[error("axum error {0}")]
    AxumError( #[from] axum::Error),

    #[error("could not open fix source {0}: {1}")]
    SourceOpenError(String, std::io::Error),

    #[error("operation failed {0}")]
    OpFailedError(String)
}

pub fn op_failed (msg: impl ToString)->SwathTrackError {
    SwathTrackError::OpFailedError(msg.to_string())
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        SwathTrackError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
