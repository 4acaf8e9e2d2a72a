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

//! RON based configuration loading.
//!
//! Configs are looked up in this order:
//!   1. the explicit path (if it is an existing file)
//!   2. `$SWATH_CONFIG_DIR/<filename>`
//!   3. `./configs/<filename>`
//!
//! Tools normally fall back to `Default` values if there is no config at all, which is why
//! `load_config_or_default` exists.

use std::{env, fs, path::{Path,PathBuf}};
use serde::de::DeserializeOwned;
use crate::errors::{Result,SwathCommonError};

pub const CONFIG_DIR_ENV: &'static str = "SWATH_CONFIG_DIR";
pub const CONFIGS: &'static str = "configs";

pub fn find_config_file (path: impl AsRef<Path>)->Option<PathBuf> {
    let path = path.as_ref();
    if path.is_file() {
        return Some( path.to_path_buf())
    }

    let filename = path.file_name()?;

    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let p = Path::new(&dir).join(filename);
        if p.is_file() { return Some(p) }
    }

    let p = Path::new(CONFIGS).join(filename);
    if p.is_file() { Some(p) } else { None }
}

pub fn load_config<C> (path: impl AsRef<Path>)->Result<C> where C: DeserializeOwned {
    let path = path.as_ref();
    match find_config_file( path) {
        Some(p) => config_from_ron_file( &p),
        None => Err( SwathCommonError::ConfigNotFound( path.display().to_string()))
    }
}

/// an explicitly given path has to resolve to a parsable config, no path means `C::default()`
pub fn load_config_or_default<C> (path: Option<impl AsRef<Path>>)->Result<C> where C: DeserializeOwned + Default {
    if let Some(path) = path {
        load_config( path)
    } else {
        Ok( C::default())
    }
}

pub fn config_from_ron_file<C> (path: &Path)->Result<C> where C: DeserializeOwned {
    let data = fs::read_to_string( path)?;
    config_from_ron_str( &data)
}

pub fn config_from_ron_str<C> (s: &str)->Result<C> where C: DeserializeOwned {
    Ok( ron::from_str(s)? )
}
