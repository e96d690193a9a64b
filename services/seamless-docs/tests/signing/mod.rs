// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::TimeZone;
use chrono::Utc;
use seamsign_core::time::{DateTime, FixedTimestamp, TimestampFormat, TimestampSource};
use seamsign_core::{Context, Result};

mod properties;
mod scenarios;

/// 2024-01-01T00:00:00Z
pub const NEW_YEAR: i64 = 1_704_067_200;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn at(secs: i64) -> DateTime {
    Utc.timestamp_opt(secs, 0).unwrap()
}

/// Context pinned at the given unix time.
pub fn fixed_ctx(secs: i64) -> Context {
    Context::new().with_timestamp_source(FixedTimestamp::new(at(secs)))
}

/// TimestampSource that moves one second forward on every call.
#[derive(Debug)]
pub struct TickingTimestamp(AtomicI64);

impl TickingTimestamp {
    pub fn starting_at(secs: i64) -> Self {
        Self(AtomicI64::new(secs))
    }
}

impl TimestampSource for TickingTimestamp {
    fn generate_timestamp(&self, format: TimestampFormat) -> Result<String> {
        let secs = self.0.fetch_add(1, Ordering::SeqCst);
        format.format(at(secs))
    }
}
