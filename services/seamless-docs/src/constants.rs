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

use seamsign_core::time::TimestampFormat;

// Env values used in seamless docs.
pub const SEAMLESS_SECRET_KEY: &str = "SEAMLESS_SECRET_KEY";

/// Query parameter carrying the signature.
pub const SIGNATURE_PARAM: &str = "Signature";

/// Timestamp format selector sent to the timestamp source on every signing.
pub const TIMESTAMP_FORMAT: TimestampFormat = TimestampFormat::ISO8601;
