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

//! Static metadata describing the signer to a host integration.

use serde::Serialize;

/// Kind of value a host should collect for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InputKind {
    /// Free-form string.
    String,
}

/// One user-facing input declared by the signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Label shown to end users.
    pub label: &'static str,
    /// Value kind.
    #[serde(rename = "type")]
    pub kind: InputKind,
}

/// Registration data for a host that exposes the signer as a dynamic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Stable identifier.
    pub id: &'static str,
    /// Human readable title.
    pub title: &'static str,
    /// Inputs the host must collect before evaluating.
    pub inputs: &'static [InputDescriptor],
}

/// Descriptor of the Seamless Docs signer.
///
/// The single `secret` input maps to [`crate::Credential::secret_key`].
pub const DESCRIPTOR: Descriptor = Descriptor {
    id: "com.luckymarmot.PawExtensions.SeamlessDynamicValue",
    title: "Seamless Docs API Authentication",
    inputs: &[InputDescriptor {
        name: "secret",
        label: "Seamless Secret Key",
        kind: InputKind::String,
    }],
};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_descriptor_json() {
        let value = serde_json::to_value(DESCRIPTOR).expect("descriptor must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "com.luckymarmot.PawExtensions.SeamlessDynamicValue",
                "title": "Seamless Docs API Authentication",
                "inputs": [
                    {"name": "secret", "label": "Seamless Secret Key", "type": "String"}
                ]
            })
        );
    }
}
