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

// Env values used in imgproxy services.
pub const IMGPROXY_BASE_URL: &str = "IMGPROXY_BASE_URL";
pub const IMGPROXY_KEY: &str = "IMGPROXY_KEY";
pub const IMGPROXY_SALT: &str = "IMGPROXY_SALT";
pub const IMGPROXY_SIGNATURE_SIZE: &str = "IMGPROXY_SIGNATURE_SIZE";
pub const IMGPROXY_ENCODE_PATH: &str = "IMGPROXY_ENCODE_PATH";

// Signature placeholder used when neither key nor salt is configured.
pub const INSECURE_SIGNATURE: &str = "insecure";
// Prefix of a source locator that is not base64 encoded.
pub const PLAIN_PREFIX: &str = "plain/";

/// HMAC-SHA256 digest length, the upper bound of the signature size.
pub const MAX_SIGNATURE_SIZE: usize = 32;
/// Signature size used when none is configured.
pub const DEFAULT_SIGNATURE_SIZE: usize = MAX_SIGNATURE_SIZE;
