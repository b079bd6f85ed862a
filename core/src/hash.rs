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

//! Hash related utils.

use crate::Error;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha2::Sha256;

/// Base64 encode with the URL-safe alphabet and without padding.
pub fn base64_url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// Hex decode
///
/// Empty input decodes to an empty vec. Odd length or non-hex characters
/// return an [`ErrorKind::InvalidHexEncoding`](crate::ErrorKind::InvalidHexEncoding) error.
pub fn hex_decode(content: &str) -> crate::Result<Vec<u8>> {
    Ok(hex::decode(content)?)
}

/// HMAC with SHA256 hash over `salt` followed by `content`.
///
/// Both parts are fed into the same running MAC, so the result equals
/// `hmac_sha256(key, salt || content)` without concatenating them first.
pub fn salted_hmac_sha256(key: &[u8], salt: &[u8], content: &[u8]) -> crate::Result<Vec<u8>> {
    let mut h = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| Error::unexpected("hmac key rejected").with_source(anyhow::Error::msg(e)))?;
    h.update(salt);
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}
