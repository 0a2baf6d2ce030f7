// SPDX-License-Identifier: MIT
// web/flash.rs — One-shot user feedback carried across the POST→redirect→GET hop.
//
// No server-side session store: messages ride in a signed cookie.
// Value format: base64url(JSON array of messages) + "." + HMAC-SHA256 hex.
// A missing, malformed, or tampered cookie reads as "no messages".

use anyhow::Result;
use axum::http::{header, HeaderMap};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Cookie that carries flash messages between requests.
pub const FLASH_COOKIE: &str = "taskd_flash";

/// Set-Cookie value that removes the flash cookie after it has been shown.
pub const CLEAR_COOKIE: &str = "taskd_flash=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0";

/// Severity of a flash message; selects the style it renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
    Error,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Info => "info",
            FlashLevel::Error => "error",
        }
    }
}

/// A single transient message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub text: String,
}

impl Flash {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            text: text.into(),
        }
    }
}

/// Serialize and sign messages into the cookie value (`payload.signature`).
pub fn seal(flashes: &[Flash], secret: &[u8]) -> Result<String> {
    let json = serde_json::to_vec(flashes)?;
    let payload = URL_SAFE_NO_PAD.encode(json);
    let mut mac = HmacSha256::new_from_slice(secret)?;
    mac.update(payload.as_bytes());
    let sig = hex::encode(mac.finalize().into_bytes());
    Ok(format!("{payload}.{sig}"))
}

/// Verify and deserialize a cookie value. Any defect — bad split, bad hex,
/// wrong signature, bad JSON — reads as `None`.
pub fn open(value: &str, secret: &[u8]) -> Option<Vec<Flash>> {
    let (payload, sig_hex) = value.split_once('.')?;
    let sig = hex::decode(sig_hex).ok()?;
    let mut mac = HmacSha256::new_from_slice(secret).ok()?;
    mac.update(payload.as_bytes());
    // verify_slice is constant-time.
    mac.verify_slice(&sig).ok()?;
    let json = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&json).ok()
}

/// Full Set-Cookie value carrying `flashes`. Expires after one minute so a
/// message that never gets rendered disappears on its own.
pub fn set_cookie(flashes: &[Flash], secret: &[u8]) -> Result<String> {
    let value = seal(flashes, secret)?;
    Ok(format!(
        "{FLASH_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax; Max-Age=60"
    ))
}

/// Extract and verify flash messages from a request's Cookie header.
pub fn from_headers(headers: &HeaderMap, secret: &[u8]) -> Vec<Flash> {
    let Some(cookies) = headers.get(header::COOKIE).and_then(|v| v.to_str().ok()) else {
        return Vec::new();
    };
    for pair in cookies.split(';') {
        if let Some((name, value)) = pair.trim().split_once('=') {
            if name == FLASH_COOKIE {
                return open(value, secret).unwrap_or_default();
            }
        }
    }
    Vec::new()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
