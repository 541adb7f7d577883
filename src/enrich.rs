// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::catalog::Catalog;
use crate::error::StatementError;
use crate::models::Company;
use crate::utils::http_client;
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use regex::Regex;
use serde::Deserialize;
use serde_json::json;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\d{3}\) \d{3}-\d{4}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Supplies supplier-company records to the synthesizer. The synthesizer
/// never branches on configuration; it just asks its provider.
pub trait CompanyProvider {
    /// Returns exactly `count` well-formed companies. Implementations must
    /// not fail: anything that cannot be sourced externally is filled from
    /// the catalog.
    fn companies(&self, count: usize, rng: &mut StdRng) -> Vec<Company>;
}

/// Shape constraints every company record must satisfy, whether it came
/// from the catalog or from the enrichment call-out.
pub fn is_well_formed(company: &Company) -> bool {
    !company.name.trim().is_empty()
        && company.address.lines().filter(|l| !l.trim().is_empty()).count() >= 2
        && PHONE_RE.is_match(&company.phone)
        && EMAIL_RE.is_match(&company.email)
}

/// Pool-sampling provider. The deterministic fallback for everything.
pub struct CatalogProvider<'a> {
    catalog: &'a Catalog,
}

impl<'a> CatalogProvider<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        CatalogProvider { catalog }
    }
}

impl CompanyProvider for CatalogProvider<'_> {
    fn companies(&self, count: usize, rng: &mut StdRng) -> Vec<Company> {
        (0..count).map(|_| self.catalog.sample_company(rng)).collect()
    }
}

/// Remote-backed provider with catalog fallback. Talks to an
/// OpenAI-compatible chat-completions endpoint; any transport, auth, parse,
/// or shape failure degrades to catalog sampling without surfacing an error.
pub struct RemoteProvider<'a> {
    catalog: &'a Catalog,
    api_key: Option<String>,
    base_url: String,
    model: String,
    locale: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

impl<'a> RemoteProvider<'a> {
    /// Reads OPENAI_API_KEY, OPENAI_BASE_URL, and OPENAI_MODEL. With no key
    /// the provider never dials out and behaves like a CatalogProvider.
    pub fn from_env(catalog: &'a Catalog) -> Self {
        RemoteProvider {
            catalog,
            api_key: std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            locale: "Canadian".to_string(),
        }
    }

    pub fn with_key(catalog: &'a Catalog, api_key: Option<String>, base_url: String) -> Self {
        RemoteProvider {
            catalog,
            api_key,
            base_url,
            model: "gpt-4o-mini".to_string(),
            locale: "Canadian".to_string(),
        }
    }

    fn fetch_remote(&self, count: usize) -> Result<Vec<Company>, StatementError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| StatementError::EnrichmentUnavailable("no API key".into()))?;

        let prompt = format!(
            "Generate {count} realistic {locale} businesses for supplier statements. \
             Return only a JSON array where each element is \
             {{\"name\": \"Company Name Ltd.\", \
             \"address\": \"Street Address\\nCity Province PostalCode\", \
             \"phone\": \"(XXX) XXX-XXXX\", \
             \"email\": \"accounts@domain.ca\"}}. \
             Make them sound like real food/manufacturing suppliers.",
            count = count,
            locale = self.locale,
        );
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": 200 * count,
            "temperature": 0.9,
        });

        let client = http_client()
            .map_err(|e| StatementError::EnrichmentUnavailable(e.to_string()))?;
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        // Two attempts; the client carries its own 15s timeout.
        let mut last_err = String::new();
        for _ in 0..2 {
            let sent = client.post(&url).bearer_auth(key).json(&body).send();
            match sent.and_then(|r| r.error_for_status()) {
                Ok(resp) => {
                    let chat: ChatResponse = resp
                        .json()
                        .map_err(|e| StatementError::EnrichmentUnavailable(e.to_string()))?;
                    let content = chat
                        .choices
                        .first()
                        .map(|c| c.message.content.as_str())
                        .unwrap_or_default();
                    let rows: Vec<Company> = serde_json::from_str(content)
                        .map_err(|e| StatementError::EnrichmentUnavailable(e.to_string()))?;
                    return Ok(rows);
                }
                Err(e) => last_err = e.to_string(),
            }
        }
        Err(StatementError::EnrichmentUnavailable(last_err))
    }
}

impl CompanyProvider for RemoteProvider<'_> {
    fn companies(&self, count: usize, rng: &mut StdRng) -> Vec<Company> {
        let mut out: Vec<Company> = match self.fetch_remote(count) {
            Ok(rows) => rows.into_iter().filter(is_well_formed).take(count).collect(),
            Err(_) => Vec::new(),
        };
        // Ill-shaped or missing rows fall back individually.
        while out.len() < count {
            out.push(self.catalog.sample_company(rng));
        }
        out
    }
}
