//! Scripted portal transport for client tests.

#![allow(dead_code)]

use bobochic_order_client::{PortalResponse, PortalTransport};
use bobochic_utils::PortalResult;
use reqwest::Url;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const LOGIN_URL: &str = "https://bobochicparis.com/supplier/login";
pub const EXPORT_URL: &str = "https://bobochicparis.com/supplier/include/export.php";
pub const LABEL_IN_URL: &str =
    "https://bobochicparis.com/modules/relaiscolisam/files/in/etiquette/get_file.php";
pub const LABEL_OUT_URL: &str =
    "https://bobochicparis.com/modules/relaiscolisam/files/out/etiquette/get_file.php";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub form: Vec<(String, String)>,
}

/// Answers from a fixed route table and records every request. Unknown
/// routes answer 404. Clones share routes and the request log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransport {
    routes: Arc<Mutex<HashMap<(Method, String), PortalResponse>>>,
    log: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, method: Method, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, url.to_string()), PortalResponse::new(status, body));
        self
    }

    pub fn accept_login(self) -> Self {
        self.respond(Method::Post, LOGIN_URL, 200, "welcome")
    }

    pub fn serve_export(self, bytes: Vec<u8>) -> Self {
        self.respond(Method::Get, EXPORT_URL, 200, bytes)
    }

    pub fn serve_label(self, endpoint: &str, order_ref: &str) -> Self {
        let url = label_url(endpoint, order_ref);
        self.respond(Method::Get, &url, 200, "%PDF-1.4")
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn count(&self, method: Method, url: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method && request.url == url)
            .count()
    }

    pub fn count_prefix(&self, method: Method, prefix: &str) -> usize {
        self.requests()
            .iter()
            .filter(|request| request.method == method && request.url.starts_with(prefix))
            .count()
    }

    fn answer(&self, method: Method, url: &Url, form: &[(&str, &str)]) -> PortalResponse {
        self.log.lock().unwrap().push(RecordedRequest {
            method,
            url: url.to_string(),
            form: form
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        });

        self.routes
            .lock()
            .unwrap()
            .get(&(method, url.to_string()))
            .cloned()
            .unwrap_or_else(|| PortalResponse::new(404, "Not Found"))
    }
}

impl PortalTransport for ScriptedTransport {
    fn post_form(&self, url: &Url, form: &[(&str, &str)]) -> PortalResult<PortalResponse> {
        Ok(self.answer(Method::Post, url, form))
    }

    fn get(&self, url: &Url) -> PortalResult<PortalResponse> {
        Ok(self.answer(Method::Get, url, &[]))
    }
}

pub fn label_url(endpoint: &str, order_ref: &str) -> String {
    format!("{}?file={}.pdf", endpoint, order_ref)
}
