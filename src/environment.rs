//! Request and runtime introspection
//!
//! [`RequestContext`] is a read-only view of an incoming request supplied by the
//! caller. [`IniSettings`] is an ini-style key/value store whose original values
//! can be restored after runtime overrides.

use crate::error::ArgumentError;
use crate::http::Method;
use crate::utils::validation::ensure_not_empty;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::IpAddr;

/// Metadata of the request being served
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    pub method: Method,
    /// Header names are stored lower-cased
    headers: BTreeMap<String, String>,
    pub remote_addr: Option<IpAddr>,
    pub https: bool,
}

impl RequestContext {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_remote_addr(mut self, addr: IpAddr) -> Self {
        self.remote_addr = Some(addr);
        self
    }

    pub fn with_https(mut self, https: bool) -> Self {
        self.https = https;
        self
    }

    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// TLS on this hop, or `https` reported by a fronting proxy
    pub fn is_https(&self) -> bool {
        self.https
            || self
                .header("x-forwarded-proto")
                .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"))
    }

    /// Client address: first valid `X-Forwarded-For` entry, then `Client-IP`,
    /// then the socket's remote address
    pub fn client_ip(&self) -> Option<IpAddr> {
        let forwarded = self
            .header("x-forwarded-for")
            .and_then(|value| value.split(',').find_map(|part| part.trim().parse().ok()));
        forwarded
            .or_else(|| self.header("client-ip").and_then(|v| v.trim().parse().ok()))
            .or(self.remote_addr)
    }

    pub fn is_ajax(&self) -> bool {
        self.header("x-requested-with")
            .is_some_and(|value| value.eq_ignore_ascii_case("XMLHttpRequest"))
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.header("user-agent")
    }

    pub fn is_method(&self, method: Method) -> bool {
        self.method == method
    }
}

/// Ini-style settings with runtime overrides
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IniSettings {
    defaults: BTreeMap<String, String>,
    overrides: BTreeMap<String, String>,
}

impl IniSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the values a process started with
    pub fn from_defaults<I, K, V>(values: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut defaults = BTreeMap::new();
        for (key, value) in values {
            let key = key.into();
            ensure_not_empty("key", &key)?;
            defaults.insert(key, value.into());
        }
        Ok(Self {
            defaults,
            overrides: BTreeMap::new(),
        })
    }

    pub fn get(&self, key: &str) -> crate::Result<Option<&str>> {
        ensure_not_empty("key", key)?;
        Ok(self
            .overrides
            .get(key)
            .or_else(|| self.defaults.get(key))
            .map(String::as_str))
    }

    /// Override `key`, returning the value it had before
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> crate::Result<Option<String>> {
        ensure_not_empty("key", key)?;
        let previous = self.get(key)?.map(str::to_string);
        self.overrides.insert(key.to_string(), value.into());
        log::debug!("Setting '{}' overridden", key);
        Ok(previous)
    }

    /// Drop the override of `key`, going back to its startup value
    pub fn restore(&mut self, key: &str) -> crate::Result<()> {
        ensure_not_empty("key", key)?;
        self.overrides.remove(key);
        Ok(())
    }

    /// Read a setting as a boolean using the usual "on"/"off" spellings
    pub fn get_bool(&self, key: &str) -> crate::Result<Option<bool>> {
        match self.get(key)? {
            None => Ok(None),
            Some(raw) => crate::strings::to_bool(raw).map(Some).ok_or_else(|| {
                ArgumentError::InvalidValue {
                    field: key.to_string(),
                    value: raw.to_string(),
                    reason: "not a boolean".to_string(),
                }
                .into()
            }),
        }
    }
}

/// Operating system family the crate was built for ("linux", "macos", "windows", ...)
pub fn os_family() -> &'static str {
    std::env::consts::OS
}
