//! Page address with ordered query parameters. `day` is read as an override and
//! written back whenever the active day changes.

use crate::domain::parse_day_param;
use std::fmt;

pub const DAY_PARAM: &str = "day";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    path: String,
    params: Vec<(String, String)>,
}

impl Location {
    /// Split `path?key=value&...` and form-decode the pairs (`%XX`, `+`).
    /// Pairs without `=` get an empty value; `#fragment` is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();
        let (path, query) = url.split_once('?').unwrap_or((url, ""));
        let params = form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect();
        Self {
            path: path.to_string(),
            params,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key`, keeping its position if present, appending otherwise.
    pub fn set_param(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// The `day` override, parsed leniently.
    pub fn day(&self) -> Option<u32> {
        self.param(DAY_PARAM).and_then(parse_day_param)
    }

    pub fn set_day(&mut self, day: u32) {
        self.set_param(DAY_PARAM, day.to_string());
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if self.params.is_empty() {
            return Ok(());
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish();
        write!(f, "?{query}")
    }
}
