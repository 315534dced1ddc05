use serde::{Deserialize, Serialize};

/// How multi-valued parameters are written back into a query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayStyle {
    /// `tag=a&tag=b`
    #[default]
    Repeated,
    /// `tag[]=a&tag[]=b`
    Brackets,
}

/// A single query parameter value. `Null` marks the key as absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Int(i64),
    List(Vec<String>),
    Null,
}

impl QueryValue {
    /// Integer view of the value: the leading integer of text (`"2.5"` is 2).
    /// Lists and text without leading digits have none.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            QueryValue::Int(v) => Some(*v),
            QueryValue::Text(s) => leading_int(s),
            QueryValue::List(_) | QueryValue::Null => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }

    fn into_items(self) -> Vec<String> {
        match self {
            QueryValue::Text(s) => vec![s],
            QueryValue::Int(v) => vec![v.to_string()],
            QueryValue::List(items) => items,
            QueryValue::Null => Vec::new(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(value.into())
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(QueryValue::Int)
            .unwrap_or_else(|_| QueryValue::Text(value.to_string()))
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::List(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(QueryValue::Null)
    }
}

/// Ordered query parameter mapping.
///
/// Inserting an existing key replaces its value in place, so serialized
/// URLs keep the parameter order the request arrived with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: QueryValue,
    /// Arrived as `key[]=...`; a list here is written back in that form.
    bracketed: bool,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (`?a=1&b=two`, leading `?` optional).
    ///
    /// Never fails: undecodable bytes are replaced, empty segments are
    /// skipped, and repeated or `[]`-suffixed keys collect into a list.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::new();
        for segment in raw.trim_start_matches('?').split('&') {
            if segment.is_empty() {
                continue;
            }
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key);
            let value = decode_component(value);
            if let Some(base) = key.strip_suffix("[]") {
                if !base.is_empty() {
                    params.push_list_item(base, value);
                }
            } else if !key.is_empty() {
                params.push_item(key, value);
            }
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].value = value,
            None => self.entries.push(Entry {
                key,
                value,
                bracketed: false,
            }),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let idx = self.position(key)?;
        Some(self.entries.remove(idx).value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|e| (e.key.as_str(), &e.value))
    }

    /// Copy of this mapping with `overrides` applied; `self` is untouched.
    pub fn with_overrides<'a, I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, QueryValue)>,
    {
        let mut merged = self.clone();
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        merged
    }

    /// Serialize as a `?`-prefixed query string. `Null` entries are dropped.
    ///
    /// Lists use `style`, except that lists which arrived with `[]` and
    /// single-item lists always keep the `[]` suffix, so parsing the output
    /// gives back a list.
    pub fn to_query_string(&self, style: ArrayStyle) -> String {
        let mut pairs = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let name = urlencoding::encode(&entry.key);
            match &entry.value {
                QueryValue::Null => {}
                QueryValue::Text(s) => pairs.push(format!("{name}={}", urlencoding::encode(s))),
                QueryValue::Int(v) => pairs.push(format!("{name}={v}")),
                QueryValue::List(items) => {
                    let bracketed =
                        entry.bracketed || items.len() == 1 || style == ArrayStyle::Brackets;
                    let name = if bracketed {
                        format!("{name}%5B%5D")
                    } else {
                        name.into_owned()
                    };
                    for item in items {
                        pairs.push(format!("{name}={}", urlencoding::encode(item)));
                    }
                }
            }
        }
        format!("?{}", pairs.join("&"))
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    fn push_item(&mut self, key: String, value: String) {
        match self.position(&key) {
            Some(idx) => self.append_at(idx, value),
            None => self.entries.push(Entry {
                key,
                value: QueryValue::Text(value),
                bracketed: false,
            }),
        }
    }

    fn push_list_item(&mut self, key: &str, value: String) {
        match self.position(key) {
            Some(idx) => {
                self.append_at(idx, value);
                self.entries[idx].bracketed = true;
            }
            None => self.entries.push(Entry {
                key: key.to_string(),
                value: QueryValue::List(vec![value]),
                bracketed: true,
            }),
        }
    }

    fn append_at(&mut self, idx: usize, value: String) {
        let slot = &mut self.entries[idx].value;
        let mut items = std::mem::replace(slot, QueryValue::Null).into_items();
        items.push(value);
        *slot = QueryValue::List(items);
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Merge `overrides` onto a copy of `params` and serialize the result.
pub fn build_url<'a, I>(params: &QueryParams, overrides: I, style: ArrayStyle) -> String
where
    I: IntoIterator<Item = (&'a str, QueryValue)>,
{
    params.with_overrides(overrides).to_query_string(style)
}

fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let sign = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
