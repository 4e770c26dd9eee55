use std::{collections::BTreeMap, fmt};
use waymark::Params;

/// What the demo host shows for a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub params: BTreeMap<String, String>,
}

impl Page {
    pub fn new(title: impl ToString, params: &Params) -> Page {
        Page {
            title: title.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;

        if !self.params.is_empty() {
            let params: Vec<String> = self
                .params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            write!(f, " ({})", params.join(", "))?;
        }

        Ok(())
    }
}
