//! Front-matter extraction

use serde_yaml::{Mapping, Value};

/// Raw front-matter data of a content file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    pub data: Mapping,
}

impl FrontMatter {
    /// Split a `---` fenced YAML block from the start of `content`
    ///
    /// Returns (front_matter, remaining_content). Content without a leading
    /// fence has empty front-matter.
    pub fn parse(content: &str) -> Result<(Self, &str), String> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let trimmed = content.trim_start_matches(['\n', '\r']);

        let Some(rest) = trimmed.strip_prefix("---") else {
            return Ok((FrontMatter::default(), content));
        };
        // `----` or `--- text` is not a fence
        let Some(rest) = rest
            .strip_prefix("\r\n")
            .or_else(|| rest.strip_prefix('\n'))
            .or_else(|| rest.is_empty().then_some(rest))
        else {
            return Ok((FrontMatter::default(), content));
        };

        let (yaml, remaining) = split_closing_fence(rest)
            .ok_or_else(|| "missing closing '---' fence".to_string())?;

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(data)) => Ok((FrontMatter { data }, remaining)),
            Ok(Value::Null) => Ok((FrontMatter::default(), remaining)),
            Ok(other) => Err(format!(
                "expected a mapping, found {}",
                super::schema::type_name(&other)
            )),
            Err(e) => Err(e.to_string()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Keys present in the block, in source order
    pub fn keys(&self) -> impl Iterator<Item = String> + '_ {
        self.data.keys().map(|k| match k {
            Value::String(s) => s.clone(),
            other => serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

/// Find the line consisting solely of `---` and split around it
fn split_closing_fence(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let remaining = &rest[offset + line.len()..];
            return Some((&rest[..offset], remaining.trim_start_matches(['\n', '\r'])));
        }
        offset += line.len();
    }
    None
}
