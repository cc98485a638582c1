use serde::Deserialize;
use serde_json::Value;

/// Path of the packaged logo, served from `/assets` after `copy-assets`.
pub const DEFAULT_LOGO: &str = "/assets/im-cloud-logo.svg";

/// Where the header logo comes from. Accepts a bare path or an asset-like
/// object with either a `src` or a `default` field, which is what bundlers
/// hand out for image imports.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum LogoSource {
    Path(String),
    Asset {
        src: Option<String>,
        default: Option<String>,
    },
}

impl LogoSource {
    /// `None` when the value has no usable path.
    pub fn resolve(&self) -> Option<&str> {
        let path = match self {
            LogoSource::Path(p) => Some(p.as_str()),
            LogoSource::Asset { src, default } => src.as_deref().or(default.as_deref()),
        };
        path.filter(|p| !p.is_empty())
    }
}

impl Default for LogoSource {
    fn default() -> Self {
        LogoSource::Path(DEFAULT_LOGO.to_owned())
    }
}

impl From<&str> for LogoSource {
    fn from(path: &str) -> Self {
        LogoSource::Path(path.to_owned())
    }
}

impl From<String> for LogoSource {
    fn from(path: String) -> Self {
        LogoSource::Path(path)
    }
}

impl From<Value> for LogoSource {
    fn from(value: Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        match &value {
            Value::String(s) => LogoSource::Path(s.clone()),
            _ => LogoSource::Asset {
                src: field("src"),
                default: field("default"),
            },
        }
    }
}

pub fn resolve_logo_src(source: Option<&LogoSource>) -> Option<&str> {
    source.and_then(LogoSource::resolve)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn resolved(v: Value) -> Option<String> {
        LogoSource::from(v).resolve().map(str::to_owned)
    }

    #[test]
    fn accepts_all_three_shapes() {
        assert_eq!(resolved(json!({ "src": "a.png" })).as_deref(), Some("a.png"));
        assert_eq!(resolved(json!({ "default": "b.png" })).as_deref(), Some("b.png"));
        assert_eq!(resolved(json!("c.png")).as_deref(), Some("c.png"));
    }

    #[test]
    fn src_wins_over_default() {
        let v = json!({ "src": "a.png", "default": "b.png" });
        assert_eq!(resolved(v).as_deref(), Some("a.png"));
    }

    #[test]
    fn non_string_src_falls_through() {
        let v = json!({ "src": 42, "default": "b.png" });
        assert_eq!(resolved(v).as_deref(), Some("b.png"));
    }

    #[test]
    fn unrecognized_shapes_render_nothing() {
        for v in [json!({}), json!(null), json!(7), json!([]), json!(""), json!({ "href": "x" })] {
            assert_eq!(resolved(v.clone()), None, "{v}");
        }
        assert_eq!(resolve_logo_src(None), None);
    }

    #[test]
    fn deserializes_from_props_json() {
        let logo: LogoSource = serde_json::from_str(r#"{"default":"/img/logo.png"}"#).unwrap();
        assert_eq!(resolve_logo_src(Some(&logo)), Some("/img/logo.png"));
    }

    #[test]
    fn default_is_packaged_logo() {
        assert_eq!(LogoSource::default().resolve(), Some(DEFAULT_LOGO));
    }
}
