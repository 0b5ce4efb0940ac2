use tree::Node;

use crate::error::Result;

#[derive(Clone, Copy, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable record tree
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, clap::ValueEnum)]
pub(crate) enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// YAML for `.yaml`/`.yml` paths, JSON otherwise.
    pub(crate) fn from_path(path: Option<&str>) -> Self {
        match path.and_then(|p| p.rsplit_once('.')).map(|(_, ext)| ext) {
            Some("yaml" | "yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }

    pub(crate) fn parse(self, text: &str) -> Result<Node> {
        Ok(match self {
            InputFormat::Json => serde_json::from_str(text)?,
            InputFormat::Yaml => serde_yml::from_str(text)?,
        })
    }
}

/// Renders an encoded node. Text output uses the node's own notation.
pub(crate) fn render(node: &Node, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("{}\n", node),
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(node)?),
        OutputFormat::Yaml => serde_yml::to_string(node)?,
    })
}

#[cfg(test)]
mod tests {
    use super::InputFormat;

    #[test]
    fn test_input_format_from_path() {
        assert_eq!(InputFormat::Yaml, InputFormat::from_path(Some("schema.yaml")));
        assert_eq!(InputFormat::Yaml, InputFormat::from_path(Some("dir.v2/list.yml")));
        assert_eq!(InputFormat::Json, InputFormat::from_path(Some("list.json")));
        assert_eq!(InputFormat::Json, InputFormat::from_path(Some("noext")));
        assert_eq!(InputFormat::Json, InputFormat::from_path(None));
    }
}
