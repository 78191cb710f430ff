/// Output format enumeration for plan presentation
///
/// Shared by the CLI (which parses it) and the plan use case (which renders
/// it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable plan block (default)
    #[default]
    Text,
    /// Plan and summary as pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("TXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("Json").unwrap(), OutputFormat::Json);
    }

    #[test]
    fn test_output_format_from_str_invalid() {
        let err = OutputFormat::from_str("yaml").unwrap_err();
        assert!(err.contains("Invalid format: yaml"));
    }

    #[test]
    fn test_output_format_display_round_trip() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }
}
