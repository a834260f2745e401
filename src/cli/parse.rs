use digraph_core::format::OutputFormat;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a node id, rejecting the reserved id 0
pub fn parse_node_id(s: &str) -> std::result::Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("node ids start at 1".to_string()),
        Ok(id) => Ok(id),
        Err(e) => Err(format!("invalid node id '{}': {}", s, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("records")
            .unwrap_err()
            .contains("unknown format"));
    }

    #[test]
    fn test_parse_node_id() {
        assert_eq!(parse_node_id("4").unwrap(), 4);
        assert!(parse_node_id("0").is_err());
        assert!(parse_node_id("-1").is_err());
    }
}
