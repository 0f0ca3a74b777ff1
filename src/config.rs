use serde::Deserialize;

/// Config, from a TOML file whose path is the first CLI argument.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// <address>:<port> to serve the blog on
    pub listen_address: String,

    /// <address>:<port> to serve metrics on
    pub metrics_address: String,

    /// By default, output JSON logs. Only if this flag is set to true, output colourful human-friendly logs
    pub human_logs: bool,

    /// Max HTTP body size the form endpoints accept
    #[serde(default = "max_body_size")]
    pub max_body_size: usize,
}

impl Config {
    /// Will crash if file isn't found or config is invalid.
    pub fn from_file(filepath: &str) -> Self {
        let contents = std::fs::read_to_string(filepath).expect("Couldn't read from config file");
        toml::from_str(&contents).expect("couldn't parse config file")
    }
}

fn max_body_size() -> usize {
    65536
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(include_str!("../config.example.toml"))
            .expect("shipped example config should parse");
        assert_eq!(config.listen_address, "0.0.0.0:3000");
        // max_body_size is optional and defaults.
        assert_eq!(config.max_body_size, 65536);
    }
}
