use crate::llm::ClientConfig;

/// Print the effective configuration with the token masked
pub fn handle_config_command(config: &ClientConfig) {
    println!("Base URL:       {}", config.base_url);
    println!("Model:          {}", config.model);
    println!("Token env var:  {}", config.token_env_var);
    println!("Timeout:        {}s", config.timeout_secs);

    match config.resolve_token() {
        Ok(token) => println!("API token:      {}", mask(&token)),
        Err(_) => println!("API token:      (not configured)"),
    }
}

fn mask(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
