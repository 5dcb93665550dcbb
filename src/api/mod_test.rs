//! Tests for API server configuration.

use super::Config;

#[test]
fn default_config_binds_all_interfaces_on_3000() {
    let config = Config::default();
    assert_eq!(config.host.to_string(), "0.0.0.0");
    assert_eq!(config.port, 3000);
}
