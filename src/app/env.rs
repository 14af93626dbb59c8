use serde::Deserialize;

use super::config;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,
    pub public_dir: Option<String>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(config::DEFAULT_PORT)
    }

    pub fn public_dir(&self) -> &str {
        self.public_dir
            .as_deref()
            .unwrap_or(config::DEFAULT_PUBLIC_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_defaults() {
        let envy = Envy::default();

        assert_eq!(envy.port(), 3000);
        assert_eq!(envy.public_dir(), "public");
    }

    #[test]
    fn reads_port_from_vars() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("PUBLIC_DIR".to_string(), "/srv/static".to_string()),
        ];
        let envy: Envy = envy::from_iter(vars).unwrap();

        assert_eq!(envy.port(), 8080);
        assert_eq!(envy.public_dir(), "/srv/static");
        assert!(envy.app_env.is_none());
    }
}
