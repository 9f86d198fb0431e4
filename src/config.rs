use confique::Config as _;
use std::sync::OnceLock;

#[derive(confique::Config)]
pub struct Config {
    /// Character that ends a SQL statement for buffer-completeness checks.
    #[config(env = "SQLCOMPLETE_TERMINATOR", default = ";")]
    pub terminator: String,
    #[cfg(test)]
    #[config(env = "SQLCOMPLETE_CONTAINER_RAMDISKED", default = true)]
    pub container_ramdisked: bool,
    #[cfg(test)]
    #[config(env = "SQLCOMPLETE_CONTAINER_LOGS", default = false)]
    pub container_logs: bool,
}

impl Config {
    /// The configured terminator as a `char`, falling back to `;` when the
    /// environment supplied an empty string.
    pub fn terminator_char(&self) -> char {
        self.terminator.chars().next().unwrap_or(';')
    }
}

pub fn config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    CONFIG.get_or_init(|| {
        Config::builder()
            .env()
            .load()
            .expect("Failed to load one or more value configuration from the current environment")
    })
}
