pub const SH: &str = "sh";
pub const KILL_SCRIPT_EXTENSION: &str = "kill";
pub const YARN_KILL_COMMAND: &str = "yarn application -kill";

// Separators used to join application ids
pub const APP_ID_SEPARATOR: &str = " ";
pub const APP_ID_FILE_SEPARATOR: &str = "_";

// Paths
pub const DEFAULT_CONFIG_PATH: &str = "/etc/application-manager/config.yaml";
