// Version tracking for typ-tmpl

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Line printed by `--version`
pub fn version_line(app_name: &str) -> String {
    format!("{} version: {}", app_name, VERSION)
}
