use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
                 ___ __      _____  ___ _ __  _ __
                / __|\ \ /\ / / _ \/ _ \ '_ \| '__|
                \__ \ \ V  V /  __/  __/ |_) | |
                |___/  \_/\_/ \___|\___| .__/|_|
                                       |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.green()));
}
