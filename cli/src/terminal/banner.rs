use colored::*;

use crate::terminal::print;

const BANNER: &str = r#"
           _
 ___ _   _| |__  ___ _ __   __ _ _ __ ___
/ __| | | | '_ \/ __| '_ \ / _` | '__/ _ \
\__ \ |_| | |_) \__ \ | | | (_| | | |  __/
|___/\__,_|_.__/|___/_| |_|\__,_|_|  \___|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green()));
    print::centerln(&format!(
        "{}",
        "For authorized security testing only.".yellow().bold()
    ));
    print::print("");
}
