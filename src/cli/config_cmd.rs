use colored::Colorize;

use super::session::Session;

pub(crate) fn handle_config(session: &Session) {
    println!("{}", render_config(session));
}

pub(crate) fn render_config(session: &Session) -> String {
    let dir = &session.config_dir;
    let file = dir.config_file();
    let file_state = if file.is_file() { "found" } else { "not found" };

    let mut out = format!(
        "{} {} (from {})\n{} {} ({file_state})",
        "Config directory:".bold(),
        dir.path().display(),
        dir.source(),
        "Config file:".bold(),
        file.display(),
    );

    let headers = session.configured_headers();
    if !session.config.has_http_headers() {
        out.push_str(&format!("\n{} none", "HTTP headers:".bold()));
    } else {
        out.push_str(&format!("\n{}", "HTTP headers:".bold()));
        for (name, value) in headers.iter() {
            out.push_str(&format!("\n   {name}: {value}"));
        }
    }

    let other = session.config.other_fields().len();
    if other > 0 {
        out.push_str(&format!("\n{} {other} other setting(s) left untouched", "Note:".bold()));
    }
    out
}
