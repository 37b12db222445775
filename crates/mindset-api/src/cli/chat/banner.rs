//! Welcome banners for the interactive loops.

use std::io::Write;

use console::style;

/// Print the banner shown when a session starts.
pub fn print_welcome_banner(out: &mut impl Write, title: &str, service_url: &str, session_id: &str) {
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", style(title).cyan().bold());
    let _ = writeln!(
        out,
        "  {}",
        style("Growth-mindset coaching for case-method learners").dim()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}  {}", style("Service:").bold(), style(service_url).dim());
    let _ = writeln!(out, "  {}  {}", style("Session:").bold(), style(session_id).dim());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    let _ = writeln!(out, "  {}", style("---").dim());
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_session() {
        let mut buf = Vec::new();
        print_welcome_banner(&mut buf, "Reflection wizard", "http://localhost:5000", "default");
        let text = console::strip_ansi_codes(&String::from_utf8(buf).unwrap()).to_string();
        assert!(text.contains("Reflection wizard"));
        assert!(text.contains("Session:  default"));
        assert!(text.contains("http://localhost:5000"));
    }
}
