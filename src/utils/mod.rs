//! Small shared helpers: username normalization, link id generation,
//! HTML escaping for the preview page.

use uuid::Uuid;

/// Canonical form of a username: trimmed and lowercased. Every lookup and
/// every stored owner reference goes through this.
pub fn normalize_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Fresh random link id. Ids carry no meaning and no ordering; two links
/// created in the same instant still get distinct ids.
pub fn generate_link_id() -> String {
    Uuid::new_v4().to_string()
}

/// Minimal HTML entity escaping for user-controlled text interpolated
/// into the preview templates.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("Ana"), "ana");
        assert_eq!(normalize_username("  MiXeD  "), "mixed");
        assert_eq!(normalize_username(""), "");
        assert_eq!(normalize_username("  \t "), "");
    }

    #[test]
    fn test_generate_link_id_unique() {
        let a = generate_link_id();
        let b = generate_link_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("a & b \"c\""), "a &amp; b &quot;c&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
