/// Maximum number of research bullets returned to the caller.
pub const MAX_BULLETS: usize = 8;

/// Strip one leading bullet marker (`-` or `•`) and at most one following
/// space. Markers behind leading whitespace are left alone; other glyphs
/// (`*`, `–`) are not recognized.
fn strip_bullet_marker(line: &str) -> &str {
    match line.strip_prefix(['-', '•']) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Normalize free-form model output into an ordered list of bullets.
///
/// Splits on line breaks, strips bullet markers, trims, discards empty
/// lines and caps the result at [`MAX_BULLETS`]. Order is the presentation
/// order of the source text.
pub fn extract_bullets(text: &str) -> Vec<String> {
    text.lines()
        .map(strip_bullet_marker)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .take(MAX_BULLETS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hyphen_and_glyph_markers() {
        let bullets = extract_bullets("- first finding\n• second finding\nthird finding");

        assert_eq!(bullets, vec!["first finding", "second finding", "third finding"]);
    }

    #[test]
    fn test_marker_without_space() {
        assert_eq!(extract_bullets("-tight"), vec!["tight"]);
    }

    #[test]
    fn test_empty_lines_are_discarded() {
        let bullets = extract_bullets("- a\n\n   \n- b\n");

        assert_eq!(bullets, vec!["a", "b"]);
    }

    #[test]
    fn test_caps_at_eight() {
        let text = (1..=12)
            .map(|i| format!("- bullet {}", i))
            .collect::<Vec<_>>()
            .join("\n");

        let bullets = extract_bullets(&text);

        assert_eq!(bullets.len(), MAX_BULLETS);
        assert_eq!(bullets[0], "bullet 1");
        assert_eq!(bullets[7], "bullet 8");
    }

    #[test]
    fn test_indented_marker_is_kept() {
        // Marker stripping runs before trimming, so an indented marker
        // survives into the bullet text.
        assert_eq!(extract_bullets("  - indented"), vec!["- indented"]);
    }

    #[test]
    fn test_only_one_marker_stripped() {
        assert_eq!(extract_bullets("- - nested"), vec!["- nested"]);
    }

    #[test]
    fn test_empty_output_yields_no_bullets() {
        assert!(extract_bullets("").is_empty());
        assert!(extract_bullets("\n\n").is_empty());
    }
}
