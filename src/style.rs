//! Inline `style` attribute editing for elements without a style object.

/// `style` with any `display` declaration replaced by `display:<display>`.
/// Other declarations keep their order and values.
pub fn with_display(style: &str, display: &str) -> String {
    let mut decls: Vec<&str> = style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            let prop = decl.split(':').next().unwrap_or_default().trim();
            !prop.eq_ignore_ascii_case("display")
        })
        .collect();
    let display = format!("display:{}", display);
    decls.push(&display);
    decls.join("; ")
}
