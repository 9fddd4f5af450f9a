//! Removal of i18n mentions from a generated README.

/// README file name inside a generated project.
pub const README_FILE: &str = "README.md";

const I18N_SECTION_TITLE: &str = "Internationalization";
const FEATURES_SECTION_TITLE: &str = "Features";
const I18N_MARKER: &str = "i18n";

/// Remove the i18n section and the i18n feature bullet from markdown content.
///
/// The section runs from an `Internationalization` heading up to the next
/// heading of the same or a higher level. Only bullets directly under a
/// `Features` heading are candidates for removal. Lines inside fenced code
/// blocks are never treated as headings or bullets. Content without either is
/// returned unchanged.
pub fn strip_i18n_mentions(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut skipping_level: Option<usize> = None;
    let mut in_features = false;
    let mut fence: Option<&str> = None;

    for line in content.split_inclusive('\n') {
        if let Some(open) = fence {
            if closes_fence(line, open) {
                fence = None;
            }
            if skipping_level.is_none() {
                out.push_str(line);
            }
            continue;
        }
        if let Some(marker) = fence_marker(line) {
            fence = Some(marker);
            if skipping_level.is_none() {
                out.push_str(line);
            }
            continue;
        }

        if let Some((level, title)) = heading(line) {
            match skipping_level {
                Some(current) if level > current => continue,
                _ => skipping_level = None,
            }
            if title.eq_ignore_ascii_case(I18N_SECTION_TITLE) {
                skipping_level = Some(level);
                in_features = false;
                continue;
            }
            in_features = title.eq_ignore_ascii_case(FEATURES_SECTION_TITLE);
        } else if skipping_level.is_some() || (in_features && is_i18n_bullet(line)) {
            continue;
        }
        out.push_str(line);
    }

    out
}

/// Parse an ATX heading into its level and trimmed title.
fn heading(line: &str) -> Option<(usize, &str)> {
    let trimmed = line.trim_end();
    let level = trimmed.chars().take_while(|c| *c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &trimmed[level..];
    if !rest.is_empty() && !rest.starts_with(' ') {
        return None;
    }
    Some((level, rest.trim()))
}

/// Opening fence marker (three or more backticks or tildes), if any.
fn fence_marker(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    let marker = if trimmed.starts_with("```") {
        '`'
    } else if trimmed.starts_with("~~~") {
        '~'
    } else {
        return None;
    };
    let len = trimmed.chars().take_while(|c| *c == marker).count();
    Some(&trimmed[..len])
}

/// A closing fence uses the same character, at least as long, with nothing after it.
fn closes_fence(line: &str, open: &str) -> bool {
    let trimmed = line.trim();
    let Some(marker) = open.chars().next() else {
        return false;
    };
    trimmed.len() >= open.len() && trimmed.chars().all(|c| c == marker)
}

fn is_i18n_bullet(line: &str) -> bool {
    let trimmed = line.trim_start();
    (trimmed.starts_with("- ") || trimmed.starts_with("* "))
        && trimmed.to_ascii_lowercase().contains(I18N_MARKER)
}
