//! Placeholder substitution.
//!
//! A template is plain text in which a line may carry a `<<dotted.path>>`
//! marker. The path is walked through the profile's data tree and the marker
//! is replaced by the scalar it names. Only the leftmost marker on a line is
//! recognised; there are no conditionals, loops, filters or escapes.
use std::sync::LazyLock;

use regex::Regex;

use crate::config::value::{ProfileData, Scalar};
use crate::error::TemplateError;

/// `<<`, then anything (shortest match), then `>>`.
#[allow(clippy::expect_used)]
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<<(.*?)>>").expect("placeholder pattern is valid"));

/// Resolve a path of segments against `data`.
///
/// # Errors
///
/// Returns [`TemplateError::PlaceholderUnresolved`] if any segment is missing
/// or the path does not end on a scalar.
pub fn resolve<'a, S: AsRef<str>>(
    path: &[S],
    data: &'a ProfileData,
) -> Result<&'a Scalar, TemplateError> {
    data.get_path(path)
        .map_err(|source| TemplateError::PlaceholderUnresolved {
            placeholder: path
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join("."),
            source,
        })
}

/// Render one line: substitute its first placeholder, if any.
///
/// Text before and after the marker is preserved; any later markers on the
/// same line are left untouched.
///
/// # Errors
///
/// Returns [`TemplateError::PlaceholderUnresolved`] if the placeholder's path
/// does not resolve.
///
/// # Examples
///
/// ```
/// use nexus::config::value::ProfileData;
/// use nexus::template::render_line;
///
/// let data = ProfileData::from(toml::from_str::<toml::Table>("[font]\nsize = 12\n").unwrap());
/// assert_eq!(render_line("font_size <<font.size>>", &data).unwrap(), "font_size 12");
/// assert_eq!(render_line("no markers", &data).unwrap(), "no markers");
/// ```
pub fn render_line(line: &str, data: &ProfileData) -> Result<String, TemplateError> {
    let Some(caps) = PLACEHOLDER.captures(line) else {
        return Ok(line.to_string());
    };
    let (Some(marker), Some(inner)) = (caps.get(0), caps.get(1)) else {
        return Ok(line.to_string());
    };

    let path: Vec<&str> = inner.as_str().split('.').collect();
    let value = resolve(&path, data)?.to_string();

    let mut rendered = line.to_string();
    rendered.replace_range(marker.range(), &value);
    Ok(rendered)
}

/// Render every line in order and join them with `\n`.
///
/// N input lines always produce N output lines.
///
/// # Errors
///
/// Returns the first [`TemplateError`] raised by [`render_line`].
pub fn render_template<S: AsRef<str>>(lines: &[S], data: &ProfileData) -> Result<String, TemplateError> {
    let rendered = lines
        .iter()
        .map(|line| render_line(line.as_ref(), data))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join("\n"))
}
