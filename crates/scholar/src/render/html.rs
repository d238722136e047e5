//! HTML summary used by the `web` format.

use super::*;

/// Inline stylesheet, so the page needs no external assets.
const STYLE: &str = "body { font-family: Georgia, serif; max-width: 48rem; margin: 2rem auto; \
                     color: #222; }
h1 { border-bottom: 2px solid #444; padding-bottom: 0.3rem; }
h2 { margin-top: 2rem; color: #444; }
.publication { margin: 1rem 0; padding-left: 0.8rem; border-left: 3px solid #ccc; }
.publication h3 { margin: 0 0 0.3rem 0; font-size: 1.05rem; }
.publication p { margin: 0.1rem 0; }
.authors { font-style: italic; }
a { color: #1a5fb4; }";

/// Formats the groups as a self-contained HTML document.
///
/// Each group becomes an `<h2>` followed by one block per publication holding
/// its title, authors, venue and year. A publication with a DOI gets a link to
/// `https://doi.org/{doi}`. All text is HTML-escaped.
pub fn format_summary_html(groups: &GroupedPublications<'_>) -> String {
  let mut html = String::new();
  html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
  html.push_str(&format!("<title>{SUMMARY_TITLE}</title>\n"));
  html.push_str(&format!("<style>\n{STYLE}\n</style>\n</head>\n<body>\n"));
  html.push_str(&format!("<h1>{SUMMARY_TITLE}</h1>\n"));

  for group in groups {
    html.push_str(&format!("<h2>{}</h2>\n", escape(&group.key)));

    for publication in &group.publications {
      html.push_str("<div class=\"publication\">\n");
      html.push_str(&format!("<h3>{}</h3>\n", escape(&publication.title)));
      html.push_str(&format!("<p class=\"authors\">{}</p>\n", escape(&publication.authors)));
      html.push_str(&format!(
        "<p class=\"venue\">{}, {}</p>\n",
        escape(&publication.venue),
        publication.year
      ));
      if let Some(doi) = &publication.doi {
        let doi = escape(doi);
        html.push_str(&format!(
          "<p class=\"doi\">DOI: <a href=\"https://doi.org/{doi}\">{doi}</a></p>\n"
        ));
      }
      html.push_str("</div>\n");
    }
  }

  html.push_str("</body>\n</html>\n");
  html
}

/// Escapes the characters with special meaning in HTML text and attributes.
fn escape(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      c => escaped.push(c),
    }
  }
  escaped
}
