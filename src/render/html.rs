use crate::report::DiagramReport;
use crate::schema::WaveformDescription;

pub const DEFAULT_WAVEDROM_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/wavedrom/3.5.0/wavedrom.min.js";
pub const DEFAULT_SKIN_SRC: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/wavedrom/3.5.0/skins/default.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    pub wavedrom_src: String,
    pub skin_src: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Timing diagram".to_string(),
            wavedrom_src: DEFAULT_WAVEDROM_SRC.to_string(),
            skin_src: DEFAULT_SKIN_SRC.to_string(),
        }
    }
}

/// Render a self-contained HTML page (description embedded as WaveJSON).
///
/// Important: we avoid `format!()` for the page because the template holds
/// many literal `{}` from CSS, which would conflict with Rust formatting.
pub fn render_html_page(
    desc: &WaveformDescription,
    report: &DiagramReport,
    options: &RenderOptions,
) -> anyhow::Result<String> {
    // "</" would end the script block early; "<\/" is the same JSON string.
    let json = desc.to_json_pretty()?.replace("</", "<\\/");

    let summary = format!(
        r#"<span class="pill">signals: <b>{}</b></span>
    <span class="pill">edges: <b>{}</b></span>
    <span class="pill">time slots: <b>{}</b></span>
    <span class="pill">lints: <b>{}</b></span>"#,
        report.totals.signals, report.totals.edges, report.time_axis, report.totals.lints
    );

    let lints: String = report
        .lints
        .iter()
        .map(|l| format!("      <li>{}</li>\n", escape_html(&l.message)))
        .collect();

    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<style>
  body { font-family: system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }
  header { padding: 12px 16px; border-bottom: 1px solid #ddd; }
  h1 { font-size: 18px; margin: 0 0 8px 0; }
  .summary { display: flex; gap: 16px; flex-wrap: wrap; font-size: 14px; color: #333; }
  .pill { padding: 4px 8px; border: 1px solid #ddd; border-radius: 999px; background: #fafafa; }
  .main { padding: 16px; overflow: auto; }
  .lints { color: #8a5a00; font-size: 13px; }
</style>
<script src="__SKIN_SRC__"></script>
<script src="__WAVEDROM_SRC__"></script>
</head>
<body onload="WaveDrom.ProcessAll()">
<header>
  <h1>__TITLE__</h1>
  <div class="summary">
    __SUMMARY__
  </div>
</header>

<div class="main">
<script type="WaveDrom">
__DATA__
</script>
  <ul class="lints">
__LINTS__  </ul>
</div>
</body>
</html>
"#;

    let title = escape_html(&options.title);
    let skin_src = escape_html(&options.skin_src);
    let wavedrom_src = escape_html(&options.wavedrom_src);

    Ok(fill(
        TEMPLATE,
        &[
            ("__TITLE__", title.as_str()),
            ("__SKIN_SRC__", skin_src.as_str()),
            ("__WAVEDROM_SRC__", wavedrom_src.as_str()),
            ("__SUMMARY__", summary.as_str()),
            ("__LINTS__", lints.as_str()),
            ("__DATA__", json.as_str()),
        ],
    ))
}

/// Single pass over the template, so substituted text is never rescanned.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("__") {
        match values.iter().find(|(marker, _)| rest[start..].starts_with(marker)) {
            Some((marker, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[start + marker.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &rest[start + 2..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
