//! Dashboard Page Route
//!
//! - GET / - The single dashboard page: a county dropdown and two chart
//!   panels. In-page script fetches the selection domain once, then refetches
//!   both chart specs whenever the dropdown changes.

use axum::response::Html;

/// GET /
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>PM2.5 and Infant Mortality Dashboard</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
  body { background-color: #fff0ce; font-family: Verdana, sans-serif; margin: 0; padding: 20px; min-height: 100vh; }
  h1 { text-align: center; margin-bottom: 30px; color: #023047; font-family: sans-serif; }
  .control { width: 400px; margin: 0 auto 20px; }
  .control label { display: block; margin-bottom: 10px; font-size: 16px; }
  .control select { width: 100%; padding: 6px; font-size: 15px; }
  .charts { display: flex; gap: 4%; }
  .panel { width: 48%; }
</style>
</head>
<body>
<h1>PM2.5 and Infant Mortality Dashboard</h1>
<div class="control">
  <label for="county">Select County:</label>
  <select id="county"></select>
</div>
<div class="charts">
  <div class="panel" id="aqi-chart"></div>
  <div class="panel" id="mortality-chart"></div>
</div>
<script>
const PLOT_BG = "#fce9bb";

function layoutFor(spec) {
  return {
    title: { text: spec.title },
    xaxis: { title: { text: spec.x_label } },
    yaxis: { title: { text: spec.y_label } },
    showlegend: false,
    plot_bgcolor: PLOT_BG,
    paper_bgcolor: PLOT_BG,
    height: 400,
  };
}

function traceFor(spec) {
  if (spec.kind === "line") {
    return {
      x: spec.points.map(p => p.year),
      y: spec.points.map(p => p.value),
      mode: "lines+markers",
      line: { color: spec.points.length ? spec.points[0].color : "#000", width: 4 },
      marker: { size: 8 },
    };
  }
  // horizontal_bar: bar length = value, one bar per year
  return {
    x: spec.points.map(p => p.value),
    y: spec.points.map(p => p.year),
    type: "bar",
    orientation: "h",
    marker: { color: spec.points.map(p => p.color) },
  };
}

async function refresh(county) {
  const res = await fetch("/api/v1/charts?county=" + encodeURIComponent(county));
  const body = await res.json();
  Plotly.react("aqi-chart", [traceFor(body.air_quality)], layoutFor(body.air_quality), { displayModeBar: false });
  Plotly.react("mortality-chart", [traceFor(body.mortality)], layoutFor(body.mortality), { displayModeBar: false });
}

async function init() {
  const res = await fetch("/api/v1/counties");
  const body = await res.json();
  const select = document.getElementById("county");
  for (const county of body.counties) {
    const option = document.createElement("option");
    option.value = county.id;
    option.textContent = county.label;
    select.appendChild(option);
  }
  select.value = body.default;
  select.addEventListener("change", () => refresh(select.value));
  await refresh(body.default);
}

init();
</script>
</body>
</html>
"##;
