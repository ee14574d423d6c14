//! Embedded dashboard page served at `/`.
//!
//! A single HTML page with no external assets, talking to the JSON API. The
//! query dropdown is populated from `/api/v1/queries`; the four filter
//! inputs are sent with each run.

use axum::{
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

pub(crate) fn create_page_router() -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/dashboard", get(dashboard_page))
}

async fn dashboard_page() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Foodlens Dashboard</title>
<style>
  :root { --bg: #0d1117; --surface: #161b22; --border: #30363d; --text: #c9d1d9; --accent: #3fb950; --red: #f85149; --muted: #8b949e; }
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: var(--bg); color: var(--text); }
  .header { background: var(--surface); border-bottom: 1px solid var(--border); padding: 14px 24px; }
  .header h1 { font-size: 18px; color: var(--accent); }
  .header .sub { font-size: 12px; color: var(--muted); margin-top: 2px; }
  .content { max-width: 1100px; margin: 0 auto; padding: 24px; }
  .controls { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px; }
  .controls select, .controls input { background: var(--surface); border: 1px solid var(--border); color: var(--text); padding: 8px 12px; border-radius: 6px; font-size: 14px; }
  .controls select { flex: 2 1 320px; }
  .controls input { flex: 1 1 140px; }
  .btn { background: var(--accent); color: #fff; border: none; padding: 8px 20px; border-radius: 6px; cursor: pointer; font-size: 14px; }
  .btn:hover { opacity: 0.9; }
  .status { color: var(--muted); font-size: 13px; margin-bottom: 12px; }
  .error { color: var(--red); }
  table { width: 100%; border-collapse: collapse; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; overflow: hidden; }
  th, td { text-align: left; padding: 8px 12px; border-bottom: 1px solid var(--border); font-size: 13px; }
  th { color: var(--muted); font-weight: 600; text-transform: uppercase; font-size: 11px; }
  .contacts { margin-top: 20px; }
  .contacts h2 { font-size: 15px; margin-bottom: 8px; }
  .contacts li { margin-left: 20px; padding: 2px 0; font-size: 13px; }
</style>
</head>
<body>
<div class="header">
  <h1>Foodlens</h1>
  <div class="sub">Surplus food distribution and coordination</div>
</div>
<div class="content">
  <div class="controls">
    <select id="query"></select>
    <input id="f-city" placeholder="City" />
    <input id="f-provider" placeholder="Provider name" />
    <input id="f-food" placeholder="Food type" />
    <input id="f-meal" placeholder="Meal type" />
    <button class="btn" onclick="runQuery()">Run</button>
  </div>
  <div class="status" id="status">Select a query and press Run.</div>
  <div id="results"></div>
  <div class="contacts" id="contacts"></div>
</div>
<script>
async function loadQueries() {
  const res = await fetch('/api/v1/queries');
  const queries = await res.json();
  const select = document.getElementById('query');
  for (const q of queries) {
    const opt = document.createElement('option');
    opt.value = q.key;
    opt.textContent = q.key + '. ' + q.label;
    select.appendChild(opt);
  }
}

function esc(s) {
  const d = document.createElement('div');
  d.textContent = s;
  return d.innerHTML;
}

async function runQuery() {
  const key = document.getElementById('query').value;
  const status = document.getElementById('status');
  const results = document.getElementById('results');
  const contacts = document.getElementById('contacts');
  status.className = 'status';
  status.textContent = 'Running...';
  results.innerHTML = '';
  contacts.innerHTML = '';

  const body = {
    city: document.getElementById('f-city').value,
    provider_name: document.getElementById('f-provider').value,
    food_type: document.getElementById('f-food').value,
    meal_type: document.getElementById('f-meal').value,
  };

  let res;
  try {
    res = await fetch('/api/v1/queries/' + key + '/run', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(body),
    });
  } catch (e) {
    status.className = 'status error';
    status.textContent = 'Request failed: ' + e;
    return;
  }

  const data = await res.json();
  if (!res.ok) {
    status.className = 'status error';
    status.textContent = data.error + ': ' + data.message;
    return;
  }

  status.textContent = data.label + ' - ' + data.row_count + ' row(s)';

  let html = '<table><thead><tr>';
  for (const c of data.columns) html += '<th>' + esc(c) + '</th>';
  html += '</tr></thead><tbody>';
  for (const row of data.rows) {
    html += '<tr>';
    for (const cell of row) html += '<td>' + esc(cell) + '</td>';
    html += '</tr>';
  }
  html += '</tbody></table>';
  results.innerHTML = html;

  if (data.contacts && data.contacts.length) {
    let chtml = '<h2>Provider contacts for coordination</h2><ul>';
    for (const c of data.contacts) {
      chtml += '<li>' + esc(c.name) + ' (' + esc(c.city) + ') - ' + esc(c.contact) + '</li>';
    }
    chtml += '</ul>';
    contacts.innerHTML = chtml;
  }
}

loadQueries();
</script>
</body>
</html>
"#;
