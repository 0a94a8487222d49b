//! Página HTML autocontenida que repite el ciclo pregunta / respuesta / final
//! sin red: sin CDN ni fuentes externas.

use crate::model::Scenario;

const TEMPLATE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Netiquette Master 100 - Offline</title>
<style>
  body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; background: #f8fafc; color: #1e293b; }
  #app { max-width: 42rem; margin: 0 auto; padding: 1.5rem 1rem; }
  header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 2rem; }
  h1 { font-size: 1.5rem; font-weight: 900; margin: 0; }
  .stats { background: #fff; border: 1px solid #f1f5f9; border-radius: .75rem; padding: .5rem 1rem; font-weight: 700; }
  .card { background: #fff; border-radius: 1.5rem; box-shadow: 0 10px 25px rgba(15, 23, 42, .08); padding: 1.5rem; }
  .meta { display: flex; justify-content: space-between; margin-bottom: 1rem; }
  .tag { background: #e0e7ff; color: #4338ca; padding: .25rem .75rem; border-radius: 999px; font-size: .75rem; font-weight: 700; }
  .count { color: #94a3b8; font-size: .875rem; }
  .desc { font-size: 1.25rem; font-weight: 700; margin: 0 0 1.5rem; }
  .opt { display: block; width: 100%; text-align: left; padding: 1rem; margin-bottom: 1rem; border-radius: 1rem; border: 2px solid #f1f5f9; background: #f8fafc; font: inherit; cursor: pointer; }
  .opt.selected { border-color: #6366f1; background: #eef2ff; }
  .opt.correct { border-color: #22c55e; background: #f0fdf4; }
  .opt.wrong { border-color: #ef4444; background: #fef2f2; }
  .opt.dimmed { opacity: .6; }
  .opt:disabled { cursor: default; }
  .explain { margin-bottom: 1.5rem; padding: 1rem; border-radius: .75rem; background: #eff6ff; color: #1e40af; font-size: .875rem; font-style: italic; }
  .primary { width: 100%; padding: 1rem; border: 0; border-radius: 1rem; background: #4f46e5; color: #fff; font: inherit; font-weight: 700; cursor: pointer; }
  .primary:disabled { opacity: .5; cursor: not-allowed; }
  .bar { margin-top: 2.5rem; background: #e2e8f0; height: .5rem; border-radius: 999px; overflow: hidden; }
  .bar > div { background: #4f46e5; height: 100%; }
  .final { text-align: center; margin-top: 2.5rem; }
  .final .big { font-size: 3.75rem; font-weight: 900; margin-bottom: 1rem; }
  .final .pct { font-size: 1.5rem; font-weight: 700; color: #4f46e5; margin-bottom: 1.5rem; }
</style>
</head>
<body>
<div id="app"></div>
<script>
const scenarios = "#;

const TEMPLATE_TAIL: &str = r#";
const app = document.getElementById('app');
const total = scenarios.length;
let index = 0, score = 0, selected = null, submitted = false, gameOver = false;

function el(tag, cls, text) {
  const node = document.createElement(tag);
  if (cls) node.className = cls;
  if (text !== undefined) node.textContent = text;
  return node;
}

function next() {
  const scenario = scenarios[index];
  if (selected === scenario.correctOptionId) score += 1;
  if (index + 1 >= total) {
    gameOver = true;
  } else {
    index += 1;
    selected = null;
    submitted = false;
  }
  render();
}

function renderFinal() {
  const percentage = Math.round((score / total) * 100);
  const box = el('div', 'card final');
  box.appendChild(el('h2', null, 'Spiel beendet!'));
  box.appendChild(el('div', 'big', score + ' / ' + total));
  box.appendChild(el('div', 'pct', percentage + '% Erfolgsrate'));
  const again = el('button', 'primary', 'Neustart');
  again.onclick = () => window.location.reload();
  box.appendChild(again);
  app.appendChild(box);
}

function render() {
  app.replaceChildren();
  if (gameOver) { renderFinal(); return; }
  const scenario = scenarios[index];

  const header = el('header');
  header.appendChild(el('h1', null, 'Netiquette 100 (Offline)'));
  header.appendChild(el('div', 'stats', 'Lvl: ' + (index + 1) + ' | Pts: ' + score));
  app.appendChild(header);

  const card = el('div', 'card');
  const meta = el('div', 'meta');
  meta.appendChild(el('span', 'tag', scenario.category));
  meta.appendChild(el('span', 'count', (index + 1) + ' / ' + total));
  card.appendChild(meta);
  card.appendChild(el('h2', 'desc', scenario.description));

  scenario.options.forEach(opt => {
    let cls = 'opt';
    if (submitted) {
      if (opt.id === scenario.correctOptionId) cls += ' correct';
      else if (opt.id === selected) cls += ' wrong';
      else cls += ' dimmed';
    } else if (opt.id === selected) {
      cls += ' selected';
    }
    const button = el('button', cls, String.fromCharCode(64 + opt.id) + ') ' + opt.text);
    button.disabled = submitted;
    button.onclick = () => { selected = opt.id; render(); };
    card.appendChild(button);
  });

  if (submitted) card.appendChild(el('div', 'explain', scenario.explanation));

  const primary = el('button', 'primary', submitted ? 'Nächste Challenge' : 'Checken');
  primary.disabled = selected === null;
  primary.onclick = () => {
    if (submitted) next();
    else { submitted = true; render(); }
  };
  card.appendChild(primary);
  app.appendChild(card);

  const bar = el('div', 'bar');
  const fill = el('div');
  fill.style.width = ((index / total) * 100) + '%';
  bar.appendChild(fill);
  app.appendChild(bar);
}

render();
</script>
</body>
</html>
"#;

/// JSON apto para ir dentro de `<script>`: sin `<` literal
fn script_safe_json(scenarios: &[Scenario]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(scenarios)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}

pub fn offline_html(scenarios: &[Scenario]) -> Result<String, serde_json::Error> {
    let data = script_safe_json(scenarios)?;
    let mut html = String::with_capacity(TEMPLATE_HEAD.len() + data.len() + TEMPLATE_TAIL.len());
    html.push_str(TEMPLATE_HEAD);
    html.push_str(&data);
    html.push_str(TEMPLATE_TAIL);
    Ok(html)
}
